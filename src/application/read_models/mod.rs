//! Read models for CQRS-lite pattern
//!
//! View-optimized structs giving formatters a flat, serializable picture
//! of a resolution without exposing the graph's internals.

mod resolution_read_model;
mod resolution_read_model_builder;

pub use resolution_read_model::{CycleView, GraphEntryView, MetadataView, ResolutionReadModel};
pub use resolution_read_model_builder::ResolutionReadModelBuilder;
