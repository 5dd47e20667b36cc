/// Dependency resolution domain - pure graph construction and ordering logic
///
/// Nothing in this module performs I/O. Metadata arrives as text, is turned
/// into a `DependencySource`, and results leave as domain values.
pub mod domain;
pub mod services;
pub mod sources;
