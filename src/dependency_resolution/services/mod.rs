mod graph_builder;
mod metadata_parser;
mod package_filter;
mod topological_sorter;

pub use graph_builder::GraphBuilder;
pub use metadata_parser::MetadataParser;
pub use package_filter::PackageFilter;
pub use topological_sorter::TopologicalSorter;
