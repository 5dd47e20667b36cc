/// In-memory dependency sources built from parsed metadata
mod adjacency_list;
mod repository_index;

pub use adjacency_list::AdjacencyList;
pub use repository_index::RepositoryIndex;
