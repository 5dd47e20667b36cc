use crate::dependency_resolution::domain::DependencySource;
use crate::dependency_resolution::services::MetadataParser;
use std::collections::HashMap;

/// AdjacencyList source serving dependencies from a test graph
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    edges: HashMap<String, Vec<String>>,
}

impl AdjacencyList {
    pub fn new(edges: HashMap<String, Vec<String>>) -> Self {
        Self { edges }
    }

    /// Parses `node -> dep1, dep2` lines
    pub fn parse(content: &str) -> Self {
        Self::new(MetadataParser::parse_test_graph(content))
    }
}

impl DependencySource for AdjacencyList {
    fn dependencies_of(&self, name: &str) -> Vec<String> {
        self.edges.get(name).cloned().unwrap_or_default()
    }

    fn contains(&self, name: &str) -> bool {
        self.edges.contains_key(name)
    }

    fn package_count(&self) -> usize {
        self.edges.len()
    }
}
