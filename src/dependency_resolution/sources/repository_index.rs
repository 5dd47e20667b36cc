use crate::dependency_resolution::domain::{DependencySource, PackageRecord};
use crate::dependency_resolution::services::MetadataParser;
use std::collections::HashMap;

/// RepositoryIndex source serving dependencies from a repository package index
///
/// When a name occurs in several blocks, name lookups resolve to the first
/// block in file order unless [`RepositoryIndex::pin`] selected another.
#[derive(Debug, Clone, Default)]
pub struct RepositoryIndex {
    records: Vec<PackageRecord>,
    by_name: HashMap<String, usize>,
}

impl RepositoryIndex {
    pub fn new(records: Vec<PackageRecord>) -> Self {
        let mut by_name = HashMap::new();
        for (i, record) in records.iter().enumerate() {
            if let Some(name) = record.name() {
                by_name.entry(name.to_string()).or_insert(i);
            }
        }
        Self { records, by_name }
    }

    /// Parses a `Packages` index and indexes it by package name
    pub fn parse(content: &str) -> Self {
        Self::new(MetadataParser::parse_repository(content))
    }

    pub fn get(&self, name: &str) -> Option<&PackageRecord> {
        self.by_name.get(name).map(|&i| &self.records[i])
    }

    /// Makes the `(name, version)` record the one served for `name`
    ///
    /// Returns false, leaving the index unchanged, when no record matches.
    pub fn pin(&mut self, name: &str, version: &str) -> bool {
        let Some(position) = self
            .records
            .iter()
            .position(|r| r.name() == Some(name) && r.version() == Some(version))
        else {
            return false;
        };
        self.by_name.insert(name.to_string(), position);
        true
    }

    pub fn records(&self) -> &[PackageRecord] {
        &self.records
    }
}

impl DependencySource for RepositoryIndex {
    fn dependencies_of(&self, name: &str) -> Vec<String> {
        self.get(name)
            .map(PackageRecord::dependencies)
            .unwrap_or_default()
    }

    fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    fn package_count(&self) -> usize {
        self.by_name.len()
    }
}
