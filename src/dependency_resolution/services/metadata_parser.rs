use crate::dependency_resolution::domain::package::split_dependency_list;
use crate::dependency_resolution::domain::PackageRecord;
use std::collections::HashMap;

/// Separator between package blocks in a repository index
const BLOCK_SEPARATOR: &str = "\n---\n";

/// Marker between a node and its dependency list in a test graph
const EDGE_MARKER: &str = "->";

/// MetadataParser service turning metadata text into domain records
///
/// Pure text processing: both formats are read fully into memory by an
/// adapter before they reach this parser.
pub struct MetadataParser;

impl MetadataParser {
    /// Parses a repository package index into package records
    ///
    /// Blocks are separated by a line containing exactly `---`. Inside a
    /// block, every non-blank line with a colon is a `key: value` field.
    /// Blocks without a `package` field are dropped.
    ///
    /// # Arguments
    /// * `content` - Full text of the index
    ///
    /// # Returns
    /// Records in file order; empty for an empty index
    pub fn parse_repository(content: &str) -> Vec<PackageRecord> {
        let content = normalize_line_endings(content);

        content
            .split(BLOCK_SEPARATOR)
            .filter_map(Self::parse_block)
            .collect()
    }

    fn parse_block(block: &str) -> Option<PackageRecord> {
        let mut record = PackageRecord::new();
        for line in block.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some((key, value)) = line.split_once(':') {
                record.insert_field(key, value);
            }
        }
        record.name().is_some().then_some(record)
    }

    /// Parses a test adjacency list into a name to dependencies mapping
    ///
    /// Each line `node -> dep1, dep2` declares the full dependency list of
    /// `node`. Lines without `->` are ignored, as are lines with an empty
    /// node name. A repeated node line replaces the earlier list.
    pub fn parse_test_graph(content: &str) -> HashMap<String, Vec<String>> {
        let content = normalize_line_endings(content);
        let mut graph = HashMap::new();

        for line in content.lines() {
            let Some((node, deps)) = line.split_once(EDGE_MARKER) else {
                continue;
            };
            let node = node.trim();
            if node.is_empty() {
                continue;
            }
            graph.insert(node.to_string(), split_dependency_list(deps));
        }

        graph
    }
}

fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}
