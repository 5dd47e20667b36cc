use std::collections::HashMap;

/// Stable identity of a package name inside one graph
///
/// Ids are handed out in first-reference order, starting with the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Whether a referenced package was expanded by the graph builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Dependencies were looked up and recorded at this BFS depth
    Expanded { depth: usize },
    /// Only referenced as a dependency target (beyond max depth, or never dequeued)
    Unexpanded,
}

#[derive(Debug, Clone)]
struct Node {
    name: String,
    state: NodeState,
    dependencies: Vec<NodeId>,
    known: bool,
}

/// DependencyGraph aggregate produced by one resolution query
///
/// Every name the query touched is interned once. Expanded nodes are the
/// graph's keys and keep their dependency list exactly as the source
/// returned it (order and duplicates preserved). Unexpanded nodes are
/// edge targets that were never looked up.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    expansion_order: Vec<NodeId>,
    excluded: Vec<String>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, interning it as unexpanded if unseen
    pub fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            name: name.to_string(),
            state: NodeState::Unexpanded,
            dependencies: Vec::new(),
            known: true,
        });
        self.index.insert(name.to_string(), id);
        id
    }

    /// Records `name` as a key with its dependency list
    ///
    /// `known` is false when the metadata source had no entry for the name.
    /// Expanding the same name twice keeps the first expansion.
    pub fn record_expansion(
        &mut self,
        name: &str,
        depth: usize,
        dependencies: &[String],
        known: bool,
    ) -> NodeId {
        let id = self.intern(name);
        if self.is_expanded_id(id) {
            return id;
        }
        let dependency_ids: Vec<NodeId> = dependencies.iter().map(|d| self.intern(d)).collect();

        let node = &mut self.nodes[id.0];
        node.state = NodeState::Expanded { depth };
        node.dependencies = dependency_ids;
        node.known = known;
        self.expansion_order.push(id);
        id
    }

    /// Remembers a name discarded by the filter (first occurrence only)
    pub fn record_exclusion(&mut self, name: &str) {
        if !self.excluded.iter().any(|e| e == name) {
            self.excluded.push(name.to_string());
        }
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    pub fn state(&self, id: NodeId) -> NodeState {
        self.nodes[id.0].state
    }

    /// Dependency ids of a node; empty for unexpanded nodes
    pub fn dependency_ids(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].dependencies
    }

    fn is_expanded_id(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.0].state, NodeState::Expanded { .. })
    }

    /// True if `name` is a key of the graph
    pub fn is_expanded(&self, name: &str) -> bool {
        self.node_id(name)
            .map(|id| self.is_expanded_id(id))
            .unwrap_or(false)
    }

    /// Depth at which `name` was expanded, if it is a key
    pub fn depth_of(&self, name: &str) -> Option<usize> {
        match self.state(self.node_id(name)?) {
            NodeState::Expanded { depth } => Some(depth),
            NodeState::Unexpanded => None,
        }
    }

    /// Dependency names of a key, in recorded order
    pub fn dependencies_of(&self, name: &str) -> Option<Vec<&str>> {
        let id = self.node_id(name)?;
        if !self.is_expanded_id(id) {
            return None;
        }
        Some(
            self.dependency_ids(id)
                .iter()
                .map(|&dep| self.name(dep))
                .collect(),
        )
    }

    /// All node ids in interning order (keys and dependency targets)
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Key ids in BFS-visit order
    pub fn key_ids(&self) -> &[NodeId] {
        &self.expansion_order
    }

    /// Key names in BFS-visit order
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.expansion_order.iter().map(|&id| self.name(id))
    }

    /// Number of keys (expanded packages)
    pub fn key_count(&self) -> usize {
        self.expansion_order.len()
    }

    /// Number of distinct names referenced (keys and dependency targets)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of recorded edges, counting duplicates
    pub fn edge_count(&self) -> usize {
        self.expansion_order
            .iter()
            .map(|&id| self.dependency_ids(id).len())
            .sum()
    }

    /// Dependency targets that were never expanded, in interning order
    pub fn unexpanded(&self) -> Vec<&str> {
        self.node_ids()
            .filter(|&id| !self.is_expanded_id(id))
            .map(|id| self.name(id))
            .collect()
    }

    /// Keys for which the metadata source had no entry, in BFS-visit order
    pub fn unknown_packages(&self) -> Vec<&str> {
        self.expansion_order
            .iter()
            .filter(|&&id| !self.nodes[id.0].known)
            .map(|&id| self.name(id))
            .collect()
    }

    pub fn is_known(&self, id: NodeId) -> bool {
        self.nodes[id.0].known
    }

    /// Names discarded because they matched the filter
    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }
}
