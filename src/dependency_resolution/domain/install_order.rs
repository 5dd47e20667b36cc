use thiserror::Error;

/// A linearization of packages in which every dependency precedes its dependents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOrder {
    packages: Vec<String>,
}

impl InstallOrder {
    pub fn new(packages: Vec<String>) -> Self {
        Self { packages }
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Position of `name` in the order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.packages.iter().position(|p| p == name)
    }
}

/// The dependency relation has no valid linearization
///
/// Carries every node left unordered plus one concrete cycle among them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Dependency cycle detected among {} package(s): {}", .unresolved.len(), .unresolved.join(", "))]
pub struct CycleError {
    unresolved: Vec<String>,
    cycle: Vec<String>,
}

impl CycleError {
    pub fn new(unresolved: Vec<String>, cycle: Vec<String>) -> Self {
        Self { unresolved, cycle }
    }

    /// Nodes that could not be ordered, in graph interning order
    pub fn unresolved(&self) -> &[String] {
        &self.unresolved
    }

    /// One cycle, closed: the first name is repeated at the end
    pub fn cycle(&self) -> &[String] {
        &self.cycle
    }

    /// Renders the cycle as `a -> b -> a`
    pub fn cycle_path(&self) -> String {
        self.cycle.join(" -> ")
    }
}
