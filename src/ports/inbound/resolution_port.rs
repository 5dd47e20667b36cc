use crate::application::dto::{ResolveRequest, ResolveResponse};
use crate::shared::Result;

/// DependencyResolutionPort - Inbound port for the resolution use case
///
/// A dependency cycle is not an error at this boundary: the response
/// still carries the graph, with the cycle in place of an install order.
pub trait DependencyResolutionPort {
    /// Resolves the transitive dependencies described by `request`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The metadata source is missing or unreadable
    /// - A configured version pin matches no package
    /// - Strict mode is on and some expanded package has no metadata
    fn resolve(&self, request: ResolveRequest) -> Result<ResolveResponse>;
}
