//! Builder for constructing ResolutionReadModel from a use case response

use super::resolution_read_model::{CycleView, GraphEntryView, MetadataView, ResolutionReadModel};
use crate::application::dto::ResolveResponse;
use crate::dependency_resolution::domain::{DependencyGraph, NodeState, ResolutionMetadata};

/// Builder for constructing ResolutionReadModel from domain objects
pub struct ResolutionReadModelBuilder;

impl ResolutionReadModelBuilder {
    pub fn build(response: &ResolveResponse) -> ResolutionReadModel {
        let (install_order, cycle) = match &response.install_order {
            Ok(order) => (Some(order.packages().to_vec()), None),
            Err(cycle) => (
                None,
                Some(CycleView {
                    unresolved: cycle.unresolved().to_vec(),
                    path: cycle.cycle().to_vec(),
                }),
            ),
        };

        ResolutionReadModel {
            metadata: Self::build_metadata(&response.metadata),
            root: response.root.to_string(),
            max_depth: response.max_depth,
            filter: response.filter_substring.clone(),
            graph: Self::build_graph_entries(&response.graph),
            unexpanded: response
                .graph
                .unexpanded()
                .into_iter()
                .map(str::to_string)
                .collect(),
            excluded: response.graph.excluded().to_vec(),
            install_order,
            cycle,
        }
    }

    fn build_metadata(metadata: &ResolutionMetadata) -> MetadataView {
        MetadataView {
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            generated_at: metadata.generated_at().to_string(),
        }
    }

    /// One entry per key, in BFS-visit order
    fn build_graph_entries(graph: &DependencyGraph) -> Vec<GraphEntryView> {
        graph
            .key_ids()
            .iter()
            .map(|&id| GraphEntryView {
                name: graph.name(id).to_string(),
                depth: match graph.state(id) {
                    NodeState::Expanded { depth } => depth,
                    NodeState::Unexpanded => 0,
                },
                dependencies: graph
                    .dependency_ids(id)
                    .iter()
                    .map(|&dep| graph.name(dep).to_string())
                    .collect(),
                unknown: !graph.is_known(id),
            })
            .collect()
    }
}
