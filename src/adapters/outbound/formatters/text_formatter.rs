use crate::application::read_models::{GraphEntryView, ResolutionReadModel};
use crate::ports::outbound::ResolutionFormatter;
use crate::shared::Result;
use std::fmt::Write;

const NO_DEPS: &str = "(no deps)";
const UNKNOWN_MARKER: &str = " [unknown]";

/// TextFormatter adapter producing the plain-text report
///
/// One `name -> deps` line per expanded package in visit order, then the
/// numbered install order, or the cycle when there is none.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn header(model: &ResolutionReadModel) -> String {
        match &model.filter {
            Some(filter) => format!(
                "Dependency graph for {} (max depth {}, excluding '{}'):\n",
                model.root, model.max_depth, filter
            ),
            None => format!(
                "Dependency graph for {} (max depth {}):\n",
                model.root, model.max_depth
            ),
        }
    }

    fn graph_line(entry: &GraphEntryView) -> String {
        let deps = if entry.dependencies.is_empty() {
            NO_DEPS.to_string()
        } else {
            entry.dependencies.join(", ")
        };
        let marker = if entry.unknown { UNKNOWN_MARKER } else { "" };
        format!("{} -> {}{}\n", entry.name, deps, marker)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionFormatter for TextFormatter {
    fn format(&self, model: &ResolutionReadModel) -> Result<String> {
        let mut output = Self::header(model);

        if model.graph.is_empty() {
            output.push_str("(empty graph: root excluded by filter)\n");
        }
        for entry in &model.graph {
            output.push_str(&Self::graph_line(entry));
        }
        output.push('\n');

        match (&model.install_order, &model.cycle) {
            (_, Some(cycle)) => {
                writeln!(
                    output,
                    "Cycle detected among {} package(s): {}",
                    cycle.unresolved.len(),
                    cycle.unresolved.join(", ")
                )?;
                writeln!(output, "Cycle: {}", cycle.path.join(" -> "))?;
            }
            (Some(order), None) => {
                output.push_str("Install order:\n");
                for (i, name) in order.iter().enumerate() {
                    writeln!(output, "{}. {}", i + 1, name)?;
                }
            }
            (None, None) => {}
        }

        Ok(output)
    }
}
