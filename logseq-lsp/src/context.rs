//! Per-process capability context.

use logseq_graph::GraphLayout;

/// Everything a capability handler needs about the open graph: the file
/// layout for page-to-URI mapping and the query collaborator. Built once at
/// startup and borrowed by every request; there is no process-wide mutable
/// state.
#[derive(Debug)]
pub struct GraphContext<G> {
    pub layout: GraphLayout,
    pub graph: G,
}

impl<G> GraphContext<G> {
    pub fn new(layout: GraphLayout, graph: G) -> Self {
        Self { layout, graph }
    }
}
