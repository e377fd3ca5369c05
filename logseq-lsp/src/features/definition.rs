//! Go-to-definition: jump from a reference to its note file.

use crate::context::GraphContext;
use crate::features::resolve::{self, CapabilityError};
use logseq_document::{Document, Position};
use logseq_graph::GraphQuery;
use lsp_types::Url;

/// Resolve the link under `position` to its target note's URI.
///
/// The location points at the start of the target file; the reference's
/// range inside the destination is not computed. Non-navigable links
/// (queries, property values) and positions outside any link yield an
/// empty result.
pub async fn definition<G: GraphQuery>(
    ctx: &GraphContext<G>,
    doc: &Document,
    position: Position,
) -> Result<Option<Url>, CapabilityError> {
    let Some(link) = doc.find_link_at(position) else {
        return Ok(None);
    };
    if !resolve::is_navigable(link.kind) {
        return Ok(None);
    }
    resolve::link_to_uri(ctx, link).await
}
