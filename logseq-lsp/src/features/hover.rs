//! Hover: preview the content behind the link under the cursor.

use crate::context::GraphContext;
use crate::features::markup;
use crate::features::resolve::{self, CapabilityError};
use crate::files::{self, FileError};
use logseq_document::{Document, LinkKind, Position, Range};
use logseq_graph::GraphQuery;

/// Rendered hover payload plus the source range it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverResult {
    pub contents: String,
    pub range: Range,
}

/// Compute the hover for `position`, if any.
///
/// Page-name links resolve to their note file and return its full text; a
/// target file that does not exist yet is an empty hover, not an error.
/// Block embeds and queries fetch remote content and render it as
/// markdown. Property values contribute nothing.
pub async fn hover<G: GraphQuery>(
    ctx: &GraphContext<G>,
    doc: &Document,
    position: Position,
) -> Result<Option<HoverResult>, CapabilityError> {
    let Some(link) = doc.find_link_at(position) else {
        return Ok(None);
    };
    let contents = match link.kind {
        LinkKind::Wiki | LinkKind::Tag | LinkKind::Prop => {
            let Some(uri) = resolve::link_to_uri(ctx, link).await? else {
                return Ok(None);
            };
            match files::read_uri(&uri).await {
                Ok(text) => text,
                Err(FileError::NotFound(_)) => return Ok(None),
                Err(err) => return Err(err.into()),
            }
        }
        LinkKind::BlockEmbed => {
            let block = ctx.graph.block(&link.target, true).await?;
            markup::block_outline(&block)
        }
        LinkKind::Query => {
            let results = ctx.graph.query(&link.target).await?;
            markup::query_results(&results)
        }
        LinkKind::PropValue => return Ok(None),
    };
    Ok(Some(HoverResult {
        contents,
        range: link.range,
    }))
}
