//! Shared link-to-URI resolution.

use crate::context::GraphContext;
use crate::files::FileError;
use logseq_document::{Link, LinkKind};
use logseq_graph::{GraphError, GraphQuery};
use lsp_types::Url;
use std::fmt;

/// Errors surfaced by capability handlers.
#[derive(Debug)]
pub enum CapabilityError {
    /// A graph lookup failed (network, API, or null response).
    Graph(GraphError),
    /// A filesystem read failed.
    File(FileError),
    /// A non-navigable link reached the URI resolver. Handlers filter link
    /// kinds first; scanner-driven control flow never triggers this.
    UnsupportedLink(LinkKind),
}

impl fmt::Display for CapabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapabilityError::Graph(err) => write!(f, "graph error: {err}"),
            CapabilityError::File(err) => write!(f, "file error: {err}"),
            CapabilityError::UnsupportedLink(kind) => {
                write!(f, "unsupported link type: {kind}")
            }
        }
    }
}

impl std::error::Error for CapabilityError {}

impl From<GraphError> for CapabilityError {
    fn from(err: GraphError) -> Self {
        CapabilityError::Graph(err)
    }
}

impl From<FileError> for CapabilityError {
    fn from(err: FileError) -> Self {
        CapabilityError::File(err)
    }
}

/// Whether a link kind resolves to a file location. Query links render
/// remote content instead, and property values are intentionally inert.
pub fn is_navigable(kind: LinkKind) -> bool {
    matches!(
        kind,
        LinkKind::Wiki | LinkKind::Tag | LinkKind::Prop | LinkKind::BlockEmbed
    )
}

/// Resolve a navigable link to the `file://` URI of its target note.
///
/// Page-name links go through one `getPage` lookup; block embeds fetch the
/// block first and then its owning page by id. `Ok(None)` means "no
/// target" (an empty page name), which is a normal empty result.
pub async fn link_to_uri<G: GraphQuery>(
    ctx: &GraphContext<G>,
    link: &Link,
) -> Result<Option<Url>, CapabilityError> {
    let page = match link.kind {
        LinkKind::Wiki | LinkKind::Tag | LinkKind::Prop => {
            if link.target.is_empty() {
                return Ok(None);
            }
            ctx.graph.page_by_name(&link.target).await?
        }
        LinkKind::BlockEmbed => {
            let block = ctx.graph.block(&link.target, true).await?;
            let owner = block.page.ok_or_else(|| {
                GraphError::InvalidResponse(format!("block {} has no owning page", block.uuid))
            })?;
            ctx.graph.page_by_id(owner.id).await?
        }
        LinkKind::Query | LinkKind::PropValue => {
            return Err(CapabilityError::UnsupportedLink(link.kind));
        }
    };
    Ok(Some(page.to_uri(&ctx.layout)?))
}
