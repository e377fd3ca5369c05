//! Document links: resolve every reference for clickable decoration.

use crate::context::GraphContext;
use crate::features::resolve::{self, CapabilityError};
use logseq_document::{Document, Range};
use logseq_graph::GraphQuery;
use lsp_types::Url;

/// A source range and the target URI it navigates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub range: Range,
    pub target: Url,
}

/// Resolve every navigable link in the document, sequentially and in scan
/// order. Queries and property values are not enumerated; a failed lookup
/// for any link fails the whole request.
pub async fn document_links<G: GraphQuery>(
    ctx: &GraphContext<G>,
    doc: &Document,
) -> Result<Vec<ResolvedLink>, CapabilityError> {
    let mut resolved = Vec::new();
    for link in doc.links() {
        if !resolve::is_navigable(link.kind) {
            continue;
        }
        if let Some(target) = resolve::link_to_uri(ctx, link).await? {
            resolved.push(ResolvedLink {
                range: link.range,
                target,
            });
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::test_support::{mock_context, page, MockGraph};

    #[tokio::test]
    async fn resolves_every_navigable_link_in_scan_order() {
        let ctx = mock_context(
            MockGraph::default()
                .with_page(page(1, "One"))
                .with_page(page(2, "two")),
        );
        let doc = Document::new("[[One]] and #two\n");

        let links = document_links(&ctx, &doc).await.expect("links");
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].target.as_str(), "file:///graph/pages/One.md");
        assert_eq!(links[1].target.as_str(), "file:///graph/pages/two.md");
        assert!(links[0].range.start < links[1].range.start);
    }

    #[tokio::test]
    async fn queries_and_property_values_are_not_enumerated() {
        let ctx = mock_context(MockGraph::default().with_page(page(1, "key")));
        let doc = Document::new("{{query (and)}}\nkey:: value\n");

        let links = document_links(&ctx, &doc).await.expect("links");
        // Only the property key resolves; the query expression and the
        // property value are skipped.
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target.as_str(), "file:///graph/pages/key.md");
    }

    #[tokio::test]
    async fn a_document_without_links_resolves_to_an_empty_list() {
        let ctx = mock_context(MockGraph::default());
        let doc = Document::new("plain prose\n");

        let links = document_links(&ctx, &doc).await.expect("links");
        assert!(links.is_empty());
        assert_eq!(ctx.graph.call_count(), 0);
    }

    #[tokio::test]
    async fn one_failed_lookup_fails_the_request() {
        let ctx = mock_context(MockGraph::default().with_page(page(1, "Known")));
        let doc = Document::new("[[Known]] [[Unknown]]");

        let result = document_links(&ctx, &doc).await;
        assert!(matches!(result, Err(CapabilityError::Graph(_))));
    }
}
