//! A scanned note document and position-to-link lookup.

use crate::link::Link;
use crate::range::Position;
use crate::scanner;

/// An immutable snapshot of one note: its full text and the ordered list of
/// links found in it. Built fresh on every query; there is no cache and no
/// incremental re-scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    links: Vec<Link>,
}

impl Document {
    /// Scan `text` and capture the resulting links alongside it.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let links = scanner::scan(&text);
        Self { text, links }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// All links, in scan order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// The first link (in scan order) whose range contains `pos`, inclusive
    /// on both ends. Overlapping ranges from malformed input are resolved by
    /// scanner precedence, not by range size. `None` means "no link here",
    /// which callers treat as a normal empty result.
    pub fn find_link_at(&self, pos: Position) -> Option<&Link> {
        self.links.iter().find(|link| link.range.contains(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::LinkKind;

    #[test]
    fn finds_link_under_position() {
        let doc = Document::new("see [[Target Page]] here");
        let link = doc.find_link_at(Position::new(0, 8)).expect("link");
        assert_eq!(link.kind, LinkKind::Wiki);
        assert_eq!(link.target, "Target Page");
    }

    #[test]
    fn position_outside_any_link_is_none() {
        let doc = Document::new("see [[Target Page]] here");
        assert!(doc.find_link_at(Position::new(0, 0)).is_none());
        assert!(doc.find_link_at(Position::new(5, 0)).is_none());
    }

    #[test]
    fn lookup_is_idempotent() {
        let doc = Document::new("a #tag b\nkey:: value\n");
        let pos = Position::new(0, 3);
        assert_eq!(doc.find_link_at(pos), doc.find_link_at(pos));
    }

    #[test]
    fn first_link_in_scan_order_wins_on_overlap() {
        // The query expression contains a wiki link; both ranges cover the
        // page name, and query precedes wiki in scan order.
        let doc = Document::new("{{query [[Page]]}}");
        let link = doc.find_link_at(Position::new(0, 11)).expect("link");
        assert_eq!(link.kind, LinkKind::Query);
    }

    #[test]
    fn empty_document_has_no_links() {
        let doc = Document::new("");
        assert!(doc.links().is_empty());
        assert!(doc.find_link_at(Position::default()).is_none());
    }
}
