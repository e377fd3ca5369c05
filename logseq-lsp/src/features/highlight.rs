//! Document highlight: every mention of the reference under the cursor.

use logseq_document::{Document, Position, Range};

/// Highlight spans for all links sharing the target of the link at
/// `position`, the link under the cursor included. Targets compare as raw
/// strings, so a `[[name]]`, a `#name`, and a `name::` property all light
/// up together. Purely local; no graph lookups.
pub fn highlight(doc: &Document, position: Position) -> Option<Vec<Range>> {
    let primary = doc.find_link_at(position)?;
    Some(
        doc.links()
            .iter()
            .filter(|link| link.target == primary.target)
            .map(|link| link.range)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_every_mention_of_the_same_target() {
        let doc = Document::new("[[rust]] then #rust again\n[[rust]]\n");
        let ranges = highlight(&doc, Position::new(0, 3)).expect("highlight");
        assert_eq!(ranges.len(), 3);
        assert!(ranges.contains(&doc.links()[0].range));
    }

    #[test]
    fn highlight_set_matches_links_with_equal_target() {
        let doc = Document::new("#a #b #a\n");
        let under_cursor = doc.find_link_at(Position::new(0, 1)).unwrap().clone();
        let ranges = highlight(&doc, Position::new(0, 1)).expect("highlight");

        let expected: Vec<Range> = doc
            .links()
            .iter()
            .filter(|l| l.target == under_cursor.target)
            .map(|l| l.range)
            .collect();
        assert_eq!(ranges, expected);
        assert_eq!(ranges.len(), 2);
    }

    #[test]
    fn different_targets_do_not_light_up() {
        let doc = Document::new("[[one]] [[two]]");
        let ranges = highlight(&doc, Position::new(0, 3)).expect("highlight");
        assert_eq!(ranges.len(), 1);
    }

    #[test]
    fn no_link_under_cursor_yields_none() {
        let doc = Document::new("plain [[link]]");
        assert!(highlight(&doc, Position::new(0, 2)).is_none());
    }
}
