//! Markdown rendering for remotely fetched content.

use logseq_graph::Block;

/// Render a block as a two-level markdown list: the block's own content as
/// the top bullet, each direct child as an indented bullet. Grandchildren
/// are not rendered.
pub fn block_outline(block: &Block) -> String {
    let mut out = format!("- {}\n", block.content);
    for child in &block.children {
        out.push_str("\t- ");
        out.push_str(&child.content);
        out.push('\n');
    }
    out
}

/// Render query results as numbered entries, each underlined with a run of
/// dashes matching the content's character length.
pub fn query_results(blocks: &[Block]) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        let underline = "-".repeat(block.content.chars().count());
        out.push_str(&format!("Result {i}:\n{}\n\n{underline}\n\n", block.content));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::test_support::block;
    use logseq_graph::Block;

    #[test]
    fn block_outline_renders_two_levels() {
        let parent = Block {
            children: vec![block("c1", "first child"), block("c2", "second child")],
            ..block("p", "parent content")
        };
        assert_eq!(
            block_outline(&parent),
            "- parent content\n\t- first child\n\t- second child\n"
        );
    }

    #[test]
    fn block_outline_skips_grandchildren() {
        let child = Block {
            children: vec![block("g", "grandchild")],
            ..block("c", "child")
        };
        let parent = Block {
            children: vec![child],
            ..block("p", "parent")
        };
        let rendered = block_outline(&parent);
        assert!(rendered.contains("\t- child\n"));
        assert!(!rendered.contains("grandchild"));
    }

    #[test]
    fn query_results_number_and_underline_each_entry() {
        let rendered = query_results(&[block("a", "abc"), block("b", "hi")]);
        assert_eq!(
            rendered,
            "Result 0:\nabc\n\n---\n\nResult 1:\nhi\n\n--\n\n"
        );
    }

    #[test]
    fn query_underline_counts_characters_not_bytes() {
        let rendered = query_results(&[block("a", "日本語")]);
        assert!(rendered.contains("\n---\n"));
    }

    #[test]
    fn empty_query_result_renders_nothing() {
        assert_eq!(query_results(&[]), "");
    }
}
