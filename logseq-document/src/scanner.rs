//! Line-by-line link scanner.
//!
//! Each line of note text is run through a fixed, ordered set of pattern
//! matchers. Every matcher is exhaustive over its line (all non-overlapping
//! occurrences), and the per-line emission order follows [`SCAN_ORDER`].
//! No deduplication is performed: a line containing the same syntax twice
//! yields two links with distinct ranges.

use crate::link::{Link, LinkKind, ID_PROPERTY};
use crate::range::Range;
use once_cell::sync::Lazy;
use regex::Regex;

static QUERY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{query (.*)").unwrap());

// `\[*` tolerates malformed extra brackets (`[[[[x]]]]`) instead of
// rejecting them; the target is always the innermost capture.
static WIKI_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\{\{embed )?(\[*\[\[(.+?)\]\])").unwrap());

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"#([[:graph:]]+)[[:space:]]?").unwrap());

static EMBED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{4}-[a-fA-F0-9]{12}")
        .unwrap()
});

/// A single pattern hit, in byte offsets relative to its line.
struct RawMatch<'a> {
    target: &'a str,
    kind: LinkKind,
    start: usize,
    end: usize,
}

type LineMatcher = for<'a> fn(&'a str) -> Vec<RawMatch<'a>>;

/// Pattern precedence, applied per line. Order matters: queries must be
/// found before the wiki pattern gets a chance to chew on bracketed text
/// inside them, and the block-embed pattern deliberately runs last and
/// broadly so a UUID appearing as an `id::` property value is classified
/// as a content reference rather than a generic property value.
const SCAN_ORDER: &[(&str, LineMatcher)] = &[
    ("query", match_queries),
    ("wiki", match_wiki_links),
    ("tag", match_tags),
    ("property", match_properties),
    ("block-embed", match_block_embeds),
];

/// Scan note text into an ordered list of typed links.
///
/// Links are emitted in discovery order: lines in document order, patterns
/// in [`SCAN_ORDER`] within each line, occurrences left to right within
/// each pattern. Ranges are character-based; empty captures are dropped.
pub fn scan(text: &str) -> Vec<Link> {
    let mut links = Vec::new();
    for (line_no, line) in text.split('\n').enumerate() {
        for (_, matcher) in SCAN_ORDER {
            for raw in matcher(line) {
                if raw.target.is_empty() {
                    continue;
                }
                let range = Range::on_line(
                    line_no as u32,
                    char_offset(line, raw.start),
                    char_offset(line, raw.end),
                );
                links.push(Link::new(raw.target, raw.kind, range));
            }
        }
    }
    links
}

/// Convert a byte offset within a line to a character offset. The regex
/// engine yields byte offsets, but clients count characters.
fn char_offset(line: &str, byte: usize) -> u32 {
    line[..byte].chars().count() as u32
}

fn match_queries(line: &str) -> Vec<RawMatch<'_>> {
    QUERY_PATTERN
        .captures_iter(line)
        .filter_map(|caps| {
            let expr = caps.get(1)?;
            Some(RawMatch {
                target: expr.as_str(),
                kind: LinkKind::Query,
                start: expr.start(),
                end: expr.end(),
            })
        })
        .collect()
}

fn match_wiki_links(line: &str) -> Vec<RawMatch<'_>> {
    WIKI_PATTERN
        .captures_iter(line)
        .filter_map(|caps| {
            let brackets = caps.get(1)?;
            let name = caps.get(2)?;
            Some(RawMatch {
                target: name.as_str(),
                kind: LinkKind::Wiki,
                start: brackets.start(),
                end: brackets.end(),
            })
        })
        .collect()
}

fn match_tags(line: &str) -> Vec<RawMatch<'_>> {
    TAG_PATTERN
        .captures_iter(line)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(RawMatch {
                target: name.as_str(),
                kind: LinkKind::Tag,
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect()
}

/// A property line yields a `Prop` link for the key and, unless the key is
/// the reserved `id` identifier, a `PropValue` link for the value. The
/// `id` value is a UUID with embed semantics and is left for the
/// block-embed pattern to pick up.
///
/// The **first** `::` on the line is the separator. The key is the
/// trailing whitespace-free run directly abutting it (so `- foo #bar
/// baz::qux` yields key `baz`), the value is the rest of the line after
/// any whitespace; a value may therefore contain `::` itself. A separator
/// with no key abutting it is not a property line.
fn match_properties(line: &str) -> Vec<RawMatch<'_>> {
    let Some(sep) = line.find("::") else {
        return Vec::new();
    };
    let before = &line[..sep];
    let key_start = before
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(idx, c)| idx + c.len_utf8())
        .unwrap_or(0);
    let key = &before[key_start..];
    if key.is_empty() {
        return Vec::new();
    }

    let after = &line[sep + 2..];
    let value_start = sep
        + 2
        + after
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(after.len());

    let mut matches = vec![RawMatch {
        target: key,
        kind: LinkKind::Prop,
        start: key_start,
        end: sep,
    }];
    if key != ID_PROPERTY {
        matches.push(RawMatch {
            target: &line[value_start..],
            kind: LinkKind::PropValue,
            start: value_start,
            end: line.len(),
        });
    }
    matches
}

fn match_block_embeds(line: &str) -> Vec<RawMatch<'_>> {
    EMBED_PATTERN
        .find_iter(line)
        .map(|m| RawMatch {
            target: m.as_str(),
            kind: LinkKind::BlockEmbed,
            start: m.start(),
            end: m.end(),
        })
        .collect()
}
