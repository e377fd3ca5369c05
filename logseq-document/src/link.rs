//! Typed references extracted from note text.

use crate::range::Range;
use std::fmt;

/// The reserved property key whose value is a block UUID rather than plain
/// text. The scanner suppresses the `PropValue` link for this key so the
/// UUID is classified as a [`LinkKind::BlockEmbed`] instead.
pub const ID_PROPERTY: &str = "id";

/// What kind of remote lookup a link needs, not what syntax introduced it.
/// A UUID is a `BlockEmbed` whether it appeared in `((...))` brackets or as
/// the value of an `id::` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// `[[Page Name]]`, resolved as a page lookup by name.
    Wiki,
    /// `#tag`, resolved as a page lookup by name.
    Tag,
    /// The key of a `key:: value` property line, also a page name.
    Prop,
    /// The value of a `key:: value` property line. Inert: no capability
    /// currently dereferences these.
    PropValue,
    /// A block UUID, resolved with a block fetch.
    BlockEmbed,
    /// A `{{query ...}}` expression, executed remotely.
    Query,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Wiki => "wiki",
            LinkKind::Tag => "tag",
            LinkKind::Prop => "property",
            LinkKind::PropValue => "property-value",
            LinkKind::BlockEmbed => "block-embed",
            LinkKind::Query => "query",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed, positioned reference found in note text.
///
/// `target` is the raw captured text: a page name, tag name, property key or
/// value, block UUID, or query expression. Targets are never empty; the
/// scanner drops empty captures instead of emitting them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub target: String,
    pub kind: LinkKind,
    pub range: Range,
}

impl Link {
    pub fn new(target: impl Into<String>, kind: LinkKind, range: Range) -> Self {
        Self {
            target: target.into(),
            kind,
            range,
        }
    }
}
