//! Link model for Logseq note files.
//!
//! A note file is plain markdown with Logseq's reference syntax sprinkled
//! through it: `[[page]]` wiki links, `#tags`, `key:: value` properties,
//! `((uuid))` block embeds, and `{{query ...}}` expressions. This crate turns
//! raw note text into an ordered list of typed, positioned [`Link`]s
//! ([`scanner::scan`]) and answers "which link is under this cursor"
//! ([`Document::find_link_at`]).
//!
//! Scanning is total: there is no error path, malformed syntax simply
//! produces fewer links. Resolution of links against the running Logseq
//! instance lives in `logseq-graph`; this crate has no I/O.

pub mod document;
pub mod link;
pub mod range;
pub mod scanner;

pub use document::Document;
pub use link::{Link, LinkKind, ID_PROPERTY};
pub use range::{Position, Range};
