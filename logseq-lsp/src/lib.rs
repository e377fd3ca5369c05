//! Language Server Protocol (LSP) server for Logseq graphs.
//!
//!     Lets any LSP-capable editor navigate, preview, and highlight the
//!     cross-references inside a Logseq graph's plain-text note files.
//!
//! Feature Set
//!
//!     Four read-only query capabilities, all built on the same link model:
//!
//!         1. Hover (textDocument/hover):
//!             - Page contents for [[wiki]], #tag, and property links
//!             - Rendered outline for block embeds
//!             - Executed results for {{query ...}} expressions
//!
//!         2. Go to Definition (textDocument/definition):
//!             - Jump from any page reference to its note file
//!
//!         3. Document Links (textDocument/documentLink):
//!             - Clickable decoration for every reference in the file
//!
//!         4. Document Highlight (textDocument/documentHighlight):
//!             - Underline every mention of the reference under the cursor
//!
//! Architecture
//!
//!     LSP Layer (tower-lsp):
//!         - JSON-RPC transport, handshaking, request routing
//!
//!     Server Layer (this crate, `server`):
//!         - Implements the LanguageServer trait
//!         - Converts between protocol and domain positions
//!         - Thin; wiring tests only
//!
//!     Feature Layer (`features`):
//!         - One module per capability over `logseq-document` scans and
//!           `logseq-graph` lookups, behind the `GraphQuery` seam
//!         - All logic and dense unit tests
//!
//!     There is no document store: every request reads the file fresh from
//!     disk and re-scans it. Editor-synced text is acknowledged and logged,
//!     never kept.

pub mod context;
pub mod features;
pub mod files;
pub mod server;

pub use context::GraphContext;
pub use server::LogseqLanguageServer;
