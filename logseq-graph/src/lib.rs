//! Remote half of the link resolver: the Logseq graph collaborator.
//!
//! Logseq exposes a local HTTP API over the open graph. This crate models
//! the entities the server consumes ([`Page`], [`Block`], [`CurrentGraph`]),
//! the page-to-file naming rule ([`GraphLayout`]), and the five API
//! operations behind the [`GraphQuery`] trait so capability code can be
//! tested against a mock. Everything is fetched on demand and never cached:
//! one fresh query per link resolution, no state across calls.

pub mod client;
pub mod types;

pub use client::{GraphError, GraphQuery, HttpClient};
pub use types::{Block, CurrentGraph, GraphLayout, Page, PageHandle};
