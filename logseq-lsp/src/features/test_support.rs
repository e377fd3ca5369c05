//! Shared fixtures for feature and server tests: an in-memory graph
//! collaborator and helpers for building pages, blocks, and on-disk graphs.

use crate::context::GraphContext;
use async_trait::async_trait;
use logseq_graph::{Block, CurrentGraph, GraphError, GraphLayout, GraphQuery, Page, PageHandle};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Call-recording [`GraphQuery`] implementation backed by maps. Missing
/// entries answer the way Logseq does: a null body, i.e.
/// [`GraphError::ServiceDown`].
#[derive(Default)]
pub(crate) struct MockGraph {
    pages_by_name: HashMap<String, Page>,
    pages_by_id: HashMap<i64, Page>,
    blocks: HashMap<String, Block>,
    query_results: Vec<Block>,
    pub(crate) calls: AtomicUsize,
}

impl MockGraph {
    pub(crate) fn with_page(mut self, page: Page) -> Self {
        self.pages_by_id.insert(page.id, page.clone());
        self.pages_by_name.insert(page.original_name.clone(), page);
        self
    }

    pub(crate) fn with_block(mut self, block: Block) -> Self {
        self.blocks.insert(block.uuid.clone(), block);
        self
    }

    pub(crate) fn with_query_results(mut self, blocks: Vec<Block>) -> Self {
        self.query_results = blocks;
        self
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GraphQuery for MockGraph {
    async fn current_graph(&self) -> Result<CurrentGraph, GraphError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(CurrentGraph {
            name: "notes".into(),
            path: "/graph".into(),
        })
    }

    async fn page_by_name(&self, name: &str) -> Result<Page, GraphError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pages_by_name
            .get(name)
            .cloned()
            .ok_or(GraphError::ServiceDown)
    }

    async fn page_by_id(&self, id: i64) -> Result<Page, GraphError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pages_by_id
            .get(&id)
            .cloned()
            .ok_or(GraphError::ServiceDown)
    }

    async fn block(&self, uuid: &str, _include_children: bool) -> Result<Block, GraphError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.blocks
            .get(uuid)
            .cloned()
            .ok_or(GraphError::ServiceDown)
    }

    async fn query(&self, _expression: &str) -> Result<Vec<Block>, GraphError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.query_results.clone())
    }
}

/// Context with a fixed `/graph` root; enough for tests that never touch
/// the resolved files.
pub(crate) fn mock_context(graph: MockGraph) -> GraphContext<MockGraph> {
    GraphContext::new(GraphLayout::new("/graph"), graph)
}

/// Context rooted in a real temp directory, with each `(name, contents)`
/// pair written to `pages/<name>.md`. The directory guard keeps the files
/// alive for the test's duration.
pub(crate) fn context_on_disk(
    graph: MockGraph,
    pages: &[(&str, &str)],
) -> (TempDir, GraphContext<MockGraph>) {
    let dir = TempDir::new().expect("temp graph dir");
    let pages_dir = dir.path().join("pages");
    std::fs::create_dir_all(&pages_dir).expect("pages dir");
    for (name, contents) in pages {
        std::fs::write(pages_dir.join(format!("{name}.md")), contents).expect("page file");
    }
    let layout = GraphLayout::new(dir.path());
    (dir, GraphContext::new(layout, graph))
}

pub(crate) fn page(id: i64, original_name: &str) -> Page {
    Page {
        id,
        name: original_name.to_lowercase(),
        original_name: original_name.to_string(),
        uuid: format!("page-uuid-{id}"),
        journal_day: None,
        is_journal: false,
    }
}

pub(crate) fn block(uuid: &str, content: &str) -> Block {
    Block {
        id: 0,
        uuid: uuid.to_string(),
        content: content.to_string(),
        children: Vec::new(),
        page: None,
    }
}

pub(crate) fn block_with_page(uuid: &str, content: &str, page_id: i64) -> Block {
    Block {
        page: Some(PageHandle { id: page_id }),
        ..block(uuid, content)
    }
}
