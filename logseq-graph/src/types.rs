//! Wire models for the graph API and the page-to-URI naming rule.

use crate::client::GraphError;
use lsp_types::Url;
use serde::Deserialize;
use std::path::PathBuf;

/// The graph Logseq currently has open: its display name and the root
/// directory of its note files.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentGraph {
    pub name: String,
    pub path: String,
}

/// A note file in the graph, as returned by `getPage`. Journal pages are
/// named by calendar date (`journal_day`, `YYYYMMDD`) rather than by title.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Page {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "originalName", default)]
    pub original_name: String,
    #[serde(default)]
    pub uuid: String,
    #[serde(rename = "journalDay", default)]
    pub journal_day: Option<u32>,
    #[serde(rename = "journal?", default)]
    pub is_journal: bool,
}

/// Reference to a block's owning page; only the numeric id comes over the
/// wire, the full page needs a second `getPage` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PageHandle {
    pub id: i64,
}

/// An outline node within a page. `children` is only populated when the
/// block was fetched with `includeChildren`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Block {
    pub id: i64,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub children: Vec<Block>,
    #[serde(default)]
    pub page: Option<PageHandle>,
}

/// Where note files live under the graph root. The sub-paths are
/// configurable; Logseq's defaults are `pages` and `journals`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphLayout {
    pub root: PathBuf,
    pub pages_path: String,
    pub journals_path: String,
}

impl GraphLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pages_path: "pages".into(),
            journals_path: "journals".into(),
        }
    }
}

impl Page {
    /// Map this page to the `file://` URI of its note file.
    ///
    /// Journal pages format the day number into `YYYY_MM_DD.md` inside the
    /// journals sub-path; other pages use the original name with `/`
    /// replaced by `___` (so a namespaced name cannot escape into the
    /// directory tree) plus `.md` inside the pages sub-path.
    pub fn to_uri(&self, layout: &GraphLayout) -> Result<Url, GraphError> {
        let (sub_path, file_name) = if self.is_journal {
            let day = self
                .journal_day
                .ok_or_else(|| GraphError::MissingJournalDay(self.original_name.clone()))?;
            let digits = format!("{day:08}");
            let file = format!(
                "{}_{}_{}.md",
                &digits[..4],
                &digits[4..6],
                &digits[6..]
            );
            (layout.journals_path.as_str(), file)
        } else {
            let sanitized = self.original_name.replace('/', "___");
            (layout.pages_path.as_str(), format!("{sanitized}.md"))
        };
        let path = layout.root.join(sub_path).join(file_name);
        Url::from_file_path(&path)
            .map_err(|_| GraphError::InvalidPath(path.display().to_string()))
    }
}
