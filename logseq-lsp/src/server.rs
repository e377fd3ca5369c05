//! Main language server implementation.
//!
//! The server is a thin shell: every request reads its document fresh from
//! disk, scans it, and delegates to the feature layer. Errors are logged
//! and surfaced as JSON-RPC internal errors; "nothing here" outcomes stay
//! `Ok(None)` and never terminate the session.

use crate::context::GraphContext;
use crate::features::definition::definition as compute_definition;
use crate::features::document_links::document_links as compute_document_links;
use crate::features::highlight::highlight as compute_highlight;
use crate::features::hover::hover as compute_hover;
use crate::features::resolve::CapabilityError;
use crate::files;
use logseq_document::{Document, Position as DocPosition, Range as DocRange};
use logseq_graph::{GraphQuery, HttpClient};
use tower_lsp::async_trait;
use tower_lsp::jsonrpc::{self, Result};
use tower_lsp::lsp_types::{
    DidChangeTextDocumentParams, DidCloseTextDocumentParams,
    DidOpenTextDocumentParams, DidSaveTextDocumentParams, DocumentHighlight,
    DocumentHighlightKind, DocumentHighlightParams, DocumentLink, DocumentLinkOptions,
    DocumentLinkParams, GotoDefinitionParams, GotoDefinitionResponse, Hover, HoverContents,
    HoverParams, HoverProviderCapability, InitializeParams, InitializeResult, InitializedParams,
    Location, MarkupContent, MarkupKind, OneOf, Position, Range, SaveOptions, ServerCapabilities,
    ServerInfo, TextDocumentSyncCapability, TextDocumentSyncOptions, TextDocumentSyncSaveOptions,
    Url, WillSaveTextDocumentParams,
};
use tower_lsp::Client;
use tracing::{error, info};

pub trait LspClient: Send + Sync + 'static {}
impl LspClient for Client {}

pub struct LogseqLanguageServer<C = Client, G = HttpClient> {
    _client: C,
    context: GraphContext<G>,
}

impl<C, G> LogseqLanguageServer<C, G>
where
    C: LspClient,
    G: GraphQuery + 'static,
{
    pub fn new(client: C, context: GraphContext<G>) -> Self {
        Self {
            _client: client,
            context,
        }
    }

    /// Read and scan the document behind `uri`. No cache: concurrent
    /// requests against the same file perform independent reads.
    async fn open_document(&self, uri: &Url) -> Result<Document> {
        let text = files::read_uri(uri)
            .await
            .map_err(|err| internal_error("read document", &err))?;
        Ok(Document::new(text))
    }
}

fn internal_error(what: &str, err: &dyn std::fmt::Display) -> jsonrpc::Error {
    error!("{what}: {err}");
    let mut rpc = jsonrpc::Error::internal_error();
    rpc.message = format!("{what}: {err}").into();
    rpc
}

fn capability_error(what: &str, err: &CapabilityError) -> jsonrpc::Error {
    internal_error(what, err)
}

fn to_lsp_position(position: DocPosition) -> Position {
    Position::new(position.line, position.character)
}

fn to_lsp_range(range: DocRange) -> Range {
    Range {
        start: to_lsp_position(range.start),
        end: to_lsp_position(range.end),
    }
}

fn from_lsp_position(position: Position) -> DocPosition {
    DocPosition::new(position.line, position.character)
}

#[async_trait]
impl<C, G> tower_lsp::LanguageServer for LogseqLanguageServer<C, G>
where
    C: LspClient,
    G: GraphQuery + 'static,
{
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        let capabilities = ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Options(
                TextDocumentSyncOptions {
                    open_close: Some(true),
                    will_save: Some(true),
                    save: Some(TextDocumentSyncSaveOptions::SaveOptions(SaveOptions {
                        include_text: Some(true),
                    })),
                    ..TextDocumentSyncOptions::default()
                },
            )),
            hover_provider: Some(HoverProviderCapability::Simple(true)),
            definition_provider: Some(OneOf::Left(true)),
            document_highlight_provider: Some(OneOf::Left(true)),
            document_link_provider: Some(DocumentLinkOptions {
                resolve_provider: Some(false),
                work_done_progress_options: Default::default(),
            }),
            ..ServerCapabilities::default()
        };

        Ok(InitializeResult {
            capabilities,
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!("client initialized");
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    // Synced text is acknowledged and logged, never stored; the next query
    // re-reads the file from disk.

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        info!(uri = %params.text_document.uri, "textDocument/didOpen");
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        info!(uri = %params.text_document.uri, "textDocument/didChange");
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        info!(uri = %params.text_document.uri, "textDocument/didClose");
    }

    async fn will_save(&self, params: WillSaveTextDocumentParams) {
        info!(uri = %params.text_document.uri, "textDocument/willSave");
    }

    async fn did_save(&self, params: DidSaveTextDocumentParams) {
        info!(uri = %params.text_document.uri, "textDocument/didSave");
    }

    async fn hover(&self, params: HoverParams) -> Result<Option<Hover>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = from_lsp_position(params.text_document_position_params.position);
        let doc = self.open_document(&uri).await?;

        match compute_hover(&self.context, &doc, position).await {
            Ok(Some(result)) => Ok(Some(Hover {
                contents: HoverContents::Markup(MarkupContent {
                    kind: MarkupKind::Markdown,
                    value: result.contents,
                }),
                range: Some(to_lsp_range(result.range)),
            })),
            Ok(None) => Ok(None),
            Err(err) => Err(capability_error("hover", &err)),
        }
    }

    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = from_lsp_position(params.text_document_position_params.position);
        let doc = self.open_document(&uri).await?;

        match compute_definition(&self.context, &doc, position).await {
            Ok(Some(target)) => Ok(Some(GotoDefinitionResponse::Scalar(Location {
                uri: target,
                // The reference's range inside the destination file is not
                // computed; point at the top.
                range: Range::default(),
            }))),
            Ok(None) => Ok(None),
            Err(err) => Err(capability_error("definition", &err)),
        }
    }

    async fn document_highlight(
        &self,
        params: DocumentHighlightParams,
    ) -> Result<Option<Vec<DocumentHighlight>>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = from_lsp_position(params.text_document_position_params.position);
        let doc = self.open_document(&uri).await?;

        Ok(compute_highlight(&doc, position).map(|ranges| {
            ranges
                .into_iter()
                .map(|range| DocumentHighlight {
                    range: to_lsp_range(range),
                    kind: Some(DocumentHighlightKind::TEXT),
                })
                .collect()
        }))
    }

    async fn document_link(&self, params: DocumentLinkParams) -> Result<Option<Vec<DocumentLink>>> {
        let uri = params.text_document.uri;
        let doc = self.open_document(&uri).await?;

        match compute_document_links(&self.context, &doc).await {
            Ok(resolved) => Ok(Some(
                resolved
                    .into_iter()
                    .map(|link| DocumentLink {
                        range: to_lsp_range(link.range),
                        target: Some(link.target),
                        tooltip: None,
                        data: None,
                    })
                    .collect(),
            )),
            Err(err) => Err(capability_error("document links", &err)),
        }
    }
}
