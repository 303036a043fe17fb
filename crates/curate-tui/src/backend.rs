//! Backend task: performs the remote API calls for the UI.
//!
//! One command per user action; the UI's loading states guarantee no two
//! identical requests overlap, so commands can be handled independently.

use tokio::sync::mpsc;

use curate_api::ApiClient;

use crate::tui_event::{BackendCommand, BackendEvent};

/// Listen for commands and spawn one task per command so the listener
/// stays responsive.
pub async fn run(
    api: ApiClient,
    mut cmd_rx: mpsc::UnboundedReceiver<BackendCommand>,
    event_tx: mpsc::UnboundedSender<BackendEvent>,
) {
    while let Some(cmd) = cmd_rx.recv().await {
        let api = api.clone();
        let tx = event_tx.clone();
        tokio::spawn(async move {
            handle_command(&api, cmd, &tx).await;
        });
    }
}

async fn handle_command(
    api: &ApiClient,
    cmd: BackendCommand,
    tx: &mpsc::UnboundedSender<BackendEvent>,
) {
    match cmd {
        BackendCommand::SubmitResearcher { ctx } => {
            if let Err(e) = api
                .register_researcher(&ctx.author_name, &ctx.subject_area)
                .await
            {
                tracing::warn!(error = %e, "researcher registration failed");
                let _ = tx.send(BackendEvent::SubmitFailed {
                    error: e.to_string(),
                });
                return;
            }

            match api.author_papers(&ctx.author_name).await {
                Ok(papers) => {
                    tracing::info!(count = papers.len(), "author papers loaded");
                    let _ = tx.send(BackendEvent::AuthorPapersLoaded { ctx, papers });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "author paper fetch failed");
                    let _ = tx.send(BackendEvent::AuthorPapersFailed {
                        ctx,
                        error: e.to_string(),
                    });
                }
            }
        }
        BackendCommand::FetchSimilarPapers { ctx, selected_ids } => {
            match api
                .similar_papers(&ctx.author_name, &ctx.subject_area, &selected_ids)
                .await
            {
                Ok(resp) => {
                    tracing::info!(
                        papers = resp.papers.len(),
                        keywords = resp.keywords.len(),
                        "curated feed loaded"
                    );
                    let _ = tx.send(BackendEvent::SimilarPapersLoaded {
                        ctx,
                        papers: resp.papers,
                        keywords: resp.keywords,
                    });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "curated feed fetch failed");
                    let _ = tx.send(BackendEvent::SimilarPapersFailed {
                        error: e.to_string(),
                    });
                }
            }
        }
    }
}
