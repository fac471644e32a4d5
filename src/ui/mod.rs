pub mod input;
pub mod renderer;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use crate::service::conversation_store::ConversationStore;
use crate::transport::ChatTransport;
use input::{parse_line, Command, HELP_TEXT};
use renderer::TranscriptRenderer;

/// Runs an interactive chat session until `/quit` or end of input.
///
/// Input is only read while the store is idle, so at most one request is in
/// flight at a time. While a request is pending the renderer follows the
/// store's change notifications.
pub async fn run_session<T, R, W>(
    store: &ConversationStore<T>,
    input: R,
    renderer: &mut TranscriptRenderer<W>,
) -> anyhow::Result<()>
where
    T: ChatTransport,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut rx = store.subscribe();

    renderer.banner()?;
    loop {
        renderer.prompt()?;
        let Some(line) = lines.next_line().await? else {
            debug!("Input closed");
            break;
        };

        let text = match parse_line(&line) {
            None => continue,
            Some(Command::Quit) => break,
            Some(Command::Help) => {
                renderer.notice(HELP_TEXT)?;
                continue;
            }
            Some(Command::History) => {
                renderer.render_history(&store.messages())?;
                continue;
            }
            Some(Command::Send(text)) => text,
        };

        let submission = store.submit(&text);
        tokio::pin!(submission);
        let outcome = loop {
            tokio::select! {
                outcome = &mut submission => break outcome,
                changed = rx.changed() => {
                    if changed.is_err() {
                        // Store dropped; just wait for the submission to settle.
                        break submission.as_mut().await;
                    }
                    let state = rx.borrow_and_update().clone();
                    renderer.render_state(&state)?;
                }
            }
        };
        let state = rx.borrow_and_update().clone();
        renderer.render_state(&state)?;

        if let Err(e) = outcome {
            warn!("Message not sent: {e}");
            renderer.notice(&format!("Message not sent: {e}"))?;
        }
    }

    info!("Session ended with {} messages", store.messages().len());
    Ok(())
}
