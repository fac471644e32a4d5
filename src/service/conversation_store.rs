use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::{ConversationState, Message};
use crate::transport::ChatTransport;

/// Assistant text shown when the chat service could not be reached.
pub fn transport_failure_message(err: &AppError) -> String {
    format!("Sorry, something went wrong: {err}")
}

/// In-memory conversation: an append-only message log plus the pending flag.
///
/// All mutation goes through [`ConversationStore::submit`]. Observers follow
/// changes through [`ConversationStore::subscribe`], which yields a fresh
/// [`ConversationState`] after every append and every pending transition.
pub struct ConversationStore<T> {
    transport: T,
    state: watch::Sender<ConversationState>,
}

impl<T: ChatTransport> ConversationStore<T> {
    pub fn new(transport: T) -> Self {
        let (state, _) = watch::channel(ConversationState::default());
        Self { transport, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<ConversationState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ConversationState {
        self.state.borrow().clone()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.state.borrow().messages.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.state.borrow().pending
    }

    /// Sends `text` to the chat service and records both sides of the turn.
    ///
    /// Returns the assistant message that was appended. Transport failures
    /// and application-level errors both end up as that assistant message;
    /// only rejected submissions (empty text, another request in flight)
    /// come back as `Err`, and those leave the log untouched.
    pub async fn submit(&self, text: &str) -> Result<Message, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::EmptyField { field_name: "message".to_string() });
        }

        let _pending = PendingGuard::acquire(&self.state)?;

        let user_message = Message::user(text);
        debug!("Appending user message {}", user_message.id);
        self.append(user_message);

        let content = match self.transport.send(text).await {
            Ok(reply) => reply.into_content(),
            Err(e) => {
                warn!("Chat transport failed: {e}");
                transport_failure_message(&e)
            }
        };

        let assistant_message = Message::assistant(content);
        info!("Appending assistant message {}", assistant_message.id);
        self.append(assistant_message.clone());
        Ok(assistant_message)
    }

    fn append(&self, message: Message) {
        self.state.send_modify(|state| state.messages.push(message));
    }
}

/// Holds the pending flag for the lifetime of one submission and clears it on
/// drop, so an early return or a cancelled future still goes back to idle.
struct PendingGuard<'a> {
    state: &'a watch::Sender<ConversationState>,
}

impl<'a> PendingGuard<'a> {
    fn acquire(state: &'a watch::Sender<ConversationState>) -> Result<Self, AppError> {
        let mut acquired = false;
        state.send_if_modified(|s| {
            if s.pending {
                return false;
            }
            s.pending = true;
            acquired = true;
            true
        });
        if acquired {
            Ok(Self { state })
        } else {
            Err(AppError::SubmissionInFlight)
        }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_modify(|s| s.pending = false);
    }
}
