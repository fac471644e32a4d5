pub mod config;
pub mod errors;
pub mod models;
pub mod service;
pub mod transport;
pub mod ui;

pub use config::Config;
pub use errors::AppError;
pub use models::{ChatReply, ConversationState, Message, MessageRole};
pub use service::conversation_store::ConversationStore;
pub use transport::{ChatTransport, HttpChatTransport};
