//! Domain Layer
//!
//! Session, directory, conversation and transcript state, plus the
//! boundary traits implemented by the infrastructure layer.

pub mod api;
pub mod conversation;
pub mod directory;
pub mod session;
pub mod transcript;
pub mod transport;

pub use api::{AuthPayload, BackendApi, EnvConfig, HistoryEntry};
pub use conversation::{Conversation, ConversationState};
pub use directory::{Directory, DirectoryEntry};
pub use session::Session;
pub use transcript::Transcript;
pub use transport::{ChatConnection, ChatSocket, ChatTransport};
