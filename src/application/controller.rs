//! Chat Session Controller
//!
//! The single owned object behind the whole client: session identity,
//! directory, the active conversation with its exclusively-held
//! connection handle, and the transcript. All lifecycle transitions are
//! guarded methods here; there is no free-floating connection state.
//!
//! Every fetch is tagged with the view generation it was issued for, and
//! its result is discarded if the generation changed while the request
//! was in flight.

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, warn};
use url::Url;
use validator::Validate;

use crate::application::dto::Credentials;
use crate::domain::api::{BackendApi, EnvConfig, HistoryEntry};
use crate::domain::conversation::{Conversation, ConversationState};
use crate::domain::directory::{Directory, DirectoryEntry};
use crate::domain::session::Session;
use crate::domain::transcript::Transcript;
use crate::domain::transport::{ChatConnection, ChatSocket, ChatTransport};
use crate::shared::error::ChatError;

/// Which credential endpoint to hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Register,
    Login,
}

/// Current view, mirroring the credential / directory / conversation
/// screens of the served page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Auth,
    Directory,
    Conversation,
}

/// Owned session/connection state for one client.
pub struct SessionController<B, T> {
    backend: B,
    transport: T,
    bot_link_base: String,
    session: Option<Session>,
    directory: Directory,
    conversation: Option<Conversation>,
    socket: Option<Box<dyn ChatSocket>>,
    transcript: Transcript,
    view: View,
    generation: u64,
}

impl<B, T> SessionController<B, T>
where
    B: BackendApi,
    T: ChatTransport,
{
    pub fn new(backend: B, transport: T, bot_link_base: impl Into<String>) -> Self {
        Self {
            backend,
            transport,
            bot_link_base: bot_link_base.into(),
            session: None,
            directory: Directory::default(),
            conversation: None,
            socket: None,
            transcript: Transcript::default(),
            view: View::Auth,
            generation: 0,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn directory(&self) -> &[DirectoryEntry] {
        self.directory.entries()
    }

    pub fn transcript(&self) -> &[String] {
        self.transcript.lines()
    }

    pub fn conversation_state(&self) -> ConversationState {
        self.conversation
            .as_ref()
            .map(Conversation::state)
            .unwrap_or(ConversationState::Idle)
    }

    /// Submit credentials to the backend. Empty input fails immediately
    /// with a validation error and issues no network call. On success the
    /// session is populated, the view switches to the directory, and a
    /// directory load is triggered; a failing directory load does not
    /// undo the authentication.
    pub async fn authenticate(
        &mut self,
        action: AuthAction,
        username: &str,
        password: &str,
    ) -> Result<(), ChatError> {
        let credentials = Credentials::new(username, password);
        credentials
            .validate()
            .map_err(|_| ChatError::Validation("username and password are both required".into()))?;

        let payload = match action {
            AuthAction::Register => {
                self.backend
                    .register(&credentials.username, &credentials.password)
                    .await
            }
            AuthAction::Login => {
                self.backend
                    .login(&credentials.username, &credentials.password)
                    .await
            }
        }
        .map_err(|e| match e {
            ChatError::Auth(_) => ChatError::Auth(
                match action {
                    AuthAction::Register => "registration failed",
                    AuthAction::Login => "login failed",
                }
                .into(),
            ),
            other => other,
        })?;

        self.session = Some(Session::new(payload.id, credentials.username, payload.token));
        self.view = View::Directory;

        if let Err(e) = self.load_directory().await {
            warn!(error = %e, "directory load after authentication failed");
        }

        Ok(())
    }

    /// Fetch the full user set and replace the rendered directory,
    /// excluding the caller. On failure the previously rendered set is
    /// left untouched.
    pub async fn load_directory(&mut self) -> Result<(), ChatError> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| ChatError::Auth("not authenticated".into()))?;
        let self_id = session.user_id;
        let token = session.token.clone();

        let issued = self.generation;
        let users = self.backend.list_users(token).await?;
        if issued != self.generation {
            debug!("directory fetch resolved after the view moved on");
            return Err(ChatError::Stale);
        }

        self.directory.replace(users, self_id);
        Ok(())
    }

    /// Start a conversation with a peer. Any prior handle is
    /// unconditionally closed before the new open is issued, the
    /// transcript is cleared, and the returned receiver yields inbound
    /// frames for the new connection.
    pub async fn start_conversation(
        &mut self,
        peer_id: i64,
    ) -> Result<UnboundedReceiver<String>, ChatError> {
        let sender_id = self
            .session
            .as_ref()
            .ok_or_else(|| ChatError::Auth("not authenticated".into()))?
            .user_id;

        self.close_handle().await;
        self.generation += 1;
        let issued = self.generation;

        self.conversation = Some(Conversation::connecting(peer_id));
        self.transcript.clear();
        self.view = View::Conversation;

        let connection = match self.transport.connect(sender_id, peer_id).await {
            Ok(connection) => connection,
            Err(e) => {
                if let Some(conversation) = self.conversation.as_mut() {
                    conversation.mark_closed();
                }
                return Err(e);
            }
        };

        if issued != self.generation {
            // The user moved on while the open was in flight.
            let ChatConnection { mut socket, .. } = connection;
            let _ = socket.close().await;
            return Err(ChatError::Stale);
        }

        let ChatConnection { socket, inbound } = connection;
        self.socket = Some(socket);
        if let Some(conversation) = self.conversation.as_mut() {
            // Transport readiness is its own open signal; there is no
            // application-level handshake.
            conversation.mark_open();
        }

        Ok(inbound)
    }

    /// Leave the conversation and return to the directory. The close
    /// request is issued without waiting for confirmation, and the
    /// transcript is discarded.
    pub async fn end_conversation(&mut self) {
        self.close_handle().await;
        self.conversation = None;
        self.transcript.clear();
        self.generation += 1;
        self.view = View::Directory;
    }

    /// Outbound send. A blank message or a conversation that is not
    /// strictly open makes this a silent no-op: nothing is transmitted
    /// and the transcript is untouched. The local echo is appended before
    /// the frame goes out; the backend never reflects the sender's own
    /// frame back over the same connection.
    pub async fn send(&mut self, text: &str) -> Result<(), ChatError> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.conversation_state() != ConversationState::Open {
            debug!("send dropped: blank input or conversation not open");
            return Ok(());
        }

        let username = match self.session.as_ref() {
            Some(session) => session.username.clone(),
            None => return Ok(()),
        };
        self.transcript.push_outgoing(&username, trimmed);

        if let Some(socket) = self.socket.as_mut() {
            if let Err(e) = socket.send_text(trimmed).await {
                warn!(error = %e, "send failed, marking conversation closed");
                if let Some(conversation) = self.conversation.as_mut() {
                    conversation.mark_closed();
                }
                self.socket = None;
                return Err(e);
            }
        }

        Ok(())
    }

    /// Append an inbound frame verbatim, in arrival order. Frames arriving
    /// outside an open conversation are dropped. Returns whether the frame
    /// was recorded.
    pub fn record_inbound(&mut self, frame: &str) -> bool {
        if self.conversation_state() != ConversationState::Open {
            debug!("inbound frame dropped: conversation not open");
            return false;
        }
        self.transcript.push_inbound(frame);
        true
    }

    /// The transport closed or errored out of band. The conversation is
    /// unusable until the user re-selects one; no reconnect is attempted.
    pub fn connection_lost(&mut self) {
        if let Some(conversation) = self.conversation.as_mut() {
            conversation.mark_closed();
        }
        self.socket = None;
    }

    /// Build the deep link to the external bot, scoped to the current
    /// user. A failed configuration fetch degrades to an empty bot
    /// identifier; the link is still produced.
    pub async fn build_bot_link(&self) -> Result<Url, ChatError> {
        let user_id = self
            .session
            .as_ref()
            .ok_or_else(|| ChatError::Auth("not authenticated".into()))?
            .user_id;

        let env = match self.backend.front_env().await {
            Ok(env) => env,
            Err(e) => {
                warn!(error = %e, "configuration fetch failed, proceeding without a bot identifier");
                EnvConfig::default()
            }
        };
        let bot = env.bot_username.unwrap_or_default();

        Url::parse(&format!("{}/{}?start={}", self.bot_link_base, bot, user_id))
            .map_err(|e| ChatError::Validation(format!("invalid bot link: {e}")))
    }

    /// Rendered chat history for a peer via the REST endpoint. The live
    /// socket replays history on connect, so this is not part of
    /// `start_conversation`.
    pub async fn fetch_history(&self, peer_id: i64) -> Result<Vec<String>, ChatError> {
        let sender_id = self
            .session
            .as_ref()
            .ok_or_else(|| ChatError::Auth("not authenticated".into()))?
            .user_id;

        let entries = self.backend.chat_history(sender_id, peer_id).await?;
        Ok(entries.iter().map(HistoryEntry::render).collect())
    }

    async fn close_handle(&mut self) {
        if let Some(mut socket) = self.socket.take() {
            if let Err(e) = socket.close().await {
                debug!(error = %e, "close request failed");
            }
        }
        if let Some(conversation) = self.conversation.as_mut() {
            conversation.mark_closed();
        }
    }
}
