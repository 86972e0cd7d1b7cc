//! SendDialogueMessage command handler.
//!
//! Drives the profile-building dialogue one inbound message at a time:
//! interprets the answer to the previous question, asks the next one and,
//! after the last answer, merges everything into the player's profile.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::timeout;

use crate::domain::dialogue::{
    DialogueSession, DialogueState, ProfileDraft, QuestionScript, ScriptContext,
    DEFAULT_PLAYER_NAME,
};
use crate::domain::foundation::{DomainError, Timestamp, UserId, ValidationError};
use crate::domain::profile::{FieldValue, PlayerProfile, ProfileField};
use crate::ports::{
    AccountReader, DialogueSessionStore, Extraction, ProfileRepository, PromptRequest,
    TextInterpreter,
};

/// Longest interpreted answer kept, in characters.
pub const DEFAULT_MAX_EXTRACTED_LEN: usize = 100;

/// Default time allowed for one interpreter call.
pub const DEFAULT_INTERPRETER_TIMEOUT: Duration = Duration::from_secs(10);

/// Command carrying one inbound chat message.
#[derive(Debug, Clone)]
pub struct SendDialogueMessageCommand {
    pub user_id: UserId,
    /// Raw message text; may be empty on the opening call.
    pub message: String,
}

impl SendDialogueMessageCommand {
    pub fn new(user_id: UserId, message: impl Into<String>) -> Self {
        Self {
            user_id,
            message: message.into(),
        }
    }
}

/// What the bot answers.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogueStep {
    /// Next question. `question_index` is the session index after asking it.
    Prompt { text: String, question_index: usize },
    /// Profile saved; the dialogue is over.
    Completed {
        text: String,
        profile: PlayerProfile,
    },
}

impl DialogueStep {
    pub fn text(&self) -> &str {
        match self {
            DialogueStep::Prompt { text, .. } | DialogueStep::Completed { text, .. } => text,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, DialogueStep::Completed { .. })
    }
}

/// Errors that can occur while handling a dialogue message.
#[derive(Debug, Clone, Error)]
pub enum DialogueError {
    /// Loading or saving the session failed.
    #[error("Session store error: {0}")]
    SessionStore(String),

    /// The finished profile could not be saved. The session is kept.
    #[error("Failed to save profile: {0}")]
    ProfileCommit(String),

    #[error("Invalid dialogue state: {0}")]
    InvalidState(String),

    #[error("Domain error: {0}")]
    Domain(String),
}

impl From<DomainError> for DialogueError {
    fn from(err: DomainError) -> Self {
        DialogueError::Domain(err.to_string())
    }
}

impl From<ValidationError> for DialogueError {
    fn from(err: ValidationError) -> Self {
        DialogueError::InvalidState(err.to_string())
    }
}

/// Tunables for the dialogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogueSettings {
    pub interpreter_timeout: Duration,
    pub max_extracted_len: usize,
}

impl Default for DialogueSettings {
    fn default() -> Self {
        Self {
            interpreter_timeout: DEFAULT_INTERPRETER_TIMEOUT,
            max_extracted_len: DEFAULT_MAX_EXTRACTED_LEN,
        }
    }
}

/// Handler for the profile dialogue.
///
/// Messages from the same player are handled one at a time; different
/// players proceed in parallel.
pub struct ProfileDialogueHandler {
    sessions: Arc<dyn DialogueSessionStore>,
    profiles: Arc<dyn ProfileRepository>,
    accounts: Arc<dyn AccountReader>,
    interpreter: Option<Arc<dyn TextInterpreter>>,
    script: QuestionScript,
    settings: DialogueSettings,
    user_locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl ProfileDialogueHandler {
    pub fn new(
        sessions: Arc<dyn DialogueSessionStore>,
        profiles: Arc<dyn ProfileRepository>,
        accounts: Arc<dyn AccountReader>,
        interpreter: Option<Arc<dyn TextInterpreter>>,
    ) -> Self {
        Self {
            sessions,
            profiles,
            accounts,
            interpreter,
            script: QuestionScript,
            settings: DialogueSettings::default(),
            user_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_settings(mut self, settings: DialogueSettings) -> Self {
        self.settings = settings;
        self
    }

    pub async fn handle(&self, cmd: SendDialogueMessageCommand) -> Result<DialogueStep, DialogueError> {
        let user_id = cmd.user_id.clone();
        let lock = self.user_lock(&user_id).await;

        let result = {
            let _guard = lock.lock().await;
            self.step(cmd).await
        };

        if matches!(result, Ok(DialogueStep::Completed { .. })) {
            self.release_lock(&user_id, &lock).await;
        }
        result
    }

    /// Drops expired sessions from the store, along with idle per-user locks.
    pub async fn purge_expired_sessions(&self) -> Result<usize, DialogueError> {
        let purged = self
            .sessions
            .purge_expired()
            .await
            .map_err(|e| DialogueError::SessionStore(e.to_string()))?;

        // A lock only the map references has no holder and no waiter.
        let mut locks = self.user_locks.lock().await;
        let before = locks.len();
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        tracing::debug!(purged, released_locks = before - locks.len(), "Purged dialogue state");

        Ok(purged)
    }

    async fn step(&self, cmd: SendDialogueMessageCommand) -> Result<DialogueStep, DialogueError> {
        let mut session = self
            .sessions
            .load(&cmd.user_id)
            .await
            .map_err(|e| DialogueError::SessionStore(e.to_string()))?
            .unwrap_or_else(|| DialogueSession::new(cmd.user_id.clone(), Timestamp::now()));

        let message = cmd.message.trim();
        let state = session.state();

        tracing::debug!(
            user_id = %cmd.user_id,
            state = ?state,
            message_len = message.len(),
            "Handling dialogue message"
        );

        match state {
            DialogueState::AwaitingField(_) => self.ask_next(session, state, message).await,
            DialogueState::Completed => self.finish(&mut session, message).await,
        }
    }

    async fn ask_next(
        &self,
        mut session: DialogueSession,
        state: DialogueState,
        message: &str,
    ) -> Result<DialogueStep, DialogueError> {
        if let Some(answered) = state.field_being_answered() {
            let value = self.interpret(&session.user_id, message, answered).await;
            session.record_answer(answered, value, Timestamp::now());
        }
        session.remember_response(message);

        let field = state
            .field_to_ask()
            .ok_or_else(|| DialogueError::InvalidState(format!("{:?} asks nothing", state)))?;
        let text = self.compose_prompt(&session, field, state.is_opening()).await;

        let next = session.advance(Timestamp::now())?;
        self.save_session(&session).await?;

        Ok(DialogueStep::Prompt {
            text,
            question_index: next.index(),
        })
    }

    async fn finish(
        &self,
        session: &mut DialogueSession,
        message: &str,
    ) -> Result<DialogueStep, DialogueError> {
        let last = ProfileField::last();

        // An empty message on re-entry keeps the answer already collected.
        if !message.is_empty() || session.collected_value(last).is_none() {
            let value = self.interpret(&session.user_id, message, last).await;
            session.record_answer(last, value, Timestamp::now());
        }
        session.remember_response(message);
        self.save_session(session).await?;

        let existing = self.profiles.find_by_user(&session.user_id).await?;
        let profile = ProfileDraft::from_session(session).merge_into(existing);

        if let Err(err) = self.profiles.upsert(&profile).await {
            tracing::warn!(user_id = %session.user_id, error = %err, "Profile commit failed");
            return Err(DialogueError::ProfileCommit(err.to_string()));
        }

        self.sessions
            .delete(&session.user_id)
            .await
            .map_err(|e| DialogueError::SessionStore(e.to_string()))?;

        let name = self.closing_name(session).await;
        tracing::info!(user_id = %session.user_id, "Profile dialogue completed");

        Ok(DialogueStep::Completed {
            text: self.script.closing(&name),
            profile,
        })
    }

    /// Reads the answer for `field`, falling back to the raw text when the
    /// interpreter is missing, fails or is too slow.
    async fn interpret(&self, user_id: &UserId, message: &str, field: ProfileField) -> FieldValue {
        if message.is_empty() {
            return FieldValue::Unspecified;
        }

        let text = match &self.interpreter {
            None => message.to_string(),
            Some(interpreter) => {
                match timeout(self.settings.interpreter_timeout, interpreter.extract(message, field))
                    .await
                {
                    Ok(Ok(Extraction::Value(value))) => value,
                    Ok(Ok(Extraction::Unspecified)) => return FieldValue::Unspecified,
                    Ok(Err(err)) => {
                        tracing::warn!(%user_id, field = %field, error = %err, "Extraction failed, keeping raw text");
                        message.to_string()
                    }
                    Err(_) => {
                        tracing::warn!(%user_id, field = %field, "Extraction timed out, keeping raw text");
                        message.to_string()
                    }
                }
            }
        };

        if text.chars().count() > self.settings.max_extracted_len {
            return FieldValue::Unspecified;
        }
        FieldValue::new(text)
    }

    async fn compose_prompt(
        &self,
        session: &DialogueSession,
        field: ProfileField,
        is_first: bool,
    ) -> String {
        let context = ScriptContext {
            display_name: session.stated(ProfileField::DisplayName).map(String::from),
            primary_game: session.stated(ProfileField::PrimaryGame).map(String::from),
        };
        let scripted = self.script.question(field, &context);

        let question = match &self.interpreter {
            None => scripted,
            Some(interpreter) => {
                let request = PromptRequest {
                    field,
                    suggestion: scripted.clone(),
                    display_name: context.display_name.clone(),
                    primary_game: context.primary_game.clone(),
                    previous_answer: if is_first {
                        None
                    } else {
                        session.last_user_response().map(String::from)
                    },
                    is_first,
                };
                match timeout(
                    self.settings.interpreter_timeout,
                    interpreter.generate_prompt(&request),
                )
                .await
                {
                    Ok(Ok(question)) if !question.trim().is_empty() => question,
                    Ok(Ok(_)) => scripted,
                    Ok(Err(err)) => {
                        tracing::warn!(user_id = %session.user_id, field = %field, error = %err, "Prompt generation failed, using script");
                        scripted
                    }
                    Err(_) => {
                        tracing::warn!(user_id = %session.user_id, field = %field, "Prompt generation timed out, using script");
                        scripted
                    }
                }
            }
        };

        if is_first {
            self.script.with_greeting(&question)
        } else {
            question
        }
    }

    async fn closing_name(&self, session: &DialogueSession) -> String {
        if let Some(name) = session.stated(ProfileField::DisplayName) {
            return name.to_string();
        }

        match self.accounts.username(&session.user_id).await {
            Ok(Some(username)) if !username.trim().is_empty() => username,
            Ok(_) => DEFAULT_PLAYER_NAME.to_string(),
            Err(err) => {
                tracing::warn!(user_id = %session.user_id, error = %err, "Account lookup failed");
                DEFAULT_PLAYER_NAME.to_string()
            }
        }
    }

    async fn save_session(&self, session: &DialogueSession) -> Result<(), DialogueError> {
        self.sessions
            .save(session)
            .await
            .map_err(|e| DialogueError::SessionStore(e.to_string()))
    }

    async fn user_lock(&self, user_id: &UserId) -> Arc<Mutex<()>> {
        let mut locks = self.user_locks.lock().await;
        locks.entry(user_id.clone()).or_default().clone()
    }

    /// Forgets the user's lock unless another message is queued on it.
    async fn release_lock(&self, user_id: &UserId, lock: &Arc<Mutex<()>>) {
        let mut locks = self.user_locks.lock().await;
        let idle = locks
            .get(user_id)
            .map_or(false, |held| Arc::ptr_eq(held, lock) && Arc::strong_count(lock) == 2);
        if idle {
            locks.remove(user_id);
        }
    }
}
