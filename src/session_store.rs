//! Per-chat game sessions.

use derive_more::{Display, Error, From};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tictactoe_core::{
    Board, CoordinateError, EngineError, Marks, MoveSelector, Outcome, Phase, Position,
    RandomSelector, Session,
};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a chat (one game per chat).
pub type SessionId = String;

/// Error from a session store operation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// No session for this chat; it needs `/start` first.
    #[display("No game in progress for {}", _0)]
    UnknownSession(#[error(not(source))] SessionId),

    /// Row or column off the board.
    #[display("{}", _0)]
    #[from]
    Coordinate(CoordinateError),

    /// The engine rejected the move.
    #[display("{}", _0)]
    #[from]
    Engine(EngineError),

    /// Another thread panicked while holding the store lock.
    #[display("Session store lock poisoned")]
    Poisoned,
}

#[derive(Debug)]
struct Inner<S> {
    sessions: HashMap<SessionId, Session>,
    selector: S,
}

/// Manages all game sessions.
///
/// One lock guards every session and the shared selector, so at most one
/// move runs against any session at a time. Clones share the same store.
#[derive(Debug)]
pub struct SessionManager<S = RandomSelector> {
    inner: Arc<Mutex<Inner<S>>>,
    marks: Marks,
}

impl<S> Clone for SessionManager<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            marks: self.marks,
        }
    }
}

impl SessionManager<RandomSelector> {
    /// Creates a store with an unseeded random opponent, human on X.
    pub fn random() -> Self {
        Self::new(Marks::default(), RandomSelector::new())
    }
}

impl Default for SessionManager<RandomSelector> {
    fn default() -> Self {
        Self::random()
    }
}

impl<S: MoveSelector> SessionManager<S> {
    /// Creates an empty store.
    #[instrument(skip(selector))]
    pub fn new(marks: Marks, selector: S) -> Self {
        info!("Creating session manager");
        Self {
            inner: Arc::new(Mutex::new(Inner {
                sessions: HashMap::new(),
                selector,
            })),
            marks,
        }
    }

    /// Marks used in every session of this store.
    pub fn marks(&self) -> Marks {
        self.marks
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner<S>>, SessionError> {
        self.inner.lock().map_err(|_| {
            warn!("Session store lock poisoned");
            SessionError::Poisoned
        })
    }

    /// Starts a fresh game for `id`, replacing any game already there.
    #[instrument(skip(self))]
    pub fn start(&self, id: &str) -> Result<Board, SessionError> {
        let mut inner = self.lock()?;
        let session = inner.sessions.entry(id.to_string()).or_default();
        let board = session.reset().clone();
        info!(session_id = id, "Started game");
        Ok(board)
    }

    /// Plays the human's move at (`row`, `col`) and the computer's reply.
    ///
    /// Returns the outcome and the board after the move.
    #[instrument(skip(self))]
    pub fn play(
        &self,
        id: &str,
        row: usize,
        col: usize,
    ) -> Result<(Outcome, Board), SessionError> {
        let position = Position::from_coords(row, col)?;
        let marks = self.marks;

        let mut guard = self.lock()?;
        let Inner { sessions, selector } = &mut *guard;
        let session = sessions.get_mut(id).ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            SessionError::UnknownSession(id.to_string())
        })?;

        let outcome = session.attempt_move(position, marks, selector)?;
        info!(session_id = id, %position, %outcome, phase = ?session.phase(), "Move completed");
        Ok((outcome, session.board().clone()))
    }

    /// Ends the game for `id` and forgets it.
    #[instrument(skip(self))]
    pub fn stop(&self, id: &str) -> Result<Session, SessionError> {
        let mut inner = self.lock()?;
        let session = inner
            .sessions
            .remove(id)
            .ok_or_else(|| SessionError::UnknownSession(id.to_string()))?;
        info!(session_id = id, "Stopped game");
        Ok(session)
    }

    /// Snapshot of the session for `id`.
    #[instrument(skip(self))]
    pub fn session(&self, id: &str) -> Result<Session, SessionError> {
        let inner = self.lock()?;
        inner
            .sessions
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownSession(id.to_string()))
    }

    /// Phase of the session for `id`.
    pub fn phase(&self, id: &str) -> Result<Phase, SessionError> {
        self.session(id).map(|s| s.phase())
    }

    /// Lists all active session IDs.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Result<Vec<SessionId>, SessionError> {
        let inner = self.lock()?;
        let ids: Vec<_> = inner.sessions.keys().cloned().collect();
        debug!(count = ids.len(), "Listed sessions");
        Ok(ids)
    }
}
