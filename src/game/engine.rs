//! Main game interface
//!
//! A `Game` starts with no session and moves to an active session on
//! `start_session`. Starting again replaces the root word and clears the history.

use super::{Session, SessionError, WordValidator};
use crate::core::Verdict;
use crate::dictionary::Dictionary;
use rand::Rng;

/// Coordinates sessions over a fixed validator and start-word list
pub struct Game<D: Dictionary, R: Rng> {
    validator: WordValidator<D>,
    start_words: Vec<String>,
    rng: R,
    session: Option<Session>,
    sessions_started: usize,
}

impl<D: Dictionary, R: Rng> Game<D, R> {
    /// Create a game with no active session
    ///
    /// # Parameters
    /// - `validator`: Rules applied to every candidate
    /// - `start_words`: Pool of root words (may be empty)
    /// - `rng`: Random source for root word selection
    pub const fn new(validator: WordValidator<D>, start_words: Vec<String>, rng: R) -> Self {
        Self {
            validator,
            start_words,
            rng,
            session: None,
            sessions_started: 0,
        }
    }

    /// Start a fresh session, replacing any current one
    pub fn start_session(&mut self) -> &Session {
        self.sessions_started += 1;
        self.session
            .insert(Session::start(&self.start_words, &mut self.rng))
    }

    /// Submit a candidate to the active session
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NoActiveSession` if `start_session` was never called.
    pub fn submit(&mut self, candidate: &str) -> Result<Verdict, SessionError> {
        let session = self
            .session
            .as_mut()
            .ok_or(SessionError::NoActiveSession)?;
        Ok(session.submit(&self.validator, candidate))
    }

    /// The active session, if any
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// How many sessions have been started so far
    pub const fn sessions_started(&self) -> usize {
        self.sessions_started
    }
}
