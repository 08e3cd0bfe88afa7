//! Game rules and session state
//!
//! `WordValidator` holds the rules, `Session` the state of one play-through and `Game`
//! the transition between sessions.

mod engine;
mod session;
mod validator;

pub use engine::Game;
pub use session::{Session, SessionError, StartWords, choose_root_word, load_start_words};
pub use validator::WordValidator;
