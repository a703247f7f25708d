//! klotski-engine - sliding-block rules and game session.
//!
//! Provides collision detection, move validation, legal destination listing
//! and the session state machine that commits validated moves.

pub mod collision;
pub mod config;
pub mod movegen;
pub mod session;
pub mod validate;

pub use collision::{blocker, can_place, is_blocked};
pub use config::{ConfigError, PieceDef, PuzzleConfig};
pub use movegen::{generate_all_slides, generate_slides, legal_destinations};
pub use session::{Events, GameSession, SessionEvent, SessionState};
pub use validate::{validate, RejectReason};
