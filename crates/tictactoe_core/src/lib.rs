//! Pure tic-tac-toe game logic: a human against a pluggable computer
//! opponent.
//!
//! # Architecture
//!
//! - **Board**: 3×3 grid of [`Square`]s addressed by [`Position`]
//! - **Rules**: win and draw detection over a board
//! - **Engine**: [`attempt_move`], one human move plus the computer's reply
//! - **Selector**: [`MoveSelector`] picks the computer's square
//! - **Session**: a board plus its [`Phase`]
//!
//! Nothing here performs I/O. Callers own their sessions and serialize
//! moves per session.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Marks, Outcome, Position, RandomSelector, Session};
//!
//! let mut session = Session::new();
//! let mut selector = RandomSelector::new();
//! let outcome = session
//!     .attempt_move(Position::Center, Marks::default(), &mut selector)
//!     .unwrap();
//! assert_eq!(outcome, Outcome::Ongoing);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod phases;
mod position;
mod selector;
mod session;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use engine::{attempt_move, attempt_move_at};
pub use error::EngineError;
pub use phases::{Outcome, Phase};
pub use position::{CoordinateError, Position};
pub use selector::{FirstFreeSelector, MoveSelector, RandomSelector, ScriptedSelector};
pub use session::Session;
pub use types::{Board, Mark, Marks, Square};
