//! Falling-questions arithmetic game.
//!
//! Questions spawn on a fixed cadence and expire after a random lifetime.
//! The oldest live question is the target for the answer field; typing its
//! answer scores a point, Enter passes on it.

pub mod evaluator;
pub mod lifecycle;
pub mod question;
pub mod session;
pub mod types;

pub use evaluator::{matches_answer, parse_answer, AnswerField};
pub use lifecycle::QuestionLifecycle;
pub use question::{generate, generate_problem, Operator, Problem};
pub use session::MathSession;
pub use types::{MathTimer, Question, QuestionId, Retirement};
