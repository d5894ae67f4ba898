// Word validation and scoring engine

pub mod engine;
pub mod error;
pub mod round;
pub mod scorer;
pub mod validator;

pub use engine::{GameEngine, Notice, Submission};
pub use error::{EngineError, RejectionKind, SubmitError};
pub use round::Round;
pub use scorer::Scorer;
pub use validator::WordValidator;
