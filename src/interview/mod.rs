pub mod engine;
pub mod followup;
pub mod scorer;
pub mod selector;
pub mod session;
pub mod stopping;
pub mod strategies;
pub mod types;
pub mod vocabulary;

pub use engine::{question_text, InterviewEngine};
pub use followup::FollowUpQuestion;
pub use scorer::WeightedRatioScorer;
pub use selector::CandidatePoolSelector;
pub use session::DiagnosticSession;
pub use stopping::{StopReason, StoppingPolicy};
pub use strategies::{GeometricMeanScorer, InformationGainStrategy};
pub use types::*;
