//! Service layer: alignment, scoring, round execution, orchestration and synthesis.

pub mod convergence_scorer;
pub mod draft_round;
pub mod orchestration_engine;
pub mod synthesizer;
pub mod text_aligner;

pub use convergence_scorer::ConvergenceScorer;
pub use draft_round::DraftRound;
pub use orchestration_engine::OrchestrationEngine;
pub use synthesizer::Synthesizer;
pub use text_aligner::TextAligner;
