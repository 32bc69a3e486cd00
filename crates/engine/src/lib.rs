//! Engine crate for the movie recommendation assistant.
//!
//! - **recorder**: `RatingRecorder`, ratings to preference facts with series propagation
//! - **ranker**: `RecommendationRanker`, cold-start and personalized ranking
//! - **assistant**: `MovieAssistant`, a per-user session over a preference store
//! - **evaluation**: replay and grade JSON scenarios against a session

pub mod assistant;
pub mod evaluation;
pub mod ranker;
pub mod recorder;

pub use assistant::{MovieAssistant, DEFAULT_USER_ID};
pub use evaluation::{
    evaluate_scenario, evaluate_scenarios, load_scenarios, EvaluationReport, Scenario,
    ScenarioEvaluation,
};
pub use ranker::{
    ColdStartInfo, PersonalizationFactors, Recommendation, RecommendationBasis,
    RecommendationRanker, RecommendationResult,
};
pub use recorder::{RatingRecorder, RatingResult, RecordError};
