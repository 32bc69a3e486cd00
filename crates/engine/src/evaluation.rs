//! Scenario-driven evaluation of an assistant session.
//!
//! A scenario replays rating/recommendation steps, then asks for one final
//! recommendation and grades it on two 1-5 scales:
//!
//! - **memory**: were stored preferences respected (rated titles and
//!   disliked genres kept out)?
//! - **quality**: is the answer usable (enough results, requested genre
//!   honored, no more than asked for)?
//!
//! Each violation costs one point; scores never drop below 1.
//!
//! Scenario files are JSON:
//!
//! ```json
//! [{
//!   "name": "dislikes horror",
//!   "reset_memory": true,
//!   "steps": [{"action": "rate", "title": "Get Out", "rating": 1, "liked": false}],
//!   "evaluation": {"count": 5, "expect": {"excluded_genres": ["horror"], "min_results": 5}}
//! }]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use catalog::Genre;
use preferences::PreferenceStore;

use crate::assistant::MovieAssistant;
use crate::ranker::RecommendationResult;

const MAX_SCORE: u8 = 5;
const MIN_SCORE: u8 = 1;

fn default_count() -> usize {
    5
}

/// One scripted conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Clear the user's stored facts before replaying the steps
    #[serde(default)]
    pub reset_memory: bool,
    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
    pub evaluation: EvaluationQuery,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScenarioStep {
    Rate {
        title: String,
        rating: f32,
        liked: bool,
    },
    Recommend {
        #[serde(default = "default_count")]
        count: usize,
        #[serde(default)]
        genre_filter: Option<String>,
    },
}

/// The graded final request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationQuery {
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default)]
    pub genre_filter: Option<String>,
    #[serde(default)]
    pub expect: Expectations,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expectations {
    /// Titles that must not be recommended (compared case-insensitively)
    #[serde(default)]
    pub excluded_titles: Vec<String>,
    /// Genres no recommendation may carry
    #[serde(default)]
    pub excluded_genres: Vec<Genre>,
    /// Genre every recommendation must carry
    #[serde(default)]
    pub required_genre: Option<Genre>,
    #[serde(default)]
    pub min_results: usize,
}

/// Grades for one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioEvaluation {
    pub scenario: String,
    pub memory_score: u8,
    pub quality_score: u8,
    pub memory_explanation: String,
    pub quality_explanation: String,
    pub recommendations: Vec<String>,
    /// Steps that could not be replayed (e.g. unknown titles)
    pub step_errors: Vec<String>,
}

/// Aggregate over a scenario run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub evaluations: Vec<ScenarioEvaluation>,
    pub average_memory_score: f32,
    pub average_quality_score: f32,
}

/// Parse a JSON scenario file
pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenarios from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse scenarios in {}", path.display()))
}

/// Run every scenario in order against one assistant
pub fn evaluate_scenarios<S: PreferenceStore>(
    assistant: &mut MovieAssistant<S>,
    scenarios: &[Scenario],
) -> Result<EvaluationReport> {
    let evaluations = scenarios
        .iter()
        .map(|scenario| evaluate_scenario(assistant, scenario))
        .collect::<Result<Vec<_>>>()?;

    let average = |score: fn(&ScenarioEvaluation) -> u8| {
        if evaluations.is_empty() {
            0.0
        } else {
            evaluations.iter().map(|e| score(e) as f32).sum::<f32>() / evaluations.len() as f32
        }
    };
    let average_memory_score = average(|e| e.memory_score);
    let average_quality_score = average(|e| e.quality_score);

    Ok(EvaluationReport {
        evaluations,
        average_memory_score,
        average_quality_score,
    })
}

/// Replay one scenario and grade its final recommendation
pub fn evaluate_scenario<S: PreferenceStore>(
    assistant: &mut MovieAssistant<S>,
    scenario: &Scenario,
) -> Result<ScenarioEvaluation> {
    info!("Running scenario '{}'", scenario.name);

    if scenario.reset_memory {
        assistant.reset_memory();
    }

    let mut step_errors = Vec::new();
    for step in &scenario.steps {
        match step {
            ScenarioStep::Rate { title, rating, liked } => {
                if let Err(err) = assistant.rate(title, *rating, *liked) {
                    warn!("Scenario '{}' step failed: {}", scenario.name, err);
                    step_errors.push(err.to_string());
                }
            }
            ScenarioStep::Recommend { count, genre_filter } => {
                assistant.recommend(*count, genre_filter.as_deref())?;
            }
        }
    }

    let query = &scenario.evaluation;
    let result = assistant.recommend(query.count, query.genre_filter.as_deref())?;

    let (memory_score, memory_explanation) = grade_memory(&query.expect, &result);
    let (quality_score, quality_explanation) = grade_quality(query, &result);

    info!(
        "Scenario '{}': memory={}, quality={}",
        scenario.name, memory_score, quality_score
    );

    Ok(ScenarioEvaluation {
        scenario: scenario.name.clone(),
        memory_score,
        quality_score,
        memory_explanation,
        quality_explanation,
        recommendations: result.titles().into_iter().map(str::to_string).collect(),
        step_errors,
    })
}

/// Memory dimension: one point per rated title or disliked-genre movie returned
pub fn grade_memory(expect: &Expectations, result: &RecommendationResult) -> (u8, String) {
    let mut violations = Vec::new();

    for rec in &result.recommendations {
        if expect
            .excluded_titles
            .iter()
            .any(|title| title.eq_ignore_ascii_case(&rec.title))
        {
            violations.push(format!("recommended already-rated '{}'", rec.title));
        }
        if let Some(genre) = rec.genres.iter().find(|g| expect.excluded_genres.contains(g)) {
            violations.push(format!("recommended '{}' despite disliked {}", rec.title, genre));
        }
    }

    score_from(violations, "Stored preferences respected")
}

/// Quality dimension: result count and genre compliance
pub fn grade_quality(query: &EvaluationQuery, result: &RecommendationResult) -> (u8, String) {
    let mut violations = Vec::new();
    let returned = result.recommendations.len();

    if returned < query.expect.min_results {
        violations.push(format!(
            "only {} of at least {} expected results",
            returned, query.expect.min_results
        ));
    }
    if returned > query.count {
        violations.push(format!("{} results for a request of {}", returned, query.count));
    }
    if let Some(required) = query.expect.required_genre {
        let off_genre: Vec<&str> = result
            .recommendations
            .iter()
            .filter(|rec| !rec.genres.contains(&required))
            .map(|rec| rec.title.as_str())
            .collect();
        if !off_genre.is_empty() {
            violations.push(format!("not {}: {}", required, off_genre.join(", ")));
        }
    }

    score_from(violations, "Recommendations match the request")
}

fn score_from(violations: Vec<String>, ok_message: &str) -> (u8, String) {
    if violations.is_empty() {
        return (MAX_SCORE, ok_message.to_string());
    }
    let penalty = violations.len().min((MAX_SCORE - MIN_SCORE) as usize) as u8;
    (MAX_SCORE - penalty, violations.join("; "))
}
