use serde::Serialize;

use crate::domain::judgment::{Criterion, Recommendation, Score};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Scoring rubric metadata for forms and the help page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricView {
    pub criteria: Vec<CriterionInfo>,
    pub min_score: u8,
    pub max_score: u8,
    pub default_score: u8,
    pub recommendations: Vec<Recommendation>,
    pub default_recommendation: Recommendation,
}

impl RubricView {
    pub fn current() -> Self {
        Self {
            criteria: Criterion::ALL
                .iter()
                .map(|c| CriterionInfo {
                    key: c.key(),
                    label: c.label(),
                    description: c.description(),
                })
                .collect(),
            min_score: Score::MIN,
            max_score: Score::MAX,
            default_score: Score::MIDPOINT.value(),
            recommendations: Recommendation::ALL.to_vec(),
            default_recommendation: Recommendation::default(),
        }
    }
}
