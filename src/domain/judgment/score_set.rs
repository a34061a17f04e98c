//! The five-criterion rubric and the score set a judge fills in.

use serde::{Deserialize, Serialize};

use super::Score;

/// One of the five fixed judging criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Criterion {
    MarketPotential,
    TeamQuality,
    ProductInnovation,
    BusinessModel,
    Traction,
}

impl Criterion {
    /// All criteria in rubric order.
    pub const ALL: [Criterion; 5] = [
        Criterion::MarketPotential,
        Criterion::TeamQuality,
        Criterion::ProductInnovation,
        Criterion::BusinessModel,
        Criterion::Traction,
    ];

    /// Field name used in JSON payloads.
    pub fn key(&self) -> &'static str {
        match self {
            Criterion::MarketPotential => "marketPotential",
            Criterion::TeamQuality => "teamQuality",
            Criterion::ProductInnovation => "productInnovation",
            Criterion::BusinessModel => "businessModel",
            Criterion::Traction => "traction",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Criterion::MarketPotential => "Market Potential",
            Criterion::TeamQuality => "Team Quality",
            Criterion::ProductInnovation => "Product Innovation",
            Criterion::BusinessModel => "Business Model",
            Criterion::Traction => "Traction",
        }
    }

    /// What a judge should consider when scoring this criterion.
    pub fn description(&self) -> &'static str {
        match self {
            Criterion::MarketPotential => "Size, growth, and attractiveness of the target market",
            Criterion::TeamQuality => {
                "Experience, expertise, and execution capability of the founding team"
            }
            Criterion::ProductInnovation => {
                "Uniqueness, technical merit, and competitive advantage of the product"
            }
            Criterion::BusinessModel => "Revenue model, unit economics, and scalability",
            Criterion::Traction => "Current progress, customer validation, and growth metrics",
        }
    }
}

/// Exactly five rubric scores, one per criterion.
///
/// Every field is required when deserializing and unknown fields are
/// rejected, so a set with missing or extra criteria cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScoreSet {
    pub market_potential: Score,
    pub team_quality: Score,
    pub product_innovation: Score,
    pub business_model: Score,
    pub traction: Score,
}

impl ScoreSet {
    /// Creates a score set from the five criteria in rubric order.
    pub fn new(
        market_potential: Score,
        team_quality: Score,
        product_innovation: Score,
        business_model: Score,
        traction: Score,
    ) -> Self {
        Self {
            market_potential,
            team_quality,
            product_innovation,
            business_model,
            traction,
        }
    }

    /// Returns the score for one criterion.
    pub fn get(&self, criterion: Criterion) -> Score {
        match criterion {
            Criterion::MarketPotential => self.market_potential,
            Criterion::TeamQuality => self.team_quality,
            Criterion::ProductInnovation => self.product_innovation,
            Criterion::BusinessModel => self.business_model,
            Criterion::Traction => self.traction,
        }
    }

    /// Returns the five scores in rubric order.
    pub fn values(&self) -> [Score; 5] {
        Criterion::ALL.map(|c| self.get(c))
    }
}

impl Default for ScoreSet {
    fn default() -> Self {
        let mid = Score::MIDPOINT;
        Self::new(mid, mid, mid, mid, mid)
    }
}
