//! Investment recommendation a judge attaches to a judgment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The judge's verdict.
///
/// Chosen by the judge alongside the scores; it is not derived from the
/// overall score and the two are never cross-checked.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Recommendation {
    #[serde(rename = "Strong Pass")]
    StrongPass,
    #[serde(rename = "Pass")]
    Pass,
    #[default]
    #[serde(rename = "Weak Pass")]
    WeakPass,
    #[serde(rename = "Reject")]
    Reject,
}

impl Recommendation {
    /// All recommendations, strongest first.
    pub const ALL: [Recommendation; 4] = [
        Recommendation::StrongPass,
        Recommendation::Pass,
        Recommendation::WeakPass,
        Recommendation::Reject,
    ];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::StrongPass => "Strong Pass",
            Recommendation::Pass => "Pass",
            Recommendation::WeakPass => "Weak Pass",
            Recommendation::Reject => "Reject",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_label() {
        assert_eq!(
            serde_json::to_string(&Recommendation::StrongPass).unwrap(),
            r#""Strong Pass""#
        );
        let parsed: Recommendation = serde_json::from_str(r#""Weak Pass""#).unwrap();
        assert_eq!(parsed, Recommendation::WeakPass);
    }

    #[test]
    fn rejects_unknown_label() {
        assert!(serde_json::from_str::<Recommendation>(r#""Maybe""#).is_err());
    }

    #[test]
    fn default_matches_form_default() {
        assert_eq!(Recommendation::default(), Recommendation::WeakPass);
    }
}
