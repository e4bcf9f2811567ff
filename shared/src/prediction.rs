use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Model variants registered with the prediction service, keyed by their query code.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
pub enum ModelKind {
    #[default]
    #[serde(rename = "rf")]
    #[strum(serialize = "rf")]
    RandomForest,
    #[serde(rename = "lr")]
    #[strum(serialize = "lr")]
    LogisticRegression,
}

impl ModelKind {
    /// Query-string code understood by the service.
    pub fn code(self) -> &'static str {
        match self {
            ModelKind::RandomForest => "rf",
            ModelKind::LogisticRegression => "lr",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModelKind::RandomForest => "Random Forest",
            ModelKind::LogisticRegression => "Logistic Regression",
        }
    }
}

/// Response of the prediction service: `{ prediction, confidence }`.
///
/// `confidence` is a 0–1 probability once [`PredictionResult::normalized`] has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: String,
    pub confidence: f64,
}

impl PredictionResult {
    /// Brings the confidence onto the 0–1 scale.
    ///
    /// Values in `(1, 100]` are read as percentages. Non-finite values become 0.
    /// Returns the result and whether a percentage was rescaled.
    pub fn normalized(mut self) -> (Self, bool) {
        let c = self.confidence;
        let rescaled = c.is_finite() && c > 1.0 && c <= 100.0;
        self.confidence = if !c.is_finite() {
            0.0
        } else if rescaled {
            c / 100.0
        } else {
            c.clamp(0.0, 1.0)
        };
        (self, rescaled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn result(confidence: f64) -> PredictionResult {
        PredictionResult { prediction: "CANDIDATE".into(), confidence }
    }

    #[test]
    fn model_codes_parse_and_print() {
        assert_eq!(ModelKind::from_str("rf").unwrap(), ModelKind::RandomForest);
        assert_eq!(ModelKind::from_str("lr").unwrap(), ModelKind::LogisticRegression);
        assert!(ModelKind::from_str("svm").is_err());
        assert_eq!(ModelKind::LogisticRegression.code(), "lr");
        assert_eq!(ModelKind::RandomForest.to_string(), "rf");
        assert_eq!(ModelKind::default(), ModelKind::RandomForest);
    }

    #[test]
    fn unit_scale_confidence_is_kept() {
        let (r, rescaled) = result(0.87).normalized();
        assert_eq!(r.confidence, 0.87);
        assert!(!rescaled);
        assert_eq!(result(1.0).normalized().0.confidence, 1.0);
    }

    #[test]
    fn percent_scale_confidence_is_rescaled() {
        let (r, rescaled) = result(87.0).normalized();
        assert!((r.confidence - 0.87).abs() < 1e-12);
        assert!(rescaled);
    }

    #[test]
    fn out_of_range_confidence_is_bounded() {
        assert_eq!(result(f64::NAN).normalized().0.confidence, 0.0);
        assert_eq!(result(-0.5).normalized().0.confidence, 0.0);
        assert_eq!(result(250.0).normalized().0.confidence, 1.0);
    }
}
