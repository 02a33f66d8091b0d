use domain::{FieldError, NewRisk, RiskLevel, UnknownLevel, ValidationErrors};
use serde::{Deserialize, Serialize};

/// Body of `POST /assess-risk`. Fields are optional so a missing one is
/// reported per field instead of as a generic parse failure.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AssessRiskRequest {
    pub asset: Option<String>,
    pub threat: Option<String>,
    pub likelihood: Option<i64>,
    pub impact: Option<i64>,
}

impl AssessRiskRequest {
    pub fn into_new_risk(self) -> Result<NewRisk, ValidationErrors> {
        let mut missing = ValidationErrors::new();
        if self.asset.is_none() {
            missing.add("asset", "field required");
        }
        if self.threat.is_none() {
            missing.add("threat", "field required");
        }
        if self.likelihood.is_none() {
            missing.add("likelihood", "field required");
        }
        if self.impact.is_none() {
            missing.add("impact", "field required");
        }

        match (self.asset, self.threat, self.likelihood, self.impact) {
            (Some(asset), Some(threat), Some(likelihood), Some(impact)) => {
                NewRisk::new(asset, threat, likelihood, impact)
            }
            _ => Err(missing),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RiskListQuery {
    pub level: Option<String>,
}

impl RiskListQuery {
    /// An absent or empty `level` means no filter.
    pub fn level_filter(&self) -> Result<Option<RiskLevel>, UnknownLevel> {
        match self.level.as_deref() {
            None | Some("") => Ok(None),
            Some(label) => label.parse().map(Some),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComplianceHintResponse {
    pub level: String,
    pub hint: String,
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCountsResponse {
    #[serde(rename = "Low")]
    pub low: i64,
    #[serde(rename = "Medium")]
    pub medium: i64,
    #[serde(rename = "High")]
    pub high: i64,
    #[serde(rename = "Critical")]
    pub critical: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RiskSummaryResponse {
    pub total: i64,
    /// Mean score to one decimal, `0.0` when nothing is stored.
    pub average_score: f64,
    pub counts: LevelCountsResponse,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}
