use crate::error::{InconsistentRecord, ValidationErrors};
use crate::scoring::{self, Assessment, Rating, RiskLevel};
use serde::Serialize;

pub const MAX_TEXT_LEN: usize = 200;

/// A validated assessment request that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRisk {
    pub asset: String,
    pub threat: String,
    pub likelihood: Rating,
    pub impact: Rating,
}

impl NewRisk {
    /// Checks every field and reports all failures at once.
    pub fn new(
        asset: String,
        threat: String,
        likelihood: i64,
        impact: i64,
    ) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_text("asset", &asset, &mut errors);
        check_text("threat", &threat, &mut errors);
        let likelihood = check_rating("likelihood", likelihood, &mut errors);
        let impact = check_rating("impact", impact, &mut errors);

        match (likelihood, impact) {
            (Some(likelihood), Some(impact)) if errors.is_empty() => Ok(Self {
                asset,
                threat,
                likelihood,
                impact,
            }),
            _ => Err(errors),
        }
    }

    pub fn assess(&self) -> Assessment {
        scoring::score(self.likelihood, self.impact)
    }
}

fn check_text(field: &str, value: &str, errors: &mut ValidationErrors) {
    let len = value.chars().count();
    if len == 0 {
        errors.add(field, "must not be empty");
    } else if len > MAX_TEXT_LEN {
        errors.add(
            field,
            format!("must be at most {} characters (got {})", MAX_TEXT_LEN, len),
        );
    }
}

fn check_rating(field: &str, value: i64, errors: &mut ValidationErrors) -> Option<Rating> {
    let rating = Rating::new(value);
    if rating.is_none() {
        errors.add(
            field,
            format!(
                "must be between {} and {} (got {})",
                Rating::MIN,
                Rating::MAX,
                value
            ),
        );
    }
    rating
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskRecord {
    pub id: i64,
    pub asset: String,
    pub threat: String,
    pub likelihood: u8,
    pub impact: u8,
    pub score: u8,
    pub level: RiskLevel,
}

impl RiskRecord {
    pub fn new(id: i64, risk: NewRisk, assessment: Assessment) -> Self {
        Self {
            id,
            asset: risk.asset,
            threat: risk.threat,
            likelihood: risk.likelihood.value(),
            impact: risk.impact.value(),
            score: assessment.score,
            level: assessment.level,
        }
    }

    /// Rebuilds a record from stored columns, re-checking that the stored
    /// score and level still match the ratings.
    pub fn restore(
        id: i64,
        asset: String,
        threat: String,
        likelihood: i64,
        impact: i64,
        score: i64,
        level: &str,
    ) -> Result<Self, InconsistentRecord> {
        let inconsistent = |reason: String| InconsistentRecord { id, reason };

        let l = Rating::new(likelihood)
            .ok_or_else(|| inconsistent(format!("likelihood {} out of range", likelihood)))?;
        let i = Rating::new(impact)
            .ok_or_else(|| inconsistent(format!("impact {} out of range", impact)))?;
        let stored_level: RiskLevel = level
            .parse()
            .map_err(|_| inconsistent(format!("unknown level '{}'", level)))?;

        let expected = scoring::score(l, i);
        if i64::from(expected.score) != score {
            return Err(inconsistent(format!(
                "score {} does not equal {} x {}",
                score, likelihood, impact
            )));
        }
        if expected.level != stored_level {
            return Err(inconsistent(format!(
                "level {} does not match score {}",
                stored_level, score
            )));
        }

        Ok(Self {
            id,
            asset,
            threat,
            likelihood: l.value(),
            impact: i.value(),
            score: expected.score,
            level: expected.level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_submission() {
        let risk = NewRisk::new("Database".into(), "SQL injection".into(), 3, 4).unwrap();
        let assessment = risk.assess();
        assert_eq!(assessment.score, 12);
        assert_eq!(assessment.level, RiskLevel::Medium);

        let record = RiskRecord::new(7, risk, assessment);
        assert_eq!(
            record,
            RiskRecord {
                id: 7,
                asset: "Database".into(),
                threat: "SQL injection".into(),
                likelihood: 3,
                impact: 4,
                score: 12,
                level: RiskLevel::Medium,
            }
        );
    }

    #[test]
    fn test_reports_every_invalid_field() {
        let errors = NewRisk::new(String::new(), "x".repeat(201), 0, 6).unwrap_err();
        assert_eq!(errors.fields().len(), 4);
        assert!(errors.has_field("asset"));
        assert!(errors.has_field("threat"));
        assert!(errors.has_field("likelihood"));
        assert!(errors.has_field("impact"));
    }

    #[test]
    fn test_text_length_counts_characters() {
        // 200 multi-byte characters are within the limit
        let asset = "é".repeat(200);
        assert!(NewRisk::new(asset, "t".into(), 1, 1).is_ok());
        assert!(NewRisk::new(" ".into(), "t".into(), 1, 1).is_ok());

        let errors = NewRisk::new("a".repeat(201), "t".into(), 1, 1).unwrap_err();
        assert_eq!(errors.fields().len(), 1);
        assert_eq!(errors.fields()[0].field, "asset");
    }

    #[test]
    fn test_restore_accepts_consistent_row() {
        let record =
            RiskRecord::restore(1, "Laptop".into(), "Theft".into(), 5, 5, 25, "Critical").unwrap();
        assert_eq!(record.level, RiskLevel::Critical);
        assert_eq!(record.score, 25);
    }

    #[test]
    fn test_restore_rejects_inconsistent_rows() {
        let wrong_score = RiskRecord::restore(2, "a".into(), "t".into(), 2, 2, 5, "Low");
        assert!(wrong_score.unwrap_err().reason.contains("score"));

        let wrong_level = RiskRecord::restore(3, "a".into(), "t".into(), 2, 2, 4, "High");
        assert!(wrong_level.unwrap_err().reason.contains("level"));

        let unknown_level = RiskRecord::restore(4, "a".into(), "t".into(), 2, 2, 4, "Severe");
        assert_eq!(unknown_level.unwrap_err().id, 4);

        assert!(RiskRecord::restore(5, "a".into(), "t".into(), 9, 1, 9, "Medium").is_err());
    }
}
