use crate::error::UnknownLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text returned for a level label that is not one of the four known levels.
pub const DEFAULT_HINT: &str = "Review and assess";

/// A likelihood or impact rating on the 1..=5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Returns `None` when the value is outside 1..=5.
    pub fn new(value: i64) -> Option<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Every rating from 1 to 5, ascending.
    pub fn all() -> impl DoubleEndedIterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(RiskLevel::Low),
            "Medium" => Ok(RiskLevel::Medium),
            "High" => Ok(RiskLevel::High),
            "Critical" => Ok(RiskLevel::Critical),
            other => Err(UnknownLevel(other.to_string())),
        }
    }
}

/// Outcome of scoring a likelihood/impact pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub score: u8,
    pub level: RiskLevel,
}

/// Scores a likelihood/impact pair. Total over the rating domain.
pub fn score(likelihood: Rating, impact: Rating) -> Assessment {
    let score = likelihood.value() * impact.value();
    Assessment {
        score,
        level: band(score),
    }
}

/// Maps a score to its level: 1-5 Low, 6-12 Medium, 13-18 High, 19-25 Critical.
///
/// Only meaningful for scores produced by [`score`], i.e. 1..=25.
pub fn band(score: u8) -> RiskLevel {
    match score {
        0..=5 => RiskLevel::Low,
        6..=12 => RiskLevel::Medium,
        13..=18 => RiskLevel::High,
        _ => RiskLevel::Critical,
    }
}

/// GRC guidance attached to each level.
pub fn compliance_hint(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "Accept / Monitor - Review quarterly per NIST SP 800-30",
        RiskLevel::Medium => "Plan mitigation within 6 months - Document in risk register",
        RiskLevel::High => {
            "Prioritize action + compensating controls (NIST PR.AC-7: Rate Limiting)"
        }
        RiskLevel::Critical => {
            "Immediate mitigation required + executive reporting (ISO 27001 Clause 6.1.2)"
        }
    }
}

/// Hint lookup for a raw level label, falling back to [`DEFAULT_HINT`].
pub fn hint_for_label(label: &str) -> &'static str {
    label
        .parse::<RiskLevel>()
        .map(compliance_hint)
        .unwrap_or(DEFAULT_HINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(v: i64) -> Rating {
        Rating::new(v).unwrap()
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_none());
        assert!(Rating::new(6).is_none());
        assert!(Rating::new(-3).is_none());
        assert_eq!(Rating::new(1).map(Rating::value), Some(1));
        assert_eq!(Rating::new(5).map(Rating::value), Some(5));
        assert_eq!(Rating::all().count(), 5);
    }

    #[test]
    fn test_score_is_product_within_range() {
        for l in Rating::all() {
            for i in Rating::all() {
                let a = score(l, i);
                assert_eq!(a.score, l.value() * i.value());
                assert!((1..=25).contains(&a.score));
                assert_eq!(a.level, band(a.score));
            }
        }
    }

    #[test]
    fn test_band_partitions_score_range() {
        let expected = |s: u8| match s {
            1..=5 => RiskLevel::Low,
            6..=12 => RiskLevel::Medium,
            13..=18 => RiskLevel::High,
            _ => RiskLevel::Critical,
        };
        for s in 1..=25u8 {
            let matches = RiskLevel::ALL.iter().filter(|l| **l == band(s)).count();
            assert_eq!(matches, 1);
            assert_eq!(band(s), expected(s), "score {}", s);
        }

        assert_eq!(band(5), RiskLevel::Low);
        assert_eq!(band(6), RiskLevel::Medium);
        assert_eq!(band(12), RiskLevel::Medium);
        assert_eq!(band(13), RiskLevel::High);
        assert_eq!(band(18), RiskLevel::High);
        assert_eq!(band(19), RiskLevel::Critical);
    }

    #[test]
    fn test_reference_scenarios() {
        let cases = [
            (1, 1, 1, RiskLevel::Low),
            (3, 4, 12, RiskLevel::Medium),
            (4, 4, 16, RiskLevel::High),
            (5, 5, 25, RiskLevel::Critical),
        ];
        for (l, i, s, level) in cases {
            let a = score(rating(l), rating(i));
            assert_eq!(a.score, s);
            assert_eq!(a.level, level);
        }
    }

    #[test]
    fn test_level_parsing_is_exact() {
        for level in RiskLevel::ALL {
            assert_eq!(level.as_str().parse::<RiskLevel>(), Ok(level));
        }
        assert_eq!(
            "Extreme".parse::<RiskLevel>(),
            Err(UnknownLevel("Extreme".to_string()))
        );
        assert!("high".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_hints() {
        assert_eq!(
            hint_for_label("Critical"),
            "Immediate mitigation required + executive reporting (ISO 27001 Clause 6.1.2)"
        );
        assert_eq!(hint_for_label("Extreme"), DEFAULT_HINT);
        assert_eq!(hint_for_label(""), DEFAULT_HINT);
        for level in RiskLevel::ALL {
            assert_ne!(compliance_hint(level), DEFAULT_HINT);
        }
    }

    #[test]
    fn test_level_serializes_as_label() {
        let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
        assert_eq!(json, "\"Medium\"");
    }
}
