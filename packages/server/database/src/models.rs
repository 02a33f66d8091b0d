use domain::{InconsistentRecord, RiskLevel, RiskRecord};

/// Raw `risks` row as SQLite hands it back.
#[derive(Debug, sqlx::FromRow)]
pub struct RiskRow {
    pub id: i64,
    pub asset: String,
    pub threat: String,
    pub likelihood: i64,
    pub impact: i64,
    pub score: i64,
    pub level: String,
}

impl TryFrom<RiskRow> for RiskRecord {
    type Error = InconsistentRecord;

    fn try_from(row: RiskRow) -> Result<Self, Self::Error> {
        RiskRecord::restore(
            row.id,
            row.asset,
            row.threat,
            row.likelihood,
            row.impact,
            row.score,
            &row.level,
        )
    }
}

/// Number of stored risks per level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelCounts {
    pub low: i64,
    pub medium: i64,
    pub high: i64,
    pub critical: i64,
    /// Sum of all stored scores.
    pub score_total: i64,
}

impl LevelCounts {
    pub fn get(&self, level: RiskLevel) -> i64 {
        match level {
            RiskLevel::Low => self.low,
            RiskLevel::Medium => self.medium,
            RiskLevel::High => self.high,
            RiskLevel::Critical => self.critical,
        }
    }

    pub fn set(&mut self, level: RiskLevel, count: i64) {
        match level {
            RiskLevel::Low => self.low = count,
            RiskLevel::Medium => self.medium = count,
            RiskLevel::High => self.high = count,
            RiskLevel::Critical => self.critical = count,
        }
    }

    pub fn total(&self) -> i64 {
        self.low + self.medium + self.high + self.critical
    }

    /// Mean score rounded to one decimal, `0.0` for an empty register.
    pub fn average_score(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let mean = self.score_total as f64 / total as f64;
        (mean * 10.0).round() / 10.0
    }
}
