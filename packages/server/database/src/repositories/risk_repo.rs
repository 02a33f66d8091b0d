use crate::error::StoreError;
use crate::models::{LevelCounts, RiskRow};
use domain::{Assessment, InconsistentRecord, NewRisk, RiskLevel, RiskRecord};
use sqlx::SqlitePool;

pub struct RiskRepository {
    pool: SqlitePool,
}

impl RiskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts one assessed risk and returns its generated id.
    pub async fn create(
        &self,
        risk: &NewRisk,
        assessment: &Assessment,
    ) -> Result<i64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO risks (asset, threat, likelihood, impact, score, level)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&risk.asset)
        .bind(&risk.threat)
        .bind(i64::from(risk.likelihood.value()))
        .bind(i64::from(risk.impact.value()))
        .bind(i64::from(assessment.score))
        .bind(assessment.level.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// All risks in insertion order, optionally restricted to one level.
    pub async fn get_all(
        &self,
        level: Option<RiskLevel>,
    ) -> Result<Vec<RiskRecord>, StoreError> {
        let rows = match level {
            Some(level) => {
                sqlx::query_as::<_, RiskRow>("SELECT * FROM risks WHERE level = ? ORDER BY id")
                    .bind(level.as_str())
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                sqlx::query_as::<_, RiskRow>("SELECT * FROM risks ORDER BY id")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.into_iter()
            .map(|row| RiskRecord::try_from(row).map_err(StoreError::from))
            .collect()
    }

    pub async fn get_by_id(&self, id: i64) -> Result<RiskRecord, StoreError> {
        let row = sqlx::query_as::<_, RiskRow>("SELECT * FROM risks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))?;

        Ok(RiskRecord::try_from(row)?)
    }

    /// Per-level counts and score totals in one pass over the table.
    pub async fn count_by_level(&self) -> Result<LevelCounts, StoreError> {
        let rows = sqlx::query_as::<_, (String, i64, i64, i64)>(
            "SELECT level, COUNT(*), SUM(score), MIN(id) FROM risks GROUP BY level",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut counts = LevelCounts::default();
        for (label, count, score_sum, first_id) in rows {
            let level = label.parse::<RiskLevel>().map_err(|_| InconsistentRecord {
                id: first_id,
                reason: format!("unknown level '{}'", label),
            })?;
            counts.set(level, count);
            counts.score_total += score_sum;
        }
        Ok(counts)
    }
}
