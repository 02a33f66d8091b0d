use database::models::LevelCounts;
use database::repositories::RiskRepository;
use database::{Database, StoreError};
use domain::{NewRisk, RiskLevel, RiskMatrix, RiskRecord};
use std::sync::Arc;

/// Per-request facade combining scoring with the risk store.
pub struct RiskService {
    risk_repo: RiskRepository,
}

impl RiskService {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            risk_repo: RiskRepository::new(db.pool.clone()),
        }
    }

    /// Scores a validated submission and stores it.
    pub async fn assess(&self, risk: NewRisk) -> Result<RiskRecord, StoreError> {
        let assessment = risk.assess();
        let id = self.risk_repo.create(&risk, &assessment).await?;

        tracing::info!(
            id,
            score = assessment.score,
            level = %assessment.level,
            "risk assessed"
        );

        Ok(RiskRecord::new(id, risk, assessment))
    }

    pub async fn list(&self, level: Option<RiskLevel>) -> Result<Vec<RiskRecord>, StoreError> {
        self.risk_repo.get_all(level).await
    }

    pub async fn get(&self, id: i64) -> Result<RiskRecord, StoreError> {
        self.risk_repo.get_by_id(id).await
    }

    pub async fn heatmap(&self) -> Result<RiskMatrix, StoreError> {
        let records = self.risk_repo.get_all(None).await?;
        Ok(RiskMatrix::from_records(&records))
    }

    pub async fn level_counts(&self) -> Result<LevelCounts, StoreError> {
        self.risk_repo.count_by_level().await
    }
}
