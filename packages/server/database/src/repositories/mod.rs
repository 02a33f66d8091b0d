pub mod risk_repo;

pub use risk_repo::RiskRepository;
