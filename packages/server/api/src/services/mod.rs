pub mod export;
pub mod risk_service;

pub use export::RiskCsvExporter;
pub use risk_service::RiskService;
