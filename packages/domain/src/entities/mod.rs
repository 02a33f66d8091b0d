pub mod risk;

pub use risk::{NewRisk, RiskRecord};
