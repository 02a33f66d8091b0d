pub mod entities;
pub mod error;
pub mod heatmap;
pub mod scoring;

pub use entities::risk::{NewRisk, RiskRecord, MAX_TEXT_LEN};
pub use error::{FieldError, InconsistentRecord, UnknownLevel, ValidationErrors};
pub use heatmap::RiskMatrix;
pub use scoring::{compliance_hint, hint_for_label, Assessment, Rating, RiskLevel, DEFAULT_HINT};
