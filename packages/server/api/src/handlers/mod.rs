pub mod compliance;
pub mod reports;
pub mod risks;
pub mod root;
