pub mod analytics;
pub mod health;
pub mod insights;
pub mod trend;

pub use analytics::FinancialAnalytics;
