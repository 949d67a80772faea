pub mod dto;
pub mod mock;

pub use dto::{CategoryDistribution, DashboardData, SalesTrend};
pub use mock::generate_dashboard;
