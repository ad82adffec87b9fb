//! Admin dashboard response types

use serde::{Deserialize, Serialize};

use crate::infrastructure::dashboard::DashboardStats;

/// Platform-wide totals for the admin dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub total_users: u64,
    pub total_stores: u64,
    pub total_ratings: u64,
}

impl DashboardResponse {
    /// Create a response from dashboard stats
    pub fn from_domain(stats: &DashboardStats) -> Self {
        Self {
            total_users: stats.total_users,
            total_stores: stats.total_stores,
            total_ratings: stats.total_ratings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_response_serialization() {
        let stats = DashboardStats {
            total_users: 12,
            total_stores: 3,
            total_ratings: 40,
        };

        let json = serde_json::to_string(&DashboardResponse::from_domain(&stats)).unwrap();
        assert!(json.contains("\"total_users\":12"));
        assert!(json.contains("\"total_stores\":3"));
        assert!(json.contains("\"total_ratings\":40"));
    }
}
