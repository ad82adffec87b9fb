//! Dashboard infrastructure module

mod service;

pub use service::{DashboardService, DashboardStats};
