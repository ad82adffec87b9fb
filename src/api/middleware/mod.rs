//! API middleware components

pub mod actor;
pub mod admin;
pub mod logging;
pub mod metrics;
pub mod security;

pub use actor::{OptionalActor, RequireActor, ACTOR_HEADER};
pub use admin::RequireAdmin;
pub use logging::logging_middleware;
pub use metrics::metrics_middleware;
pub use security::security_headers_middleware;
