//! Authorization domain
//!
//! Pure policy decisions over roles and actions. Handlers and services call
//! [`authorize`] before touching any repository.

mod policy;

pub use policy::{authorize, Action, Actor, Denial, DenyReason, OwnedResource, Role};
