//! Shared state for the in-memory backend
//!
//! All three in-memory repositories sit on one dataset behind a single
//! async mutex. One mutex is what makes the rating transaction work: the
//! transaction holds the guard from begin to commit, so a rating row and its
//! store's aggregate can never be observed half-written, and everything else
//! locks briefly per call. Data is lost when the process terminates.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::rating::Rating;
use crate::domain::store::Store;
use crate::domain::user::User;

/// Backing dataset for the in-memory repositories
#[derive(Debug, Default)]
pub struct MemoryState {
    pub(crate) users: HashMap<String, User>,
    pub(crate) stores: HashMap<String, Store>,
    /// Keyed by (user_id, store_id) - the uniqueness invariant is the map key
    pub(crate) ratings: HashMap<(String, String), Rating>,
}

impl MemoryState {
    /// Create a fresh dataset wrapped for sharing across repositories
    pub fn shared() -> SharedMemory {
        Arc::new(Mutex::new(Self::default()))
    }
}

/// Handle to one in-memory dataset
pub type SharedMemory = Arc<Mutex<MemoryState>>;
