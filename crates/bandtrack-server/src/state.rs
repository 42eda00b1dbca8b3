use std::sync::Arc;

use bandtrack_db::Store;
use tokio::sync::RwLock;

use crate::auth::authenticator::{Authenticator, BodyUserId};
use crate::config::Config;

/// Application state shared across handlers
pub struct AppState {
    /// Mutating handlers hold the write guard for their whole
    /// lookup → validate → mutate sequence.
    pub store: RwLock<Store>,
    pub authenticator: Arc<dyn Authenticator>,
    pub ticket_base_url: String,
    pub share_base_url: String,
}

impl AppState {
    pub fn new(store: Store, config: &Config) -> Self {
        Self {
            store: RwLock::new(store),
            authenticator: Arc::new(BodyUserId),
            ticket_base_url: config.ticket_base_url.clone(),
            share_base_url: config.share_base_url.clone(),
        }
    }

    /// Build the state described by `config`, seeding demo data if asked.
    pub fn from_config(config: &Config) -> Self {
        let mut store = Store::new();
        if config.seed_demo {
            bandtrack_db::seed::load_demo(&mut store, &config.ticket_base_url);
        }
        Self::new(store, config)
    }

    pub fn with_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = authenticator;
        self
    }

    /// Public link for sharing a concert: `{share_base_url}/{id}`.
    pub fn share_link(&self, concert_id: bandtrack_db::Id) -> String {
        format!("{}/{concert_id}", self.share_base_url.trim_end_matches('/'))
    }
}
