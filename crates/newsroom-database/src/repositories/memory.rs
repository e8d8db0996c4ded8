//! In-memory admin store for local runs and tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;
use uuid::Uuid;

use newsroom_core::error::AppError;
use newsroom_core::result::AppResult;
use newsroom_entity::admin::{AdminAccount, CreateAdmin};

use crate::store::AdminStore;

/// Admin store backed by concurrent hash maps.
///
/// Accounts are keyed by username; a secondary index maps ids to
/// usernames. Creation goes through the username entry, so two
/// concurrent creates for one username cannot both succeed.
#[derive(Debug, Clone, Default)]
pub struct MemoryAdminStore {
    by_username: Arc<DashMap<String, AdminAccount>>,
    usernames_by_id: Arc<DashMap<Uuid, String>>,
}

impl MemoryAdminStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminStore for MemoryAdminStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<AdminAccount>> {
        Ok(self.by_username.get(username).map(|a| a.value().clone()))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AdminAccount>> {
        let Some(username) = self.usernames_by_id.get(&id).map(|u| u.value().clone()) else {
            return Ok(None);
        };
        self.find_by_username(&username).await
    }

    async fn create(&self, data: &CreateAdmin) -> AppResult<AdminAccount> {
        match self.by_username.entry(data.username.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict("Username already exists")),
            Entry::Vacant(slot) => {
                let admin = AdminAccount {
                    id: Uuid::now_v7(),
                    username: data.username.clone(),
                    password_hash: data.password_hash.clone(),
                    created_at: Utc::now(),
                };
                self.usernames_by_id.insert(admin.id, admin.username.clone());
                slot.insert(admin.clone());
                debug!(admin_id = %admin.id, "Admin stored in memory");
                Ok(admin)
            }
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<bool> {
        let Some((_, username)) = self.usernames_by_id.remove(&id) else {
            return Ok(false);
        };
        Ok(self.by_username.remove(&username).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.by_username.len() as u64)
    }
}
