//! Credential store contract.

use async_trait::async_trait;
use uuid::Uuid;

use newsroom_core::result::AppResult;
use newsroom_entity::admin::{AdminAccount, CreateAdmin};

/// Persistent admin records.
///
/// Callers normalize usernames with
/// [`normalize_username`](newsroom_core::types::normalize_username) before
/// every lookup or insert; implementations compare usernames exactly.
#[async_trait]
pub trait AdminStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find an admin by normalized username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<AdminAccount>>;

    /// Find an admin by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AdminAccount>>;

    /// Create a new admin.
    ///
    /// Fails with [`ErrorKind::Conflict`](newsroom_core::error::ErrorKind::Conflict)
    /// if the username is already taken.
    async fn create(&self, data: &CreateAdmin) -> AppResult<AdminAccount>;

    /// Delete an admin. Returns `false` if no such admin exists.
    async fn delete_by_id(&self, id: Uuid) -> AppResult<bool>;

    /// Count all admins.
    async fn count(&self) -> AppResult<u64>;
}
