//! Two-phase admin provisioning.
//!
//! Phase 1 issues a code and mails it to the owner. Phase 2 consumes the
//! code and creates the account. The requester never receives the code.

use std::sync::Arc;

use tracing::{info, warn};

use newsroom_core::error::AppError;
use newsroom_core::result::AppResult;
use newsroom_core::traits::{Notifier, OutboundMessage};
use newsroom_core::types::normalize_username;
use newsroom_database::AdminStore;
use newsroom_entity::admin::{AdminAccount, CreateAdmin};

use crate::otp::OtpLedger;
use crate::password::PasswordHasher;

/// Subject of the owner approval mail.
pub const APPROVAL_SUBJECT: &str = "New Admin Creation Request";

/// An incoming provisioning request.
#[derive(Debug, Clone)]
pub struct ProvisionRequest {
    /// Requested username, not yet normalized.
    pub username: String,
    /// Requested plaintext password.
    pub password: String,
    /// Code relayed from the owner. Blank strings count as absent.
    pub otp: Option<String>,
}

/// What a provisioning call did.
#[derive(Debug, Clone)]
pub enum ProvisionOutcome {
    /// A code was issued and sent to the owner.
    OtpDispatched,
    /// The code was accepted and the account created.
    Created(AdminAccount),
}

/// Coordinates the OTP ledger, the owner notifier and the credential store.
#[derive(Debug, Clone)]
pub struct ProvisioningWorkflow {
    ledger: OtpLedger,
    store: Arc<dyn AdminStore>,
    notifier: Arc<dyn Notifier>,
    hasher: PasswordHasher,
    owner_address: String,
}

impl ProvisioningWorkflow {
    /// Creates a new workflow. Approval mail always goes to `owner_address`.
    pub fn new(
        ledger: OtpLedger,
        store: Arc<dyn AdminStore>,
        notifier: Arc<dyn Notifier>,
        hasher: PasswordHasher,
        owner_address: impl Into<String>,
    ) -> Self {
        Self {
            ledger,
            store,
            notifier,
            hasher,
            owner_address: owner_address.into(),
        }
    }

    /// Run whichever phase the request calls for.
    pub async fn handle(&self, request: ProvisionRequest) -> AppResult<ProvisionOutcome> {
        let username = normalize_username(&request.username);
        if username.is_empty() {
            return Err(AppError::validation("Username is required"));
        }

        match request.otp.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            None => {
                self.request_otp(&username).await?;
                Ok(ProvisionOutcome::OtpDispatched)
            }
            Some(code) => {
                let admin = self.confirm(&username, &request.password, code).await?;
                Ok(ProvisionOutcome::Created(admin))
            }
        }
    }

    /// Phase 1: issue a code for `username` and mail it to the owner.
    ///
    /// The code stays in the ledger if delivery fails and expires normally.
    pub async fn request_otp(&self, username: &str) -> AppResult<()> {
        let code = self.ledger.issue(username);
        let message = OutboundMessage::new(
            self.owner_address.clone(),
            APPROVAL_SUBJECT,
            format!(
                "A new admin with username {username} is requesting to be added. \
                 Please use the OTP: {code} to verify the request."
            ),
        );

        if let Err(e) = self.notifier.send(&message).await {
            warn!(username = %username, error = %e, "Failed to deliver approval OTP");
            return Err(e);
        }

        info!(username = %username, "Approval OTP sent to owner");
        Ok(())
    }

    /// Phase 2: consume `code` and create the account.
    ///
    /// An empty password is rejected before the code is touched.
    pub async fn confirm(
        &self,
        username: &str,
        password: &str,
        code: &str,
    ) -> AppResult<AdminAccount> {
        if password.is_empty() {
            return Err(AppError::validation("Password is required"));
        }

        if let Err(e) = self.ledger.verify(username, code).into_result() {
            warn!(username = %username, reason = %e, "Provisioning OTP rejected");
            return Err(e.into());
        }

        if self.store.find_by_username(username).await?.is_some() {
            warn!(username = %username, "Provisioning rejected: username taken");
            return Err(AppError::conflict("Username already exists"));
        }

        let hash = self.hasher.hash_password(password)?;
        let admin = self.store.create(&CreateAdmin::new(username, hash)).await?;

        info!(admin_id = %admin.id, username = %admin.username, "Admin created");
        Ok(admin)
    }
}
