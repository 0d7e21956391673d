//! Ledger service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::ledger::{
        errors::LedgerServiceError,
        records::{InboundListing, OutboundListing},
        repository::PgLedgerRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgLedgerService {
    db: Db,
    repository: PgLedgerRepository,
}

impl PgLedgerService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgLedgerRepository::new(),
        }
    }
}

#[async_trait]
impl LedgerService for PgLedgerService {
    async fn list_inbound(&self) -> Result<Vec<InboundListing>, LedgerServiceError> {
        let mut tx = self.db.begin().await?;

        let entries = self.repository.list_inbound(&mut tx).await?;

        tx.commit().await?;

        Ok(entries)
    }

    async fn list_outbound(&self) -> Result<Vec<OutboundListing>, LedgerServiceError> {
        let mut tx = self.db.begin().await?;

        let entries = self.repository.list_outbound(&mut tx).await?;

        tx.commit().await?;

        Ok(entries)
    }
}

#[automock]
#[async_trait]
pub trait LedgerService: Send + Sync {
    /// Restock events, newest first, with the identity of their product.
    async fn list_inbound(&self) -> Result<Vec<InboundListing>, LedgerServiceError>;

    /// Sale events, newest first, with the identity of their product.
    async fn list_outbound(&self) -> Result<Vec<OutboundListing>, LedgerServiceError>;
}
