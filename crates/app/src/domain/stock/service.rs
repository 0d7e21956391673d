//! Stock service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::{
        ledger::{data::NewLedgerEntry, repository::PgLedgerRepository},
        products::{
            data::NewProduct,
            records::{ProductId, ProductRecord},
            repository::PgProductsRepository,
        },
        stock::{
            data::{NewInbound, NewRestock, NewSale},
            errors::StockServiceError,
            records::{InboundReceipt, RestockReceipt, SaleReceipt},
            rules::StockLevel,
        },
        values::Money,
    },
};

#[derive(Debug, Clone)]
pub struct PgStockService {
    db: Db,
    products: PgProductsRepository,
    ledger: PgLedgerRepository,
}

impl PgStockService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            products: PgProductsRepository::new(),
            ledger: PgLedgerRepository::new(),
        }
    }
}

/// Price recorded for an event that did not carry one.
fn catalog_price(product: &ProductRecord) -> Result<Money, StockServiceError> {
    Money::new(product.unit_price).map_err(|_| StockServiceError::InvalidData)
}

#[async_trait]
impl StockService for PgStockService {
    async fn record_inbound(&self, inbound: NewInbound) -> Result<InboundReceipt, StockServiceError> {
        let mut tx = self.db.begin().await?;

        self.products.lock_identity(&mut tx, &inbound.identity).await?;

        let existing = self
            .products
            .find_by_identity(&mut tx, &inbound.identity)
            .await?;

        let condition_status = inbound.condition_status.unwrap_or_default();
        let is_active = inbound.is_active.unwrap_or(true);

        let (product, created) = match existing {
            Some(existing) => {
                let level = StockLevel::new(existing.quantity).restocked(inbound.quantity)?;

                let merged = self
                    .products
                    .merge_inbound(
                        &mut tx,
                        existing.id,
                        level.get(),
                        inbound.unit_price,
                        condition_status,
                        is_active,
                    )
                    .await?;

                (merged, false)
            }
            None => {
                let product = NewProduct {
                    identity: inbound.identity,
                    warranty_period: inbound.warranty_period,
                    quantity: inbound.quantity.get(),
                    unit_price: inbound.unit_price,
                    condition_status,
                    is_active,
                };

                (self.products.create_product(&mut tx, &product).await?, true)
            }
        };

        let entry = self
            .ledger
            .append_inbound(
                &mut tx,
                &NewLedgerEntry {
                    product_id: product.id,
                    quantity: inbound.quantity,
                    unit_price: inbound.unit_price,
                    notes: inbound.notes,
                },
            )
            .await?;

        tx.commit().await?;

        debug!(
            product_id = %product.id,
            quantity = product.quantity,
            created,
            "inbound recorded"
        );

        Ok(InboundReceipt {
            product_id: product.id,
            quantity: product.quantity,
            created,
            entry_id: entry.id,
        })
    }

    async fn add_quantity(
        &self,
        product: ProductId,
        restock: NewRestock,
    ) -> Result<RestockReceipt, StockServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self.products.lock_product(&mut tx, product).await?;

        let level = StockLevel::new(current.quantity).restocked(restock.quantity)?;

        let unit_price = match restock.unit_price {
            Some(price) => price,
            None => catalog_price(&current)?,
        };

        let updated = self
            .products
            .set_stock_level(&mut tx, product, level.get(), level.condition_status())
            .await?;

        let entry = self
            .ledger
            .append_inbound(
                &mut tx,
                &NewLedgerEntry {
                    product_id: product,
                    quantity: restock.quantity,
                    unit_price,
                    notes: restock.notes,
                },
            )
            .await?;

        tx.commit().await?;

        debug!(product_id = %product, quantity = updated.quantity, "quantity added");

        Ok(RestockReceipt {
            product_id: product,
            quantity: updated.quantity,
            entry_id: entry.id,
        })
    }

    async fn record_outbound(
        &self,
        product: ProductId,
        sale: NewSale,
    ) -> Result<SaleReceipt, StockServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self.products.lock_product(&mut tx, product).await?;

        // Dropping the transaction on error releases the row lock without writing.
        let level = StockLevel::new(current.quantity).sold(sale.quantity)?;

        let unit_price = match sale.unit_price {
            Some(price) => price,
            None => catalog_price(&current)?,
        };

        let updated = self
            .products
            .set_stock_level(&mut tx, product, level.get(), level.condition_status())
            .await?;

        let entry = self
            .ledger
            .append_outbound(
                &mut tx,
                &NewLedgerEntry {
                    product_id: product,
                    quantity: sale.quantity,
                    unit_price,
                    notes: sale.notes,
                },
            )
            .await?;

        tx.commit().await?;

        debug!(product_id = %product, remaining = updated.quantity, "outbound recorded");

        Ok(SaleReceipt {
            product_id: product,
            remaining_quantity: updated.quantity,
            condition_status: updated.condition_status,
            entry_id: entry.id,
        })
    }
}

#[automock]
#[async_trait]
pub trait StockService: Send + Sync {
    /// Receive stock described by its identity, merging into a matching product or creating one.
    async fn record_inbound(&self, inbound: NewInbound) -> Result<InboundReceipt, StockServiceError>;

    /// Receive more units of a known product. The catalog price is left as is.
    async fn add_quantity(
        &self,
        product: ProductId,
        restock: NewRestock,
    ) -> Result<RestockReceipt, StockServiceError>;

    /// Sell units of a product, refusing to go below zero.
    async fn record_outbound(
        &self,
        product: ProductId,
        sale: NewSale,
    ) -> Result<SaleReceipt, StockServiceError>;
}
