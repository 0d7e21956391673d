//! Ledger Repository

use jiff::Timestamp;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    ledger::{
        data::NewLedgerEntry,
        records::{
            InboundId, InboundListing, InboundRecord, LedgerKind, LedgerListing, OutboundId,
            OutboundListing, OutboundRecord,
        },
    },
    products::{records::ProductId, repository::try_get_label},
};

const APPEND_INBOUND_SQL: &str = include_str!("sql/append_inbound.sql");
const APPEND_OUTBOUND_SQL: &str = include_str!("sql/append_outbound.sql");
const LIST_INBOUND_SQL: &str = include_str!("sql/list_inbound.sql");
const LIST_OUTBOUND_SQL: &str = include_str!("sql/list_outbound.sql");
const DUMP_INBOUND_SQL: &str = include_str!("sql/dump_inbound.sql");
const DUMP_OUTBOUND_SQL: &str = include_str!("sql/dump_outbound.sql");
const DELETE_INBOUND_SQL: &str = include_str!("sql/delete_inbound.sql");
const DELETE_OUTBOUND_SQL: &str = include_str!("sql/delete_outbound.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgLedgerRepository;

impl PgLedgerRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn append_inbound(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        entry: &NewLedgerEntry,
    ) -> Result<InboundRecord, sqlx::Error> {
        query_as::<Postgres, InboundRecord>(APPEND_INBOUND_SQL)
            .bind(entry.product_id.into_i64())
            .bind(entry.quantity.get())
            .bind(entry.unit_price.amount())
            .bind(entry.notes.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn append_outbound(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        entry: &NewLedgerEntry,
    ) -> Result<OutboundRecord, sqlx::Error> {
        query_as::<Postgres, OutboundRecord>(APPEND_OUTBOUND_SQL)
            .bind(entry.product_id.into_i64())
            .bind(entry.quantity.get())
            .bind(entry.unit_price.amount())
            .bind(entry.notes.as_deref())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn list_inbound(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<InboundListing>, sqlx::Error> {
        query_as::<Postgres, InboundListing>(LIST_INBOUND_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_outbound(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<OutboundListing>, sqlx::Error> {
        query_as::<Postgres, OutboundListing>(LIST_OUTBOUND_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Raw inbound rows in insertion order.
    pub(crate) async fn dump_inbound(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<InboundRecord>, sqlx::Error> {
        query_as::<Postgres, InboundRecord>(DUMP_INBOUND_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Raw outbound rows in insertion order.
    pub(crate) async fn dump_outbound(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<OutboundRecord>, sqlx::Error> {
        query_as::<Postgres, OutboundRecord>(DUMP_OUTBOUND_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn delete_entry(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        kind: LedgerKind,
        id: i64,
    ) -> Result<u64, sqlx::Error> {
        let sql = match kind {
            LedgerKind::Inbound => DELETE_INBOUND_SQL,
            LedgerKind::Outbound => DELETE_OUTBOUND_SQL,
        };

        let rows_affected = query(sql)
            .bind(id)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

struct EntryColumns {
    id: i64,
    product_id: ProductId,
    quantity: i64,
    unit_price: Decimal,
    transaction_date: Timestamp,
    notes: Option<String>,
}

fn try_get_entry(row: &PgRow) -> Result<EntryColumns, sqlx::Error> {
    Ok(EntryColumns {
        id: row.try_get("id")?,
        product_id: ProductId::from_i64(row.try_get("product_id")?),
        quantity: row.try_get("quantity")?,
        unit_price: row.try_get("unit_price")?,
        transaction_date: row
            .try_get::<SqlxTimestamp, _>("transaction_date")?
            .to_jiff(),
        notes: row.try_get("notes")?,
    })
}

impl<'r> FromRow<'r, PgRow> for InboundRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let entry = try_get_entry(row)?;

        Ok(Self {
            id: InboundId::from_i64(entry.id),
            product_id: entry.product_id,
            quantity: entry.quantity,
            unit_price: entry.unit_price,
            transaction_date: entry.transaction_date,
            notes: entry.notes,
        })
    }
}

impl<'r> FromRow<'r, PgRow> for OutboundRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let entry = try_get_entry(row)?;

        Ok(Self {
            id: OutboundId::from_i64(entry.id),
            product_id: entry.product_id,
            quantity: entry.quantity,
            unit_price: entry.unit_price,
            transaction_date: entry.transaction_date,
            notes: entry.notes,
        })
    }
}

impl<'r, R> FromRow<'r, PgRow> for LedgerListing<R>
where
    R: FromRow<'r, PgRow>,
{
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            record: R::from_row(row)?,
            product: try_get_label(row)?,
        })
    }
}
