//! Profit Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    ledger::records::OutboundId,
    products::{records::ProductId, repository::try_get_label},
    profit::report::SaleProfitRow,
};

const LIST_SALE_PROFITS_SQL: &str = include_str!("sql/list_sale_profits.sql");
const TOTAL_PROFIT_SQL: &str = include_str!("sql/total_profit.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProfitRepository;

impl PgProfitRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_sale_profits(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<SaleProfitRow>, sqlx::Error> {
        query_as::<Postgres, SaleProfitRow>(LIST_SALE_PROFITS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn total_profit(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Decimal, sqlx::Error> {
        let row = query(TOTAL_PROFIT_SQL).fetch_one(&mut **tx).await?;

        Ok(row
            .try_get::<Option<Decimal>, _>("total_profit")?
            .unwrap_or_default())
    }
}

impl<'r> FromRow<'r, PgRow> for SaleProfitRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            transaction_id: OutboundId::from_i64(row.try_get("transaction_id")?),
            product_id: ProductId::from_i64(row.try_get("product_id")?),
            product: try_get_label(row)?,
            transaction_date: row
                .try_get::<SqlxTimestamp, _>("transaction_date")?
                .to_jiff(),
            sold_quantity: row.try_get("sold_quantity")?,
            sale_price: row.try_get("sale_price")?,
            product_price: row.try_get("product_price")?,
            avg_cost: row.try_get("avg_cost")?,
            profit: row.try_get("profit")?,
        })
    }
}
