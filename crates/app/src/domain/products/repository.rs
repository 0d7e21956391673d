//! Products Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    products::{
        data::{NewProduct, ProductUpdate},
        records::{
            CapacityUnit, ConditionStatus, ProductId, ProductIdentity, ProductLabel,
            ProductRecord,
        },
    },
    values::Money,
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const DUMP_PRODUCTS_SQL: &str = include_str!("sql/dump_products.sql");
const GET_PRODUCT_SQL: &str = include_str!("sql/get_product.sql");
const LOCK_PRODUCT_SQL: &str = include_str!("sql/lock_product.sql");
const LOCK_IDENTITY_SQL: &str = include_str!("sql/lock_identity.sql");
const FIND_BY_IDENTITY_SQL: &str = include_str!("sql/find_by_identity.sql");
const CREATE_PRODUCT_SQL: &str = include_str!("sql/create_product.sql");
const MERGE_INBOUND_SQL: &str = include_str!("sql/merge_inbound.sql");
const SET_STOCK_LEVEL_SQL: &str = include_str!("sql/set_stock_level.sql");
const UPDATE_PRODUCT_SQL: &str = include_str!("sql/update_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgProductsRepository;

impl PgProductsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    /// Every product in id order.
    pub(crate) async fn dump_products(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(DUMP_PRODUCTS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn get_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(GET_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    /// Read a product and hold its row lock until the transaction ends.
    pub(crate) async fn lock_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(LOCK_PRODUCT_SQL)
            .bind(product.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    /// Serialise writers that target the same identity, including ones about to insert it.
    pub(crate) async fn lock_identity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        identity: &ProductIdentity,
    ) -> Result<(), sqlx::Error> {
        query(LOCK_IDENTITY_SQL)
            .bind(identity.lock_key())
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn find_by_identity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        identity: &ProductIdentity,
    ) -> Result<Option<ProductRecord>, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(FIND_BY_IDENTITY_SQL)
            .bind(&identity.brand)
            .bind(&identity.model)
            .bind(identity.capacity.value())
            .bind(identity.capacity_unit.as_str())
            .bind(identity.interface.as_deref())
            .bind(identity.form_factor.as_deref())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn create_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &NewProduct,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(CREATE_PRODUCT_SQL)
            .bind(&product.identity.brand)
            .bind(&product.identity.model)
            .bind(product.identity.capacity.value())
            .bind(product.identity.capacity_unit.as_str())
            .bind(product.identity.interface.as_deref())
            .bind(product.identity.form_factor.as_deref())
            .bind(product.warranty_period.as_deref())
            .bind(product.quantity)
            .bind(product.unit_price.amount())
            .bind(product.condition_status.as_str())
            .bind(product.is_active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn merge_inbound(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        quantity: i64,
        unit_price: Money,
        condition_status: ConditionStatus,
        is_active: bool,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(MERGE_INBOUND_SQL)
            .bind(product.into_i64())
            .bind(quantity)
            .bind(unit_price.amount())
            .bind(condition_status.as_str())
            .bind(is_active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn set_stock_level(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        quantity: i64,
        condition_status: ConditionStatus,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(SET_STOCK_LEVEL_SQL)
            .bind(product.into_i64())
            .bind(quantity)
            .bind(condition_status.as_str())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
        update: &ProductUpdate,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(UPDATE_PRODUCT_SQL)
            .bind(product.into_i64())
            .bind(update.unit_price.map(Money::amount))
            .bind(update.condition_status.map(ConditionStatus::as_str))
            .bind(update.is_active)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_product(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: ProductId,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_PRODUCT_SQL)
            .bind(product.into_i64())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let condition_status: String = row.try_get("condition_status")?;

        Ok(Self {
            id: ProductId::from_i64(row.try_get("id")?),
            brand: row.try_get("brand")?,
            model: row.try_get("model")?,
            capacity: row.try_get("capacity")?,
            capacity_unit: try_get_capacity_unit(row, "capacity_unit")?,
            interface: row.try_get("interface")?,
            form_factor: row.try_get("form_factor")?,
            warranty_period: row.try_get("warranty_period")?,
            quantity: row.try_get("quantity")?,
            unit_price: row.try_get("unit_price")?,
            condition_status: condition_status
                .parse::<ConditionStatus>()
                .map_err(|e| sqlx::Error::ColumnDecode {
                    index: "condition_status".to_string(),
                    source: Box::new(e),
                })?,
            is_active: row.try_get("is_active")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

/// Decode the `brand`, `model`, `capacity` and `capacity_unit` columns of a joined row.
pub(crate) fn try_get_label(row: &PgRow) -> Result<ProductLabel, sqlx::Error> {
    Ok(ProductLabel {
        brand: row.try_get("brand")?,
        model: row.try_get("model")?,
        capacity: row.try_get::<Decimal, _>("capacity")?,
        capacity_unit: try_get_capacity_unit(row, "capacity_unit")?,
    })
}

pub(crate) fn try_get_capacity_unit(row: &PgRow, col: &str) -> Result<CapacityUnit, sqlx::Error> {
    let unit: String = row.try_get(col)?;

    unit.parse::<CapacityUnit>()
        .map_err(|e| sqlx::Error::ColumnDecode {
            index: col.to_string(),
            source: Box::new(e),
        })
}
