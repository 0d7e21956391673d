//! Profit report rows and totals.

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::{
    ledger::records::OutboundId,
    products::records::{ProductId, ProductLabel},
};

/// Sale row as read from storage, before numeric coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleProfitRow {
    pub transaction_id: OutboundId,
    pub product_id: ProductId,
    pub product: ProductLabel,
    pub transaction_date: Timestamp,
    pub sold_quantity: Option<i64>,
    pub sale_price: Option<Decimal>,
    pub product_price: Option<Decimal>,
    pub avg_cost: Option<Decimal>,
    pub profit: Option<Decimal>,
}

/// Profit attributed to one sale.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitLine {
    pub transaction_id: OutboundId,
    pub product_id: ProductId,
    pub product: ProductLabel,
    pub transaction_date: Timestamp,
    pub sold_quantity: i64,
    pub sale_price: Decimal,
    pub product_price: Decimal,
    pub avg_cost: Decimal,
    pub revenue: Decimal,
    pub profit: Decimal,
}

impl From<SaleProfitRow> for ProfitLine {
    /// Missing figures count as zero.
    fn from(row: SaleProfitRow) -> Self {
        let sold_quantity = row.sold_quantity.unwrap_or_default();
        let sale_price = row.sale_price.unwrap_or_default();

        Self {
            transaction_id: row.transaction_id,
            product_id: row.product_id,
            product: row.product,
            transaction_date: row.transaction_date,
            sold_quantity,
            sale_price,
            product_price: row.product_price.unwrap_or_default(),
            avg_cost: row.avg_cost.unwrap_or_default(),
            revenue: sale_price * Decimal::from(sold_quantity),
            profit: row.profit.unwrap_or_default(),
        }
    }
}

/// Every sale with its attributed profit, newest first, plus totals.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitReport {
    pub transactions: Vec<ProfitLine>,
    pub total_profit: Decimal,
    pub total_revenue: Decimal,
    pub transaction_count: usize,
}

impl ProfitReport {
    #[must_use]
    pub fn from_lines(transactions: Vec<ProfitLine>) -> Self {
        let total_profit = transactions.iter().map(|line| line.profit).sum();
        let total_revenue = transactions.iter().map(|line| line.revenue).sum();

        Self {
            transaction_count: transactions.len(),
            transactions,
            total_profit,
            total_revenue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfitSummary {
    pub total_profit: Decimal,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::domain::products::records::CapacityUnit;

    use super::*;

    fn row(id: i64, quantity: Option<i64>, price: Option<Decimal>, profit: Option<Decimal>) -> SaleProfitRow {
        SaleProfitRow {
            transaction_id: OutboundId::from_i64(id),
            product_id: ProductId::from_i64(1),
            product: ProductLabel {
                brand: "Acme".to_string(),
                model: "X".to_string(),
                capacity: dec!(500),
                capacity_unit: CapacityUnit::Gb,
            },
            transaction_date: Timestamp::UNIX_EPOCH,
            sold_quantity: quantity,
            sale_price: price,
            product_price: Some(dec!(60)),
            avg_cost: Some(dec!(55)),
            profit,
        }
    }

    #[test]
    fn line_revenue_is_price_times_quantity() {
        let line = ProfitLine::from(row(1, Some(5), Some(dec!(80)), Some(dec!(125))));

        assert_eq!(line.revenue, dec!(400));
        assert_eq!(line.profit, dec!(125));
    }

    #[test]
    fn missing_figures_coerce_to_zero() {
        let line = ProfitLine::from(row(1, None, None, None));

        assert_eq!(line.sold_quantity, 0);
        assert_eq!(line.sale_price, Decimal::ZERO);
        assert_eq!(line.revenue, Decimal::ZERO);
        assert_eq!(line.profit, Decimal::ZERO);
    }

    #[test]
    fn report_totals_sum_lines() {
        let report = ProfitReport::from_lines(vec![
            ProfitLine::from(row(2, Some(5), Some(dec!(80)), Some(dec!(125)))),
            ProfitLine::from(row(1, Some(1), Some(dec!(50)), Some(dec!(-5)))),
            ProfitLine::from(row(3, Some(2), None, None)),
        ]);

        assert_eq!(report.transaction_count, 3);
        assert_eq!(report.total_profit, dec!(120));
        assert_eq!(report.total_revenue, dec!(450));
    }

    #[test]
    fn empty_report_is_zero() {
        let report = ProfitReport::from_lines(Vec::new());

        assert_eq!(report.transaction_count, 0);
        assert_eq!(report.total_profit, Decimal::ZERO);
        assert_eq!(report.total_revenue, Decimal::ZERO);
    }
}
