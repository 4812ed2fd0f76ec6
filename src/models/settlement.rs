//! Settlement report models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One confirmed trip in a settlement report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRow {
    /// The ID of the settled trip.
    pub trip_id: String,
    /// Destination label, e.g. `"SK – Bratislava"`.
    pub label: String,
    /// The start of the trip as entered.
    pub start: String,
    /// The end of the trip as entered.
    pub end: String,
    /// Free-text purpose of the trip.
    pub purpose: String,
    /// The per-diem subtotal.
    pub per_diem: Decimal,
    /// The lodging invoice amount.
    pub lodging: Decimal,
    /// The applied differential allowance.
    pub differential: Decimal,
    /// The trip's grand total.
    pub sum: Decimal,
}

/// The settlement of all confirmed trips of one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// The user being settled.
    pub user_id: String,
    /// One row per confirmed trip, in input order.
    pub rows: Vec<SettlementRow>,
    /// The rounded sum of all row sums.
    pub total: Decimal,
}
