use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate view over every stored agreement. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_land_count: u64,
    pub total_area_guntas: Decimal,
    pub total_free_bu_area: Decimal,
    pub total_rent_value: Decimal,
    pub total_agreement_expenses: Decimal,
    /// Total agreement expenses plus the sum of all deposits.
    pub net_project_cost: Decimal,
}
