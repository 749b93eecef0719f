use landdev_core_api::DashboardSummary;
use rust_decimal::Decimal;

use super::agreement::AgreementModel;

/// Folds a snapshot of agreements into the dashboard aggregate.
pub fn summarize(agreements: &[AgreementModel]) -> DashboardSummary {
    let mut summary = agreements
        .iter()
        .fold(DashboardSummary::default(), |mut acc, a| {
            acc.total_land_count += 1;
            acc.total_area_guntas = acc.total_area_guntas.saturating_add(a.area_in_guntas);
            acc.total_free_bu_area = acc.total_free_bu_area.saturating_add(a.free_area_bu);
            acc.total_rent_value = acc.total_rent_value.saturating_add(a.total_rent);
            acc.total_agreement_expenses = acc
                .total_agreement_expenses
                .saturating_add(a.total_agreement_expense);
            acc
        });

    let total_deposits = agreements
        .iter()
        .fold(Decimal::ZERO, |acc, a| acc.saturating_add(a.deposit_da));
    summary.net_project_cost = summary.total_agreement_expenses.saturating_add(total_deposits);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::agreement::agreement::test_utils::create_test_agreement;

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary, DashboardSummary::default());
    }

    #[test]
    fn test_summarize_sums_every_column() {
        let mut a = create_test_agreement("a", "S-1", "1.50.0");
        let mut b = create_test_agreement("b", "S-2", "0.52.18");
        a.total_rent = Decimal::from(300);
        b.total_rent = Decimal::from(200);
        b.deposit_da = Decimal::from(1_000);

        let summary = summarize(&[a.clone(), b.clone()]);

        assert_eq!(summary.total_land_count, 2);
        assert_eq!(summary.total_area_guntas, a.area_in_guntas + b.area_in_guntas);
        assert_eq!(summary.total_free_bu_area, Decimal::from(2_000));
        assert_eq!(summary.total_rent_value, Decimal::from(500));
        assert_eq!(summary.total_agreement_expenses, Decimal::from(300));
        // expenses plus deposits of 5000 and 1000
        assert_eq!(summary.net_project_cost, Decimal::from(6_300));
    }
}
