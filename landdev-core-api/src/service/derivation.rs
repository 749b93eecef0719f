//! Derivation pipeline: raw agreement submission to computed fields.
//!
//! Parsing failures never fail a write. An unparseable area becomes zero and an
//! unparseable agreement date becomes `today`.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::agreement::{AgreementExpenses, AgreementInput, DerivedFields};
use crate::domain::area::parse_area_to_guntas;
use crate::domain::calendar::{add_months, format_date, months_between, parse_date};

const GUNTAS_PER_ACRE: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Computes every derived field of an agreement.
///
/// `today` stands in for the current date so the result is a pure function of
/// its arguments.
pub fn derive(input: &AgreementInput, today: NaiveDate) -> DerivedFields {
    let area_in_guntas = parse_area_to_guntas(&input.area);
    let end_date =
        calculate_development_end_date(&input.agreement_date, input.development_months, today);
    let total_months = calculate_rent_months(end_date, &input.possession_status, today);
    let total_rent = calculate_total_rent(total_months, input.rent_per_sqft, input.free_area_bu);
    let real_value_per_acre = calculate_real_value(input.free_area_bu, area_in_guntas);
    let expenses = calculate_agreement_expenses(input);

    DerivedFields {
        area_in_guntas,
        development_end_date: format_date(end_date),
        total_months,
        total_rent,
        real_value_per_acre,
        expenses,
    }
}

/// Agreement date plus the development period, or `today` if the agreement
/// date cannot be parsed.
pub fn calculate_development_end_date(
    agreement_date: &str,
    development_months: i32,
    today: NaiveDate,
) -> NaiveDate {
    parse_date(agreement_date)
        .and_then(|date| add_months(date, i64::from(development_months)))
        .unwrap_or(today)
}

/// Whole months of rent accrued since the development period ended.
pub fn calculate_rent_months(
    development_end_date: NaiveDate,
    possession_status: &str,
    today: NaiveDate,
) -> i32 {
    if possession_status.eq_ignore_ascii_case("given") {
        return 0;
    }
    let months = months_between(today, development_end_date).max(0);
    i32::try_from(months).unwrap_or(i32::MAX)
}

pub fn calculate_total_rent(total_months: i32, rent_per_sqft: Decimal, free_area_bu: Decimal) -> Decimal {
    Decimal::from(total_months)
        .saturating_mul(rent_per_sqft)
        .saturating_mul(free_area_bu)
}

pub fn calculate_real_value(free_area_bu: Decimal, area_in_guntas: Decimal) -> Decimal {
    if area_in_guntas.is_zero() {
        return Decimal::ZERO;
    }
    free_area_bu
        .checked_div(area_in_guntas)
        .map(|ratio| ratio.saturating_mul(GUNTAS_PER_ACRE))
        .unwrap_or(Decimal::ZERO)
}

pub fn calculate_agreement_expenses(input: &AgreementInput) -> AgreementExpenses {
    let agreement_1_expense = sum(&[
        input.stamp_duty_1,
        input.regi_dd_1,
        input.handling_charges_1,
        input.adjudication_1,
        input.legal_expenses_1,
    ]);
    // no adjudication fee on the second agreement
    let agreement_2_expense = sum(&[
        input.stamp_duty_2,
        input.regi_dd_2,
        input.handling_charges_2,
        input.legal_expenses_2,
    ]);
    let agreement_3_expense = sum(&[
        input.stamp_duty_3,
        input.regi_dd_3,
        input.handling_charges_3,
    ]);

    AgreementExpenses {
        agreement_1_expense,
        agreement_2_expense,
        agreement_3_expense,
        total_agreement_expense: sum(&[
            agreement_1_expense,
            agreement_2_expense,
            agreement_3_expense,
        ]),
    }
}

fn sum(values: &[Decimal]) -> Decimal {
    values
        .iter()
        .fold(Decimal::ZERO, |acc, value| acc.saturating_add(*value))
}
