use landdev_core_db::models::agreement::AgreementModel;
use crate::utils::{get_heapless_string, TryFromRow};
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row};
use std::error::Error;
use std::sync::Arc;

pub struct AgreementRepositoryImpl {
    pub pool: Arc<PgPool>,
}

impl AgreementRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

pub(super) const INSERT_AGREEMENT: &str = r#"
                INSERT INTO agreements (
                    id, survey_no, firm_name, land_owner, area,
                    area_in_guntas, doc_no_1, agreement_date, development_months, development_end_date,
                    possession_status, rent_per_sqft, free_area_bu, free_area_cp, total_months,
                    total_rent, agreement_value, deposit_da, stamp_duty_1, regi_dd_1,
                    handling_charges_1, adjudication_1, legal_expenses_1, doc_no_2, date_2,
                    stamp_duty_2, regi_dd_2, handling_charges_2, legal_expenses_2, doc_no_3,
                    date_3, stamp_duty_3, regi_dd_3, handling_charges_3, agreement_1_expense,
                    agreement_2_expense, agreement_3_expense, total_agreement_expense, real_value_per_acre, created_at
                )
                VALUES (
                    $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18, $19, $20,
                    $21, $22, $23, $24, $25, $26, $27, $28, $29, $30,
                    $31, $32, $33, $34, $35, $36, $37, $38, $39, $40
                )
                "#;

/// Binds every column of an agreement in `INSERT_AGREEMENT` order.
pub(super) fn bind_agreement<'q>(
    query: Query<'q, Postgres, PgArguments>,
    item: &'q AgreementModel,
) -> Query<'q, Postgres, PgArguments> {
    query
        .bind(item.id.as_str())
        .bind(item.survey_no.as_str())
        .bind(item.firm_name.as_str())
        .bind(item.land_owner.as_str())
        .bind(item.area.as_str())
        .bind(item.area_in_guntas)
        .bind(item.doc_no_1.as_str())
        .bind(item.agreement_date.as_str())
        .bind(item.development_months)
        .bind(item.development_end_date.as_str())
        .bind(item.possession_status.as_str())
        .bind(item.rent_per_sqft)
        .bind(item.free_area_bu)
        .bind(item.free_area_cp)
        .bind(item.total_months)
        .bind(item.total_rent)
        .bind(item.agreement_value)
        .bind(item.deposit_da)
        .bind(item.stamp_duty_1)
        .bind(item.regi_dd_1)
        .bind(item.handling_charges_1)
        .bind(item.adjudication_1)
        .bind(item.legal_expenses_1)
        .bind(item.doc_no_2.as_str())
        .bind(item.date_2.as_str())
        .bind(item.stamp_duty_2)
        .bind(item.regi_dd_2)
        .bind(item.handling_charges_2)
        .bind(item.legal_expenses_2)
        .bind(item.doc_no_3.as_str())
        .bind(item.date_3.as_str())
        .bind(item.stamp_duty_3)
        .bind(item.regi_dd_3)
        .bind(item.handling_charges_3)
        .bind(item.agreement_1_expense)
        .bind(item.agreement_2_expense)
        .bind(item.agreement_3_expense)
        .bind(item.total_agreement_expense)
        .bind(item.real_value_per_acre)
        .bind(item.created_at)
}

impl TryFromRow<PgRow> for AgreementModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(AgreementModel {
            id: get_heapless_string(row, "id")?,
            survey_no: get_heapless_string(row, "survey_no")?,
            firm_name: get_heapless_string(row, "firm_name")?,
            land_owner: get_heapless_string(row, "land_owner")?,
            area: get_heapless_string(row, "area")?,
            area_in_guntas: row.try_get("area_in_guntas")?,
            doc_no_1: get_heapless_string(row, "doc_no_1")?,
            agreement_date: get_heapless_string(row, "agreement_date")?,
            development_months: row.try_get("development_months")?,
            development_end_date: get_heapless_string(row, "development_end_date")?,
            possession_status: get_heapless_string(row, "possession_status")?,
            rent_per_sqft: row.try_get("rent_per_sqft")?,
            free_area_bu: row.try_get("free_area_bu")?,
            free_area_cp: row.try_get("free_area_cp")?,
            total_months: row.try_get("total_months")?,
            total_rent: row.try_get("total_rent")?,
            agreement_value: row.try_get("agreement_value")?,
            deposit_da: row.try_get("deposit_da")?,
            stamp_duty_1: row.try_get("stamp_duty_1")?,
            regi_dd_1: row.try_get("regi_dd_1")?,
            handling_charges_1: row.try_get("handling_charges_1")?,
            adjudication_1: row.try_get("adjudication_1")?,
            legal_expenses_1: row.try_get("legal_expenses_1")?,
            doc_no_2: get_heapless_string(row, "doc_no_2")?,
            date_2: get_heapless_string(row, "date_2")?,
            stamp_duty_2: row.try_get("stamp_duty_2")?,
            regi_dd_2: row.try_get("regi_dd_2")?,
            handling_charges_2: row.try_get("handling_charges_2")?,
            legal_expenses_2: row.try_get("legal_expenses_2")?,
            doc_no_3: get_heapless_string(row, "doc_no_3")?,
            date_3: get_heapless_string(row, "date_3")?,
            stamp_duty_3: row.try_get("stamp_duty_3")?,
            regi_dd_3: row.try_get("regi_dd_3")?,
            handling_charges_3: row.try_get("handling_charges_3")?,
            agreement_1_expense: row.try_get("agreement_1_expense")?,
            agreement_2_expense: row.try_get("agreement_2_expense")?,
            agreement_3_expense: row.try_get("agreement_3_expense")?,
            total_agreement_expense: row.try_get("total_agreement_expense")?,
            real_value_per_acre: row.try_get("real_value_per_acre")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
