use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use landdev_core_api::{AgreementInput, ApiError, ApiResult, DerivedFields};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::models::identifiable::Identifiable;
use crate::utils::bounded;
use crate::models::sortable::Sortable;

/// Database model for a land-development agreement
///
/// Holds the raw submission together with every derived field. The derived
/// fields are only ever produced by the derivation pipeline.
///
/// String columns hold [`crate::utils::UTF8_MAX_BYTES`] bytes per character, so
/// `HeaplessString<400>` is a 100 character column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgreementModel {
    pub id: HeaplessString<144>,
    pub survey_no: HeaplessString<400>,
    pub firm_name: HeaplessString<800>,
    pub land_owner: HeaplessString<800>,
    pub area: HeaplessString<200>,
    pub area_in_guntas: Decimal,
    pub doc_no_1: HeaplessString<400>,
    pub agreement_date: HeaplessString<80>,
    pub development_months: i32,
    pub development_end_date: HeaplessString<80>,
    pub possession_status: HeaplessString<200>,
    pub rent_per_sqft: Decimal,
    pub free_area_bu: Decimal,
    pub free_area_cp: Decimal,
    pub total_months: i32,
    pub total_rent: Decimal,
    pub agreement_value: Decimal,
    pub deposit_da: Decimal,
    pub stamp_duty_1: Decimal,
    pub regi_dd_1: Decimal,
    pub handling_charges_1: Decimal,
    pub adjudication_1: Decimal,
    pub legal_expenses_1: Decimal,
    pub doc_no_2: HeaplessString<400>,
    pub date_2: HeaplessString<80>,
    pub stamp_duty_2: Decimal,
    pub regi_dd_2: Decimal,
    pub handling_charges_2: Decimal,
    pub legal_expenses_2: Decimal,
    pub doc_no_3: HeaplessString<400>,
    pub date_3: HeaplessString<80>,
    pub stamp_duty_3: Decimal,
    pub regi_dd_3: Decimal,
    pub handling_charges_3: Decimal,
    pub agreement_1_expense: Decimal,
    pub agreement_2_expense: Decimal,
    pub agreement_3_expense: Decimal,
    pub total_agreement_expense: Decimal,
    pub real_value_per_acre: Decimal,
    pub created_at: DateTime<Utc>,
}

impl AgreementModel {
    /// Builds a full record from a submission and its derived fields.
    ///
    /// Fails with a validation error when a string does not fit its column.
    pub fn assemble(
        id: &str,
        input: &AgreementInput,
        derived: DerivedFields,
        created_at: DateTime<Utc>,
    ) -> ApiResult<Self> {
        Ok(AgreementModel {
            id: bounded("id", id)?,
            survey_no: bounded("survey_no", &input.survey_no)?,
            firm_name: bounded("firm_name", &input.firm_name)?,
            land_owner: bounded("land_owner", &input.land_owner)?,
            area: bounded("area", &input.area)?,
            area_in_guntas: derived.area_in_guntas,
            doc_no_1: bounded("doc_no_1", &input.doc_no_1)?,
            agreement_date: bounded("agreement_date", &input.agreement_date)?,
            development_months: input.development_months,
            development_end_date: bounded("development_end_date", &derived.development_end_date)?,
            possession_status: bounded("possession_status", &input.possession_status)?,
            rent_per_sqft: input.rent_per_sqft,
            free_area_bu: input.free_area_bu,
            free_area_cp: input.free_area_cp,
            total_months: derived.total_months,
            total_rent: derived.total_rent,
            agreement_value: input.agreement_value,
            deposit_da: input.deposit_da,
            stamp_duty_1: input.stamp_duty_1,
            regi_dd_1: input.regi_dd_1,
            handling_charges_1: input.handling_charges_1,
            adjudication_1: input.adjudication_1,
            legal_expenses_1: input.legal_expenses_1,
            doc_no_2: bounded("doc_no_2", &input.doc_no_2)?,
            date_2: bounded("date_2", &input.date_2)?,
            stamp_duty_2: input.stamp_duty_2,
            regi_dd_2: input.regi_dd_2,
            handling_charges_2: input.handling_charges_2,
            legal_expenses_2: input.legal_expenses_2,
            doc_no_3: bounded("doc_no_3", &input.doc_no_3)?,
            date_3: bounded("date_3", &input.date_3)?,
            stamp_duty_3: input.stamp_duty_3,
            regi_dd_3: input.regi_dd_3,
            handling_charges_3: input.handling_charges_3,
            agreement_1_expense: derived.expenses.agreement_1_expense,
            agreement_2_expense: derived.expenses.agreement_2_expense,
            agreement_3_expense: derived.expenses.agreement_3_expense,
            total_agreement_expense: derived.expenses.total_agreement_expense,
            real_value_per_acre: derived.real_value_per_acre,
            created_at,
        })
    }
}

impl Identifiable for AgreementModel {
    fn get_id(&self) -> &str {
        self.id.as_str()
    }
}

/// Fields an agreement listing can be ordered by, one per stored column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgreementSortField {
    Id,
    SurveyNo,
    FirmName,
    LandOwner,
    Area,
    AreaInGuntas,
    DocNo1,
    AgreementDate,
    DevelopmentMonths,
    DevelopmentEndDate,
    PossessionStatus,
    RentPerSqft,
    FreeAreaBu,
    FreeAreaCp,
    TotalMonths,
    TotalRent,
    AgreementValue,
    DepositDa,
    StampDuty1,
    RegiDd1,
    HandlingCharges1,
    Adjudication1,
    LegalExpenses1,
    DocNo2,
    Date2,
    StampDuty2,
    RegiDd2,
    HandlingCharges2,
    LegalExpenses2,
    DocNo3,
    Date3,
    StampDuty3,
    RegiDd3,
    HandlingCharges3,
    Agreement1Expense,
    Agreement2Expense,
    Agreement3Expense,
    TotalAgreementExpense,
    RealValuePerAcre,
    #[default]
    CreatedAt,
}

impl AgreementSortField {
    /// Column name, also the JSON field name
    pub fn as_str(&self) -> &'static str {
        match self {
            AgreementSortField::Id => "id",
            AgreementSortField::SurveyNo => "survey_no",
            AgreementSortField::FirmName => "firm_name",
            AgreementSortField::LandOwner => "land_owner",
            AgreementSortField::Area => "area",
            AgreementSortField::AreaInGuntas => "area_in_guntas",
            AgreementSortField::DocNo1 => "doc_no_1",
            AgreementSortField::AgreementDate => "agreement_date",
            AgreementSortField::DevelopmentMonths => "development_months",
            AgreementSortField::DevelopmentEndDate => "development_end_date",
            AgreementSortField::PossessionStatus => "possession_status",
            AgreementSortField::RentPerSqft => "rent_per_sqft",
            AgreementSortField::FreeAreaBu => "free_area_bu",
            AgreementSortField::FreeAreaCp => "free_area_cp",
            AgreementSortField::TotalMonths => "total_months",
            AgreementSortField::TotalRent => "total_rent",
            AgreementSortField::AgreementValue => "agreement_value",
            AgreementSortField::DepositDa => "deposit_da",
            AgreementSortField::StampDuty1 => "stamp_duty_1",
            AgreementSortField::RegiDd1 => "regi_dd_1",
            AgreementSortField::HandlingCharges1 => "handling_charges_1",
            AgreementSortField::Adjudication1 => "adjudication_1",
            AgreementSortField::LegalExpenses1 => "legal_expenses_1",
            AgreementSortField::DocNo2 => "doc_no_2",
            AgreementSortField::Date2 => "date_2",
            AgreementSortField::StampDuty2 => "stamp_duty_2",
            AgreementSortField::RegiDd2 => "regi_dd_2",
            AgreementSortField::HandlingCharges2 => "handling_charges_2",
            AgreementSortField::LegalExpenses2 => "legal_expenses_2",
            AgreementSortField::DocNo3 => "doc_no_3",
            AgreementSortField::Date3 => "date_3",
            AgreementSortField::StampDuty3 => "stamp_duty_3",
            AgreementSortField::RegiDd3 => "regi_dd_3",
            AgreementSortField::HandlingCharges3 => "handling_charges_3",
            AgreementSortField::Agreement1Expense => "agreement_1_expense",
            AgreementSortField::Agreement2Expense => "agreement_2_expense",
            AgreementSortField::Agreement3Expense => "agreement_3_expense",
            AgreementSortField::TotalAgreementExpense => "total_agreement_expense",
            AgreementSortField::RealValuePerAcre => "real_value_per_acre",
            AgreementSortField::CreatedAt => "created_at",
        }
    }

    pub const ALL: [AgreementSortField; 40] = [
        AgreementSortField::Id,
        AgreementSortField::SurveyNo,
        AgreementSortField::FirmName,
        AgreementSortField::LandOwner,
        AgreementSortField::Area,
        AgreementSortField::AreaInGuntas,
        AgreementSortField::DocNo1,
        AgreementSortField::AgreementDate,
        AgreementSortField::DevelopmentMonths,
        AgreementSortField::DevelopmentEndDate,
        AgreementSortField::PossessionStatus,
        AgreementSortField::RentPerSqft,
        AgreementSortField::FreeAreaBu,
        AgreementSortField::FreeAreaCp,
        AgreementSortField::TotalMonths,
        AgreementSortField::TotalRent,
        AgreementSortField::AgreementValue,
        AgreementSortField::DepositDa,
        AgreementSortField::StampDuty1,
        AgreementSortField::RegiDd1,
        AgreementSortField::HandlingCharges1,
        AgreementSortField::Adjudication1,
        AgreementSortField::LegalExpenses1,
        AgreementSortField::DocNo2,
        AgreementSortField::Date2,
        AgreementSortField::StampDuty2,
        AgreementSortField::RegiDd2,
        AgreementSortField::HandlingCharges2,
        AgreementSortField::LegalExpenses2,
        AgreementSortField::DocNo3,
        AgreementSortField::Date3,
        AgreementSortField::StampDuty3,
        AgreementSortField::RegiDd3,
        AgreementSortField::HandlingCharges3,
        AgreementSortField::Agreement1Expense,
        AgreementSortField::Agreement2Expense,
        AgreementSortField::Agreement3Expense,
        AgreementSortField::TotalAgreementExpense,
        AgreementSortField::RealValuePerAcre,
        AgreementSortField::CreatedAt,
    ];
}

impl FromStr for AgreementSortField {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgreementSortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ApiError::ValidationError(format!("Cannot sort by '{s}'")))
    }
}

impl Sortable for AgreementModel {
    type SortField = AgreementSortField;

    fn compare_by(&self, other: &Self, field: AgreementSortField) -> Ordering {
        match field {
            AgreementSortField::Id => self.id.as_str().cmp(other.id.as_str()),
            AgreementSortField::SurveyNo => self.survey_no.as_str().cmp(other.survey_no.as_str()),
            AgreementSortField::FirmName => self.firm_name.as_str().cmp(other.firm_name.as_str()),
            AgreementSortField::LandOwner => {
                self.land_owner.as_str().cmp(other.land_owner.as_str())
            }
            AgreementSortField::Area => self.area.as_str().cmp(other.area.as_str()),
            AgreementSortField::AreaInGuntas => self.area_in_guntas.cmp(&other.area_in_guntas),
            AgreementSortField::DocNo1 => self.doc_no_1.as_str().cmp(other.doc_no_1.as_str()),
            AgreementSortField::AgreementDate => {
                self.agreement_date.as_str().cmp(other.agreement_date.as_str())
            }
            AgreementSortField::DevelopmentMonths => {
                self.development_months.cmp(&other.development_months)
            }
            AgreementSortField::DevelopmentEndDate => {
                self.development_end_date.as_str().cmp(other.development_end_date.as_str())
            }
            AgreementSortField::PossessionStatus => {
                self.possession_status.as_str().cmp(other.possession_status.as_str())
            }
            AgreementSortField::RentPerSqft => self.rent_per_sqft.cmp(&other.rent_per_sqft),
            AgreementSortField::FreeAreaBu => self.free_area_bu.cmp(&other.free_area_bu),
            AgreementSortField::FreeAreaCp => self.free_area_cp.cmp(&other.free_area_cp),
            AgreementSortField::TotalMonths => self.total_months.cmp(&other.total_months),
            AgreementSortField::TotalRent => self.total_rent.cmp(&other.total_rent),
            AgreementSortField::AgreementValue => self.agreement_value.cmp(&other.agreement_value),
            AgreementSortField::DepositDa => self.deposit_da.cmp(&other.deposit_da),
            AgreementSortField::StampDuty1 => self.stamp_duty_1.cmp(&other.stamp_duty_1),
            AgreementSortField::RegiDd1 => self.regi_dd_1.cmp(&other.regi_dd_1),
            AgreementSortField::HandlingCharges1 => {
                self.handling_charges_1.cmp(&other.handling_charges_1)
            }
            AgreementSortField::Adjudication1 => self.adjudication_1.cmp(&other.adjudication_1),
            AgreementSortField::LegalExpenses1 => {
                self.legal_expenses_1.cmp(&other.legal_expenses_1)
            }
            AgreementSortField::DocNo2 => self.doc_no_2.as_str().cmp(other.doc_no_2.as_str()),
            AgreementSortField::Date2 => self.date_2.as_str().cmp(other.date_2.as_str()),
            AgreementSortField::StampDuty2 => self.stamp_duty_2.cmp(&other.stamp_duty_2),
            AgreementSortField::RegiDd2 => self.regi_dd_2.cmp(&other.regi_dd_2),
            AgreementSortField::HandlingCharges2 => {
                self.handling_charges_2.cmp(&other.handling_charges_2)
            }
            AgreementSortField::LegalExpenses2 => {
                self.legal_expenses_2.cmp(&other.legal_expenses_2)
            }
            AgreementSortField::DocNo3 => self.doc_no_3.as_str().cmp(other.doc_no_3.as_str()),
            AgreementSortField::Date3 => self.date_3.as_str().cmp(other.date_3.as_str()),
            AgreementSortField::StampDuty3 => self.stamp_duty_3.cmp(&other.stamp_duty_3),
            AgreementSortField::RegiDd3 => self.regi_dd_3.cmp(&other.regi_dd_3),
            AgreementSortField::HandlingCharges3 => {
                self.handling_charges_3.cmp(&other.handling_charges_3)
            }
            AgreementSortField::Agreement1Expense => {
                self.agreement_1_expense.cmp(&other.agreement_1_expense)
            }
            AgreementSortField::Agreement2Expense => {
                self.agreement_2_expense.cmp(&other.agreement_2_expense)
            }
            AgreementSortField::Agreement3Expense => {
                self.agreement_3_expense.cmp(&other.agreement_3_expense)
            }
            AgreementSortField::TotalAgreementExpense => {
                self.total_agreement_expense.cmp(&other.total_agreement_expense)
            }
            AgreementSortField::RealValuePerAcre => {
                self.real_value_per_acre.cmp(&other.real_value_per_acre)
            }
            AgreementSortField::CreatedAt => self.created_at.cmp(&other.created_at),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_utils::{create_test_agreement, create_test_input};
    use super::*;
    use landdev_core_api::derive;
    use chrono::NaiveDate;

    #[test]
    fn test_assemble_copies_input_and_derived_fields() {
        let input = create_test_input("S-1", "1.50.0");
        let derived = derive(&input, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let model = AgreementModel::assemble("abc", &input, derived.clone(), Utc::now()).unwrap();

        assert_eq!(model.get_id(), "abc");
        assert_eq!(model.survey_no.as_str(), "S-1");
        assert_eq!(model.area_in_guntas, derived.area_in_guntas);
        assert_eq!(model.development_end_date.as_str(), "01-07-2023");
        assert_eq!(model.total_months, 6);
        assert_eq!(model.agreement_1_expense, Decimal::from(150));
        assert_eq!(model.total_agreement_expense, Decimal::from(150));
    }

    #[test]
    fn test_assemble_rejects_oversized_id() {
        let input = create_test_input("S-1", "1.50.0");
        let derived = derive(&input, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let id = "x".repeat(37);
        let result = AgreementModel::assemble(&id, &input, derived, Utc::now());
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
    }

    #[test]
    fn test_sort_field_parsing() {
        assert_eq!(
            AgreementSortField::from_str("total_rent").unwrap(),
            AgreementSortField::TotalRent
        );
        assert_eq!(
            AgreementSortField::from_str("agreement_1_expense").unwrap(),
            AgreementSortField::Agreement1Expense
        );
        assert_eq!(
            AgreementSortField::from_str("stamp_duty_3").unwrap(),
            AgreementSortField::StampDuty3
        );
        assert_eq!(AgreementSortField::from_str("doc_no_2").unwrap(), AgreementSortField::DocNo2);
        assert_eq!(AgreementSortField::default(), AgreementSortField::CreatedAt);
        assert_eq!(AgreementSortField::ALL.len(), 40);
        assert!(AgreementSortField::from_str("password_hash").is_err());
        for field in AgreementSortField::ALL {
            assert_eq!(AgreementSortField::from_str(field.as_str()).unwrap(), field);
        }
    }

    #[test]
    fn test_compare_by_numeric_field() {
        let small = create_test_agreement("a", "S-1", "0.10.0");
        let large = create_test_agreement("b", "S-2", "1.00.0");
        assert_eq!(
            small.compare_by(&large, AgreementSortField::AreaInGuntas),
            Ordering::Less
        );
        assert_eq!(small.compare_by(&large, AgreementSortField::Id), Ordering::Less);
    }
}
