use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Raw agreement submission, as accepted on create and update.
///
/// Derived fields are never part of a submission; they are recomputed from
/// these values on every write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AgreementInput {
    #[validate(length(min = 1, max = 100))]
    pub survey_no: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(max = 200))]
    pub firm_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(max = 200))]
    pub land_owner: String,
    #[validate(length(min = 1, max = 50))]
    pub area: String,
    #[validate(length(max = 100))]
    pub doc_no_1: String,
    #[validate(length(max = 20))]
    pub agreement_date: String,
    #[validate(range(min = 0))]
    pub development_months: i32,
    #[validate(length(max = 50))]
    pub possession_status: String,
    pub rent_per_sqft: Decimal,
    pub free_area_bu: Decimal,
    pub free_area_cp: Decimal,
    pub agreement_value: Decimal,
    pub deposit_da: Decimal,

    // Sub-agreement 1
    #[serde(default)]
    pub stamp_duty_1: Decimal,
    #[serde(default)]
    pub regi_dd_1: Decimal,
    #[serde(default)]
    pub handling_charges_1: Decimal,
    #[serde(default)]
    pub adjudication_1: Decimal,
    #[serde(default)]
    pub legal_expenses_1: Decimal,

    // Sub-agreement 2
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(max = 100))]
    pub doc_no_2: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(max = 20))]
    pub date_2: String,
    #[serde(default)]
    pub stamp_duty_2: Decimal,
    #[serde(default)]
    pub regi_dd_2: Decimal,
    #[serde(default)]
    pub handling_charges_2: Decimal,
    #[serde(default)]
    pub legal_expenses_2: Decimal,

    // Sub-agreement 3
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(max = 100))]
    pub doc_no_3: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(max = 20))]
    pub date_3: String,
    #[serde(default)]
    pub stamp_duty_3: Decimal,
    #[serde(default)]
    pub regi_dd_3: Decimal,
    #[serde(default)]
    pub handling_charges_3: Decimal,
}

/// Expense subtotals per sub-agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgreementExpenses {
    pub agreement_1_expense: Decimal,
    pub agreement_2_expense: Decimal,
    pub agreement_3_expense: Decimal,
    pub total_agreement_expense: Decimal,
}

/// Every field computed from an [`AgreementInput`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedFields {
    pub area_in_guntas: Decimal,
    pub development_end_date: String,
    pub total_months: i32,
    pub total_rent: Decimal,
    pub real_value_per_acre: Decimal,
    #[serde(flatten)]
    pub expenses: AgreementExpenses,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
