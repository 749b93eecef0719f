#[cfg(test)]
pub mod test_utils {
    use chrono::{NaiveDate, Utc};
    use landdev_core_api::{derive, AgreementInput};
    use landdev_core_db::models::agreement::AgreementModel;
    use serde_json::json;

    pub fn create_test_input(survey_no: &str, area: &str) -> AgreementInput {
        serde_json::from_value(json!({
            "survey_no": survey_no,
            "firm_name": "Test Developers",
            "land_owner": "Test Owner",
            "area": area,
            "doc_no_1": "DOC-1",
            "agreement_date": "15-03-2023",
            "development_months": 12,
            "possession_status": "pending",
            "rent_per_sqft": 2.5,
            "free_area_bu": 1000,
            "free_area_cp": 800,
            "agreement_value": 100000,
            "deposit_da": 5000,
            "stamp_duty_1": 100,
            "regi_dd_1": 50
        }))
        .unwrap()
    }

    pub fn create_test_agreement(id: &str, survey_no: &str, area: &str) -> AgreementModel {
        let input = create_test_input(survey_no, area);
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        AgreementModel::assemble(id, &input, derive(&input, today), Utc::now()).unwrap()
    }
}
