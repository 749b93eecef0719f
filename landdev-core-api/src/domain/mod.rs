pub mod agreement;
pub mod area;
pub mod auth;
pub mod calendar;
pub mod dashboard;

pub use agreement::{AgreementExpenses, AgreementInput, DerivedFields};
pub use area::parse_area_to_guntas;
pub use auth::{
    Claims, ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest, TokenResponse,
};
pub use calendar::{add_months, format_date, months_between, parse_date, DATE_FORMAT};
pub use dashboard::DashboardSummary;
