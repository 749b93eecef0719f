pub mod auth;
pub mod derivation;

pub use auth::{
    hash_password, verify_password, TokenService, DEFAULT_BCRYPT_COST, DEFAULT_TOKEN_TTL_MINUTES,
};
pub use derivation::{
    calculate_agreement_expenses, calculate_development_end_date, calculate_real_value,
    calculate_rent_months, calculate_total_rent, derive,
};
