pub mod agreement;
pub mod dashboard;

pub use agreement::{AgreementModel, AgreementSortField};
pub use dashboard::summarize;
