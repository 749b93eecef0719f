use std::sync::Arc;

use landdev_core_api::TokenService;
use landdev_core_db::repository::{AgreementRepository, UserRepository};

use crate::service::{AgreementService, AuthService};

/// Shared by every request handler
#[derive(Clone)]
pub struct AppState {
    pub agreements: AgreementService,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(
        agreement_repository: Arc<dyn AgreementRepository>,
        user_repository: Arc<dyn UserRepository>,
        tokens: TokenService,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            agreements: AgreementService::new(agreement_repository),
            auth: AuthService::new(user_repository, tokens, bcrypt_cost),
        }
    }
}
