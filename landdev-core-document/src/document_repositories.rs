use std::sync::Arc;

use crate::collection::Collection;
use crate::repository::{AgreementDocumentRepository, UserDocumentRepository};

/// In-process document store holding one collection per entity
pub struct DocumentRepositories {
    agreements: Arc<Collection>,
    users: Arc<Collection>,
}

impl DocumentRepositories {
    pub fn new() -> Self {
        Self {
            agreements: Arc::new(Collection::new("agreements")),
            users: Arc::new(Collection::new("users")),
        }
    }

    /// Repositories created from the same store share its collections.
    pub fn create_all_repositories(&self) -> DocumentStoreRepositories {
        DocumentStoreRepositories {
            agreement_repository: Arc::new(AgreementDocumentRepository::new(self.agreements.clone())),
            user_repository: Arc::new(UserDocumentRepository::new(self.users.clone())),
        }
    }
}

impl Default for DocumentRepositories {
    fn default() -> Self {
        Self::new()
    }
}

pub struct DocumentStoreRepositories {
    pub agreement_repository: Arc<AgreementDocumentRepository>,
    pub user_repository: Arc<UserDocumentRepository>,
}
