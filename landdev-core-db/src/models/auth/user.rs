use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use landdev_core_api::ApiResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::bounded;

/// Database model for an authentication principal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserModel {
    pub id: Uuid,
    pub username: HeaplessString<400>,
    pub password_hash: HeaplessString<1020>,
    pub created_at: DateTime<Utc>,
}

impl UserModel {
    pub fn new(username: &str, password_hash: &str) -> ApiResult<Self> {
        Ok(UserModel {
            id: Uuid::new_v4(),
            username: bounded("username", username)?,
            password_hash: bounded("password_hash", password_hash)?,
            created_at: Utc::now(),
        })
    }
}
