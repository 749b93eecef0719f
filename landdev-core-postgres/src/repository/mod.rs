pub mod agreement;
pub mod auth;
pub mod db_init;
