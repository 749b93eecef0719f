use crate::models::agreement::AgreementModel;
use crate::models::auth::UserModel;
use crate::repository::{
    create::Create, delete_by_id::DeleteById, delete_by_username::DeleteByUsername,
    find_by_id::FindById, find_by_username::FindByUsername, find_page::FindPage,
    load_all::LoadAll, upsert::Upsert,
};

/// Every capability the agreement services need from a backend
pub trait AgreementRepository:
    Create<AgreementModel>
    + FindById<AgreementModel>
    + FindPage<AgreementModel>
    + Upsert<AgreementModel>
    + DeleteById
    + LoadAll<AgreementModel>
{
}

impl<R> AgreementRepository for R where
    R: Create<AgreementModel>
        + FindById<AgreementModel>
        + FindPage<AgreementModel>
        + Upsert<AgreementModel>
        + DeleteById
        + LoadAll<AgreementModel>
{
}

/// Every capability the auth services need from a backend
pub trait UserRepository: Create<UserModel> + FindByUsername + DeleteByUsername {}

impl<R> UserRepository for R where R: Create<UserModel> + FindByUsername + DeleteByUsername {}
