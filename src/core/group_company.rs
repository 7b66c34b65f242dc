//! Group company directory - a read-only list shown to every organization.

use crate::{
    entities::{GroupCompany, group_company},
    errors::Result,
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all group companies, ordered alphabetically by name.
pub async fn list_group_companies(db: &DatabaseConnection) -> Result<Vec<group_company::Model>> {
    GroupCompany::find()
        .order_by_asc(group_company::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a group company by its name.
pub async fn get_group_company_by_name<C>(
    db: &C,
    name: &str,
) -> Result<Option<group_company::Model>>
where
    C: ConnectionTrait,
{
    GroupCompany::find()
        .filter(group_company::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Adds a group company. Only used when seeding the directory.
pub async fn create_group_company<C>(db: &C, name: &str) -> Result<group_company::Model>
where
    C: ConnectionTrait,
{
    let name = super::validate_name("group company", name)?;
    let now = super::now();
    group_company::ActiveModel {
        name: Set(name),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(Into::into)
}
