//! Organization directory - read access to organizations and their parent links.
//!
//! The propagation engine only needs [`get_organization_by_id`]. Creation is an
//! administrative path used by seeding and fixtures. The parent link is checked
//! for existence but never for cycles.

use crate::{
    entities::{Organization, organization},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{info, instrument};

/// Finds an organization by its unique ID.
pub async fn get_organization_by_id<C>(
    db: &C,
    organization_id: i64,
) -> Result<Option<organization::Model>>
where
    C: ConnectionTrait,
{
    Organization::find_by_id(organization_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds the first organization with the given name.
///
/// Names are not unique; seeding treats them as keys, so the oldest row wins.
pub async fn get_organization_by_name<C>(
    db: &C,
    name: &str,
) -> Result<Option<organization::Model>>
where
    C: ConnectionTrait,
{
    Organization::find()
        .filter(organization::Column::Name.eq(name))
        .order_by_asc(organization::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Follows the parent link one step up the tree.
///
/// Returns `None` for a root organization, and also when the stored parent id
/// no longer resolves to a row.
pub async fn get_parent_organization<C>(
    db: &C,
    organization: &organization::Model,
) -> Result<Option<organization::Model>>
where
    C: ConnectionTrait,
{
    match organization.parent_id {
        Some(parent_id) => get_organization_by_id(db, parent_id).await,
        None => Ok(None),
    }
}

/// Lists the direct children of an organization, ordered by name.
pub async fn get_child_organizations(
    db: &DatabaseConnection,
    organization_id: i64,
) -> Result<Vec<organization::Model>> {
    Organization::find()
        .filter(organization::Column::ParentId.eq(organization_id))
        .order_by_asc(organization::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates an organization, optionally below an existing parent.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - `parent_id` is set but no such organization exists
/// - The database insert operation fails
#[instrument(skip(db))]
pub async fn create_organization<C>(
    db: &C,
    name: &str,
    parent_id: Option<i64>,
) -> Result<organization::Model>
where
    C: ConnectionTrait,
{
    let name = super::validate_name("organization", name)?;

    if let Some(parent_id) = parent_id {
        if get_organization_by_id(db, parent_id).await?.is_none() {
            return Err(Error::not_found("organization", parent_id));
        }
    }

    let now = super::now();
    let organization = organization::ActiveModel {
        name: Set(name),
        parent_id: Set(parent_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = organization.insert(db).await?;
    info!(
        "Created organization '{}' (ID: {}) with parent {:?}",
        created.name, created.id, created.parent_id
    );
    Ok(created)
}
