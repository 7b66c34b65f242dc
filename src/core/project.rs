//! Project registry - lifecycle of projects inside an organization.
//!
//! Projects are only ever soft-deleted. The registry exposes storage-level
//! operations; the soft-delete transition itself lives in
//! [`super::propagation::delete_project`] and persists through [`update_project`].

use crate::{
    entities::{Project, project},
    errors::{Error, Result},
};
use sea_orm::{ActiveValue, QueryOrder, Set, prelude::*};
use tracing::{info, instrument};

/// Creates a new active project in an existing organization.
///
/// # Errors
/// Returns an error if:
/// - The project name is empty or whitespace-only
/// - The organization does not exist
/// - The database insert operation fails
#[instrument(skip(db))]
pub async fn create_project<C>(db: &C, name: &str, organization_id: i64) -> Result<project::Model>
where
    C: ConnectionTrait,
{
    let name = super::validate_name("project", name)?;

    if super::organization::get_organization_by_id(db, organization_id)
        .await?
        .is_none()
    {
        return Err(Error::not_found("organization", organization_id));
    }

    let now = super::now();
    let project = project::ActiveModel {
        name: Set(name),
        organization_id: Set(organization_id),
        deleted_at: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = project.insert(db).await?;
    info!(
        "Created project '{}' (ID: {}) in organization {}",
        created.name, created.id, created.organization_id
    );
    Ok(created)
}

/// Retrieves a project by ID, including soft-deleted ones.
pub async fn get_project_by_id<C>(db: &C, project_id: i64) -> Result<Option<project::Model>>
where
    C: ConnectionTrait,
{
    Project::find_by_id(project_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves every project of an organization, active and soft-deleted.
pub async fn get_projects_by_organization(
    db: &DatabaseConnection,
    organization_id: i64,
) -> Result<Vec<project::Model>> {
    Project::find()
        .filter(project::Column::OrganizationId.eq(organization_id))
        .order_by_asc(project::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves only the active (not soft-deleted) projects of an organization.
pub async fn get_active_projects_by_organization(
    db: &DatabaseConnection,
    organization_id: i64,
) -> Result<Vec<project::Model>> {
    Project::find()
        .filter(project::Column::OrganizationId.eq(organization_id))
        .filter(project::Column::DeletedAt.is_null())
        .order_by_asc(project::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Replaces every mutable column of a project row and refreshes `updated_at`.
///
/// # Errors
/// Returns `Error::NotFound` if the row no longer exists.
pub async fn update_project<C>(db: &C, project: project::Model) -> Result<project::Model>
where
    C: ConnectionTrait,
{
    let project_id = project.id;
    let active = project::ActiveModel {
        id: ActiveValue::Unchanged(project.id),
        name: Set(project.name),
        organization_id: Set(project.organization_id),
        deleted_at: Set(project.deleted_at),
        created_at: Set(project.created_at),
        updated_at: Set(super::now()),
    };

    active.update(db).await.map_err(|err| match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => {
            Error::not_found("project", project_id)
        }
        other => other.into(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    #[tokio::test]
    async fn test_create_project_validation() -> Result<()> {
        let db = MockDatabase::new(DatabaseBackend::Sqlite).into_connection();

        let result = create_project(&db, "", 1).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));

        let result = create_project(&db, "   ", 1).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_project_integration() -> Result<()> {
        let (db, org) = setup_with_organization().await?;

        let project = create_project(&db, " Launch ", org.id).await?;
        assert_eq!(project.name, "Launch");
        assert_eq!(project.organization_id, org.id);
        assert!(project.deleted_at.is_none());
        assert!(!project.is_deleted());

        let found = get_project_by_id(&db, project.id).await?.unwrap();
        assert_eq!(found, project);
        Ok(())
    }

    #[tokio::test]
    async fn test_create_project_unknown_organization() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_project(&db, "Launch", 77).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound {
                entity: "organization",
                id: 77
            }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_active_filter_excludes_soft_deleted() -> Result<()> {
        let (db, org) = setup_with_organization().await?;
        let kept = create_test_project(&db, "Kept", org.id).await?;
        let mut dropped = create_test_project(&db, "Dropped", org.id).await?;

        dropped.deleted_at = Some(chrono::Utc::now().naive_utc());
        update_project(&db, dropped).await?;

        let all = get_projects_by_organization(&db, org.id).await?;
        assert_eq!(all.len(), 2);

        let active = get_active_projects_by_organization(&db, org.id).await?;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, kept.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_projects_scoped_to_organization() -> Result<()> {
        let (db, org) = setup_with_organization().await?;
        let other = create_test_organization(&db, "Other Org").await?;
        create_test_project(&db, "Mine", org.id).await?;
        create_test_project(&db, "Theirs", other.id).await?;

        let mine = get_projects_by_organization(&db, org.id).await?;
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].name, "Mine");
        Ok(())
    }

    #[tokio::test]
    async fn test_update_project_replaces_row() -> Result<()> {
        let (db, org) = setup_with_organization().await?;
        let mut project = create_test_project(&db, "Before", org.id).await?;

        project.name = "After".to_string();
        let updated = update_project(&db, project.clone()).await?;
        assert_eq!(updated.name, "After");
        assert_eq!(updated.created_at, project.created_at);

        let stored = get_project_by_id(&db, project.id).await?.unwrap();
        assert_eq!(stored.name, "After");
        Ok(())
    }

    #[tokio::test]
    async fn test_update_missing_project() -> Result<()> {
        let (db, org) = setup_with_organization().await?;
        let mut ghost = create_test_project(&db, "Ghost", org.id).await?;
        ghost.id = 12_345;

        let result = update_project(&db, ghost).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound {
                entity: "project",
                id: 12_345
            }
        ));
        Ok(())
    }
}
