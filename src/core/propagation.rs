//! Propagation engine - moves products between the shared and project scopes.
//!
//! A product's scope is implied by the table its row lives in. Copy-down and
//! promote-up both duplicate by value into the other table and never sync
//! again afterwards; the source row is left untouched in both directions.
//!
//! Every operation is a read-check-then-write sequence. Run against a plain
//! `DatabaseConnection` the steps are independent statements and a concurrent
//! writer can slip in between the check and the write. Pass a
//! `DatabaseTransaction` as `db` to run all steps atomically.

use super::{
    project::{get_project_by_id, update_project},
    project_product::{NewProjectProduct, create_project_product, get_project_product_by_id},
    shared_product::{NewSharedProduct, create_shared_product, get_shared_product_by_id},
    sku::generate_sku,
};
use crate::{
    entities::{ProjectModel, ProjectProductModel, SharedProductModel},
    errors::{Error, Result},
};
use sea_orm::ConnectionTrait;
use tracing::{debug, info, instrument};

/// Copies a shared product into an active project.
///
/// The new project product duplicates name, description and price and records
/// the source id as its origin. Copying the same product twice yields two rows.
///
/// # Errors
/// Returns an error if:
/// - The shared product does not exist (`NotFound("shared product")`)
/// - The project does not exist (`NotFound("project")`)
/// - The project is soft-deleted (`InvalidState`)
/// - The database operations fail
#[instrument(skip(db))]
pub async fn copy_down<C>(
    db: &C,
    shared_product_id: i64,
    project_id: i64,
) -> Result<ProjectProductModel>
where
    C: ConnectionTrait,
{
    let shared = get_shared_product_by_id(db, shared_product_id)
        .await?
        .ok_or_else(|| Error::not_found("shared product", shared_product_id))?;

    let project = get_project_by_id(db, project_id)
        .await?
        .ok_or_else(|| Error::not_found("project", project_id))?;
    if project.is_deleted() {
        return Err(Error::InvalidState {
            message: format!("project {project_id} is deleted"),
        });
    }

    let copy = create_project_product(
        db,
        NewProjectProduct {
            project_id: project.id,
            name: shared.name,
            description: shared.description,
            price: shared.price,
            origin_shared_product_id: Some(shared.id),
        },
    )
    .await?;

    info!(
        "Copied shared product {} into project {} as project product {}",
        shared.id, project.id, copy.id
    );
    Ok(copy)
}

/// Promotes a project product into its organization's shared catalog under a
/// freshly generated SKU.
///
/// The project keeps its own product. A SKU collision is returned as
/// `Error::Conflict` and not retried.
///
/// # Errors
/// See [`promote_up_with_sku`].
pub async fn promote_up<C>(
    db: &C,
    project_product_id: i64,
    sku_prefix: &str,
) -> Result<SharedProductModel>
where
    C: ConnectionTrait,
{
    let (product, project) = load_promotion_source(db, project_product_id).await?;
    let sku = generate_sku(sku_prefix);
    promote(db, product, &project, sku).await
}

/// Promotes a project product into the shared catalog under a caller-chosen SKU.
///
/// # Errors
/// Returns an error if:
/// - The project product does not exist (`NotFound("project product")`)
/// - Its project row is missing (`NotFound("project")`)
/// - The SKU is empty (`Validation`) or already taken (`Conflict`)
/// - The database operations fail
pub async fn promote_up_with_sku<C>(
    db: &C,
    project_product_id: i64,
    sku: &str,
) -> Result<SharedProductModel>
where
    C: ConnectionTrait,
{
    let (product, project) = load_promotion_source(db, project_product_id).await?;
    promote(db, product, &project, sku.to_string()).await
}

async fn load_promotion_source<C>(
    db: &C,
    project_product_id: i64,
) -> Result<(ProjectProductModel, ProjectModel)>
where
    C: ConnectionTrait,
{
    let product = get_project_product_by_id(db, project_product_id)
        .await?
        .ok_or_else(|| Error::not_found("project product", project_product_id))?;

    let project = get_project_by_id(db, product.project_id)
        .await?
        .ok_or_else(|| Error::not_found("project", product.project_id))?;

    Ok((product, project))
}

#[instrument(skip(db, product, project), fields(project_product_id = product.id))]
async fn promote<C>(
    db: &C,
    product: ProjectProductModel,
    project: &ProjectModel,
    sku: String,
) -> Result<SharedProductModel>
where
    C: ConnectionTrait,
{
    let project_product_id = product.id;
    let promoted = create_shared_product(
        db,
        NewSharedProduct {
            name: product.name,
            description: product.description,
            price: product.price,
            sku,
            organization_id: project.organization_id,
        },
    )
    .await
    .map_err(|err| match err {
        Error::Conflict { message } => Error::Conflict {
            message: format!("failed to promote project product {project_product_id}: {message}"),
        },
        other => other,
    })?;

    info!(
        "Promoted project product {} to shared product {} (SKU {}) in organization {}",
        project_product_id, promoted.id, promoted.sku, promoted.organization_id
    );
    Ok(promoted)
}

/// Soft-deletes a project by stamping `deleted_at` with the current time.
///
/// Deleting an already deleted project succeeds and refreshes the timestamp.
/// The project's products stay in place.
///
/// # Errors
/// Returns `NotFound("project")` if the project does not exist, or a database
/// error if the update fails.
#[instrument(skip(db))]
pub async fn delete_project<C>(db: &C, project_id: i64) -> Result<ProjectModel>
where
    C: ConnectionTrait,
{
    let mut project = get_project_by_id(db, project_id)
        .await?
        .ok_or_else(|| Error::not_found("project", project_id))?;

    if project.is_deleted() {
        debug!("Project {} already deleted, refreshing timestamp", project_id);
    }
    project.deleted_at = Some(super::now());

    let deleted = update_project(db, project).await?;
    info!("Soft-deleted project {}", project_id);
    Ok(deleted)
}
