//! Project catalog store - products owned by exactly one project.
//!
//! A project product may carry the id of the shared product it was copied
//! from. That link is never followed automatically; [`find_origin`] is the only
//! way to resolve it, and a dangling link resolves to `None`.

use crate::{
    entities::{ProjectProduct, SharedProductModel, project_product},
    errors::{Error, Result},
};
use sea_orm::{ActiveValue, QueryOrder, Set, prelude::*};
use tracing::{debug, info, instrument};

/// Input for [`create_project_product`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewProjectProduct {
    /// Project the product belongs to
    pub project_id: i64,
    /// Product name, trimmed before storing
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Shared product this was copied from, if any
    pub origin_shared_product_id: Option<i64>,
}

/// Retrieves a project product by its unique ID.
pub async fn get_project_product_by_id<C>(
    db: &C,
    project_product_id: i64,
) -> Result<Option<project_product::Model>>
where
    C: ConnectionTrait,
{
    ProjectProduct::find_by_id(project_product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all products of a project in creation order.
pub async fn get_project_products_by_project(
    db: &DatabaseConnection,
    project_id: i64,
) -> Result<Vec<project_product::Model>> {
    ProjectProduct::find()
        .filter(project_product::Column::ProjectId.eq(project_id))
        .order_by_asc(project_product::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a product in a project's own catalog.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or the price is negative or not finite
/// - The project does not exist
/// - The database insert operation fails
#[instrument(skip(db, new), fields(project_id = new.project_id))]
pub async fn create_project_product<C>(
    db: &C,
    new: NewProjectProduct,
) -> Result<project_product::Model>
where
    C: ConnectionTrait,
{
    let name = super::validate_name("project product", &new.name)?;
    let price = super::validate_price(new.price)?;

    if super::project::get_project_by_id(db, new.project_id)
        .await?
        .is_none()
    {
        return Err(Error::not_found("project", new.project_id));
    }

    let now = super::now();
    let product = project_product::ActiveModel {
        project_id: Set(new.project_id),
        name: Set(name),
        description: Set(new.description),
        price: Set(price),
        origin_shared_product_id: Set(new.origin_shared_product_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = product.insert(db).await?;
    debug!(
        "Inserted project product {} into project {}",
        created.id, created.project_id
    );
    Ok(created)
}

/// Edits a project product's name, description and price.
///
/// The owning project and the origin link are fixed at creation.
pub async fn update_project_product(
    db: &DatabaseConnection,
    project_product_id: i64,
    name: &str,
    description: String,
    price: f64,
) -> Result<project_product::Model> {
    let name = super::validate_name("project product", name)?;
    let price = super::validate_price(price)?;

    let existing = get_project_product_by_id(db, project_product_id)
        .await?
        .ok_or_else(|| Error::not_found("project product", project_product_id))?;

    project_product::ActiveModel {
        id: ActiveValue::Unchanged(existing.id),
        name: Set(name),
        description: Set(description),
        price: Set(price),
        updated_at: Set(super::now()),
        ..Default::default()
    }
    .update(db)
    .await
    .map_err(Into::into)
}

/// Physically removes a project product.
#[instrument(skip(db))]
pub async fn delete_project_product(
    db: &DatabaseConnection,
    project_product_id: i64,
) -> Result<()> {
    let result = ProjectProduct::delete_by_id(project_product_id)
        .exec(db)
        .await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("project product", project_product_id));
    }
    info!("Deleted project product {}", project_product_id);
    Ok(())
}

/// Resolves the shared product a project product was copied from.
///
/// Returns `None` when the product has no origin or the origin has since been deleted.
pub async fn find_origin<C>(
    db: &C,
    product: &project_product::Model,
) -> Result<Option<SharedProductModel>>
where
    C: ConnectionTrait,
{
    match product.origin_shared_product_id {
        Some(origin_id) => super::shared_product::get_shared_product_by_id(db, origin_id).await,
        None => Ok(None),
    }
}
