//! Shared catalog store - products owned by an organization.
//!
//! SKU uniqueness is a cross-row invariant held by the UNIQUE constraint on
//! `shared_products.sku`. [`create_shared_product`] checks for an existing SKU
//! first for a readable error, and also maps a constraint violation raised by
//! the insert itself to `Error::Conflict`, which covers concurrent inserts.

use crate::{
    entities::{SharedProduct, shared_product},
    errors::{Error, Result},
};
use sea_orm::{ActiveValue, QueryOrder, Set, SqlErr, prelude::*};
use tracing::{info, instrument, warn};

/// Input for [`create_shared_product`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewSharedProduct {
    /// Product name, trimmed before storing
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Catalog-wide unique SKU, trimmed before storing
    pub sku: String,
    /// Owning organization
    pub organization_id: i64,
}

/// Retrieves a shared product by its unique ID.
pub async fn get_shared_product_by_id<C>(
    db: &C,
    shared_product_id: i64,
) -> Result<Option<shared_product::Model>>
where
    C: ConnectionTrait,
{
    SharedProduct::find_by_id(shared_product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a shared product by SKU.
pub async fn get_shared_product_by_sku<C>(
    db: &C,
    sku: &str,
) -> Result<Option<shared_product::Model>>
where
    C: ConnectionTrait,
{
    SharedProduct::find()
        .filter(shared_product::Column::Sku.eq(sku))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all shared products owned by one organization, ordered by name.
pub async fn get_shared_products_by_organization(
    db: &DatabaseConnection,
    organization_id: i64,
) -> Result<Vec<shared_product::Model>> {
    SharedProduct::find()
        .filter(shared_product::Column::OrganizationId.eq(organization_id))
        .order_by_asc(shared_product::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

fn sku_conflict(sku: &str) -> Error {
    Error::Conflict {
        message: format!("SKU '{sku}' already exists"),
    }
}

// A UNIQUE violation on `sku` becomes a conflict; other failures stay database errors.
async fn insert_shared_product<C>(
    db: &C,
    product: shared_product::ActiveModel,
    sku: &str,
) -> Result<shared_product::Model>
where
    C: ConnectionTrait,
{
    product.insert(db).await.map_err(|err| match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => sku_conflict(sku),
        _ => Error::Database(err),
    })
}

/// Creates a shared product in an organization's catalog.
///
/// # Errors
/// Returns an error if:
/// - The name or SKU is empty, or the price is negative or not finite
/// - The organization does not exist
/// - The SKU is already taken (`Error::Conflict`)
/// - The database insert operation fails
#[instrument(skip(db, new), fields(sku = %new.sku, organization_id = new.organization_id))]
pub async fn create_shared_product<C>(
    db: &C,
    new: NewSharedProduct,
) -> Result<shared_product::Model>
where
    C: ConnectionTrait,
{
    let name = super::validate_name("shared product", &new.name)?;
    let price = super::validate_price(new.price)?;
    let sku = new.sku.trim().to_string();
    if sku.is_empty() {
        return Err(Error::validation("SKU cannot be empty"));
    }

    if super::organization::get_organization_by_id(db, new.organization_id)
        .await?
        .is_none()
    {
        return Err(Error::not_found("organization", new.organization_id));
    }

    if get_shared_product_by_sku(db, &sku).await?.is_some() {
        warn!("Rejected shared product with duplicate SKU '{}'", sku);
        return Err(sku_conflict(&sku));
    }

    let now = super::now();
    let product = shared_product::ActiveModel {
        name: Set(name),
        description: Set(new.description),
        price: Set(price),
        sku: Set(sku.clone()),
        organization_id: Set(new.organization_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let created = insert_shared_product(db, product, &sku).await?;
    info!(
        "Created shared product '{}' (ID: {}) for organization {}",
        created.name, created.id, created.organization_id
    );
    Ok(created)
}

/// Edits a shared product's name, description and price.
///
/// SKU and owning organization never change. Copies already made into
/// projects are unaffected.
pub async fn update_shared_product(
    db: &DatabaseConnection,
    shared_product_id: i64,
    name: &str,
    description: String,
    price: f64,
) -> Result<shared_product::Model> {
    let name = super::validate_name("shared product", name)?;
    let price = super::validate_price(price)?;

    let existing = get_shared_product_by_id(db, shared_product_id)
        .await?
        .ok_or_else(|| Error::not_found("shared product", shared_product_id))?;

    shared_product::ActiveModel {
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

/// Physically removes a shared product.
///
/// Project products copied from it keep their `origin_shared_product_id`; the
/// link simply stops resolving.
#[instrument(skip(db))]
pub async fn delete_shared_product(db: &DatabaseConnection, shared_product_id: i64) -> Result<()> {
    let result = SharedProduct::delete_by_id(shared_product_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::not_found("shared product", shared_product_id));
    }
    info!("Deleted shared product {}", shared_product_id);
    Ok(())
}
