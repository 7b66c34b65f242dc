//! Shared product entity - A catalog entry owned by an organization.
//!
//! Shared products are visible to every project of the owning organization.
//! The SKU column carries a UNIQUE constraint across all organizations.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shared product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shared_products")]
pub struct Model {
    /// Unique identifier for the shared product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Product name
    pub name: String,
    /// Free-form description, may be empty
    pub description: String,
    /// Unit price, never negative
    pub price: f64,
    /// Stock keeping unit, globally unique
    #[sea_orm(unique)]
    pub sku: String,
    /// ID of the owning organization
    pub organization_id: i64,
    /// When the product was created
    pub created_at: DateTime,
    /// When the product was last modified
    pub updated_at: DateTime,
}

/// Defines relationships between `SharedProduct` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each shared product is owned by one organization
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id"
    )]
    Organization,
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
