//! Project entity - A usage scope inside an organization.
//!
//! Projects are never physically removed. Deleting a project sets `deleted_at`,
//! after which it is excluded from active listings and refused as a copy target.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Project database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    /// Unique identifier for the project
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable project name
    pub name: String,
    /// ID of the organization the project belongs to
    pub organization_id: i64,
    /// Soft delete timestamp - None while the project is active
    pub deleted_at: Option<DateTime>,
    /// When the project was created
    pub created_at: DateTime,
    /// When the project was last modified
    pub updated_at: DateTime,
}

impl Model {
    /// Whether the project has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Defines relationships between Project and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each project belongs to one organization
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id"
    )]
    Organization,
    /// One project owns many project products
    #[sea_orm(has_many = "super::project_product::Entity")]
    ProjectProducts,
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl Related<super::project_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectProducts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
