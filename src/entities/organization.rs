//! Organization entity - A tenant that owns a shared catalog and its projects.
//!
//! Organizations form a tree through the nullable `parent_id`. The tree is not
//! checked for cycles.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Organization database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "organizations")]
pub struct Model {
    /// Unique identifier for the organization
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the organization
    pub name: String,
    /// Parent organization, None for a root organization
    pub parent_id: Option<i64>,
    /// When the organization was created
    pub created_at: DateTime,
    /// When the organization was last modified
    pub updated_at: DateTime,
}

/// Defines relationships between Organization and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each organization may hang below one parent organization
    #[sea_orm(belongs_to = "Entity", from = "Column::ParentId", to = "Column::Id")]
    Parent,
    /// One organization has many projects
    #[sea_orm(has_many = "super::project::Entity")]
    Projects,
    /// One organization owns many shared products
    #[sea_orm(has_many = "super::shared_product::Entity")]
    SharedProducts,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<super::shared_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SharedProducts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
