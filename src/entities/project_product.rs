//! Project product entity - A catalog entry owned by exactly one project.
//!
//! `origin_shared_product_id` records which shared product the row was copied
//! from. It is provenance only and has no relation or foreign key to
//! `shared_products`; removing the origin leaves this row intact.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Project product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_products")]
pub struct Model {
    /// Unique identifier for the project product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the owning project
    pub project_id: i64,
    /// Product name
    pub name: String,
    /// Free-form description, may be empty
    pub description: String,
    /// Unit price, never negative
    pub price: f64,
    /// Shared product this row was copied from, if any
    pub origin_shared_product_id: Option<i64>,
    /// When the product was created
    pub created_at: DateTime,
    /// When the product was last modified
    pub updated_at: DateTime,
}

/// Defines relationships between `ProjectProduct` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each project product belongs to one project
    #[sea_orm(
        belongs_to = "super::project::Entity",
        from = "Column::ProjectId",
        to = "super::project::Column::Id"
    )]
    Project,
}

impl Related<super::project::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
