//! Group company entity - Read-only directory of companies in the group.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Group company database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "view_group_companies")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Company name
    pub name: String,
    /// When the row was created
    pub created_at: DateTime,
    /// When the row was last updated
    pub updated_at: DateTime,
}

/// `GroupCompany` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
