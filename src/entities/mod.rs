//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod group_company;
pub mod organization;
pub mod project;
pub mod project_product;
pub mod shared_product;

// Re-export specific types to avoid conflicts
pub use group_company::{
    Column as GroupCompanyColumn, Entity as GroupCompany, Model as GroupCompanyModel,
};
pub use organization::{
    Column as OrganizationColumn, Entity as Organization, Model as OrganizationModel,
};
pub use project::{Column as ProjectColumn, Entity as Project, Model as ProjectModel};
pub use project_product::{
    Column as ProjectProductColumn, Entity as ProjectProduct, Model as ProjectProductModel,
};
pub use shared_product::{
    Column as SharedProductColumn, Entity as SharedProduct, Model as SharedProductModel,
};
