//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating catalog entities with sensible defaults.

use crate::{
    core::{
        organization, project,
        project_product::{self, NewProjectProduct},
        shared_product::{self, NewSharedProduct},
    },
    entities,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Routes `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a root organization with the given name.
pub async fn create_test_organization(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::organization::Model> {
    organization::create_organization(db, name, None).await
}

/// Creates an active project in the given organization.
pub async fn create_test_project(
    db: &DatabaseConnection,
    name: &str,
    organization_id: i64,
) -> Result<entities::project::Model> {
    project::create_project(db, name, organization_id).await
}

/// Creates a shared product with an empty description.
pub async fn create_test_shared_product(
    db: &DatabaseConnection,
    organization_id: i64,
    name: &str,
    price: f64,
    sku: &str,
) -> Result<entities::shared_product::Model> {
    shared_product::create_shared_product(
        db,
        NewSharedProduct {
            name: name.to_string(),
            description: String::new(),
            price,
            sku: sku.to_string(),
            organization_id,
        },
    )
    .await
}

/// Creates a project product with no origin link.
pub async fn create_test_project_product(
    db: &DatabaseConnection,
    project_id: i64,
    name: &str,
    price: f64,
) -> Result<entities::project_product::Model> {
    project_product::create_project_product(
        db,
        NewProjectProduct {
            project_id,
            name: name.to_string(),
            description: String::new(),
            price,
            origin_shared_product_id: None,
        },
    )
    .await
}

/// Sets up a test environment with one organization.
/// Returns (db, organization).
pub async fn setup_with_organization()
-> Result<(DatabaseConnection, entities::organization::Model)> {
    let db = setup_test_db().await?;
    let org = create_test_organization(&db, "Test Org").await?;
    Ok((db, org))
}

/// Sets up a test environment with an organization and an active project.
/// Returns (db, organization, project).
pub async fn setup_with_project() -> Result<(
    DatabaseConnection,
    entities::organization::Model,
    entities::project::Model,
)> {
    let (db, org) = setup_with_organization().await?;
    let project = create_test_project(&db, "Test Project", org.id).await?;
    Ok((db, org, project))
}

/// Sets up the standard propagation fixture: organization O1 with shared
/// product "Widget" (9.99, SKU "W-1") and an active project.
/// Returns (db, organization, project, `shared_product`).
pub async fn setup_with_shared_product() -> Result<(
    DatabaseConnection,
    entities::organization::Model,
    entities::project::Model,
    entities::shared_product::Model,
)> {
    let (db, org, project) = setup_with_project().await?;
    let shared = shared_product::create_shared_product(
        &db,
        NewSharedProduct {
            name: "Widget".to_string(),
            description: "A small widget".to_string(),
            price: 9.99,
            sku: "W-1".to_string(),
            organization_id: org.id,
        },
    )
    .await?;
    Ok((db, org, project, shared))
}
