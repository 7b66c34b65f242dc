use dotenvy::dotenv;
use scoped_catalog::{
    config::{catalog, database, seed},
    core::{organization, project, shared_product},
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();

    // 3. Load catalog configuration
    let config = catalog::load_default_config()
        .inspect_err(|e| error!("Failed to load catalog configuration: {}", e))?;
    info!(
        "Propagation settings: transactional={}, sku_prefix={}",
        config.propagation.transactional, config.propagation.sku_prefix
    );

    // 4. Connect and make sure the schema exists
    let db = database::create_connection()
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    database::create_tables(&db)
        .await
        .inspect(|()| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Seed organizations, group companies and shared products
    seed::seed_catalog(&db, &config)
        .await
        .inspect_err(|e| error!("Failed to seed catalog: {}", e))?;

    // 6. Summarize what each configured organization now holds
    for entry in &config.organizations {
        let Some(org) = organization::get_organization_by_name(&db, entry.name.trim()).await? else {
            continue;
        };
        let projects = project::get_active_projects_by_organization(&db, org.id).await?;
        let products = shared_product::get_shared_products_by_organization(&db, org.id).await?;
        info!(
            "Organization '{}' (ID: {}): {} active projects, {} shared products",
            org.name,
            org.id,
            projects.len(),
            products.len()
        );
    }

    Ok(())
}
