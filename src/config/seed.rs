//! Seeding of the catalog from `catalog.toml`.
//!
//! Seeding is safe to repeat: organizations and group companies are keyed by
//! name and shared products by SKU, and existing rows are left as they are.
//! Keys are trimmed before lookup so they match what the stores persist.

use super::catalog::CatalogConfig;
use crate::core::{
    group_company, organization,
    shared_product::{self, NewSharedProduct},
};
use crate::errors::{Error, Result};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use tracing::{debug, info, instrument};

/// Number of rows inserted by one seeding run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Organizations created.
    pub organizations: usize,
    /// Group companies created.
    pub group_companies: usize,
    /// Shared products created.
    pub shared_products: usize,
}

async fn resolve_organization<C>(db: &C, name: &str) -> Result<i64>
where
    C: ConnectionTrait,
{
    let name = name.trim();
    organization::get_organization_by_name(db, name)
        .await?
        .map(|org| org.id)
        .ok_or_else(|| Error::Config {
            message: format!("Unknown organization '{name}' in catalog config"),
        })
}

/// Inserts every configured entity that is not in the database yet.
///
/// Organizations are processed in file order, so a parent must be listed
/// before its children (or already exist). The run is a single transaction:
/// a failing entry leaves the database as it was.
///
/// # Errors
/// Returns `Error::Config` when a parent or owning organization cannot be
/// resolved, and any validation or database error from the inserts.
#[instrument(skip_all)]
pub async fn seed_catalog(db: &DatabaseConnection, config: &CatalogConfig) -> Result<SeedReport> {
    let txn = db.begin().await?;
    let report = seed_within(&txn, config).await?;
    txn.commit().await?;

    info!(
        "Seeded {} organizations, {} group companies, {} shared products",
        report.organizations, report.group_companies, report.shared_products
    );
    Ok(report)
}

async fn seed_within<C>(db: &C, config: &CatalogConfig) -> Result<SeedReport>
where
    C: ConnectionTrait,
{
    let mut report = SeedReport::default();

    for entry in &config.organizations {
        let name = entry.name.trim();
        if organization::get_organization_by_name(db, name)
            .await?
            .is_some()
        {
            debug!("Organization '{}' already present", name);
            continue;
        }
        let parent_id = match &entry.parent {
            Some(parent) => Some(resolve_organization(db, parent).await?),
            None => None,
        };
        organization::create_organization(db, name, parent_id).await?;
        report.organizations += 1;
    }

    for entry in &config.group_companies {
        let name = entry.name.trim();
        if group_company::get_group_company_by_name(db, name)
            .await?
            .is_some()
        {
            continue;
        }
        group_company::create_group_company(db, name).await?;
        report.group_companies += 1;
    }

    for entry in &config.shared_products {
        let sku = entry.sku.trim();
        if shared_product::get_shared_product_by_sku(db, sku)
            .await?
            .is_some()
        {
            debug!("Shared product with SKU '{}' already present", sku);
            continue;
        }
        let organization_id = resolve_organization(db, &entry.organization).await?;
        shared_product::create_shared_product(
            db,
            NewSharedProduct {
                name: entry.name.clone(),
                description: entry.description.clone(),
                price: entry.price,
                sku: sku.to_string(),
                organization_id,
            },
        )
        .await?;
        report.shared_products += 1;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::catalog::parse_config;
    use crate::entities::Organization;
    use crate::test_utils::setup_test_db;
    use sea_orm::EntityTrait;

    const SAMPLE: &str = r#"
        [[organizations]]
        name = "Holdings"

        [[organizations]]
        name = "Retail"
        parent = "Holdings"

        [[group_companies]]
        name = "Logistics Co"

        [[shared_products]]
        organization = "Retail"
        name = "Widget"
        description = "A small widget"
        price = 9.99
        sku = "W-1"
    "#;

    #[tokio::test]
    async fn test_seed_catalog_inserts_everything() -> Result<()> {
        let db = setup_test_db().await?;
        let config = parse_config(SAMPLE)?;

        let report = seed_catalog(&db, &config).await?;
        assert_eq!(
            report,
            SeedReport {
                organizations: 2,
                group_companies: 1,
                shared_products: 1,
            }
        );

        let holdings = organization::get_organization_by_name(&db, "Holdings")
            .await?
            .unwrap();
        let retail = organization::get_organization_by_name(&db, "Retail")
            .await?
            .unwrap();
        assert_eq!(retail.parent_id, Some(holdings.id));

        let widget = shared_product::get_shared_product_by_sku(&db, "W-1")
            .await?
            .unwrap();
        assert_eq!(widget.organization_id, retail.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_catalog_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let config = parse_config(SAMPLE)?;

        seed_catalog(&db, &config).await?;
        let second = seed_catalog(&db, &config).await?;
        assert_eq!(second, SeedReport::default());
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_unknown_parent_is_config_error() -> Result<()> {
        let db = setup_test_db().await?;
        let config = parse_config(
            r#"
            [[organizations]]
            name = "Retail"
            parent = "Nowhere"
            "#,
        )?;

        let result = seed_catalog(&db, &config).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
        Ok(())
    }

    #[tokio::test]
    async fn test_seed_padded_keys_twice() -> Result<()> {
        let db = setup_test_db().await?;
        let config = parse_config(
            r#"
            [[organizations]]
            name = "Holdings "

            [[organizations]]
            name = " Retail"
            parent = "Holdings "

            [[group_companies]]
            name = "Logistics Co "

            [[shared_products]]
            organization = " Retail "
            name = "Widget"
            price = 9.99
            sku = "W-1 "
            "#,
        )?;

        let first = seed_catalog(&db, &config).await?;
        assert_eq!(
            first,
            SeedReport {
                organizations: 2,
                group_companies: 1,
                shared_products: 1,
            }
        );
        let second = seed_catalog(&db, &config).await?;
        assert_eq!(second, SeedReport::default());

        let organizations = Organization::find().all(&db).await?;
        let mut names: Vec<_> = organizations.iter().map(|o| o.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Holdings", "Retail"]);
        assert_eq!(group_company::list_group_companies(&db).await?.len(), 1);
        assert!(
            shared_product::get_shared_product_by_sku(&db, "W-1")
                .await?
                .is_some()
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_failed_seed_writes_nothing() -> Result<()> {
        let db = setup_test_db().await?;
        let config = parse_config(
            r#"
            [[organizations]]
            name = "Holdings"

            [[shared_products]]
            organization = "Nowhere"
            name = "Widget"
            price = 9.99
            sku = "W-1"
            "#,
        )?;

        let result = seed_catalog(&db, &config).await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));
        assert!(Organization::find().all(&db).await?.is_empty());
        assert!(
            organization::get_organization_by_name(&db, "Holdings")
                .await?
                .is_none()
        );
        Ok(())
    }
}
