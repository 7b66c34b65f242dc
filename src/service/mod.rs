//! Service layer - the surface handed to the transport boundary.
//!
//! [`CatalogService`] puts the session gate in front of every operation and,
//! when [`PropagationSettings::transactional`] is set, runs each write inside
//! its own database transaction. Without it the engine's steps run as separate
//! statements against the shared connection.

/// Session gate trait and a fixed-answer implementation
pub mod gate;

pub use gate::{SessionGate, StaticGate};

use crate::{
    config::catalog::PropagationSettings,
    core::{group_company, project, project_product, propagation, shared_product},
    entities::{GroupCompanyModel, ProjectModel, ProjectProductModel, SharedProductModel},
    errors::{Error, Result},
};
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::warn;

/// Runs `$body` with `$db` bound to either a fresh transaction or the plain
/// connection, depending on the service settings.
macro_rules! within_scope {
    ($service:expr, |$db:ident| $body:expr) => {{
        if $service.settings.transactional {
            let txn = $service.database.begin().await?;
            let $db = &txn;
            let value = $body.await?;
            txn.commit().await?;
            Ok(value)
        } else {
            let $db = &$service.database;
            $body.await
        }
    }};
}

/// Catalog operations guarded by a session gate.
pub struct CatalogService<G> {
    database: DatabaseConnection,
    gate: G,
    settings: PropagationSettings,
}

impl<G: SessionGate> CatalogService<G> {
    /// Creates a new service over an initialized database.
    #[must_use]
    pub const fn new(
        database: DatabaseConnection,
        gate: G,
        settings: PropagationSettings,
    ) -> Self {
        Self {
            database,
            gate,
            settings,
        }
    }

    /// The underlying database connection.
    #[must_use]
    pub const fn database(&self) -> &DatabaseConnection {
        &self.database
    }

    /// Propagation settings the service was built with.
    #[must_use]
    pub const fn settings(&self) -> &PropagationSettings {
        &self.settings
    }

    async fn authorize(&self, user_id: i64) -> Result<()> {
        if self.gate.is_session_valid(user_id).await? {
            Ok(())
        } else {
            warn!("Rejected request from user {} with invalid session", user_id);
            Err(Error::Unauthorized { user_id })
        }
    }

    /// Creates a project in an organization.
    pub async fn create_project(
        &self,
        user_id: i64,
        name: &str,
        organization_id: i64,
    ) -> Result<ProjectModel> {
        self.authorize(user_id).await?;
        within_scope!(self, |db| project::create_project(db, name, organization_id))
    }

    /// Copies a shared product into a project.
    pub async fn copy_down(
        &self,
        user_id: i64,
        shared_product_id: i64,
        project_id: i64,
    ) -> Result<ProjectProductModel> {
        self.authorize(user_id).await?;
        within_scope!(self, |db| propagation::copy_down(
            db,
            shared_product_id,
            project_id
        ))
    }

    /// Promotes a project product into the shared catalog with a generated SKU.
    pub async fn promote_up(
        &self,
        user_id: i64,
        project_product_id: i64,
    ) -> Result<SharedProductModel> {
        self.authorize(user_id).await?;
        let prefix = self.settings.sku_prefix.as_str();
        within_scope!(self, |db| propagation::promote_up(
            db,
            project_product_id,
            prefix
        ))
    }

    /// Soft-deletes a project.
    pub async fn delete_project(&self, user_id: i64, project_id: i64) -> Result<ProjectModel> {
        self.authorize(user_id).await?;
        within_scope!(self, |db| propagation::delete_project(db, project_id))
    }

    /// Fetches one project, soft-deleted or not.
    pub async fn get_project(&self, user_id: i64, project_id: i64) -> Result<ProjectModel> {
        self.authorize(user_id).await?;
        project::get_project_by_id(&self.database, project_id)
            .await?
            .ok_or_else(|| Error::not_found("project", project_id))
    }

    /// Lists an organization's projects; soft-deleted ones only on request.
    pub async fn list_projects_by_organization(
        &self,
        user_id: i64,
        organization_id: i64,
        include_deleted: bool,
    ) -> Result<Vec<ProjectModel>> {
        self.authorize(user_id).await?;
        if include_deleted {
            project::get_projects_by_organization(&self.database, organization_id).await
        } else {
            project::get_active_projects_by_organization(&self.database, organization_id).await
        }
    }

    /// Lists the shared catalog of an organization.
    pub async fn list_shared_products(
        &self,
        user_id: i64,
        organization_id: i64,
    ) -> Result<Vec<SharedProductModel>> {
        self.authorize(user_id).await?;
        shared_product::get_shared_products_by_organization(&self.database, organization_id).await
    }

    /// Lists the products of an active project.
    ///
    /// Products of a soft-deleted project are not reachable through this
    /// listing and yield `Error::InvalidState`.
    pub async fn list_project_products(
        &self,
        user_id: i64,
        project_id: i64,
    ) -> Result<Vec<ProjectProductModel>> {
        self.authorize(user_id).await?;
        let project = project::get_project_by_id(&self.database, project_id)
            .await?
            .ok_or_else(|| Error::not_found("project", project_id))?;
        if project.is_deleted() {
            return Err(Error::InvalidState {
                message: format!("project {project_id} is deleted"),
            });
        }
        project_product::get_project_products_by_project(&self.database, project_id).await
    }

    /// Lists the group company directory.
    pub async fn list_group_companies(&self, user_id: i64) -> Result<Vec<GroupCompanyModel>> {
        self.authorize(user_id).await?;
        group_company::list_group_companies(&self.database).await
    }
}
