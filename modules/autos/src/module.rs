use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;
use utoipa::OpenApi;

use crate::api::rest::{openapi::AutosApiDoc, routes};
use crate::domain::service::Service;
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::sea_orm_repo::SeaOrmAutosRepository;

/// The automobile module: wires the SeaORM repository into the domain
/// service and exposes its REST routes and OpenAPI document.
#[derive(Clone)]
pub struct AutosModule {
    service: Arc<Service>,
}

impl AutosModule {
    /// Bring the schema up to date.
    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running autos database migrations");
        Migrator::up(db, None).await?;
        info!("Autos database migrations completed successfully");
        Ok(())
    }

    /// Wire repository (infra) to domain service (port).
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = SeaOrmAutosRepository::new(db);
        Self::with_service(Service::new(Arc::new(repo)))
    }

    pub fn with_service(service: Service) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    pub fn register_rest(&self, router: Router) -> Router {
        info!("Registering autos REST routes");
        routes::register_routes(router, self.service.clone())
    }

    /// Stand-alone router holding only the autos routes.
    pub fn router(&self) -> Router {
        self.register_rest(Router::new())
    }

    pub fn openapi() -> utoipa::openapi::OpenApi {
        AutosApiDoc::openapi()
    }
}
