use axum::{routing::get, Extension, Router};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Base path every automobile route lives under.
pub const BASE_PATH: &str = "/api/autos";

pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let autos = Router::new()
        // GET /api/autos - list or filter; POST /api/autos - create
        .route(
            BASE_PATH,
            get(handlers::list_autos).post(handlers::create_auto),
        )
        // GET/PATCH/DELETE /api/autos/{vin}
        .route(
            &format!("{BASE_PATH}/{{vin}}"),
            get(handlers::get_auto)
                .patch(handlers::update_auto)
                .delete(handlers::delete_auto),
        )
        .layer(Extension(service));

    router.merge(autos)
}
