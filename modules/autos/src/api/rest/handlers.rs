use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query},
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    Extension,
};
use tracing::{info, warn};

use crate::api::rest::dto::{
    AutomobileDto, AutosListDto, CreateAutoReq, ListAutosQuery, UpdateAutoReq,
};
use crate::api::rest::error::{map_domain_error, ApiError};
use crate::contract::model::AutomobilePatch;
use crate::domain::error::DomainError;
use crate::domain::service::Service;

/// Undecodable bodies (bad JSON, wrong types, wrong content type) are plain 400s.
fn reject_body(rejection: JsonRejection, instance: &str) -> ApiError {
    warn!("Rejecting request body: {}", rejection.body_text());
    map_domain_error(
        &DomainError::invalid_request(rejection.body_text()),
        instance,
    )
}

/// List automobiles, optionally filtered by color and/or make
#[utoipa::path(
    get,
    path = "/api/autos",
    tag = "autos",
    params(ListAutosQuery),
    responses(
        (status = 200, description = "Matching automobiles", body = AutosListDto),
        (status = 204, description = "No automobile matches"),
        (status = 500, description = "Internal Server Error", body = crate::api::rest::error::Problem)
    )
)]
pub async fn list_autos(
    Extension(svc): Extension<Arc<Service>>,
    Query(query): Query<ListAutosQuery>,
    uri: Uri,
) -> Result<Response, ApiError> {
    info!("Listing automobiles with query: {:?}", query);

    let result = if query.has_filter() {
        svc.find_autos(query.color.as_deref(), query.make.as_deref())
            .await
    } else {
        svc.get_autos().await
    };

    let autos = result.map_err(|e| map_domain_error(&e, uri.path()))?;
    if autos.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(AutosListDto::from(autos)).into_response())
}

/// Register a new automobile
#[utoipa::path(
    post,
    path = "/api/autos",
    tag = "autos",
    request_body = CreateAutoReq,
    responses(
        (status = 201, description = "Created automobile", body = AutomobileDto),
        (status = 400, description = "Missing year, make, model or vin"),
        (status = 409, description = "VIN already registered", body = crate::api::rest::error::Problem),
        (status = 500, description = "Internal Server Error", body = crate::api::rest::error::Problem)
    )
)]
pub async fn create_auto(
    Extension(svc): Extension<Arc<Service>>,
    uri: Uri,
    body: Result<Json<CreateAutoReq>, JsonRejection>,
) -> Result<(StatusCode, Json<AutomobileDto>), ApiError> {
    let Json(req_body) = body.map_err(|r| reject_body(r, uri.path()))?;
    info!("Creating automobile: {:?}", req_body);

    let new_auto = req_body
        .validate()
        .map_err(|e| map_domain_error(&e, uri.path()))?;

    let auto = svc
        .add_auto(new_auto)
        .await
        .map_err(|e| map_domain_error(&e, uri.path()))?;

    Ok((StatusCode::CREATED, Json(AutomobileDto::from(auto))))
}

/// Get a specific automobile by VIN
#[utoipa::path(
    get,
    path = "/api/autos/{vin}",
    tag = "autos",
    params(("vin" = String, Path, description = "Vehicle identification number")),
    responses(
        (status = 200, description = "Automobile found", body = AutomobileDto),
        (status = 204, description = "No automobile with this VIN"),
        (status = 500, description = "Internal Server Error", body = crate::api::rest::error::Problem)
    )
)]
pub async fn get_auto(
    Extension(svc): Extension<Arc<Service>>,
    Path(vin): Path<String>,
    uri: Uri,
) -> Result<Json<AutomobileDto>, ApiError> {
    info!("Getting automobile with vin: {}", vin);

    let auto = svc
        .get_auto(&vin)
        .await
        .map_err(|e| map_domain_error(&e, uri.path()))?;

    Ok(Json(AutomobileDto::from(auto)))
}

/// Change the color and/or owner of an automobile
#[utoipa::path(
    patch,
    path = "/api/autos/{vin}",
    tag = "autos",
    params(("vin" = String, Path, description = "Vehicle identification number")),
    request_body = UpdateAutoReq,
    responses(
        (status = 200, description = "Updated automobile", body = AutomobileDto),
        (status = 204, description = "No automobile with this VIN"),
        (status = 400, description = "Neither color nor owner given"),
        (status = 500, description = "Internal Server Error", body = crate::api::rest::error::Problem)
    )
)]
pub async fn update_auto(
    Extension(svc): Extension<Arc<Service>>,
    Path(vin): Path<String>,
    uri: Uri,
    body: Result<Json<UpdateAutoReq>, JsonRejection>,
) -> Result<Json<AutomobileDto>, ApiError> {
    let Json(req_body) = body.map_err(|r| reject_body(r, uri.path()))?;
    info!("Updating automobile {} with: {:?}", vin, req_body);

    let patch: AutomobilePatch = req_body.into();
    let empty = patch.is_empty();

    // not-found is reported before the empty-body check
    let auto = svc
        .update_auto(&vin, patch)
        .await
        .map_err(|e| map_domain_error(&e, uri.path()))?;

    if empty {
        return Err(map_domain_error(
            &DomainError::invalid_request("color or owner is required"),
            uri.path(),
        ));
    }

    Ok(Json(AutomobileDto::from(auto)))
}

/// Delete an automobile by VIN
#[utoipa::path(
    delete,
    path = "/api/autos/{vin}",
    tag = "autos",
    params(("vin" = String, Path, description = "Vehicle identification number")),
    responses(
        (status = 202, description = "Automobile deleted"),
        (status = 204, description = "No automobile with this VIN"),
        (status = 500, description = "Internal Server Error", body = crate::api::rest::error::Problem)
    )
)]
pub async fn delete_auto(
    Extension(svc): Extension<Arc<Service>>,
    Path(vin): Path<String>,
    uri: Uri,
) -> Result<StatusCode, ApiError> {
    info!("Deleting automobile: {}", vin);

    svc.delete_auto(&vin)
        .await
        .map_err(|e| map_domain_error(&e, uri.path()))?;

    Ok(StatusCode::ACCEPTED)
}
