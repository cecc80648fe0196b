use utoipa::OpenApi;

use crate::api::rest::{dto, error, handlers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Autos API",
        version = "0.1.0",
        description = "Create, look up, filter, update and delete automobile records keyed by VIN"
    ),
    paths(
        handlers::list_autos,
        handlers::create_auto,
        handlers::get_auto,
        handlers::update_auto,
        handlers::delete_auto
    ),
    components(schemas(
        dto::AutomobileDto,
        dto::CreateAutoReq,
        dto::UpdateAutoReq,
        dto::AutosListDto,
        error::Problem
    )),
    tags((name = "autos", description = "Automobile records"))
)]
pub struct AutosApiDoc;
