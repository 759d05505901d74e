use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use uuid::Uuid;

use crate::{
    dto::sales::{CreateSaleRequest, SaleList, UpdateSaleRequest},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Sale,
    response::ApiResponse,
    services::sale_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sales", get(list_sales).post(create_sale))
        .route("/sales/{id}", put(update_sale))
}

#[utoipa::path(
    get,
    path = "/sales",
    responses(
        (status = 200, description = "List sales of the caller's products", body = ApiResponse<SaleList>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Sales"
)]
pub async fn list_sales(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<SaleList>>> {
    let resp = sale_service::list_sales(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/sales",
    request_body = CreateSaleRequest,
    responses(
        (status = 201, description = "Record a sale", body = ApiResponse<Sale>),
        (status = 400, description = "Invalid quantity"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Sales"
)]
pub async fn create_sale(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateSaleRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Sale>>)> {
    let resp = sale_service::create_sale(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/sales/{id}",
    params(
        ("id" = Uuid, Path, description = "Sale ID")
    ),
    request_body = UpdateSaleRequest,
    responses(
        (status = 200, description = "Updated sale", body = ApiResponse<Sale>),
        (status = 400, description = "Invalid quantity"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Sale or product not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Sales"
)]
pub async fn update_sale(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateSaleRequest>,
) -> AppResult<Json<ApiResponse<Sale>>> {
    let resp = sale_service::update_sale(&state, &user, id, payload).await?;
    Ok(Json(resp))
}
