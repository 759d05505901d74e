use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::stats::ChartSeries,
    error::AppResult,
    middleware::auth::AuthUser,
    response::ApiResponse,
    services::stats_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sales_per_day", get(sales_per_day))
        .route("/profit_per_day", get(profit_per_day))
        .route("/sales_per_product", get(sales_per_product))
        .route("/profit_per_product", get(profit_per_product))
}

#[utoipa::path(
    get,
    path = "/sales_per_day",
    responses(
        (status = 200, description = "Sale count per day, today only", body = ApiResponse<ChartSeries>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Stats"
)]
pub async fn sales_per_day(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<ChartSeries>>> {
    Ok(Json(stats_service::sales_per_day(&state, &user).await?))
}

#[utoipa::path(
    get,
    path = "/profit_per_day",
    responses(
        (status = 200, description = "Revenue per day, today only", body = ApiResponse<ChartSeries>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Stats"
)]
pub async fn profit_per_day(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<ChartSeries>>> {
    Ok(Json(stats_service::profit_per_day(&state, &user).await?))
}

#[utoipa::path(
    get,
    path = "/sales_per_product",
    responses(
        (status = 200, description = "Sale count per product", body = ApiResponse<ChartSeries>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Stats"
)]
pub async fn sales_per_product(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<ChartSeries>>> {
    Ok(Json(stats_service::sales_per_product(&state, &user).await?))
}

#[utoipa::path(
    get,
    path = "/profit_per_product",
    responses(
        (status = 200, description = "Revenue per product", body = ApiResponse<ChartSeries>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Stats"
)]
pub async fn profit_per_product(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<ChartSeries>>> {
    Ok(Json(stats_service::profit_per_product(&state, &user).await?))
}
