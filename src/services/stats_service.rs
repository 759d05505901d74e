use chrono::{DateTime, NaiveTime, Utc};
use uuid::Uuid;

use crate::{
    db::DbPool,
    dto::stats::{ChartSeries, ChartType, ChartValue},
    error::AppResult,
    middleware::auth::AuthUser,
    response::{ApiResponse, Meta},
    state::AppState,
};

#[derive(Debug, sqlx::FromRow)]
struct CountRow {
    label: String,
    value: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct AmountRow {
    label: String,
    value: f64,
}

const SALES_PER_DAY_SQL: &str = r#"
    SELECT to_char((s.sold_at AT TIME ZONE 'UTC')::date, 'YYYY-MM-DD') AS label,
           COUNT(s.id) AS value
    FROM sales s
    JOIN products p ON p.id = s.product_id
    WHERE p.owner_id = $1 AND s.sold_at >= $2
    GROUP BY label
    ORDER BY label
"#;

const PROFIT_PER_DAY_SQL: &str = r#"
    SELECT to_char((s.sold_at AT TIME ZONE 'UTC')::date, 'YYYY-MM-DD') AS label,
           SUM(s.total_price) AS value
    FROM sales s
    JOIN products p ON p.id = s.product_id
    WHERE p.owner_id = $1 AND s.sold_at >= $2
    GROUP BY label
    ORDER BY label
"#;

const SALES_PER_PRODUCT_SQL: &str = r#"
    SELECT p.name AS label, COUNT(s.id) AS value
    FROM sales s
    JOIN products p ON p.id = s.product_id
    WHERE p.owner_id = $1
    GROUP BY p.id, p.name
    ORDER BY p.name
"#;

const PROFIT_PER_PRODUCT_SQL: &str = r#"
    SELECT p.name AS label, SUM(s.total_price) AS value
    FROM sales s
    JOIN products p ON p.id = s.product_id
    WHERE p.owner_id = $1
    GROUP BY p.id, p.name
    ORDER BY p.name
"#;

/// Midnight UTC of the day containing `now`.
pub fn start_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

pub async fn sales_per_day(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<ChartSeries>> {
    let since = start_of_day(Utc::now());
    let rows = count_rows(&state.pool, SALES_PER_DAY_SQL, user.user_id, Some(since)).await?;
    Ok(chart_response(ChartSeries::from_points(
        "Sales per day",
        ChartType::Line,
        rows.into_iter()
            .map(|row| (row.label, ChartValue::Count(row.value))),
    )))
}

pub async fn profit_per_day(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<ChartSeries>> {
    let since = start_of_day(Utc::now());
    let rows = amount_rows(&state.pool, PROFIT_PER_DAY_SQL, user.user_id, Some(since)).await?;
    Ok(chart_response(ChartSeries::from_points(
        "Profit per day",
        ChartType::Line,
        rows.into_iter()
            .map(|row| (row.label, ChartValue::Amount(row.value))),
    )))
}

pub async fn sales_per_product(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<ChartSeries>> {
    let rows = count_rows(&state.pool, SALES_PER_PRODUCT_SQL, user.user_id, None).await?;
    Ok(chart_response(ChartSeries::from_points(
        "Sales per product",
        ChartType::Bar,
        rows.into_iter()
            .map(|row| (row.label, ChartValue::Count(row.value))),
    )))
}

pub async fn profit_per_product(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<ChartSeries>> {
    let rows = amount_rows(&state.pool, PROFIT_PER_PRODUCT_SQL, user.user_id, None).await?;
    Ok(chart_response(ChartSeries::from_points(
        "Profit per product",
        ChartType::Bar,
        rows.into_iter()
            .map(|row| (row.label, ChartValue::Amount(row.value))),
    )))
}

async fn count_rows(
    pool: &DbPool,
    sql: &str,
    owner_id: Uuid,
    since: Option<DateTime<Utc>>,
) -> AppResult<Vec<CountRow>> {
    let mut query = sqlx::query_as::<_, CountRow>(sql).bind(owner_id);
    if let Some(since) = since {
        query = query.bind(since);
    }
    Ok(query.fetch_all(pool).await?)
}

async fn amount_rows(
    pool: &DbPool,
    sql: &str,
    owner_id: Uuid,
    since: Option<DateTime<Utc>>,
) -> AppResult<Vec<AmountRow>> {
    let mut query = sqlx::query_as::<_, AmountRow>(sql).bind(owner_id);
    if let Some(since) = since {
        query = query.bind(since);
    }
    Ok(query.fetch_all(pool).await?)
}

fn chart_response(series: ChartSeries) -> ApiResponse<ChartSeries> {
    let meta = Meta::total(series.x.len());
    ApiResponse::success(series.name.clone(), series, Some(meta))
}
