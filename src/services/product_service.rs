use sea_orm::{ActiveModelTrait, Set};
use sea_orm::ActiveValue::NotSet;
use uuid::Uuid;

use crate::{
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    entity::products::{ActiveModel, Model as ProductModel},
    error::AppResult,
    middleware::auth::AuthUser,
    models::Product,
    response::{ApiResponse, Meta},
    services::scope::{changed, owned_product, owned_products},
    state::AppState,
};

pub async fn list_products(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<ProductList>> {
    let items: Vec<Product> = owned_products(user.user_id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Products", ProductList { items }, Some(meta)))
}

pub async fn create_product(
    state: &AppState,
    user: &AuthUser,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let product = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        cost: Set(payload.cost),
        price: Set(payload.price),
        stock_quantity: Set(payload.stock_quantity),
        created_at: NotSet,
        owner_id: Set(user.user_id),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(product_id = %product.id, owner_id = %user.user_id, "product created");
    Ok(ApiResponse::success(
        "Product created",
        Product::from(product),
        Some(Meta::empty()),
    ))
}

pub async fn update_product(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let existing = owned_product(&state.orm, user.user_id, id).await?;

    let active = product_changes(&existing, payload);
    let product = if active.is_changed() {
        let updated = active.update(&state.orm).await?;
        tracing::info!(product_id = %updated.id, "product updated");
        updated
    } else {
        existing
    };

    Ok(ApiResponse::success(
        "Updated",
        Product::from(product),
        Some(Meta::empty()),
    ))
}

/// Stage only the supplied fields that differ from the stored row.
fn product_changes(existing: &ProductModel, payload: UpdateProductRequest) -> ActiveModel {
    let mut active: ActiveModel = existing.clone().into();
    if let Some(name) = changed(payload.name, &existing.name) {
        active.name = Set(name);
    }
    if let Some(cost) = changed(payload.cost, &existing.cost) {
        active.cost = Set(cost);
    }
    if let Some(price) = changed(payload.price, &existing.price) {
        active.price = Set(price);
    }
    if let Some(stock_quantity) = changed(payload.stock_quantity, &existing.stock_quantity) {
        active.stock_quantity = Set(stock_quantity);
    }
    active
}
