use sea_orm::{ActiveModelTrait, QueryOrder, Set};
use sea_orm::ActiveValue::NotSet;
use uuid::Uuid;

use crate::{
    dto::sales::{CreateSaleRequest, SaleList, UpdateSaleRequest},
    entity::sales::{ActiveModel, Column as SaleCol, Model as SaleModel},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::Sale,
    response::{ApiResponse, Meta},
    services::scope::{changed, owned_product, owned_sale, owned_sales},
    state::AppState,
};

pub async fn list_sales(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<SaleList>> {
    let items: Vec<Sale> = owned_sales(user.user_id)
        .order_by_asc(SaleCol::SoldAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Sale::from)
        .collect();

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Sales", SaleList { items }, Some(meta)))
}

pub async fn create_sale(
    state: &AppState,
    user: &AuthUser,
    payload: CreateSaleRequest,
) -> AppResult<ApiResponse<Sale>> {
    validate_quantity(payload.quantity)?;
    let product = owned_product(&state.orm, user.user_id, payload.pid).await?;

    let sale = ActiveModel {
        id: Set(Uuid::new_v4()),
        quantity: Set(payload.quantity),
        total_price: Set(total_price(product.price, payload.quantity)),
        sold_at: NotSet,
        product_id: Set(product.id),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(
        sale_id = %sale.id,
        product_id = %sale.product_id,
        total_price = sale.total_price,
        "sale recorded"
    );
    Ok(ApiResponse::success(
        "Sale created",
        Sale::from(sale),
        Some(Meta::empty()),
    ))
}

pub async fn update_sale(
    state: &AppState,
    user: &AuthUser,
    id: Uuid,
    payload: UpdateSaleRequest,
) -> AppResult<ApiResponse<Sale>> {
    let existing = owned_sale(&state.orm, user.user_id, id).await?;

    let quantity = changed(payload.quantity, &existing.quantity);
    let product_id = changed(payload.pid, &existing.product_id);
    if quantity.is_none() && product_id.is_none() {
        return Ok(ApiResponse::success(
            "Updated",
            Sale::from(existing),
            Some(Meta::empty()),
        ));
    }
    if let Some(quantity) = quantity {
        validate_quantity(quantity)?;
    }

    // A new product is priced at its current price; otherwise the sale keeps its own unit price.
    let target_product = match product_id {
        Some(pid) => Some(owned_product(&state.orm, user.user_id, pid).await?),
        None => None,
    };
    let new_quantity = quantity.unwrap_or(existing.quantity);
    let new_total = repriced_total(
        &existing,
        new_quantity,
        target_product.as_ref().map(|product| product.price),
    );

    let mut active: ActiveModel = existing.clone().into();
    if quantity.is_some() {
        active.quantity = Set(new_quantity);
    }
    if let Some(product) = &target_product {
        active.product_id = Set(product.id);
    }
    if let Some(total) = changed(Some(new_total), &existing.total_price) {
        active.total_price = Set(total);
    }
    let sale = active.update(&state.orm).await?;

    tracing::info!(sale_id = %sale.id, total_price = sale.total_price, "sale updated");
    Ok(ApiResponse::success(
        "Updated",
        Sale::from(sale),
        Some(Meta::empty()),
    ))
}

fn validate_quantity(quantity: i32) -> AppResult<()> {
    if quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

pub fn total_price(unit_price: f64, quantity: i32) -> f64 {
    unit_price * f64::from(quantity)
}

/// Total for an edited sale. Without a new product price the unit price frozen at sale time is reused.
fn repriced_total(existing: &SaleModel, quantity: i32, new_unit_price: Option<f64>) -> f64 {
    let unit_price = new_unit_price
        .unwrap_or_else(|| existing.total_price / f64::from(existing.quantity));
    total_price(unit_price, quantity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_price_times_quantity() {
        assert_eq!(total_price(10.0, 3), 30.0);
        assert_eq!(total_price(5.0, 4), 20.0);
    }

    fn sale_of(quantity: i32, total_price: f64) -> SaleModel {
        SaleModel {
            id: Uuid::new_v4(),
            quantity,
            total_price,
            sold_at: chrono::Utc::now().into(),
            product_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn quantity_change_keeps_unit_price_at_sale_time() {
        let sale = sale_of(1, 10.0);
        assert_eq!(repriced_total(&sale, 3, None), 30.0);
    }

    #[test]
    fn product_change_uses_new_unit_price() {
        let sale = sale_of(2, 20.0);
        assert_eq!(repriced_total(&sale, 2, Some(12.5)), 25.0);
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        assert!(matches!(validate_quantity(0), Err(AppError::BadRequest(_))));
        assert!(matches!(validate_quantity(-2), Err(AppError::BadRequest(_))));
        assert!(validate_quantity(1).is_ok());
    }
}
