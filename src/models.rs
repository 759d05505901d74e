use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::{products, sales, users};

/// Public view of a user. The password hash never leaves the store.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub cost: f64,
    pub price: f64,
    pub stock_quantity: i32,
    pub created_at: DateTime<Utc>,
    pub owner_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Sale {
    pub id: Uuid,
    pub quantity: i32,
    pub total_price: f64,
    pub sold_at: DateTime<Utc>,
    pub product_id: Uuid,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
        }
    }
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            cost: model.cost,
            price: model.price,
            stock_quantity: model.stock_quantity,
            created_at: model.created_at.with_timezone(&Utc),
            owner_id: model.owner_id,
        }
    }
}

impl From<sales::Model> for Sale {
    fn from(model: sales::Model) -> Self {
        Self {
            id: model.id,
            quantity: model.quantity,
            total_price: model.total_price,
            sold_at: model.sold_at.with_timezone(&Utc),
            product_id: model.product_id,
        }
    }
}
