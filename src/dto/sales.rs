use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Sale;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSaleRequest {
    /// Product the sale is recorded against.
    #[serde(alias = "product_id")]
    pub pid: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateSaleRequest {
    #[serde(alias = "product_id")]
    pub pid: Option<Uuid>,
    pub quantity: Option<i32>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct SaleList {
    #[schema(value_type = Vec<Sale>)]
    pub items: Vec<Sale>,
}
