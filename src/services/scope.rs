use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Select};
use uuid::Uuid;

use crate::{
    entity::{
        products::{Column as ProdCol, Entity as Products, Model as ProductModel},
        sales::{Column as SaleCol, Entity as Sales, Model as SaleModel},
    },
    error::{AppError, AppResult},
};

/// Products owned by `owner_id`.
pub fn owned_products(owner_id: Uuid) -> Select<Products> {
    Products::find().filter(ProdCol::OwnerId.eq(owner_id))
}

/// Sales whose product is owned by `owner_id`.
pub fn owned_sales(owner_id: Uuid) -> Select<Sales> {
    Sales::find()
        .inner_join(Products)
        .filter(ProdCol::OwnerId.eq(owner_id))
}

/// Fetch a product belonging to the caller. Missing and foreign rows are both `NotFound`.
pub async fn owned_product<C>(conn: &C, owner_id: Uuid, product_id: Uuid) -> AppResult<ProductModel>
where
    C: ConnectionTrait,
{
    owned_products(owner_id)
        .filter(ProdCol::Id.eq(product_id))
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)
}

/// Fetch a sale whose product belongs to the caller.
pub async fn owned_sale<C>(conn: &C, owner_id: Uuid, sale_id: Uuid) -> AppResult<SaleModel>
where
    C: ConnectionTrait,
{
    owned_sales(owner_id)
        .filter(SaleCol::Id.eq(sale_id))
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)
}

/// Keep an incoming value only when it differs from the stored one.
pub fn changed<T: PartialEq>(incoming: Option<T>, current: &T) -> Option<T> {
    incoming.filter(|value| value != current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    #[test]
    fn changed_drops_equal_values() {
        assert_eq!(changed(Some(5), &5), None);
        assert_eq!(changed(Some(6), &5), Some(6));
        assert_eq!(changed(None, &5), None);
    }

    #[test]
    fn owned_sales_joins_through_products() {
        let sql = owned_sales(Uuid::nil())
            .build(DbBackend::Postgres)
            .to_string();
        assert!(sql.contains(r#"INNER JOIN "products""#), "{sql}");
        assert!(sql.contains(r#""products"."owner_id""#), "{sql}");
    }
}
