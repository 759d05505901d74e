use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse, RegisterRequest},
        products::{CreateProductRequest, ProductList, UpdateProductRequest},
        sales::{CreateSaleRequest, SaleList, UpdateSaleRequest},
        stats::{ChartSeries, ChartType, ChartValue},
        users::UserList,
    },
    models::{Product, Sale, User},
    response::{ApiResponse, Meta},
    routes::{auth, health, products, sales, stats},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        auth::list_users,
        products::list_products,
        products::create_product,
        products::update_product,
        sales::list_sales,
        sales::create_sale,
        sales::update_sale,
        stats::sales_per_day,
        stats::profit_per_day,
        stats::sales_per_product,
        stats::profit_per_product
    ),
    components(
        schemas(
            User,
            Product,
            Sale,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            CreateProductRequest,
            UpdateProductRequest,
            CreateSaleRequest,
            UpdateSaleRequest,
            UserList,
            ProductList,
            SaleList,
            ChartSeries,
            ChartType,
            ChartValue,
            Meta,
            ApiResponse<User>,
            ApiResponse<Product>,
            ApiResponse<Sale>,
            ApiResponse<LoginResponse>,
            ApiResponse<ChartSeries>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Registration, login and user listing"),
        (name = "Products", description = "Product endpoints"),
        (name = "Sales", description = "Sale endpoints"),
        (name = "Stats", description = "Chart-ready sales aggregates"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        for path in [
            "/register",
            "/login",
            "/users",
            "/products",
            "/products/{id}",
            "/sales",
            "/sales/{id}",
            "/sales_per_day",
            "/profit_per_day",
            "/sales_per_product",
            "/profit_per_product",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
