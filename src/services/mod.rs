pub mod auth_service;
pub mod product_service;
pub mod sale_service;
pub mod scope;
pub mod stats_service;
