pub mod auth;
pub mod products;
pub mod sales;
pub mod stats;
pub mod users;
