pub mod products;
pub mod sales;
pub mod users;

pub use products::Entity as Products;
pub use sales::Entity as Sales;
pub use users::Entity as Users;
