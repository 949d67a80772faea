pub mod order_status;
pub mod store_location;

pub use order_status::OrderStatus;
pub use store_location::StoreLocation;
