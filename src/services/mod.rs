pub mod analytics_service;
pub mod auth_service;
pub mod cart_service;
pub mod catalog_service;
pub mod order_service;
pub mod rating_service;
pub mod wishlist_service;
