pub mod analytics;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod ratings;
pub mod wishlist;
