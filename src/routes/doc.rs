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
        analytics::{DailySalesEntry, DailySalesList, SalesSummary, TopProduct, TopProductList},
        auth::{LoginRequest, LoginResponse, RegisterRequest},
        cart::{AddToCartRequest, CartItemDto, CartView},
        catalog::{
            CategoryList, CreateCategoryRequest, CreateProductRequest, ProductList,
            UpdateProductRequest,
        },
        orders::{OrderHistory, OrderWithItems},
        ratings::{RateProductRequest, RatingResponse},
        wishlist::{AddWishlistRequest, WishlistProductList},
    },
    models::{CartItem, Category, Order, OrderItem, Product, Rating, User, WishlistItem},
    response::{ApiResponse, Meta},
    routes::{analytics, auth, cart, catalog, health, orders, params, ratings, wishlist},
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
        auth::login,
        auth::register,
        catalog::list_categories,
        catalog::create_category,
        catalog::list_products,
        catalog::get_product,
        catalog::create_product,
        catalog::update_product,
        catalog::delete_product,
        cart::view_cart,
        cart::add_to_cart,
        cart::remove_from_cart,
        orders::checkout,
        orders::order_history,
        orders::get_order,
        wishlist::view_wishlist,
        wishlist::add_to_wishlist,
        wishlist::remove_from_wishlist,
        ratings::rate_product,
        analytics::summary,
        analytics::top_products,
        analytics::daily_sales
    ),
    components(
        schemas(
            User,
            Category,
            Product,
            CartItem,
            Order,
            OrderItem,
            WishlistItem,
            Rating,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            CreateCategoryRequest,
            CategoryList,
            CreateProductRequest,
            UpdateProductRequest,
            ProductList,
            AddToCartRequest,
            CartItemDto,
            CartView,
            OrderWithItems,
            OrderHistory,
            AddWishlistRequest,
            WishlistProductList,
            RateProductRequest,
            RatingResponse,
            SalesSummary,
            TopProduct,
            TopProductList,
            DailySalesEntry,
            DailySalesList,
            params::Pagination,
            params::ProductQuery,
            params::TopProductsQuery,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CartView>,
            ApiResponse<OrderWithItems>,
            ApiResponse<OrderHistory>,
            ApiResponse<SalesSummary>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Catalog", description = "Category and product endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Orders", description = "Checkout and order history endpoints"),
        (name = "Wishlist", description = "Wishlist endpoints"),
        (name = "Ratings", description = "Product rating endpoints"),
        (name = "Analytics", description = "Admin sales analytics endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
