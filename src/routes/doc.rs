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
        auth::{LoginRequest, LoginResponse},
        cart::{AddToCartRequest, CartSummary, FormattedTotals},
        products::{CatalogStats, CategoryList, ProductInput, ProductList},
    },
    models::{CartEntry, Category, Product},
    money::CartTotals,
    response::{ApiResponse, Meta},
    routes::{admin, auth, cart, events, health, products},
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
                    .bearer_format("session")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        products::list_products,
        products::get_product,
        products::list_categories,
        cart::get_cart,
        cart::add_to_cart,
        cart::remove_one_from_cart,
        cart::delete_from_cart,
        cart::clear_cart,
        auth::login,
        auth::logout,
        admin::catalog_stats,
        admin::list_all_products,
        admin::replace_products,
        admin::create_product,
        admin::update_product,
        admin::delete_product,
        events::stream_events
    ),
    components(
        schemas(
            Product,
            CartEntry,
            Category,
            CartTotals,
            FormattedTotals,
            CartSummary,
            AddToCartRequest,
            ProductInput,
            ProductList,
            CategoryList,
            CatalogStats,
            LoginRequest,
            LoginResponse,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CartSummary>,
            ApiResponse<CatalogStats>
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Products", description = "Catalog browsing endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Auth", description = "Admin session endpoints"),
        (name = "Admin", description = "Catalog management endpoints"),
        (name = "Events", description = "Change notifications"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
