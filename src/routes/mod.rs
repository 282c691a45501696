use axum::{Router, routing::get};

use crate::state::AppState;

pub mod admin;
pub mod auth;
pub mod cart;
pub mod doc;
pub mod events;
pub mod health;
pub mod params;
pub mod products;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .route("/categories", get(products::list_categories))
        .nest("/cart", cart::router())
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
        .route("/events", get(events::stream_events))
}
