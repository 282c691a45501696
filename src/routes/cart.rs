use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    dto::cart::{AddToCartRequest, CartSummary},
    error::AppResult,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_cart).post(add_to_cart).delete(clear_cart))
        .route("/{product_id}", axum::routing::delete(delete_from_cart))
        .route("/{product_id}/decrement", post(remove_one_from_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart entries with totals", body = ApiResponse<CartSummary>)
    ),
    tag = "Cart"
)]
pub async fn get_cart(State(state): State<AppState>) -> Json<ApiResponse<CartSummary>> {
    let summary = state.storefront.cart().summary().await;
    let meta = Meta::total(summary.items.len());
    Json(ApiResponse::success("OK", summary, Some(meta)))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Add one of a product", body = ApiResponse<CartSummary>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartSummary>>> {
    let summary = state.storefront.add_to_cart(&payload.product_id).await?;
    Ok(Json(ApiResponse::success("Added to cart", summary, None)))
}

#[utoipa::path(
    post,
    path = "/api/cart/{product_id}/decrement",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Remove one of a product", body = ApiResponse<CartSummary>),
    ),
    tag = "Cart"
)]
pub async fn remove_one_from_cart(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> AppResult<Json<ApiResponse<CartSummary>>> {
    let summary = state.storefront.remove_one_from_cart(&product_id).await?;
    Ok(Json(ApiResponse::success("OK", summary, None)))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{product_id}",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Remove a product entirely", body = ApiResponse<CartSummary>),
    ),
    tag = "Cart"
)]
pub async fn delete_from_cart(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> AppResult<Json<ApiResponse<CartSummary>>> {
    let summary = state.storefront.delete_from_cart(&product_id).await?;
    Ok(Json(ApiResponse::success("Removed from cart", summary, None)))
}

#[utoipa::path(
    delete,
    path = "/api/cart",
    responses(
        (status = 200, description = "Empty the cart", body = ApiResponse<CartSummary>),
    ),
    tag = "Cart"
)]
pub async fn clear_cart(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CartSummary>>> {
    state.storefront.cart().clear().await?;
    Ok(Json(ApiResponse::success(
        "Cart cleared",
        CartSummary::from_entries(Vec::new()),
        Some(Meta::empty()),
    )))
}
