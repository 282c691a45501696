use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};

use crate::{
    dto::products::{CatalogStats, ProductInput, ProductList},
    error::AppResult,
    middleware::auth::AdminSession,
    models::Product,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(catalog_stats))
        .route(
            "/products",
            get(list_all_products)
                .put(replace_products)
                .post(create_product),
        )
        .route("/products/{id}", put(update_product).delete(delete_product))
}

#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Dashboard figures", body = ApiResponse<CatalogStats>),
        (status = 401, description = "No admin session"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn catalog_stats(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> AppResult<Json<ApiResponse<CatalogStats>>> {
    let stats = state.storefront.catalog().stats().await;
    Ok(Json(ApiResponse::success("Stats", stats, None)))
}

#[utoipa::path(
    get,
    path = "/api/admin/products",
    responses(
        (status = 200, description = "Full catalog", body = ApiResponse<ProductList>),
        (status = 401, description = "No admin session"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_all_products(
    State(state): State<AppState>,
    _admin: AdminSession,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let items = state.storefront.catalog().load().await;
    let meta = Meta::total(items.len());
    Ok(Json(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    put,
    path = "/api/admin/products",
    request_body = Vec<Product>,
    responses(
        (status = 200, description = "Catalog replaced", body = ApiResponse<ProductList>),
        (status = 422, description = "Invalid product"),
        (status = 401, description = "No admin session"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn replace_products(
    State(state): State<AppState>,
    _admin: AdminSession,
    Json(payload): Json<Vec<Product>>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let items = state.storefront.catalog().replace_all(payload).await?;
    let meta = Meta::total(items.len());
    Ok(Json(ApiResponse::success(
        "Catalog saved",
        ProductList { items },
        Some(meta),
    )))
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product created", body = ApiResponse<Product>),
        (status = 422, description = "Invalid product"),
        (status = 401, description = "No admin session"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_product(
    State(state): State<AppState>,
    _admin: AdminSession,
    Json(payload): Json<ProductInput>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = state.storefront.catalog().create_product(payload).await?;
    Ok(Json(ApiResponse::success(
        "Product created",
        product,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product replaced", body = ApiResponse<Product>),
        (status = 404, description = "Product not found"),
        (status = 422, description = "Invalid product"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_product(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(id): Path<String>,
    Json(payload): Json<ProductInput>,
) -> AppResult<Json<ApiResponse<Product>>> {
    let product = state
        .storefront
        .catalog()
        .update_product(&id, payload)
        .await?;
    Ok(Json(ApiResponse::success(
        "Updated",
        product,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/admin/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Product not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    state.storefront.catalog().delete_product(&id).await?;
    Ok(Json(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
