use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::catalog::{find_by_key, list_products, Product, ProductKey};
use crate::errors::AppError;
use crate::estimator::estimate_raw;
use crate::state::AppState;

/// A catalog row priced against the CURRENT top-level dimensions — every
/// tile in the widget shows market/your price for the shared area.
#[derive(Debug, Serialize)]
pub struct ProductView {
    pub key: ProductKey,
    pub name: &'static str,
    pub blurb: &'static str,
    pub rate_per_sq_m: f64,
    pub image: &'static str,
    pub market_price: i64,
    pub your_price: i64,
}

fn product_view(product: &'static Product, width_raw: &str, height_raw: &str) -> ProductView {
    let e = estimate_raw(width_raw, height_raw, product);
    ProductView {
        key: product.key,
        name: product.name,
        blurb: product.blurb,
        rate_per_sq_m: product.rate_per_sq_m,
        image: product.image,
        market_price: e.market_price,
        your_price: e.your_price,
    }
}

/// GET /api/v1/products
pub async fn handle_list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductView>>, AppError> {
    let session = state.session.read().await;
    let views = list_products()
        .iter()
        .map(|p| product_view(p, &session.width_raw, &session.height_raw))
        .collect();
    Ok(Json(views))
}

/// GET /api/v1/products/:key
pub async fn handle_get_product(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ProductView>, AppError> {
    let product = find_by_key(&key)?;
    let session = state.session.read().await;
    Ok(Json(product_view(
        product,
        &session.width_raw,
        &session.height_raw,
    )))
}
