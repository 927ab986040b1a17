use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use catalog_products::{ProductDto, to_dto, to_dto_list, to_entity, validate, validate_delete};

use crate::app::{AppState, errors};
use crate::context::PrincipalContext;

pub fn router() -> Router {
    Router::new()
        .route(
            "/",
            get(get_products)
                .post(create_product)
                .put(update_product)
                .delete(delete_product),
        )
        .route("/:id", get(get_product))
}

pub async fn get_products(
    Extension(state): Extension<Arc<AppState>>,
) -> axum::response::Response {
    let store = state.products();

    let products = match store.get_all().await {
        Ok(products) => products,
        Err(e) => return errors::store_error(e),
    };

    if products.is_empty() {
        return (StatusCode::NOT_FOUND, "No products detected in the database").into_response();
    }

    let list = to_dto_list(&products);
    // Conversion is 1:1, so an empty list here should not occur.
    if list.is_empty() {
        return (StatusCode::NOT_FOUND, "No product found").into_response();
    }

    (StatusCode::OK, Json(list)).into_response()
}

pub async fn get_product(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<i32>,
) -> axum::response::Response {
    let store = state.products();

    match store.find_by_id(id).await {
        Ok(Some(product)) => (StatusCode::OK, Json(to_dto(&product))).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            format!("No product found with id: {id}"),
        )
            .into_response(),
        Err(e) => errors::store_error(e),
    }
}

pub async fn create_product(
    Extension(state): Extension<Arc<AppState>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<ProductDto>,
) -> axum::response::Response {
    if let Err(resp) = require_admin(&principal) {
        return resp;
    }
    if let Err(defects) = validate(&body) {
        return errors::validation_error(defects);
    }

    let store = state.products();
    errors::outcome_response(store.create(to_entity(body)).await)
}

pub async fn update_product(
    Extension(state): Extension<Arc<AppState>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<ProductDto>,
) -> axum::response::Response {
    if let Err(resp) = require_admin(&principal) {
        return resp;
    }
    if let Err(defects) = validate(&body) {
        return errors::validation_error(defects);
    }

    let store = state.products();
    errors::outcome_response(store.update(to_entity(body)).await)
}

pub async fn delete_product(
    Extension(state): Extension<Arc<AppState>>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<ProductDto>,
) -> axum::response::Response {
    if let Err(resp) = require_admin(&principal) {
        return resp;
    }
    // Delete only needs an id to act on; no further structural checks.
    if let Err(defects) = validate_delete(&body) {
        return errors::validation_error(defects);
    }

    let store = state.products();
    errors::outcome_response(store.delete(to_entity(body)).await)
}

fn require_admin(principal: &PrincipalContext) -> Result<(), axum::response::Response> {
    if principal.is_admin() {
        Ok(())
    } else {
        Err(errors::json_error(
            StatusCode::FORBIDDEN,
            "forbidden",
            "Admin role required",
        ))
    }
}
