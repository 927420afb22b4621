// src/transport/rest.rs - REST API Transport Layer
//! Thin HTTP/JSON layer over the engine.
//!
//! This layer only parses requests, delegates, and maps the error taxonomy
//! onto HTTP statuses: `NotFound` → 404, `InvalidInput` → 400, `Storage` →
//! 500. All business decisions live in the engine.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::error;

use crate::core::order::{Order, OrderItem, OrderStatus};
use crate::core::types::{MenuItemId, OrderId, RestaurantId, UserId};
use crate::engine::{catalog::CatalogService, lifecycle::OrderLifecycleManager};
use crate::Error;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct ApiState {
    /// Catalog CRUD services
    pub catalog: Arc<CatalogService>,
    /// Order placement and retrieval
    pub lifecycle: Arc<OrderLifecycleManager>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Error::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Error::Storage(err) => {
                error!(%err, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal storage error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Build the application router
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/users", post(create_user).get(list_users))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/users/:id/orders", get(orders_by_customer))
        .route("/restaurants", post(create_restaurant))
        .route("/restaurants/:id", get(get_restaurant))
        .route(
            "/restaurants/:id/menu-items",
            post(add_menu_item).get(menu_items_by_restaurant),
        )
        .route(
            "/menu-items/:id",
            get(get_menu_item).put(update_menu_item).delete(delete_menu_item),
        )
        .route("/orders", post(place_order))
        .route("/orders/:id", get(get_order))
        .route("/orders/status/:status", get(orders_by_status))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct UserBody {
    name: String,
    email: String,
    phone: String,
    address: String,
}

#[derive(Debug, Deserialize)]
struct RestaurantBody {
    name: String,
    address: String,
    cuisine: String,
}

#[derive(Debug, Deserialize)]
struct MenuItemBody {
    name: String,
    description: Option<String>,
    price: Decimal,
}

/// Body of `POST /orders`
#[derive(Debug, Serialize, Deserialize)]
struct PlaceOrderBody {
    customer_id: UserId,
    items: Vec<OrderItem>,
}

async fn create_user(
    State(state): State<ApiState>,
    Json(body): Json<UserBody>,
) -> Result<(StatusCode, Json<crate::User>), Error> {
    let user = state
        .catalog
        .create_user(&body.name, &body.email, &body.phone, &body.address)
        .await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn list_users(State(state): State<ApiState>) -> Result<Json<Vec<crate::User>>, Error> {
    Ok(Json(state.catalog.all_users().await?))
}

async fn get_user(
    State(state): State<ApiState>,
    Path(id): Path<UserId>,
) -> Result<Json<crate::User>, Error> {
    Ok(Json(state.catalog.user_by_id(id).await?))
}

async fn update_user(
    State(state): State<ApiState>,
    Path(id): Path<UserId>,
    Json(body): Json<UserBody>,
) -> Result<Json<crate::User>, Error> {
    let user = state
        .catalog
        .update_user(id, &body.name, &body.email, &body.phone, &body.address)
        .await?;
    Ok(Json(user))
}

async fn delete_user(
    State(state): State<ApiState>,
    Path(id): Path<UserId>,
) -> Result<StatusCode, Error> {
    state.catalog.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn create_restaurant(
    State(state): State<ApiState>,
    Json(body): Json<RestaurantBody>,
) -> Result<(StatusCode, Json<crate::Restaurant>), Error> {
    let restaurant = state
        .catalog
        .create_restaurant(&body.name, &body.address, &body.cuisine)
        .await?;
    Ok((StatusCode::CREATED, Json(restaurant)))
}

async fn get_restaurant(
    State(state): State<ApiState>,
    Path(id): Path<RestaurantId>,
) -> Result<Json<crate::Restaurant>, Error> {
    Ok(Json(state.catalog.restaurant_by_id(id).await?))
}

async fn add_menu_item(
    State(state): State<ApiState>,
    Path(restaurant_id): Path<RestaurantId>,
    Json(body): Json<MenuItemBody>,
) -> Result<(StatusCode, Json<crate::MenuItem>), Error> {
    let item = state
        .catalog
        .add_menu_item(
            restaurant_id,
            &body.name,
            body.description.as_deref(),
            body.price,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn menu_items_by_restaurant(
    State(state): State<ApiState>,
    Path(restaurant_id): Path<RestaurantId>,
) -> Result<Json<Vec<crate::MenuItem>>, Error> {
    Ok(Json(
        state.catalog.menu_items_by_restaurant(restaurant_id).await?,
    ))
}

async fn get_menu_item(
    State(state): State<ApiState>,
    Path(id): Path<MenuItemId>,
) -> Result<Json<crate::MenuItem>, Error> {
    Ok(Json(state.catalog.menu_item_by_id(id).await?))
}

async fn update_menu_item(
    State(state): State<ApiState>,
    Path(id): Path<MenuItemId>,
    Json(body): Json<MenuItemBody>,
) -> Result<Json<crate::MenuItem>, Error> {
    let item = state
        .catalog
        .update_menu_item(id, &body.name, body.description.as_deref(), body.price)
        .await?;
    Ok(Json(item))
}

async fn delete_menu_item(
    State(state): State<ApiState>,
    Path(id): Path<MenuItemId>,
) -> Result<StatusCode, Error> {
    state.catalog.delete_menu_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn place_order(
    State(state): State<ApiState>,
    Json(body): Json<PlaceOrderBody>,
) -> Result<(StatusCode, Json<Order>), Error> {
    let order = state
        .lifecycle
        .place_order(body.customer_id, body.items)
        .await?;
    Ok((StatusCode::CREATED, Json(order)))
}

async fn get_order(
    State(state): State<ApiState>,
    Path(id): Path<OrderId>,
) -> Result<Json<Order>, Error> {
    Ok(Json(state.lifecycle.order_by_id(id).await?))
}

/// Malformed status filters are rejected here with `InvalidInput`; the
/// lifecycle manager only ever sees well-formed statuses.
async fn orders_by_status(
    State(state): State<ApiState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<Order>>, Error> {
    let status: OrderStatus = status.parse()?;
    Ok(Json(state.lifecycle.orders_by_status(status).await?))
}

async fn orders_by_customer(
    State(state): State<ApiState>,
    Path(id): Path<UserId>,
) -> Result<Json<Vec<Order>>, Error> {
    Ok(Json(state.lifecycle.orders_by_customer(id).await?))
}
