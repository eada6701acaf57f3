//! API handlers and routing for the bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    extract::OriginalUri,
    http::{Method, Uri},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(health::health_check).fallback(method_not_allowed))
        .route(
            "/books",
            get(books::list_books)
                .put(books::put_book)
                .fallback(method_not_allowed),
        )
        .route("/books/:id", get(books::get_book).fallback(method_not_allowed))
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
        .fallback(route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::MethodNotAllowed(format!("{} {}", method, uri.path()))
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
