pub mod coffees;
pub mod health;

use axum::{middleware, routing::get, Router};

use crate::middleware::auth_middleware;

/// Creates the router with all handler routes
pub fn handler() -> Router {
    let public_routes = Router::new().route("/health", get(health::handler));

    let protected_routes = Router::new()
        .route("/coffees", get(coffees::list).post(coffees::create))
        .route(
            "/coffees/{id}",
            get(coffees::get).put(coffees::update).delete(coffees::delete),
        )
        .layer(middleware::from_fn(auth_middleware));

    public_routes.merge(protected_routes)
}
