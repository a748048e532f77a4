use axum::{routing::get, Router};

mod health;
pub mod todos;

pub use health::health;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let todo_router = Router::new()
        .route("/", get(todos::routes::list))
        .route(
            "/create/",
            get(todos::routes::create_form).post(todos::routes::create),
        )
        .route(
            "/{id}/update/",
            get(todos::routes::update_form).post(todos::routes::update),
        )
        .route(
            "/{id}/delete/",
            get(todos::routes::delete_confirm).post(todos::routes::delete),
        )
        .route("/{id}/toggle/", get(todos::routes::toggle));

    Router::new()
        .route("/health", get(health))
        .merge(todo_router)
}
