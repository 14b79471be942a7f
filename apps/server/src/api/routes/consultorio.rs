use crate::api::handlers::consultorio;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn consultorio_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/consultorios",
            get(consultorio::list_consultorios)
                .post(consultorio::create_consultorio)
                .put(consultorio::update_consultorio),
        )
        .route(
            "/consultorios/:id",
            get(consultorio::get_consultorio).delete(consultorio::delete_consultorio),
        )
}
