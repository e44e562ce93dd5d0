pub mod health;

use axum::{
    http::Method,
    routing::{get, post, put},
    Router,
};

use crate::analysis::handlers::handle_analyze_job;
use crate::errors::AppError;
use crate::jobs::handlers;
use crate::state::AppState;

async fn jobs_method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed {
        method,
        allow: &["GET", "POST"],
    }
}

async fn job_method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed {
        method,
        allow: &["PUT", "DELETE"],
    }
}

async fn analyze_method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed {
        method,
        allow: &["POST"],
    }
}

async fn unknown_route() -> AppError {
    AppError::NotFound("Not found".to_string())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/jobs",
            get(handlers::handle_list_jobs)
                .post(handlers::handle_create_job)
                .fallback(jobs_method_not_allowed),
        )
        .route(
            "/jobs/:id",
            put(handlers::handle_update_job)
                .delete(handlers::handle_delete_job)
                .fallback(job_method_not_allowed),
        )
        .route(
            "/analyze-job",
            post(handle_analyze_job).fallback(analyze_method_not_allowed),
        )
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api", api_routes())
        .fallback(unknown_route)
        .with_state(state)
}
