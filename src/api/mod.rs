pub mod handlers;
pub mod models;
pub mod openapi;

pub use handlers::{AppState, api_routes, app_router};
