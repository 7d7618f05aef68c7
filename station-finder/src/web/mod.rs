//! Web layer for the station finder.
//!
//! Provides the HTTP endpoint that ranks stations around a caller.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
