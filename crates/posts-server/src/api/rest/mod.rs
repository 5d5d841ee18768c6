//! REST API implementation
//!
//! Modular REST API with separated concerns:
//! - `types`: Request/response types and shared state
//! - `negotiation`: Accept and Content-Type middleware
//! - `extractors`: Raw JSON body extraction
//! - `handlers`: API endpoint handlers
//! - `router`: Router creation and configuration

mod extractors;
mod handlers;
mod negotiation;
mod router;
mod tests;
pub mod types;

pub use extractors::JsonBody;
pub use negotiation::{accepts_json, payload_is_json};
pub use router::create_router;
pub use types::{AppState, HealthResponse, ListParams, MessageBody};
