//! Middleware stack for the HTTP surface.
//!
//! Order (outermost first): Trace → CORS → BodyLimit

pub mod cors;

pub use cors::create_cors_layer;
