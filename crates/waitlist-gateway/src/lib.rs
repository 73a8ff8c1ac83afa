//! HTTP surface for waitlist enrollment.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              WAITLIST GATEWAY                │
//! ├──────────────────────────────────────────────┤
//! │  POST /waitlist   GET /health   GET /metrics │
//! │         │                                    │
//! │  ┌──────┴──────────────────────────────┐     │
//! │  │ Middleware: Trace → CORS → BodyLimit │     │
//! │  └──────┬──────────────────────────────┘     │
//! │         │                                    │
//! │  ┌──────┴──────────────────────────────┐     │
//! │  │ EnrollmentController (per request)  │     │
//! │  └──────┬──────────────────────────────┘     │
//! └─────────┼────────────────────────────────────┘
//!           ▼
//!     dyn WaitlistApi
//! ```
//!
//! # Responses
//!
//! | Outcome           | Status |
//! |-------------------|--------|
//! | enrolled          | 201    |
//! | already enrolled  | 409    |
//! | invalid email     | 422    |
//! | store unavailable | 503    |
//!
//! # Usage
//!
//! ```ignore
//! use waitlist_gateway::{GatewayConfig, WaitlistGateway};
//!
//! let gateway = WaitlistGateway::new(GatewayConfig::default(), api, metrics)?;
//! gateway.start(async { let _ = tokio::signal::ctrl_c().await; }).await?;
//! ```

pub mod domain;
pub mod middleware;
pub mod router;
pub mod service;

pub use domain::{
    ConfigError, CorsConfig, EnrollRequest, EnrollmentResponse, GatewayConfig, GatewayError,
    HttpConfig, LimitsConfig,
};
pub use router::{build_router, AppState};
pub use service::WaitlistGateway;
