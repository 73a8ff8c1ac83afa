//! # Waitlist Test Suite
//!
//! Cross-crate tests for the enrollment flow.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── support.rs      # Instrumented store wrappers
//!     ├── flows.rs        # Controller → service → store
//!     ├── concurrency.rs  # Concurrent submissions of one address
//!     ├── persistence.rs  # File store across restarts
//!     └── http.rs         # Gateway router end to end
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p waitlist-tests
//! cargo test -p waitlist-tests integration::concurrency
//! ```

pub mod integration;
