//! Adapters Layer (Driven Adapters)
//!
//! Implementations of the `WaitlistStore` port.
//!
//! ## Adapters
//!
//! - `InMemoryWaitlistStore` - Process-local store for development and tests
//! - `FileBackedWaitlistStore` - JSON Lines file, durable across restarts

pub mod file;
pub mod memory;

pub use file::FileBackedWaitlistStore;
pub use memory::InMemoryWaitlistStore;
