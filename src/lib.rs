//! nitro-config - NetScaler configuration object client
//!
//! This crate manages configuration objects on a NetScaler appliance through
//! the NITRO REST API. Instead of one hand-written function per object type
//! and operation, a single engine (`ConfigObjectClient`) is driven by a
//! declarative table of object schemas.
//!
//! ## Architecture
//!
//! - `interface` module - the collaborator traits (transport, response
//!   unwrapping, configuration persistence)
//! - `nitro` module - schemas, payload construction, the engine and the
//!   reqwest-backed HTTP transport
//! - `cli` module - command-line interface over the built-in schema catalog
//!
//! The engine only depends on the traits in `interface`, so any transport can
//! be plugged in.

pub mod cli;
pub mod interface;
pub mod nitro;

pub use interface::{ConfigPersistence, ResponseUnwrapper, Transport};
pub use nitro::{
    ConfigObjectClient, MutationRequest, MutationResult, NitroClient, NitroConfig, ObjectSchema,
    Operation, SaveOutcome, SchemaError,
};

/// Initialize logging for the application
#[allow(dead_code)]
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_test_writer() // This ensures output goes to both stdout and test output
        .try_init();
}
