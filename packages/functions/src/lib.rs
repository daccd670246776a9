//! Lambda-facing glue for the summarize and compare functions.
//!
//! The binaries in `src/bin/` construct the AWS clients once per process and
//! inject them into the handlers in [`handler`]; everything here is generic
//! over the library's collaborator traits so the full invocation path is
//! testable without AWS.

pub mod config;
pub mod event;
pub mod handler;
pub mod response;

pub use config::Config;
pub use event::{decode_object_key, document_from_event, EventError};
pub use handler::{compare_handler, summarize_handler};
pub use response::InvocationResult;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the tracing subscriber for a function binary.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,summarization=debug,functions=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
