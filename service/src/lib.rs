//! Read-query service surface — the glue between a transport and the
//! resolver layer.
//!
//! The service:
//! - Decodes raw payloads into typed requests and encodes responses
//! - Routes each request to the resolver registered for its kind
//! - Counts requests, responses, and resolution time
//! - Carries the logging and configuration plumbing a deployment needs

pub mod codec;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod service;

pub use codec::{decode_request, encode_response, MAX_PAYLOAD_SIZE};
pub use config::ServiceConfig;
pub use dispatch::Dispatcher;
pub use error::ServiceError;
pub use logging::{init_logging, init_logging_from, LogFormat};
pub use metrics::QueryMetrics;
pub use service::QueryService;
