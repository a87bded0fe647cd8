//! Routing of decoded requests to registered resolvers.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use catena_messages::{ClientRequest, ClientResponse, RequestKind};
use catena_queries::ClientResolver;
use tracing::warn;

use crate::metrics::QueryMetrics;

/// A closed routing table from request kind to resolver.
///
/// Adding a query family means adding a [`RequestKind`] variant and
/// registering a resolver for it here; there is no resolution fallback
/// chain to inherit from.
pub struct Dispatcher {
    resolvers: HashMap<RequestKind, Box<dyn ClientResolver>>,
    metrics: Arc<QueryMetrics>,
}

impl Dispatcher {
    pub fn new(metrics: Arc<QueryMetrics>) -> Self {
        Self {
            resolvers: HashMap::new(),
            metrics,
        }
    }

    /// Register `resolver` under its own kind, replacing any previous
    /// registration for that kind.
    pub fn register(&mut self, resolver: Box<dyn ClientResolver>) {
        self.resolvers.insert(resolver.kind(), resolver);
    }

    /// Route `request` to the resolver registered for its kind.
    ///
    /// A kind with no registered resolver is a wiring defect and answers
    /// with the kind's empty `INTERNAL_ERROR` response.
    pub fn dispatch(&self, request: &ClientRequest) -> ClientResponse {
        let kind = request.kind();
        self.metrics.record_request(kind);
        let started = Instant::now();

        let response = match self.resolvers.get(&kind) {
            Some(resolver) => resolver.resolve(request),
            None => {
                warn!(?kind, "no resolver registered for request kind");
                ClientResponse::internal_error(kind)
            }
        };

        self.metrics
            .resolve_time_ms
            .observe(started.elapsed().as_secs_f64() * 1000.0);
        self.metrics.record_status(response.status());
        response
    }
}
