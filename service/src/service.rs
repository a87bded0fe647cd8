//! The read-query service facade.

use std::sync::Arc;

use catena_messages::{ClientRequest, ClientResponse, RequestKind, Status};
use catena_queries::{
    BatchGetResolver, BatchListResolver, BlockGetResolver, BlockListResolver,
};
use catena_store::ChainStore;
use tracing::debug;

use crate::codec;
use crate::dispatch::Dispatcher;
use crate::metrics::QueryMetrics;

/// The full read-query surface over one chain store: every query kind
/// wired to its resolver, with metrics and the payload codec in front.
///
/// A transport hands either decoded requests to [`handle`] or raw
/// payloads to [`handle_bytes`]; both always produce a response of the
/// requested kind, never a transport-level error.
///
/// [`handle`]: QueryService::handle
/// [`handle_bytes`]: QueryService::handle_bytes
pub struct QueryService {
    dispatcher: Dispatcher,
    metrics: Arc<QueryMetrics>,
}

impl QueryService {
    /// Wire the full resolver set over `store`.
    pub fn new(store: Arc<dyn ChainStore + Send + Sync>) -> Self {
        let metrics = Arc::new(QueryMetrics::new());
        let mut dispatcher = Dispatcher::new(Arc::clone(&metrics));
        dispatcher.register(Box::new(BatchListResolver::new(Arc::clone(&store))));
        dispatcher.register(Box::new(BatchGetResolver::new(Arc::clone(&store))));
        dispatcher.register(Box::new(BlockListResolver::new(Arc::clone(&store))));
        dispatcher.register(Box::new(BlockGetResolver::new(store)));
        Self {
            dispatcher,
            metrics,
        }
    }

    /// Answer a decoded request.
    pub fn handle(&self, request: &ClientRequest) -> ClientResponse {
        self.dispatcher.dispatch(request)
    }

    /// Answer a raw payload claiming to be a request of `kind`.
    ///
    /// An undecodable or oversized payload is answered with the kind's
    /// empty `INTERNAL_ERROR` response — encoded like any other — so the
    /// transport never has to special-case codec failures.
    pub fn handle_bytes(&self, kind: RequestKind, payload: &[u8]) -> Vec<u8> {
        let response = match codec::decode_request(kind, payload) {
            Ok(request) => self.dispatcher.dispatch(&request),
            Err(e) => {
                debug!(?kind, error = %e, "rejected request payload");
                self.metrics.record_request(kind);
                self.metrics.record_status(Status::InternalError);
                ClientResponse::internal_error(kind)
            }
        };
        codec::encode_response(&response)
    }

    /// The metrics (and their Prometheus registry) backing this service.
    pub fn metrics(&self) -> &QueryMetrics {
        &self.metrics
    }
}
