//! Prometheus metrics for the query service.
//!
//! Counts requests by kind and responses by status, and times resolution.
//! The [`QueryMetrics`] struct owns a dedicated [`Registry`] that a
//! metrics endpoint can encode into the Prometheus text exposition
//! format.

use catena_messages::{RequestKind, Status};
use prometheus::{
    register_histogram_with_registry, register_int_counter_with_registry, Histogram,
    HistogramOpts, IntCounter, Opts, Registry,
};

/// Central collection of all query-service Prometheus metrics.
pub struct QueryMetrics {
    /// The Prometheus registry that owns every metric below.
    pub registry: Registry,

    // ── Requests by kind ────────────────────────────────────────────────
    /// Total batch list requests dispatched.
    pub batch_list_requests: IntCounter,
    /// Total batch get requests dispatched.
    pub batch_get_requests: IntCounter,
    /// Total block list requests dispatched.
    pub block_list_requests: IntCounter,
    /// Total block get requests dispatched.
    pub block_get_requests: IntCounter,

    // ── Responses by status ─────────────────────────────────────────────
    /// Total responses answered with OK.
    pub responses_ok: IntCounter,
    /// Total responses answered with INTERNAL_ERROR.
    pub responses_internal_error: IntCounter,
    /// Total responses answered with NOT_READY.
    pub responses_not_ready: IntCounter,
    /// Total responses answered with NO_ROOT.
    pub responses_no_root: IntCounter,
    /// Total responses answered with NO_RESOURCE.
    pub responses_no_resource: IntCounter,
    /// Total responses answered with INVALID_ID.
    pub responses_invalid_id: IntCounter,

    // ── Histograms ──────────────────────────────────────────────────────
    /// Time from dispatch to response, in milliseconds.
    pub resolve_time_ms: Histogram,
}

impl QueryMetrics {
    /// Create a fresh set of metrics, all registered under a new
    /// [`Registry`].
    pub fn new() -> Self {
        let registry = Registry::new();

        // Requests by kind
        let batch_list_requests = register_int_counter_with_registry!(
            Opts::new(
                "catena_batch_list_requests_total",
                "Total batch list requests dispatched"
            ),
            registry
        )
        .expect("failed to register batch_list_requests counter");

        let batch_get_requests = register_int_counter_with_registry!(
            Opts::new(
                "catena_batch_get_requests_total",
                "Total batch get requests dispatched"
            ),
            registry
        )
        .expect("failed to register batch_get_requests counter");

        let block_list_requests = register_int_counter_with_registry!(
            Opts::new(
                "catena_block_list_requests_total",
                "Total block list requests dispatched"
            ),
            registry
        )
        .expect("failed to register block_list_requests counter");

        let block_get_requests = register_int_counter_with_registry!(
            Opts::new(
                "catena_block_get_requests_total",
                "Total block get requests dispatched"
            ),
            registry
        )
        .expect("failed to register block_get_requests counter");

        // Responses by status
        let responses_ok = register_int_counter_with_registry!(
            Opts::new("catena_responses_ok_total", "Total OK responses"),
            registry
        )
        .expect("failed to register responses_ok counter");

        let responses_internal_error = register_int_counter_with_registry!(
            Opts::new(
                "catena_responses_internal_error_total",
                "Total INTERNAL_ERROR responses"
            ),
            registry
        )
        .expect("failed to register responses_internal_error counter");

        let responses_not_ready = register_int_counter_with_registry!(
            Opts::new(
                "catena_responses_not_ready_total",
                "Total NOT_READY responses"
            ),
            registry
        )
        .expect("failed to register responses_not_ready counter");

        let responses_no_root = register_int_counter_with_registry!(
            Opts::new("catena_responses_no_root_total", "Total NO_ROOT responses"),
            registry
        )
        .expect("failed to register responses_no_root counter");

        let responses_no_resource = register_int_counter_with_registry!(
            Opts::new(
                "catena_responses_no_resource_total",
                "Total NO_RESOURCE responses"
            ),
            registry
        )
        .expect("failed to register responses_no_resource counter");

        let responses_invalid_id = register_int_counter_with_registry!(
            Opts::new(
                "catena_responses_invalid_id_total",
                "Total INVALID_ID responses"
            ),
            registry
        )
        .expect("failed to register responses_invalid_id counter");

        // Histograms – exponential buckets covering 0.1 ms → ~1.6 s.
        let resolve_time_ms = register_histogram_with_registry!(
            HistogramOpts::new(
                "catena_resolve_time_ms",
                "Query resolution time in milliseconds"
            )
            .buckets(prometheus::exponential_buckets(0.1, 2.0, 15).unwrap()),
            registry
        )
        .expect("failed to register resolve_time_ms histogram");

        Self {
            registry,
            batch_list_requests,
            batch_get_requests,
            block_list_requests,
            block_get_requests,
            responses_ok,
            responses_internal_error,
            responses_not_ready,
            responses_no_root,
            responses_no_resource,
            responses_invalid_id,
            resolve_time_ms,
        }
    }

    /// Count one dispatched request of the given kind.
    pub fn record_request(&self, kind: RequestKind) {
        match kind {
            RequestKind::BatchList => self.batch_list_requests.inc(),
            RequestKind::BatchGet => self.batch_get_requests.inc(),
            RequestKind::BlockList => self.block_list_requests.inc(),
            RequestKind::BlockGet => self.block_get_requests.inc(),
        }
    }

    /// Count one response by its status.
    pub fn record_status(&self, status: Status) {
        match status {
            Status::Ok => self.responses_ok.inc(),
            Status::InternalError => self.responses_internal_error.inc(),
            Status::NotReady => self.responses_not_ready.inc(),
            Status::NoRoot => self.responses_no_root.inc(),
            Status::NoResource => self.responses_no_resource.inc(),
            Status::InvalidId => self.responses_invalid_id.inc(),
        }
    }
}

impl Default for QueryMetrics {
    fn default() -> Self {
        Self::new()
    }
}
