//! The seam between request dispatch and query logic.

use catena_messages::{ClientRequest, ClientResponse, RequestKind};

/// Answers one kind of read query.
///
/// A resolver is registered with the dispatcher under its
/// [`kind`](ClientResolver::kind) and always produces a response of that
/// same kind. Handed a mismatched request variant, it answers with the
/// empty `INTERNAL_ERROR` response for its kind instead of panicking.
pub trait ClientResolver: Send + Sync {
    /// The request kind this resolver answers.
    fn kind(&self) -> RequestKind;

    /// Resolve `request` into a response of the matching kind.
    fn resolve(&self, request: &ClientRequest) -> ClientResponse;
}
