//! Payload codec — JSON serialization at the service boundary.
//!
//! The request kind travels out of band (it is how the transport picked
//! the payload shape in the first place), so the codec maps a kind plus
//! raw bytes to a decoded [`ClientRequest`], and a [`ClientResponse`]
//! back to the bytes of its inner payload.

use catena_messages::{ClientRequest, ClientResponse, RequestKind};

use crate::ServiceError;

/// Maximum accepted request payload size in bytes.
pub const MAX_PAYLOAD_SIZE: usize = 4 * 1024 * 1024; // 4 MiB

/// Decode a raw payload into the request variant named by `kind`.
pub fn decode_request(kind: RequestKind, payload: &[u8]) -> Result<ClientRequest, ServiceError> {
    if payload.len() > MAX_PAYLOAD_SIZE {
        return Err(ServiceError::PayloadTooLarge {
            size: payload.len(),
            max: MAX_PAYLOAD_SIZE,
        });
    }
    let request = match kind {
        RequestKind::BatchList => ClientRequest::BatchList(decode(payload)?),
        RequestKind::BatchGet => ClientRequest::BatchGet(decode(payload)?),
        RequestKind::BlockList => ClientRequest::BlockList(decode(payload)?),
        RequestKind::BlockGet => ClientRequest::BlockGet(decode(payload)?),
    };
    Ok(request)
}

/// Encode a response as the bytes of its inner payload.
pub fn encode_response(response: &ClientResponse) -> Vec<u8> {
    match response {
        ClientResponse::BatchList(r) => to_vec(r),
        ClientResponse::BatchGet(r) => to_vec(r),
        ClientResponse::BlockList(r) => to_vec(r),
        ClientResponse::BlockGet(r) => to_vec(r),
    }
}

fn decode<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T, ServiceError> {
    serde_json::from_slice(data).map_err(|e| ServiceError::Malformed(e.to_string()))
}

fn to_vec<T: serde::Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("response payloads are always serializable to JSON")
}
