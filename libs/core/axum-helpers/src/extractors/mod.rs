//! Extractors that reject with the JSON [`ErrorResponse`](crate::ErrorResponse) body.

pub mod id_path;
pub mod json_payload;

pub use id_path::IdPath;
pub use json_payload::JsonPayload;
