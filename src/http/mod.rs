//! HTTP protocol layer module
//!
//! Protocol-level helpers with no filesystem knowledge: form body decoding
//! and response builders.

pub mod form;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_bad_request_response, build_conflict_response, build_created_response,
    build_file_response, build_listing_response, build_method_not_allowed_response,
    build_not_found_response, build_not_implemented_response, build_options_response,
    build_payload_too_large_response,
};
