//! Infrastructure Layer
//!
//! Outbound client implementations of the domain boundary traits.

pub mod backend;
pub mod transport;

pub use backend::HttpBackend;
pub use transport::WsTransport;
