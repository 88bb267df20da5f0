//! Asset Host HTTP Surface

pub mod handlers;
pub mod routes;
