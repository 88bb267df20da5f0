//! Presentation Layer
//!
//! Asset host HTTP surface and the console front end.

pub mod console;
pub mod http;
