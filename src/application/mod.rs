//! Application Layer
//!
//! The chat session controller and its request DTOs.

pub mod controller;
pub mod dto;

pub use controller::{AuthAction, SessionController, View};
