//! # Pairchat Library
//!
//! This crate provides a one-to-one chat client with:
//! - Credential submission against a backend HTTP API
//! - A user directory for picking a conversation peer
//! - One real-time WebSocket conversation at a time
//! - A deep link out to an external messaging bot
//!
//! plus a trivial static asset host exposing one configuration endpoint.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Session, directory, conversation and transcript state
//! - **Application Layer**: The chat session controller
//! - **Infrastructure Layer**: HTTP backend client and WebSocket transport
//! - **Presentation Layer**: Asset host routes and the console front end
//!
//! ## Module Structure
//!
//! ```text
//! pairchat/
//! +-- config/        Configuration management
//! +-- domain/        Entities, state machine, and boundary traits
//! +-- application/   Session controller and request DTOs
//! +-- infrastructure/ Backend client and transport implementations
//! +-- presentation/  Asset host routes and console loop
//! +-- shared/        Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - Session and conversation state
pub mod domain;

// Application layer - The session controller
pub mod application;

// Infrastructure layer - Outbound clients
pub mod infrastructure;

// Presentation layer - Asset host and console front end
pub mod presentation;

// Shared utilities
pub mod shared;

// Asset host startup
pub mod startup;

// Telemetry and observability
pub mod telemetry;
