//! Infrastructure layer module
//!
//! This module contains the adapters around the domain:
//! - Configuration management
//! - Logging infrastructure
//! - Template-backed generation hooks
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
pub mod templates;
