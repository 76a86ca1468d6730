//! Core library components.
//!
//! This module contains the credential registry, the storage backends it
//! sits on, and configuration handling.

pub mod config;
pub mod constants;
pub mod domain;
pub mod registry;
pub mod store;
pub mod validation;
