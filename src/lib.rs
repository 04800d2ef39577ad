//! Themewright Library
//!
//! This library provides the core of the Themewright template builder:
//! the component and page models, the WordPress theme generator, template
//! storage, archive export and, behind the `web` feature, the REST API.

// Module declarations
pub mod cli;
pub mod config;
pub mod generator;
pub mod models;
pub mod services;
#[cfg(feature = "web")]
pub mod web;
