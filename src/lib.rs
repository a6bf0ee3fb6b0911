//! Tincture - color conversion front-end
//!
//! Configuration, conversion service and report types around the
//! `color-model` engine. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
