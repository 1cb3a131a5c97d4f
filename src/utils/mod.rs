//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Conversions from transport errors into the crate's error types
pub mod error_helpers;

/// stderr logger for the `log` facade and verbose output helpers
pub mod logging;

/// Display text formatting and width-aware truncation
pub mod text;

/// Input validation and sanitization utilities
pub mod validation;
