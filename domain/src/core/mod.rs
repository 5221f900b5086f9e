//! Core helpers shared across all subdomains.
//!
//! - [`string`] - UTF-8 safe truncation for display

pub mod string;
