//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random tokens, constant-time compare)
//! - CSRF token issuance and verification
//! - Cookie management and HTTPS detection
//! - Daily append-only file logging
//! - Rate limiting configuration

pub mod cookie;
pub mod crypto;
pub mod csrf;
pub mod logfile;
pub mod rate_limit;
