//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, Base64, random bytes)
//! - Cookie management (session cookie contract)

pub mod cookie;
pub mod crypto;
