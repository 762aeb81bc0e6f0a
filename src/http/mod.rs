//! HTTP surface of the gateway
//!
//! Provides the liveness probe and the `/api` placeholder routes.

pub mod handlers;
