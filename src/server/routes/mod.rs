//! Route handlers, split into the page itself and health checks.

pub mod health;
pub mod pages;
