//! # API Layer
//!
//! Inbound surfaces. The relay exposes a single REST surface.

pub mod rest;
