//! API data models
//!
//! This module contains the platform enumeration and the JSON bodies the
//! service returns.

pub mod platform;
pub mod response;
