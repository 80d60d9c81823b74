//! HTTP surface: routes, error responses and the form UI

pub mod endpoints;
pub mod error;
pub mod ui;
