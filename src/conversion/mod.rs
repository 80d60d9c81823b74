//! Conversion between upstream results and route responses

pub mod envelope;
pub mod result_formatter;
