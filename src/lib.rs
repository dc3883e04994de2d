//! Structured field extraction from saved Wuzzuf job pages.

pub mod job;
pub mod parser;
