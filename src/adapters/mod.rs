//! Adapters - Swappable implementations of port interfaces

pub mod console;

pub mod ingest;
