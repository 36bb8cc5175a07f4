// Adapters layer: concrete implementations for external systems (backend http, terminal output).

pub mod console;
pub mod rest;
