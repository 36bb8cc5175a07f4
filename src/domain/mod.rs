// Domain layer: rows, form state, notifications and the ports the core talks through.

pub mod model;
pub mod ports;
