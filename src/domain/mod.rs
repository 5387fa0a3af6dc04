// Domain layer: lottery value types and the ports (capability traits) the core depends on.

pub mod model;
pub mod ports;
