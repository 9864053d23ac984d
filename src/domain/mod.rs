// Domain layer: value types and the configuration port. No I/O.

pub mod model;
pub mod ports;
