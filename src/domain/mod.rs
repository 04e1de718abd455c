// Domain layer: catalog records, the merged result and the ports the core depends on.

pub mod model;
pub mod ports;
