// Domain layer: record model and the reader port.

pub mod model;
pub mod ports;
