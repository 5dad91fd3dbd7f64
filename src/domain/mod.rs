// Domain layer: scaffold models and the file-system port.

pub mod model;
pub mod ports;
