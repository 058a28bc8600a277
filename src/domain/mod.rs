// Domain layer: record shapes and the ports the pipeline stages talk through.

pub mod model;
pub mod ports;
