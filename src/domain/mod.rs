// Domain layer: request/context models and the toolchain port. No process or filesystem access here.

pub mod model;
pub mod ports;
