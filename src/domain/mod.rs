// Domain layer: the date model and the clock port. No I/O here.

pub mod model;
pub mod ports;
