pub mod greeting;
pub mod ports;
