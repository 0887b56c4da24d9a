pub mod config;
pub mod emitter;
pub mod reading;
pub mod transport;
