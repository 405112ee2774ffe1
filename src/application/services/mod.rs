//! Application services

pub mod yard;

pub use yard::YardService;
