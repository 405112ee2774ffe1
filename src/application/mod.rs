//! Application layer: services and use cases
//!
//! This layer drives the railyard engine and depends on I/O boundary traits.

pub mod error;
pub mod error_ext;
pub mod report;
pub mod services;
pub mod session;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use session::{Session, SessionOptions, SessionSummary};
