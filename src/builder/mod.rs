//! Errors shared by the fluent builders.
//!
//! [`ProfileBuilder`](crate::profile::ProfileBuilder) and
//! [`DataManagerBuilder`](crate::manager::DataManagerBuilder) both report
//! misconfiguration through [`BuildError`] instead of panicking.

pub mod error;

pub use error::BuildError;
