//! Infrastructure layer - logging setup and service implementations

pub mod logging;
pub mod services;
