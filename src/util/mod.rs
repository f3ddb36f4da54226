// Homestead Explorer - util/mod.rs
//
// Shared utilities: constants, errors, logging.

pub mod constants;
pub mod error;
pub mod logging;
