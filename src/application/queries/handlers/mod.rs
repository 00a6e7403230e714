//! Query Handlers 实现

mod check_handlers;

pub use check_handlers::*;
