//! HTTP Handlers

mod check;
mod index;
mod ping;

pub use check::*;
pub use index::*;
pub use ping::*;
