//! Internal services shared by the handlers.

pub mod cookies;
pub mod upstream;
