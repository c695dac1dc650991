//! Backend access.

pub mod scout;
