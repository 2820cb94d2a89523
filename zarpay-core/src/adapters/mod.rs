//! Adapter implementations of the port traits

pub mod demo;
mod memory;

pub use memory::MemoryStore;
