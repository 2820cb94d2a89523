//! Port definitions - trait boundaries for external dependencies

mod store;

pub use store::Store;
