//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod feed;
pub mod store;

pub use feed::ChronicleFeed;
pub use store::PostStore;
