//! Navigation-layer state.
//!
//! # Design Decisions
//! - State lives in explicit stores owned by the navigation layer
//! - Stores have an explicit lifecycle (clear on demand, clear on logout)

pub mod scroll;

pub use scroll::ScrollPositionStore;
