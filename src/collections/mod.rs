//! Working data structures of the graph algorithms.
//!
//! Instances are created per solve and never outlive it.
pub mod disjoint;
pub mod heap;

pub use disjoint::DisjointSet;
pub use heap::{EmptyQueueError, PriorityQueue};
