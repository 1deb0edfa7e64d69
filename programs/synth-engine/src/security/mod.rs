//! Security modules

pub mod reentrancy_guard;

pub use reentrancy_guard::{ReentrancyGuard, ReentrancyScope, ReentrancyState};
