//! Adapter implementations of the port traits.
//!
//! `live` adapters touch the real world (disk, network, stdin); `memory`
//! adapters are deterministic doubles used by tests and scripted runs.

pub mod live;
pub mod memory;
