//! Core move resolution
//!
//! This module contains the algorithmic heart of the engine:
//! - The canonical slide-and-merge pass toward row zero
//! - The post-move spawn of a minimum-value tile
//! - Direction dispatch through the orientation transforms
//! - A session owner that serializes moves against one board

/// Direction dispatch and the public move operations
pub mod dispatch;
/// Canonical slide, merge, and compaction toward row zero
pub mod merge;
/// Session state: one owned board plus its seeded RNG
pub mod session;
/// Random spawn of a minimum-value tile into an empty cell
pub mod spawn;
