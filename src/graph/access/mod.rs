//! Internal graph building blocks.
//!
//! This module is `pub(crate)`: traversal scratch state is never part of the
//! public API surface.

pub(crate) mod visited;
