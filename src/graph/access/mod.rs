//! Internal traversal building blocks.
//!
//! This module is `pub(crate)` so traversals can share scratch state (visited
//! sets) without exposing it as part of the public API surface.

pub(crate) mod visited;
