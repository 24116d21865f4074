//! The tree-rewrite passes, run in a fixed order by the engine:
//! object duplication and icon-path fixes first, conditional expansion
//! second. Both iterate over a snapshot of each node's child list so that
//! removals and insertions never invalidate the walk.

pub(crate) mod conditions;
pub(crate) mod objects;
