//! Document structure produced by layout analysis.
//!
//! The engine's only output is a [`DocumentStructure`]: an ordered list of
//! [`StructureElement`]s that a document renderer maps to heading styles,
//! bulleted or numbered lists, and tables. Every type here serializes to JSON
//! with an internal `"type"` tag so renderers in other processes can consume it.

pub mod types;

pub use types::{DocumentStructure, ListType, StructureElement};
