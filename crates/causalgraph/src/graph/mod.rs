//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Node`]: Typed entities (events, suppliers, risks, ...)
//! - [`Edge`]: Directed, typed relations between entities
//! - [`Graph`]: The in-memory directed graph with both adjacency directions
//! - [`compose`]: Union of two graphs into one searchable graph

mod compose;
mod digraph;
mod types;

pub use compose::{compose, CompositeGraph};
pub use digraph::Graph;
pub use types::{Direction, Edge, Node, NodeId};
