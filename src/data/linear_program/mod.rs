//! # Representations of linear programs
//!
//! The shape of a problem in tableau form, and the equations that can be added to it.
pub mod equation;
pub mod structure;
