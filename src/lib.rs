//! # A simplex tableau core
//!
//! Tableau data structures for the simplex method in three storage layouts, with pivoting, variable
//! fixing for branching and Gomory mixed-integer cut generation.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;
