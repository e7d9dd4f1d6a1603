//! Shift roster engine
//!
//! This crate formulates employee shift assignment as a constrained binary
//! model (one binary variable per employee and shift, preference costs as a
//! linear objective, exactly-one, pairing and headcount constraints) and
//! decodes the solver's first feasible sample back into a per-shift roster.
//! The solver itself is an external collaborator behind the
//! [`solver::Solver`] trait.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod decoding;
pub mod error;
pub mod formulation;
pub mod models;
pub mod solver;
