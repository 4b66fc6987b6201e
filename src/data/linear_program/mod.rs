//! # Representing integer linear programs
//!
//! A problem consists of an objective to maximize over a domain, and a system of `<=` constraints
//! that grows as branch and bound subdivides the feasible region.
pub mod constraints;
pub mod elements;
pub mod problem;
pub mod solution;
