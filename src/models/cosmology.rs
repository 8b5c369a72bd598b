//! Cosmology models.
//!
//! This module contains the inputs to cosmological evolution calculations,
//! starting with the reionization history of the intergalactic medium.

pub mod reionization;
