//! Supporting utilities shared across models.

pub mod constraint;
pub mod cosmology;
