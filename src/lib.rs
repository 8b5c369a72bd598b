//! # Twine Reionization
//!
//! Reionization parameters and tabulated free-electron fraction histories,
//! Xe(a), for cosmology models built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: The reionization model, its Xe table, and a
//!   [`twine_core::Model`] adapter for point evaluation.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## External capabilities
//!
//! This crate does not integrate the reionization history or fit splines.
//! Both are supplied by the caller through the
//! [`ReionizationSolver`](models::cosmology::reionization::ReionizationSolver)
//! and [`SmoothingSpline`](models::cosmology::reionization::SmoothingSpline)
//! traits. What lives here is the parameter aggregate, the validation of
//! user-supplied tables, and the glue that hands both to the solver.
//!
//! Note: Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
