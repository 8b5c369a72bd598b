use thiserror::Error;

/// Errors raised while configuring a reionization model.
///
/// Every variant is a caller-contract violation reported at the offending
/// call. Errors from the external solver are never wrapped in this type.
#[derive(Debug, Error)]
pub enum ReionizationError {
    /// Mutually exclusive or malformed arguments.
    ///
    /// For example, supplying both scale factors and redshifts (or neither),
    /// or an Xe sequence whose length does not match its epochs.
    #[error("invalid argument: {context}")]
    InvalidArgument { context: String },

    /// The table would hold more samples than its capacity.
    #[error("table holds at most {max} samples, got {len}")]
    CapacityExceeded {
        /// Number of samples supplied.
        len: usize,

        /// Table capacity.
        max: usize,
    },

    /// Scale factors are not strictly descending.
    #[error("scale factors must be strictly descending: a[{index}]={current} after {previous}")]
    OrderingViolation {
        /// Index of the first sample that is not below its predecessor.
        index: usize,

        /// Scale factor at `index - 1`.
        previous: f64,

        /// Scale factor at `index`.
        current: f64,
    },

    /// The smoothing spline failed or returned a malformed result.
    #[error("smoothing failed: {context}")]
    Smoothing {
        /// Operation context for the smoothing failure.
        context: String,

        /// Underlying spline error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ReionizationError {
    /// Creates an invalid argument error with context.
    pub(super) fn invalid(context: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context: context.into(),
        }
    }

    /// Creates a smoothing failure error with context.
    pub(super) fn smoothing_failed(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Smoothing {
            context: context.into(),
            source: Box::new(err),
        }
    }
}
