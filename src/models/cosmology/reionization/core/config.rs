/// Default capacity of a reionization table.
///
/// This value was 200 in earlier releases. Tables with a different capacity
/// are available through the `MAX` const parameter of
/// [`ReionizationTable`](super::ReionizationTable) and
/// [`ReionizationModel`](super::ReionizationModel).
pub const MAX_REIONIZATION_SAMPLES: usize = 1024;

/// Run-wide switches read by the reionization solver.
///
/// These are fixed when a model is constructed and never change while the
/// model is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReionizationConfig {
    /// Include the second (full) reionization of helium at low redshift.
    pub include_helium_full_reionization: bool,

    /// Ask the solver for tighter integration tolerances.
    pub accuracy_boost: bool,

    /// Use an exponential redshift dependence instead of the tanh form.
    pub exponential_redshift: bool,
}

impl Default for ReionizationConfig {
    fn default() -> Self {
        Self {
            include_helium_full_reionization: true,
            accuracy_boost: false,
            exponential_redshift: false,
        }
    }
}
