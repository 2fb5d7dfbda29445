//! Configuration for moment computation.

/// How the n-dimensional integral is carried out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MomentStrategy {
    /// Multiply the closed-form one-dimensional factors.
    #[default]
    Factored,
    /// Build the full monomial, then integrate out `x_0`, `x_1`, ... in
    /// turn, substituting bounds after each variable.
    Iterated,
}

/// Options controlling moment computation.
///
/// ```ignore
/// let options = MomentOptions {
///     strategy: MomentStrategy::Iterated,
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MomentOptions {
    /// Integration strategy.
    pub strategy: MomentStrategy,
    /// Prefix for the integration variable names; variable `i` is named
    /// `{variable_prefix}{i}`.
    pub variable_prefix: String,
}

impl Default for MomentOptions {
    fn default() -> Self {
        Self {
            strategy: MomentStrategy::Factored,
            variable_prefix: "x_".to_owned(),
        }
    }
}

impl MomentOptions {
    /// Returns the name of integration variable `i`.
    #[must_use]
    pub fn variable_name(&self, i: usize) -> String {
        format!("{}{i}", self.variable_prefix)
    }
}
