//! Core trait for priority rules.

/// A scoring rule that assigns a priority value to an item.
///
/// Rules return `f64` scores where **lower is higher priority**.
///
/// # Type Parameters
///
/// * `T` - The item type being scored
/// * `C` - The context type providing state information
///
/// # Examples
///
/// ```
/// use u_rota::dispatching::PriorityRule;
///
/// struct Shift { hours: u32 }
/// struct NoContext;
///
/// // Shortest shift first
/// struct ShortestFirst;
///
/// impl PriorityRule<Shift, NoContext> for ShortestFirst {
///     fn name(&self) -> &str { "ShortestFirst" }
///     fn score(&self, shift: &Shift, _ctx: &NoContext) -> f64 {
///         f64::from(shift.hours)
///     }
/// }
/// ```
pub trait PriorityRule<T, C>: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes a priority score for the given item.
    ///
    /// Lower scores indicate higher priority.
    fn score(&self, item: &T, context: &C) -> f64;
}
