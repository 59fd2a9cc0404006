/// Trait defining the common interface for all optimizers.
///
/// Optimizers are responsible for updating model parameters based on their
/// gradients.
pub trait Optimizer {
    /// Performs a single optimization step, updating every managed parameter
    /// from its currently accumulated gradient.
    fn step(&mut self);

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// Typically called before the backward pass of a new training iteration:
    /// backward passes accumulate, so stale gradients would otherwise leak
    /// into the next update.
    fn zero_grad(&mut self);
}
