// microrust-core/src/optim/mod.rs

//! Optimizers for training models built on the autograd engine.
//!
//! Provides the `Optimizer` trait and a stochastic gradient descent
//! implementation with optional classical momentum.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
