//! # Scalar Operations Module (`ops`)
//!
//! Central hub for the operations that extend the computation graph.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (named `xxx_op`)
//!   that performs the forward computation and installs the backward rule on
//!   the output node. Constructing an operation node never mutates its
//!   operands; it reads their values and captures handles for the backward
//!   rule.
//! - **`Backward` Structs:** Each *primitive* operation (add, mul, pow, relu)
//!   has a struct (e.g. `AddBackward`) implementing the
//!   [`BackwardOp`](crate::autograd::BackwardOp) trait, holding the operand
//!   handles the rule needs. Derived operations (neg, sub, div and the
//!   reversed literal forms) are compositions of the primitives and install
//!   no rules of their own, so their correctness follows from the primitives'.
//! - **Operator impls:** Each op file also provides the `std::ops`
//!   implementations for `Value`, `&Value` and `f64` operand combinations.
//!   A raw numeric operand is wrapped into a *fresh* leaf node per call.
//!
//! ## Submodules:
//!
//! - [`arithmetic`]: add, sub, mul, div, neg, pow.
//! - [`activation`]: relu.

pub mod activation;
pub mod arithmetic;
