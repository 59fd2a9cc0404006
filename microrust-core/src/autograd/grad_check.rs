use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input at index {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` must build a fresh expression from the given leaves every time it
/// is called: the graph is dynamic, so each perturbed evaluation re-derives
/// the output from scratch. The analytical side runs one forward and one
/// backward pass over unperturbed leaves; the numerical side evaluates
/// `(f(x + eps) - f(x - eps)) / (2 * eps)` per input.
///
/// Keep `func` away from non-differentiable points (e.g. the relu kink at 0)
/// relative to `epsilon`, or the finite differences will disagree with the
/// exact subgradients the engine uses.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Value,
{
    // --- 1. Analytical gradients: one forward + backward pass ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves);
    output.backward();
    let analytical_grads: Vec<f64> = leaves.iter().map(|leaf| leaf.grad()).collect();

    // --- 2. Numerical gradients: central differences, graph rebuilt per call ---
    for (i, &analytical_grad) in analytical_grads.iter().enumerate() {
        let loss_plus = {
            let mut perturbed = inputs.to_vec();
            perturbed[i] += epsilon;
            let leaves_plus: Vec<Value> = perturbed.iter().map(|&x| Value::new(x)).collect();
            func(&leaves_plus).data()
        };
        let loss_minus = {
            let mut perturbed = inputs.to_vec();
            perturbed[i] -= epsilon;
            let leaves_minus: Vec<Value> = perturbed.iter().map(|&x| Value::new(x)).collect();
            func(&leaves_minus).data()
        };

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if numerical_grad.is_nan() || numerical_grad.is_infinite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        if analytical_grad.is_nan() || analytical_grad.is_infinite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}
