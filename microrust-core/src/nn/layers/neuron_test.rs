use super::Neuron;
use crate::error::MicroRustError;
use crate::nn::module::Module;
use crate::value::Value;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn inputs(values: &[f64]) -> Vec<Value> {
    values.iter().map(|&v| Value::new(v)).collect()
}

#[test]
fn test_neuron_parameter_count() {
    let mut rng = StdRng::seed_from_u64(0);
    let neuron = Neuron::new(3, true, &mut rng);
    assert_eq!(neuron.n_inputs(), 3);
    // 3 weights + 1 bias
    assert_eq!(neuron.parameters().len(), 4);

    let named = neuron.named_parameters();
    assert_eq!(named.len(), 4);
    assert_eq!(named[0].0, "weight.0");
    assert_eq!(named[3].0, "bias");
}

#[test]
fn test_linear_neuron_matches_manual_dot_product() {
    let mut rng = StdRng::seed_from_u64(1);
    let neuron = Neuron::new(2, false, &mut rng);

    let x = inputs(&[0.5, -1.5]);
    let out = neuron.forward(&x).unwrap();

    let params = neuron.parameters();
    let expected = params[0].data() * 0.5 + params[1].data() * (-1.5) + params[2].data();
    assert_relative_eq!(out.data(), expected);
}

#[test]
fn test_nonlinear_neuron_clamps_negative_activation() {
    let mut rng = StdRng::seed_from_u64(2);
    let neuron = Neuron::new(1, true, &mut rng);
    let params = neuron.parameters();

    // Pick an input that makes the pre-activation negative.
    let x_value = if params[0].data() >= 0.0 { -10.0 } else { 10.0 };
    let out = neuron.forward(&inputs(&[x_value])).unwrap();
    assert_relative_eq!(out.data(), 0.0);
}

#[test]
fn test_neuron_rejects_wrong_arity() {
    let mut rng = StdRng::seed_from_u64(3);
    let neuron = Neuron::new(3, true, &mut rng);
    let err = neuron.forward(&inputs(&[1.0, 2.0])).unwrap_err();
    assert_eq!(
        err,
        MicroRustError::DimensionMismatch {
            expected: 3,
            actual: 2,
            operation: "Neuron::forward".to_string(),
        }
    );
}

#[test]
fn test_neuron_backward_reaches_parameters() {
    let mut rng = StdRng::seed_from_u64(4);
    let neuron = Neuron::new(2, false, &mut rng);

    let x = inputs(&[2.0, 3.0]);
    let out = neuron.forward(&x).unwrap();
    out.backward();

    // d(out)/d(w_i) = x_i, d(out)/d(bias) = 1 for a linear neuron.
    let params = neuron.parameters();
    assert_relative_eq!(params[0].grad(), 2.0);
    assert_relative_eq!(params[1].grad(), 3.0);
    assert_relative_eq!(params[2].grad(), 1.0);
}
