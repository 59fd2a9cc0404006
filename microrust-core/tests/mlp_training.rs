//! Trains a tiny MLP on a fixed four-sample dataset and checks that the
//! loss actually goes down. Everything is seeded, so the run is
//! deterministic.

use microrust_core::nn::losses::{MSELoss, Reduction};
use microrust_core::nn::{Module, MLP};
use microrust_core::optim::{Optimizer, SgdOptimizer};
use microrust_core::{MicroRustError, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn batch_loss(
    mlp: &MLP,
    loss_fn: &MSELoss,
    samples: &[[f64; 3]],
    targets: &[f64],
) -> Result<Value, MicroRustError> {
    let mut predictions = Vec::with_capacity(samples.len());
    for sample in samples {
        let inputs: Vec<Value> = sample.iter().map(|&x| Value::new(x)).collect();
        let outputs = mlp.forward(&inputs)?;
        predictions.push(outputs[0].clone());
    }
    loss_fn.calculate(&predictions, targets)
}

#[test]
fn test_training_reduces_loss() -> Result<(), MicroRustError> {
    let samples = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let targets = [1.0, -1.0, -1.0, 1.0];

    let mut rng = StdRng::seed_from_u64(1337);
    let mlp = MLP::new(3, &[4, 4, 1], &mut rng);
    let loss_fn = MSELoss::new(Reduction::Mean);
    let mut optimizer = SgdOptimizer::new(mlp.parameters(), 0.05);

    let initial_loss = batch_loss(&mlp, &loss_fn, &samples, &targets)?.data();

    let mut final_loss = initial_loss;
    for _ in 0..100 {
        optimizer.zero_grad();
        let loss = batch_loss(&mlp, &loss_fn, &samples, &targets)?;
        loss.backward();
        optimizer.step();
        final_loss = loss.data();
    }

    assert!(
        final_loss < initial_loss,
        "loss did not decrease: {} -> {}",
        initial_loss,
        final_loss
    );
    Ok(())
}

#[test]
fn test_gradients_flow_into_every_layer() -> Result<(), MicroRustError> {
    let mut rng = StdRng::seed_from_u64(7);
    let mlp = MLP::new(2, &[3, 1], &mut rng);
    let loss_fn = MSELoss::new(Reduction::Sum);

    let inputs = vec![Value::new(1.0), Value::new(-2.0)];
    let outputs = mlp.forward(&inputs)?;
    let loss = loss_fn.calculate(&outputs, &[0.5])?;
    loss.backward();

    // The output neuron's bias sits on every path to the loss, so its
    // gradient cannot be zero unless the prediction already matches.
    let named = mlp.named_parameters();
    let (_, output_bias) = named
        .iter()
        .find(|(name, _)| name == "layers.1.neurons.0.bias")
        .expect("output bias parameter exists");
    assert!(output_bias.grad() != 0.0);
    Ok(())
}
