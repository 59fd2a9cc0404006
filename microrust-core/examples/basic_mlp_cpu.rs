//! # Training a Simple MLP on the CPU
//!
//! This example walks through the fundamental steps of training a small
//! multi-layer perceptron with `microrust-core`:
//!
//! 1.  **Building a model**: an `MLP` of scalar neurons (`3 -> 4 -> 4 -> 1`).
//! 2.  **Synthetic data**: four 3-feature samples with `+1`/`-1` targets.
//! 3.  **Loss**: `MSELoss` with mean reduction.
//! 4.  **Training loop**: forward pass, loss, `backward()`, `SgdOptimizer`
//!     step, and the `zero_grad` reset between iterations.
//!
//! Run with: `cargo run --example basic_mlp_cpu`

use microrust_core::nn::losses::{MSELoss, Reduction};
use microrust_core::nn::{Module, MLP};
use microrust_core::optim::{Optimizer, SgdOptimizer};
use microrust_core::{MicroRustError, Value};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), MicroRustError> {
    let samples = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let targets = [1.0, -1.0, -1.0, 1.0];

    let mut rng = StdRng::seed_from_u64(42);
    let mlp = MLP::new(3, &[4, 4, 1], &mut rng);
    println!("model has {} parameters", mlp.parameters().len());

    let loss_fn = MSELoss::new(Reduction::Mean);
    let mut optimizer = SgdOptimizer::with_momentum(mlp.parameters(), 0.05, 0.9);

    for epoch in 0..50 {
        // The graph is rebuilt from the current parameter values every
        // iteration; stale gradients are cleared first.
        optimizer.zero_grad();

        let mut predictions = Vec::with_capacity(samples.len());
        for sample in &samples {
            let inputs: Vec<Value> = sample.iter().map(|&x| Value::new(x)).collect();
            let outputs = mlp.forward(&inputs)?;
            predictions.push(outputs[0].clone());
        }

        let loss = loss_fn.calculate(&predictions, &targets)?;
        loss.backward();
        optimizer.step();

        if epoch % 10 == 0 {
            println!("epoch {:3}: loss = {:.6}", epoch, loss.data());
        }
    }

    let mut final_predictions = Vec::new();
    for sample in &samples {
        let inputs: Vec<Value> = sample.iter().map(|&x| Value::new(x)).collect();
        final_predictions.push(mlp.forward(&inputs)?[0].data());
    }
    println!("targets:     {:?}", targets);
    println!("predictions: {:?}", final_predictions);

    Ok(())
}
