//! Trains a 3 -> 4 -> 4 -> 1 network on a tiny fixed dataset with plain
//! gradient descent, logging the summed squared-error loss every 10 steps.
//!
//! Run with: `RUST_LOG=info cargo run --example train_mlp`
//!
//! Each iteration builds fresh input/target leaves and a fresh loss graph
//! over all four examples, runs one backward pass from the loss root, and
//! nudges every reachable node by `step_size * grad`. Only the weight and
//! bias leaves persist between iterations, so the nudge on the discarded
//! intermediates is inert.

use rand::rngs::StdRng;
use rand::SeedableRng;

use scalagrad_core::nn::{sum_squared_error, Network};
use scalagrad_core::{ScalaGradError, Value};

const NUM_ITERATIONS: usize = 500;
const STEP_SIZE: f64 = 0.0001;

const EXAMPLES: [([f64; 3], f64); 4] = [
    ([2.0, 3.0, -1.0], 1.0),
    ([3.0, -1.0, 0.5], -1.0),
    ([0.5, 1.0, 1.0], -1.0),
    ([1.0, 1.0, -1.0], 1.0),
];

fn main() -> Result<(), ScalaGradError> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(1337);
    let network: Network<f64> = Network::new(&[3, 4, 4, 1], &mut rng)?;

    for iteration in 0..=NUM_ITERATIONS {
        let mut predictions = Vec::new();
        let mut targets = Vec::new();
        for (features, target) in &EXAMPLES {
            let inputs: Vec<Value<f64>> = features.iter().copied().map(Value::new).collect();
            predictions.extend(network.forward(&inputs)?);
            targets.push(Value::new(*target));
        }

        let total_loss = sum_squared_error(&predictions, &targets)?;
        total_loss.backward();
        total_loss.update(STEP_SIZE);

        if iteration % 10 == 0 {
            log::info!("step: {}, loss: {:.6}", iteration, total_loss.data());
            println!("Step: {}, Loss: {:.6}", iteration, total_loss.data());
        }
    }

    for (features, target) in &EXAMPLES {
        let inputs: Vec<Value<f64>> = features.iter().copied().map(Value::new).collect();
        let outputs = network.forward(&inputs)?;
        println!(
            "input: {:?}, target: {:+.1}, prediction: {:+.4}",
            features,
            target,
            outputs[0].data()
        );
    }

    Ok(())
}
