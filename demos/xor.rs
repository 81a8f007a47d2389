use ferrite_mlp::train::XorSampler;
use ferrite_mlp::{Network, Sgd};

fn main() -> ferrite_mlp::Result<()> {
    let mut network = Network::new(&[2, 2, 1])?;
    let optimizer = Sgd::new(0.5);

    // Random bit pairs, one gradient step each.
    for (step, sample) in XorSampler::new(rand::thread_rng()).take(10_000).enumerate() {
        let loss = optimizer.step(&mut network, &sample.input, &sample.target)?;
        if step % 1000 == 0 {
            println!("Step {step}: loss = {loss:.6}");
        }
    }

    for input in [[1.0, 1.0], [1.0, 0.0], [0.0, 0.0], [0.0, 1.0]] {
        println!("Input: {:?} -> Output: {:.4}", input, network.predict(&input)?[0]);
    }
    Ok(())
}
