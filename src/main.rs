//! Command-line driver: trains a small network on XOR or on `sin x` and
//! prints what it learned. All network logic lives in the library.
//!
//!   cargo run -- xor --steps 10000 --learning-rate 0.5
//!   cargo run -- sine --hidden 32 --activation arctan

use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use ferrite_mlp::train::{xor_table, SineSampler, TableSampler};
use ferrite_mlp::{ActivationFunction, Network, NetworkSpec, TrainConfig};

#[derive(Parser)]
#[command(name = "ferrite-mlp")]
#[command(about = "Train a multilayer perceptron with online backpropagation")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides it
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Learn the XOR function on a 2-2-1 network
    Xor(TrainArgs),
    /// Learn sin(x) on [0, 1) with one hidden layer
    Sine {
        #[command(flatten)]
        train: TrainArgs,

        /// Width of the hidden layer
        #[arg(long, default_value = "32")]
        hidden: usize,

        /// Activation used by every layer
        #[arg(long, value_enum, default_value = "sigmoid")]
        activation: ActivationArg,

        /// Number of random points to evaluate after training
        #[arg(long, default_value = "20")]
        samples: usize,
    },
}

#[derive(Args)]
struct TrainArgs {
    /// Training config JSON; command-line flags override its values
    #[arg(short, long)]
    config: Option<String>,

    /// Network spec JSON; replaces the built-in architecture
    #[arg(long)]
    spec: Option<String>,

    /// Number of online training steps
    #[arg(long)]
    steps: Option<usize>,

    /// Learning rate η
    #[arg(short, long)]
    learning_rate: Option<f64>,

    /// Seed for weights and samples
    #[arg(long)]
    seed: Option<u64>,

    /// Print every network buffer after training
    #[arg(long)]
    dump: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ActivationArg {
    Sigmoid,
    Tanh,
    Arctan,
}

impl From<ActivationArg> for ActivationFunction {
    fn from(arg: ActivationArg) -> Self {
        match arg {
            ActivationArg::Sigmoid => ActivationFunction::Sigmoid,
            ActivationArg::Tanh => ActivationFunction::Tanh,
            ActivationArg::Arctan => ActivationFunction::Arctan,
        }
    }
}

impl TrainArgs {
    fn train_config(&self) -> ferrite_mlp::Result<TrainConfig> {
        let mut config = match &self.config {
            Some(path) => TrainConfig::load_json(path)?,
            None => TrainConfig::default(),
        };
        if let Some(steps) = self.steps {
            config.steps = steps;
        }
        if let Some(lr) = self.learning_rate {
            config.learning_rate = lr;
        }
        Ok(config)
    }

    /// The spec file if one was given, otherwise `default`; `--seed` wins over
    /// the file's seed.
    fn network_spec(&self, default: NetworkSpec) -> ferrite_mlp::Result<NetworkSpec> {
        let mut spec = match &self.spec {
            Some(path) => NetworkSpec::load_json(path)?,
            None => default,
        };
        if self.seed.is_some() {
            spec.seed = self.seed;
        }
        Ok(spec)
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

fn main() -> ferrite_mlp::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Xor(args) => run_xor(&args),
        Command::Sine { train, hidden, activation, samples } => {
            run_sine(&train, hidden, activation.into(), samples)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run_xor(args: &TrainArgs) -> ferrite_mlp::Result<()> {
    let config = args.train_config()?;
    let spec = args.network_spec(NetworkSpec::new("xor", &[2, 2, 1])?)?;
    let mut network = Network::from_spec(&spec)?;
    info!(name = %spec.name, topology = %network.topology(), "training");

    let samples = TableSampler::new(xor_table(), config.order, args.rng())?;
    let report = ferrite_mlp::train_loop(&mut network, samples, &config)?;
    info!(steps = report.steps, loss = report.recent_loss, "done");

    if args.dump {
        println!("{}", network.diagnostics());
    }

    println!("Predicting...");
    for sample in xor_table() {
        let predicted = network.predict(&sample.input)?;
        println!(
            "\t{:?} -> predicted: {:.3} expected {}",
            sample.input, predicted[0], sample.target[0]
        );
    }
    Ok(())
}

fn run_sine(
    args: &TrainArgs,
    hidden: usize,
    activation: ActivationFunction,
    samples: usize,
) -> ferrite_mlp::Result<()> {
    let config = args.train_config()?;
    let mut default = NetworkSpec::new("sine", &[1, hidden, 1])?;
    default.activation = activation;
    let spec = args.network_spec(default)?;
    let mut network = Network::from_spec(&spec)?;
    info!(name = %spec.name, topology = %network.topology(), "training");

    let mut rng = args.rng();
    let stream = SineSampler::new(StdRng::seed_from_u64(rng.gen()));
    let report = ferrite_mlp::train_loop(&mut network, stream, &config)?;
    info!(steps = report.steps, loss = report.recent_loss, "done");

    if args.dump {
        println!("{}", network.diagnostics());
    }

    for _ in 0..samples {
        let x: f64 = rng.gen();
        let y = x.sin();
        let predicted = network.predict(&[x])?[0];
        println!(
            "sin({x:>15.12}) = {y:>15.12} network says: {predicted:>15.12} error of {:>18.12}",
            predicted - y
        );
    }
    Ok(())
}
