//! Command line access to the validator codec.
use clap::Parser as _;
use eyre::WrapErr as _;

use crate::commands::{Address, Decode, GenesisStorage, Key, Nonce, Settings};

mod commands;

fn main() -> eyre::Result<()> {
    let args = Args::parse();
    args.init_tracing()?;

    let output = match args.action {
        Action::Key(cmd) => cmd.output(),
        Action::Settings(cmd) => cmd.output(),
        Action::Nonce(cmd) => cmd.output(),
        Action::Decode(cmd) => cmd.output(),
        Action::Address(cmd) => cmd.output(),
        Action::GenesisStorage(cmd) => cmd
            .output()
            .wrap_err("failed exporting validator set storage"),
    }?;
    println!("{output}");
    Ok(())
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about = "converts between validator addresses, keys and nonces")]
#[command(long_about = None)]
struct Args {
    /// Filter directives for the tracing events written to stderr.
    ///
    /// See the tracing-subscriber `EnvFilter` documentation for the syntax.
    #[arg(long, value_name = "DIRECTIVE", default_value = "info", global = true)]
    filter_directives: String,

    #[command(subcommand)]
    action: Action,
}

impl Args {
    fn init_tracing(&self) -> eyre::Result<()> {
        use tracing_subscriber::{fmt, prelude::*};

        let env_filter = tracing_subscriber::EnvFilter::builder()
            .parse(&self.filter_directives)
            .wrap_err("failed to parse provided filter directives")?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
        Ok(())
    }
}

#[derive(Debug, clap::Subcommand)]
enum Action {
    /// Prints the 192-bit key of a validator address.
    Key(Key),
    /// Prints the key and storage slot of a validator address as json.
    Settings(Settings),
    /// Packs a key and a sequence number into a nonce.
    Nonce(Nonce),
    /// Splits a nonce into its key, sequence number and validator address.
    Decode(Decode),
    /// Prints the validator address held in a key.
    Address(Address),
    /// Prints the storage slots recording every validator of a validator set file.
    GenesisStorage(GenesisStorage),
}
