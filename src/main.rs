use clap::Parser;
use rately::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Schema => {
            print!("{}", include_str!("../sql/schema.sql"));
            Ok(())
        }
    }
}
