use anyhow::Context;
use clap::Parser;
use mailroom::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    mailroom::run(&cli).context("mailroom exited with an error")
}
