mod app;
mod cli;
mod command;
mod config;
mod display;
mod sender;
mod video_reader;

use clap::Parser;

use cli::Cli;
use config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from(cli);
    app::run(&config)
}
