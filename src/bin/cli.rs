// src/bin/cli.rs
use book_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(log::LogSink::Stderr);
    cli::run()
}
