mod cli;
mod error;
mod wakeup;

use std::io;

use clap::Parser;

use cli::Cli;
use wakeup::WAKEUP_INTERVAL;

fn main() {
    better_panic::Settings::auto()
        .most_recent_first(false)
        .lineno_suffix(true)
        .install();
    env_logger::init();

    if let Err(err) = Cli::try_parse() {
        log::warn!("ignoring command line: {err}");
    }

    if let Err(err) = cli::print_banner(&mut io::stdout().lock()) {
        log::warn!("failed to write banner: {err}");
    }

    wakeup::run(WAKEUP_INTERVAL)
}
