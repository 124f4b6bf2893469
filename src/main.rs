use std::env;

mod cli;
mod entropy;
mod error;
mod exits;
mod pass;
mod settings;
mod terminal;
mod tui;

fn main() {
    init_logger();
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();

    let result = match args.len() {
        1 => tui::run(),
        _ => cli::run(&args),
    };

    if let Err(e) = result {
        exits::fail(&e);
    }
}

/// Diagnostics go to stderr, filtered by `PWFORGE_LOG` (default: warn).
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("PWFORGE_LOG", "warn"))
        .format_timestamp(None)
        .init();
}
