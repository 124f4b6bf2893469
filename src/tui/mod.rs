//! Interactive prompt mode.

mod input;
mod session;
mod text;

pub use input::*;
pub use session::Session;
pub use text::*;

use crate::cli::prompts;
use crate::error::Result;
use crate::settings::Settings;
use crate::terminal::summary;

/// Run the interactive session on the controlling terminal, or on piped stdin.
pub fn run() -> Result<()> {
    let settings = Settings::load_from_file()?;
    log::debug!(
        "length policy {}, entropy source {}",
        settings.length_policy,
        settings.entropy
    );
    let mut rng = settings.entropy.rng();

    let (config, password) = if prompts::stdin_is_tty() {
        print_intro();
        Session::new(TerminalInput, &settings).run(&mut *rng)?
    } else {
        let stdin = std::io::stdin();
        let source = LineReader::new(stdin.lock(), std::io::stdout());
        Session::new(source, &settings).run(&mut *rng)?
    };

    print_password(password.as_str());
    if prompts::stdout_is_tty() {
        summary(&config, settings.entropy);
    }
    Ok(())
}
