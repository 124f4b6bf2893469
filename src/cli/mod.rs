mod context;
mod flags;
mod parse;
pub mod prompts;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

use crate::error::Result;
use crate::settings::Settings;

/// Run command mode with the process arguments.
pub fn run(args: &[String]) -> Result<()> {
    let flags = parse(args)?;
    prompts::set_quiet(flags.quiet);
    let settings = Settings::load_from_file()?;
    Context::new(flags, settings).run()
}
