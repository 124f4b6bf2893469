//! CLI context - bundles settings and flags for one command-mode run.

use copypasta::{ClipboardContext, ClipboardProvider};
use rand::RngCore;
use zeroize::Zeroize;

use super::{CliFlags, prompts};
use crate::entropy::EntropySource;
use crate::error::{Error, Result};
use crate::pass::{self, GenerationConfig, LengthPolicy, Password, output};
use crate::settings::Settings;
use crate::terminal::summary;
use crate::tui::print_help;

/// Application context for command mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(flags: CliFlags, settings: Settings) -> Self {
        Self { settings, flags }
    }

    pub fn run(&mut self) -> Result<()> {
        if self.handle_info_flags() {
            return Ok(());
        }
        self.apply_flags();
        prompts::set_quiet(self.flags.quiet);

        log::debug!(
            "length policy {}, entropy source {}",
            self.settings.length_policy,
            self.settings.entropy
        );
        let config = self.config()?;

        let mut rng = self.settings.entropy.rng();
        let passwords = self.generate(&config, &mut *rng)?;
        self.output(&config, &passwords)
    }

    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            print_help();
            return true;
        }
        if self.flags.version {
            println!("pwforge {}", env!("CARGO_PKG_VERSION"));
            return true;
        }
        false
    }

    /// Apply CLI flags over the loaded settings.
    fn apply_flags(&mut self) {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }
        if let Some(classes) = self.flags.explicit_classes() {
            self.settings.classes = classes;
        }
        if self.flags.lenient {
            self.settings.length_policy = LengthPolicy::Warn;
        }
        if self.flags.urandom {
            self.settings.entropy = EntropySource::Urandom;
        }
    }

    /// Check the length against the policy; a tolerated violation is reported here.
    pub fn config(&self) -> Result<GenerationConfig> {
        let checked = pass::check_length(self.settings.pass_length, self.settings.length_policy)?;
        if let Some(warning) = checked.warning {
            prompts::range_warning(warning.length);
        }
        Ok(GenerationConfig::new(checked.length, self.settings.classes))
    }

    pub fn generate<R: RngCore + ?Sized>(
        &self,
        config: &GenerationConfig,
        rng: &mut R,
    ) -> Result<Vec<Password>> {
        let count = self.settings.number_of_passwords.max(1);
        pass::generate_batch(config, count, rng)
    }

    fn output(&self, config: &GenerationConfig, passwords: &[Password]) -> Result<()> {
        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(mut ctx) => return copy_to_clipboard(&mut ctx, passwords),
                Err(e) => {
                    log::warn!("clipboard unavailable: {e}");
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(Error::Cancelled);
                    }
                }
            }
        }

        let stdout = std::io::stdout();
        output::write_lines(&mut stdout.lock(), passwords)?;

        if !prompts::quiet() && prompts::stdout_is_tty() {
            summary(config, self.settings.entropy);
        }
        Ok(())
    }
}

fn copy_to_clipboard(ctx: &mut ClipboardContext, passwords: &[Password]) -> Result<()> {
    let mut joined = output::join_lines(passwords);
    let result = ctx
        .set_contents(joined.clone())
        .map_err(|e| Error::Clipboard(e.to_string()));
    joined.zeroize();
    result?;

    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    prompts::clipboard_copied(passwords.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::CharacterClass;

    fn context(list: &[&str], settings: Settings) -> Context {
        let args: Vec<String> = std::iter::once("pwforge")
            .chain(list.iter().copied())
            .map(String::from)
            .collect();
        Context::new(crate::cli::parse(&args).unwrap(), settings)
    }

    #[test]
    fn flags_override_settings() {
        let mut ctx = context(&["-l", "10", "-n", "2", "--digits", "--lenient", "-u"], Settings::default());
        ctx.apply_flags();
        assert_eq!(ctx.settings.pass_length, 10);
        assert_eq!(ctx.settings.number_of_passwords, 2);
        assert_eq!(ctx.settings.length_policy, LengthPolicy::Warn);
        assert_eq!(ctx.settings.entropy, EntropySource::Urandom);

        let config = ctx.config().unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let passwords = ctx.generate(&config, &mut rng).unwrap();
        assert_eq!(passwords.len(), 2);
        for pass in &passwords {
            assert_eq!(pass.len(), 10);
            assert!(pass.as_str().chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn settings_apply_without_flags() {
        let settings = Settings {
            pass_length: 30,
            classes: [CharacterClass::Uppercase].into_iter().collect(),
            ..Settings::default()
        };
        let mut ctx = context(&["-q"], settings);
        ctx.apply_flags();
        let config = ctx.config().unwrap();
        assert_eq!(config.length, 30);
        assert_eq!(config.classes.len(), 1);
    }

    #[test]
    fn out_of_range_length_is_rejected_by_default() {
        let mut ctx = context(&["-q", "-l", "200"], Settings::default());
        assert!(matches!(ctx.run(), Err(Error::Range { length: 200 })));

        let mut ctx = context(&["-q", "-l", "0"], Settings::default());
        assert!(matches!(ctx.run(), Err(Error::Range { length: 0 })));
    }

    #[test]
    fn zero_count_still_generates_one() {
        let mut ctx = context(&["-n", "0"], Settings::default());
        ctx.apply_flags();
        let config = ctx.config().unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(ctx.generate(&config, &mut rng).unwrap().len(), 1);
    }

    #[test]
    fn negative_length_is_a_range_error() {
        let mut ctx = context(&["-q", "-l", "-3"], Settings::default());
        assert!(matches!(ctx.run(), Err(Error::Range { length: -3 })));
    }

    #[test]
    fn lenient_still_refuses_huge_lengths() {
        let args: Vec<String> = ["pwforge", "--lenient", "-l", "18446744073709551615"]
            .into_iter()
            .map(String::from)
            .collect();
        assert!(matches!(crate::cli::parse(&args), Err(Error::Parse(_))));

        let mut ctx = context(&["-q", "--lenient", "-l", "1000000000000"], Settings::default());
        assert!(matches!(ctx.run(), Err(Error::Range { length: 1_000_000_000_000 })));
    }

    #[test]
    fn lenient_generates_out_of_range_length() {
        let mut ctx = context(&["-q", "--lenient", "-l", "200", "--upper"], Settings::default());
        ctx.apply_flags();
        let config = ctx.config().unwrap();
        assert_eq!(config.length, 200);
        let mut rng = StdRng::seed_from_u64(6);
        let passwords = ctx.generate(&config, &mut rng).unwrap();
        assert_eq!(passwords[0].len(), 200);
    }
}
