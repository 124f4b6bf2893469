//! Console prompt flow: length, then class selection, then generation.

use rand::RngCore;

use super::LineSource;
use crate::cli::prompts;
use crate::error::{Error, Result};
use crate::pass::{
    self, CharacterClass, ClassSet, GenerationConfig, LengthPolicy, Password,
    collect_enabled_classes, parse_length,
};
use crate::settings::Settings;

const LENGTH_PROMPT: &str = "Password length";

pub struct Session<S> {
    source: S,
    policy: LengthPolicy,
    max_attempts: usize,
}

impl<S: LineSource> Session<S> {
    pub fn new(source: S, settings: &Settings) -> Self {
        Self {
            source,
            policy: settings.length_policy,
            max_attempts: settings.max_selection_attempts,
        }
    }

    /// A non-numeric answer ends the session. An out-of-range one is
    /// asked again under `Reject` and let through with a warning under `Warn`.
    pub fn ask_length(&mut self) -> Result<usize> {
        loop {
            let answer = self.source.read_answer(LENGTH_PROMPT)?;
            let length = parse_length(&answer)?;
            match pass::check_length(length, self.policy) {
                Ok(checked) => {
                    if let Some(warning) = checked.warning {
                        prompts::range_warning(warning.length);
                    }
                    return Ok(checked.length);
                }
                Err(Error::Range { length }) => prompts::range_retry(length),
                Err(e) => return Err(e),
            }
        }
    }

    /// Ask the four class questions until at least one is answered yes.
    pub fn select_classes(&mut self) -> Result<ClassSet> {
        let mut attempts = 0;
        loop {
            attempts += 1;

            let mut answers = Vec::with_capacity(CharacterClass::ALL.len());
            for class in CharacterClass::ALL {
                let answer = self.source.read_answer(class.question())?;
                answers.push((class, is_yes(&answer)));
            }

            let classes = collect_enabled_classes(answers);
            if !classes.is_empty() {
                log::debug!("selected classes {classes} after {attempts} attempt(s)");
                return Ok(classes);
            }

            prompts::no_class_selected(attempts);
            if self.max_attempts > 0 && attempts >= self.max_attempts {
                return Err(Error::EmptySelection { attempts });
            }
        }
    }

    pub fn run<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> Result<(GenerationConfig, Password)> {
        let length = self.ask_length()?;
        let classes = self.select_classes()?;
        let config = GenerationConfig::new(length, classes);
        let password = pass::generate(&config, rng)?;
        Ok((config, password))
    }
}

/// Only a lowercase `y` enables a class.
fn is_yes(answer: &str) -> bool {
    answer.trim() == "y"
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    /// Replays canned answers and records every prompt shown.
    struct Scripted {
        answers: VecDeque<&'static str>,
        prompts: Vec<String>,
    }

    impl Scripted {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                prompts: Vec::new(),
            }
        }
    }

    impl LineSource for &mut Scripted {
        fn read_answer(&mut self, prompt: &str) -> Result<String> {
            self.prompts.push(prompt.to_string());
            self.answers
                .pop_front()
                .map(String::from)
                .ok_or(Error::InputClosed)
        }
    }

    fn settings(policy: LengthPolicy, max_attempts: usize) -> Settings {
        Settings {
            length_policy: policy,
            max_selection_attempts: max_attempts,
            ..Settings::default()
        }
    }

    #[test]
    fn digits_only_session() {
        let mut script = Scripted::new(&["10", "n", "n", "n", "y"]);
        let mut rng = StdRng::seed_from_u64(10);
        let (config, pass) = Session::new(&mut script, &Settings::default())
            .run(&mut rng)
            .unwrap();
        assert_eq!(config.length, 10);
        assert_eq!(pass.len(), 10);
        assert!(pass.as_str().chars().all(|c| "1234567890".contains(c)));
    }

    #[test]
    fn empty_selection_repeats_until_yes() {
        let mut script = Scripted::new(&[
            "n", "n", "n", "n", //
            "", "no", "Y", "yes", //
            "n", "y", "n", "n",
        ]);
        let classes = Session::new(&mut script, &Settings::default())
            .select_classes()
            .unwrap();
        assert_eq!(classes.len(), 1);
        assert!(classes.contains(CharacterClass::Uppercase));
        assert_eq!(script.prompts.len(), 12);
        assert!(script.answers.is_empty());
    }

    #[test]
    fn bounded_retries_give_up() {
        let mut script = Scripted::new(&["n"; 8]);
        let result = Session::new(&mut script, &settings(LengthPolicy::Reject, 2)).select_classes();
        assert!(matches!(result, Err(Error::EmptySelection { attempts: 2 })));
    }

    #[test]
    fn closed_input_stops_the_retry_loop() {
        let mut script = Scripted::new(&["n", "n", "n", "n", "n"]);
        let result = Session::new(&mut script, &Settings::default()).select_classes();
        assert!(matches!(result, Err(Error::InputClosed)));
    }

    #[test]
    fn non_numeric_length_stops_everything() {
        let mut script = Scripted::new(&["abc", "y", "y", "y", "y"]);
        let mut rng = StdRng::seed_from_u64(0);
        let result = Session::new(&mut script, &Settings::default()).run(&mut rng);
        assert!(matches!(result, Err(Error::Parse(s)) if s == "abc"));
        assert_eq!(script.prompts, vec![LENGTH_PROMPT.to_string()]);
        assert_eq!(script.answers.len(), 4);
    }

    #[test]
    fn out_of_range_length_is_asked_again() {
        let mut script = Scripted::new(&["0", "200", "12"]);
        let length = Session::new(&mut script, &Settings::default())
            .ask_length()
            .unwrap();
        assert_eq!(length, 12);
        assert_eq!(script.prompts.len(), 3);
    }

    #[test]
    fn negative_length_is_asked_again() {
        let mut script = Scripted::new(&["-3", "12"]);
        let length = Session::new(&mut script, &Settings::default())
            .ask_length()
            .unwrap();
        assert_eq!(length, 12);
        assert_eq!(script.prompts.len(), 2);
    }

    #[test]
    fn warn_policy_turns_negative_length_into_empty_password() {
        let mut script = Scripted::new(&["-3", "n", "n", "n", "y"]);
        let mut rng = StdRng::seed_from_u64(12);
        let (config, pass) = Session::new(&mut script, &settings(LengthPolicy::Warn, 0))
            .run(&mut rng)
            .unwrap();
        assert_eq!(config.length, 0);
        assert!(pass.is_empty());
    }

    #[test]
    fn huge_length_is_asked_again_even_when_lenient() {
        let mut script = Scripted::new(&["1000000000000", "8"]);
        let length = Session::new(&mut script, &settings(LengthPolicy::Warn, 0))
            .ask_length()
            .unwrap();
        assert_eq!(length, 8);
        assert_eq!(script.prompts.len(), 2);
    }

    #[test]
    fn warn_policy_generates_out_of_range_length() {
        let mut script = Scripted::new(&["200", "y", "n", "n", "n"]);
        let mut rng = StdRng::seed_from_u64(8);
        let (config, pass) = Session::new(&mut script, &settings(LengthPolicy::Warn, 0))
            .run(&mut rng)
            .unwrap();
        assert_eq!(config.length, 200);
        assert_eq!(pass.len(), 200);
        assert!(pass.as_str().chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn yes_answers() {
        assert!(is_yes("y"));
        assert!(is_yes(" y\t"));
        assert!(!is_yes("Y"));
        assert!(!is_yes("yes"));
        assert!(!is_yes("YES"));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
        assert!(!is_yes(""));
    }
}
