use super::CliFlags;
use crate::error::{Error, Result};
use crate::pass::{CharacterClass, parse_length};

/// Parse `args` (including the program name at index 0).
pub fn parse(args: &[String]) -> Result<CliFlags> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-u" | "--urandom" => flags.urandom = true,
            "-b" | "--board" => flags.clipboard = true,
            "--lenient" => flags.lenient = true,
            "--lower" => flags.enable(CharacterClass::Lowercase),
            "--upper" => flags.enable(CharacterClass::Uppercase),
            "--special" => flags.enable(CharacterClass::Special),
            "--digits" => flags.enable(CharacterClass::Digit),
            "-l" | "--length" => {
                i += 1;
                let value = value_for(args, i, "--length")?;
                flags.length = Some(parse_length(value)?);
            }
            "-n" | "--number" => {
                i += 1;
                let value = value_for(args, i, "--number")?;
                flags.number = Some(value.trim().parse().map_err(|_| {
                    Error::usage(format!("Invalid number: {}", value))
                })?);
            }
            arg => return Err(Error::usage(format!("Unknown argument: {}", arg))),
        }
        i += 1;
    }

    Ok(flags)
}

fn value_for<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| Error::usage(format!("Missing value for {}", flag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("pwforge")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn length_number_and_classes() {
        let flags = parse(&args(&["-l", "20", "-n", "3", "--digits", "--upper"])).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
        let classes = flags.explicit_classes().unwrap();
        assert!(classes.contains(CharacterClass::Digit));
        assert!(classes.contains(CharacterClass::Uppercase));
        assert!(!classes.contains(CharacterClass::Lowercase));
    }

    #[test]
    fn no_class_flags_means_none_explicit() {
        let flags = parse(&args(&["-q", "-b", "-u", "--lenient"])).unwrap();
        assert!(flags.quiet && flags.clipboard && flags.urandom && flags.lenient);
        assert!(flags.explicit_classes().is_none());
    }

    #[test]
    fn non_numeric_length_is_parse_error() {
        assert!(matches!(parse(&args(&["--length", "abc"])), Err(Error::Parse(_))));
    }

    #[test]
    fn missing_value_and_unknown_flag_are_usage_errors() {
        assert!(matches!(parse(&args(&["-l"])), Err(Error::Usage(_))));
        assert!(matches!(parse(&args(&["--hex"])), Err(Error::Usage(_))));
        assert!(matches!(parse(&args(&["-n", "x"])), Err(Error::Usage(_))));
    }
}
