use crate::pass::config::{MAX_LENGTH, MIN_LENGTH};
use crate::settings::Settings;
use crate::terminal::{BOLD, RESET, box_bottom, box_line, box_line_center, box_opt, box_top};

pub fn print_help() {
    box_top("pwforge");
    box_line_center("Password generator built from character classes");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Asks for a length and");
    box_line("     which character classes to use.");
    box_line("  2) Command: Pass flags directly (e.g., -l 20 -n 5).");
    box_line("");
    box_line("USAGE:");
    box_line("  pwforge [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt(
        "  -l, --length <N>",
        &format!("Characters per password, {MIN_LENGTH} < N < {MAX_LENGTH}"),
    );
    box_opt("  -n, --number <N>", "How many passwords to generate (default: 1)");
    box_opt("      --lower", "Enable lowercase letters");
    box_opt("      --upper", "Enable uppercase letters");
    box_opt("      --special", "Enable special characters");
    box_opt("      --digits", "Enable digits");
    box_opt(
        "      --lenient",
        "Warn about an out-of-range length instead of refusing it",
    );
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress everything except passwords");
    box_line("");
    box_line(" Entropy:");
    box_opt("  -u, --urandom", "Read every draw from the operating system");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("When no class flag is given, the classes from the settings file apply.");
    box_line(&format!("Settings: {}", Settings::path().display()));
    box_line("");
    box_line("EXAMPLES:");
    box_line("  pwforge                        Interactive prompts");
    box_line("  pwforge -l 16                  One password, 16 characters");
    box_line("  pwforge -l 20 -n 3             Three passwords, 20 characters each");
    box_line("  pwforge -l 10 --digits         Ten digit PIN");
    box_line("  pwforge -l 24 --lower --upper  Letters only");
    box_line("");
    box_bottom();
    println!();
}

pub fn print_intro() {
    box_top("pwforge");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_bottom();
}

pub fn print_password(password: &str) {
    println!("{BOLD}Generated password:{RESET} {password}");
}
