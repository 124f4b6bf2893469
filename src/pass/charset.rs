//! Character classes and the union alphabet built from them.

use std::fmt;

const LOWERCASE: &[u8] = b"qwertyuiopasdfghjklzxcvbnm";
const UPPERCASE: &[u8] = b"QWERTYUIOPASDFGHJKLZXCVBNM";
const SPECIAL: &[u8] = b"!@#$%^&*()-_=+[]{}<>?/|";
const DIGITS: &[u8] = b"1234567890";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Special,
    Digit,
}

impl CharacterClass {
    /// Canonical order: the union alphabet is always concatenated this way.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Special,
        CharacterClass::Digit,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Special => SPECIAL,
            CharacterClass::Digit => DIGITS,
        }
    }

    /// Keyword used by flags and the settings file.
    pub fn keyword(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lower",
            CharacterClass::Uppercase => "upper",
            CharacterClass::Special => "special",
            CharacterClass::Digit => "digits",
        }
    }

    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lower" | "lowercase" => Some(CharacterClass::Lowercase),
            "upper" | "uppercase" => Some(CharacterClass::Uppercase),
            "special" | "symbols" => Some(CharacterClass::Special),
            "digit" | "digits" | "numbers" => Some(CharacterClass::Digit),
            _ => None,
        }
    }

    /// Question asked by the interactive session.
    pub fn question(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Use lowercase letters? (y/n)",
            CharacterClass::Uppercase => "Use uppercase letters? (y/n)",
            CharacterClass::Special => "Use special characters? (y/n)",
            CharacterClass::Digit => "Use digits? (y/n)",
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharacterClass::Lowercase => 1,
            CharacterClass::Uppercase => 1 << 1,
            CharacterClass::Special => 1 << 2,
            CharacterClass::Digit => 1 << 3,
        }
    }
}

/// Set of enabled classes, iterated in canonical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassSet(u8);

impl ClassSet {
    pub fn empty() -> Self {
        ClassSet(0)
    }

    pub fn all() -> Self {
        CharacterClass::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }

    /// Parse a comma separated keyword list, e.g. `lower,digits`.
    pub fn parse_list(s: &str) -> Option<Self> {
        s.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(CharacterClass::from_keyword)
            .collect()
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut set = ClassSet::empty();
        for class in iter {
            set.insert(class);
        }
        set
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(CharacterClass::keyword).collect();
        write!(f, "{}", names.join(","))
    }
}

/// Concatenate the alphabets of the enabled classes.
pub fn build(classes: ClassSet) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(classes));
    for class in classes.iter() {
        chars.extend_from_slice(class.alphabet());
    }
    chars
}

/// Size of the union alphabet (for entropy calculation).
pub fn size(classes: ClassSet) -> usize {
    classes.iter().map(|c| c.alphabet().len()).sum()
}
