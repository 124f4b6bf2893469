use crate::pass::{CharacterClass, ClassSet};

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub urandom: bool,
    pub clipboard: bool,
    pub quiet: bool,
    pub lenient: bool,
    pub length: Option<i64>,
    pub number: Option<usize>,
    pub classes: ClassSet,
}

impl CliFlags {
    pub fn enable(&mut self, class: CharacterClass) {
        self.classes.insert(class);
    }

    /// Classes named on the command line, if any.
    pub fn explicit_classes(&self) -> Option<ClassSet> {
        (!self.classes.is_empty()).then_some(self.classes)
    }
}
