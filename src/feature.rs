//! Feature variants: the parts a gadget blueprint chooses between.
//!
//! Each variant is a stateless value reporting one fixed line of
//! specification text. The set is closed, so a tagged enum stands in for the
//! trait-object hierarchy a language without sum types would reach for.

use std::fmt;

/// One descriptive hardware attribute of a gadget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Display,
    Processor,
    Storage,
    Call,
}

impl Feature {
    /// The fixed specification text for this feature.
    ///
    /// Constant across calls and across owning gadgets.
    pub fn description(&self) -> &'static str {
        match self {
            Feature::Display => "5.5 inch, 1280 x 720 Pixels, TFT LCD IPS",
            Feature::Processor => "MediaTek MTK6737 1.3GHz, Quad Core, 1.3 GHz",
            Feature::Storage => "Internal Storage 32GB, RAM 3GB",
            Feature::Call => "Voice Call, Phonebook",
        }
    }

    /// Print the specification line to stdout.
    pub fn describe(&self) {
        println!("{}", self.description());
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
