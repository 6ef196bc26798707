//! Feature report rendering.
//!
//! Sections are written to any [`Write`] sink so the demo binary can target
//! stdout while tests capture the exact transcript in memory.

use std::io::Write;

use crate::error::GadgetError;
use crate::gadget::Gadget;

/// Write one gadget section: a banner header, then one line per feature in
/// insertion order. An empty gadget gets a header and no feature lines.
pub fn write_section(out: &mut impl Write, gadget: &Gadget) -> Result<(), GadgetError> {
    writeln!(out, "##### {} FEATURE LIST #####", gadget.name())?;
    for feature in gadget.features() {
        writeln!(out, "{feature}")?;
    }
    Ok(())
}

/// Write every section in lineup order, with a single blank line between
/// consecutive sections and no trailing blank line.
pub fn write_showcase(out: &mut impl Write, gadgets: &[Gadget]) -> Result<(), GadgetError> {
    for (index, gadget) in gadgets.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        write_section(out, gadget)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gadget::{Blueprint, Kit, Mobile, Tablet};

    const EXPECTED: &str = "\
##### MOBILE FEATURE LIST #####
5.5 inch, 1280 x 720 Pixels, TFT LCD IPS
MediaTek MTK6737 1.3GHz, Quad Core, 1.3 GHz
Voice Call, Phonebook
Internal Storage 32GB, RAM 3GB

##### TABLET FEATURE LIST #####
5.5 inch, 1280 x 720 Pixels, TFT LCD IPS
Internal Storage 32GB, RAM 3GB
MediaTek MTK6737 1.3GHz, Quad Core, 1.3 GHz
";

    #[test]
    fn test_showcase_transcript_is_exact() {
        let gadgets = [
            Gadget::build(&Mobile).unwrap(),
            Gadget::build(&Tablet).unwrap(),
        ];
        let mut buffer = Vec::new();
        write_showcase(&mut buffer, &gadgets).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), EXPECTED);
    }

    struct Bare;

    impl Blueprint for Bare {
        fn name(&self) -> &'static str {
            "BARE"
        }

        fn assemble(&self, _kit: &mut Kit) -> Result<(), GadgetError> {
            Ok(())
        }
    }

    #[test]
    fn test_empty_gadget_section_has_no_feature_lines() {
        let gadget = Gadget::build(&Bare).unwrap();
        let mut buffer = Vec::new();
        write_section(&mut buffer, &gadget).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "##### BARE FEATURE LIST #####\n"
        );
    }
}
