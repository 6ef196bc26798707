//! Error types for gadget assembly and reporting.

use std::io;

use thiserror::Error;

/// Failures surfaced while building a gadget or writing its report.
#[derive(Error, Debug)]
pub enum GadgetError {
    /// A blueprint declined to provide an assembly step.
    #[error("gadget '{gadget}' has no assembly step")]
    UnimplementedCapability { gadget: String },

    /// The report sink failed mid-write.
    #[error("failed to write feature report: {0}")]
    Report(#[from] io::Error),
}

impl GadgetError {
    pub fn unimplemented(gadget: impl Into<String>) -> Self {
        Self::UnimplementedCapability {
            gadget: gadget.into(),
        }
    }
}
