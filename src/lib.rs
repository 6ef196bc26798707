//! # Factory Method: Gadget Assembly
//!
//! A small demonstration of the Factory Method creational pattern:
//!
//! - [`Blueprint`] fixes the shape of construction (run one assembly step,
//!   seal the result) while each variant chooses its own parts.
//! - [`Feature`] is the closed set of parts a blueprint can pick from.
//! - [`Gadget`] owns the ordered feature list produced by an assembly run.
//! - [`report`] renders the per-gadget feature sections.
//!
//! Run the demo with: `cargo run --bin showcase`

pub mod error;
pub mod feature;
pub mod gadget;
pub mod report;

pub use error::GadgetError;
pub use feature::Feature;
pub use gadget::{Blueprint, Gadget, Kit, Mobile, Tablet};
