//! Gadget assembly: the Factory Method.
//!
//! [`Blueprint`] plays the factory-method role. The base contract fixes how
//! a gadget is put together (run the assembly step once, seal the feature
//! list), while each variant decides which features go in and in what order.

use crate::error::GadgetError;
use crate::feature::Feature;

/// A variant-specific assembly recipe.
///
/// Implementors append their features to the kit in report order. The method
/// is required, so a variant cannot compile without an assembly step. A
/// variant may still decline the capability explicitly by returning
/// [`GadgetError::UnimplementedCapability`], which fails construction rather
/// than producing a silently empty gadget.
pub trait Blueprint {
    /// Section label used in the feature report.
    fn name(&self) -> &'static str;

    /// Append this variant's features to the kit.
    fn assemble(&self, kit: &mut Kit) -> Result<(), GadgetError>;
}

/// Accumulates features during assembly.
///
/// Only [`Gadget::build`] hands one to a blueprint, so the feature list is
/// append-only while the assembly step runs and sealed once construction
/// returns.
#[derive(Debug, Default)]
pub struct Kit {
    features: Vec<Feature>,
}

impl Kit {
    /// Append a feature to the end of the list.
    pub fn add_feature(&mut self, feature: Feature) {
        self.features.push(feature);
    }
}

/// A product category owning its ordered feature list.
#[derive(Debug)]
pub struct Gadget {
    name: &'static str,
    features: Vec<Feature>,
}

impl Gadget {
    /// Run the blueprint's assembly step exactly once and seal the result.
    pub fn build(blueprint: &dyn Blueprint) -> Result<Self, GadgetError> {
        let mut kit = Kit::default();
        blueprint.assemble(&mut kit)?;
        Ok(Gadget {
            name: blueprint.name(),
            features: kit.features,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ordered, read-only view of the owned features.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }
}

/// Phone handset: display, processor, calling, storage.
pub struct Mobile;

impl Blueprint for Mobile {
    fn name(&self) -> &'static str {
        "MOBILE"
    }

    fn assemble(&self, kit: &mut Kit) -> Result<(), GadgetError> {
        kit.add_feature(Feature::Display);
        kit.add_feature(Feature::Processor);
        kit.add_feature(Feature::Call);
        kit.add_feature(Feature::Storage);
        Ok(())
    }
}

/// Slate form factor: no calling hardware, storage listed before processor.
pub struct Tablet;

impl Blueprint for Tablet {
    fn name(&self) -> &'static str {
        "TABLET"
    }

    fn assemble(&self, kit: &mut Kit) -> Result<(), GadgetError> {
        kit.add_feature(Feature::Display);
        kit.add_feature(Feature::Storage);
        kit.add_feature(Feature::Processor);
        Ok(())
    }
}
