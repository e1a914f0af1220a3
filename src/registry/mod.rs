//! Load-time binding of renderable part names to material slots.
//!
//! The registry is built once from the part manifest the asset boundary
//! reports and is read-only afterwards. Binding failures are fatal: a model
//! that lacks a part for some slot, or exports a part the slot enumeration
//! does not know, must abort initialization rather than silently skip it.
//! After startup, [`SlotRegistry::resolve`] is the boundary that rejects
//! pointer events referencing parts outside the binding.

use crate::slots::MaterialSlot;
use std::collections::HashMap;

/// Grouping/structural nodes the model is known to export that carry no
/// colorable material. They are accepted in the manifest and skipped.
const STRUCTURAL_NODES: &[&str] = &["headphones", "body", "usbSocket", "drivers", "holder"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindingError {
    #[error("no renderable part bound for slot {0:?}")]
    UnboundSlot(MaterialSlot),
    #[error("unknown part name {0:?}")]
    UnknownPart(String),
    #[error("part {0:?} bound more than once")]
    DuplicatePart(String),
}

pub struct SlotRegistry {
    parts: HashMap<String, MaterialSlot>,
}

impl SlotRegistry {
    /// Bind the model's part manifest. Validates exhaustively: every slot
    /// must end up bound, every non-structural part must name a slot, and
    /// no part may appear twice.
    pub fn bind<S: AsRef<str>>(part_names: &[S]) -> Result<Self, BindingError> {
        let mut parts = HashMap::new();
        for name in part_names {
            let name = name.as_ref();
            if STRUCTURAL_NODES.contains(&name) {
                log::debug!("skipping structural node {:?}", name);
                continue;
            }
            let slot = MaterialSlot::from_name(name)
                .ok_or_else(|| BindingError::UnknownPart(name.to_string()))?;
            if parts.insert(name.to_string(), slot).is_some() {
                return Err(BindingError::DuplicatePart(name.to_string()));
            }
        }
        for slot in MaterialSlot::ALL {
            if !parts.values().any(|bound| *bound == slot) {
                return Err(BindingError::UnboundSlot(slot));
            }
        }
        log::info!(
            "slot registry bound {} parts across {} slots",
            parts.len(),
            MaterialSlot::COUNT
        );
        Ok(Self { parts })
    }

    /// Recover the slot for a hit part. Rejects names outside the binding
    /// before they can reach the state machine.
    pub fn resolve(&self, part_name: &str) -> Result<MaterialSlot, BindingError> {
        self.parts
            .get(part_name)
            .copied()
            .ok_or_else(|| BindingError::UnknownPart(part_name.to_string()))
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Iterate the bound part-name to slot pairs.
    pub fn slots(&self) -> impl Iterator<Item = (&str, MaterialSlot)> + '_ {
        self.parts.iter().map(|(name, slot)| (name.as_str(), *slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_manifest() -> Vec<&'static str> {
        let mut names = vec!["headphones", "body", "usbSocket", "drivers", "holder"];
        names.extend(MaterialSlot::ALL.into_iter().map(MaterialSlot::name));
        names
    }

    #[test]
    fn binds_full_manifest_and_skips_structural_nodes() {
        let registry = SlotRegistry::bind(&full_manifest()).unwrap();
        assert_eq!(registry.part_count(), MaterialSlot::COUNT);
        assert_eq!(
            registry.resolve("headband").unwrap(),
            MaterialSlot::Headband
        );
        assert_eq!(
            registry.resolve("driverLeft").unwrap(),
            MaterialSlot::DriverLeft
        );
    }

    #[test]
    fn missing_part_is_fatal() {
        let manifest: Vec<&str> = full_manifest()
            .into_iter()
            .filter(|name| *name != "pads")
            .collect();
        let result = SlotRegistry::bind(&manifest);
        assert_eq!(
            result.err(),
            Some(BindingError::UnboundSlot(MaterialSlot::Pads))
        );
    }

    #[test]
    fn unknown_part_is_fatal() {
        let mut manifest = full_manifest();
        manifest.push("chinStrap");
        let result = SlotRegistry::bind(&manifest);
        assert_eq!(
            result.err(),
            Some(BindingError::UnknownPart("chinStrap".to_string()))
        );
    }

    #[test]
    fn duplicate_part_is_fatal() {
        let mut manifest = full_manifest();
        manifest.push("caps");
        let result = SlotRegistry::bind(&manifest);
        assert_eq!(
            result.err(),
            Some(BindingError::DuplicatePart("caps".to_string()))
        );
    }

    #[test]
    fn slots_iteration_covers_every_binding() {
        let registry = SlotRegistry::bind(&full_manifest()).unwrap();
        let mut bound: Vec<_> = registry.slots().collect();
        bound.sort_by_key(|(name, _)| *name);
        assert_eq!(bound.len(), MaterialSlot::COUNT);
        for (name, slot) in bound {
            assert_eq!(slot.name(), name);
        }
    }

    #[test]
    fn resolve_rejects_unbound_names() {
        let registry = SlotRegistry::bind(&full_manifest()).unwrap();
        assert_eq!(
            registry.resolve("holder").err(),
            Some(BindingError::UnknownPart("holder".to_string()))
        );
        assert!(registry.resolve("").is_err());
    }
}
