//! # Component Registry
//!
//! Components are made known to the host explicitly. A host builds a
//! [`ComponentRegistry`] at startup, either locally or as the process-wide
//! instance through [`init`]; nothing registers itself as a side effect.

use crate::component::Component;
use crate::error::RegistryError;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::{debug, info};

static GLOBAL: OnceLock<ComponentRegistry> = OnceLock::new();

/// What the registry knows about a defined component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    pub tag: &'static str,
    pub observed_attributes: &'static [&'static str],
}

impl ComponentDescriptor {
    pub fn of<C: Component>() -> Self {
        Self {
            tag: C::TAG,
            observed_attributes: C::observed_attributes(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ComponentRegistry {
    entries: BTreeMap<&'static str, ComponentDescriptor>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines `C` under its tag.
    ///
    /// # Errors
    /// [`RegistryError::InvalidTag`] when the tag is not a valid custom element
    /// name, [`RegistryError::AlreadyDefined`] when the tag is taken.
    pub fn define<C: Component>(&mut self) -> Result<(), RegistryError> {
        let tag = C::TAG;
        if !is_valid_tag(tag) {
            return Err(RegistryError::InvalidTag(tag));
        }
        if self.entries.contains_key(tag) {
            return Err(RegistryError::AlreadyDefined(tag));
        }
        debug!(tag, "Defined");
        self.entries.insert(tag, ComponentDescriptor::of::<C>());
        Ok(())
    }

    pub fn get(&self, tag: &str) -> Option<&ComponentDescriptor> {
        self.entries.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lowercase ASCII letter first, at least one hyphen, no uppercase or whitespace.
fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    let starts_lower = chars.next().is_some_and(|c| c.is_ascii_lowercase());
    starts_lower
        && tag.contains('-')
        && tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_' || c == '.')
}

/// Builds the process-wide registry. Runs `define` exactly once per process.
///
/// # Errors
/// Whatever `define` returns, or [`RegistryError::AlreadyInitialized`] on any
/// later call.
pub fn init<F>(define: F) -> Result<&'static ComponentRegistry, RegistryError>
where
    F: FnOnce(&mut ComponentRegistry) -> Result<(), RegistryError>,
{
    if GLOBAL.get().is_some() {
        return Err(RegistryError::AlreadyInitialized);
    }
    let mut registry = ComponentRegistry::new();
    define(&mut registry)?;
    let size = registry.len();
    GLOBAL
        .set(registry)
        .map_err(|_| RegistryError::AlreadyInitialized)?;
    info!(size, "Component registry initialized");
    GLOBAL.get().ok_or(RegistryError::AlreadyInitialized)
}

/// The process-wide registry, once [`init`] succeeded.
pub fn global() -> Option<&'static ComponentRegistry> {
    GLOBAL.get()
}
