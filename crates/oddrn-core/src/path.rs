//! Mutable record of the field values assigned to one generator.
//!
//! Invariants:
//! - Every stored value is non-empty and already escaped.
//! - For each explicitly set field, every ancestor in its chain is set,
//!   unless the walk reaches an ancestor listed in `allows_null` first.
//! - Validation visits fields in schema declaration order, so the first
//!   reported violation is deterministic.

use crate::{
    escape::escape,
    schema::{FieldDef, Schema},
};
use thiserror::Error as ThisError;
use tracing::debug;

///
/// PathError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum PathError {
    #[error("path '{field}' doesn't exist in source '{source_type}'")]
    UnknownField {
        source_type: &'static str,
        field: String,
    },

    #[error("required path '{field}' has no value")]
    RequiredFieldMissing { field: &'static str },

    #[error("'{field}' can not be without '{missing_ancestor}' attribute")]
    WrongPathOrder {
        field: &'static str,
        missing_ancestor: &'static str,
    },

    #[error("path '{field}' is not set up")]
    EmptyPathValue { field: &'static str },

    #[error("'{alias}' names several fields ({}), use the field name instead", .fields.join(", "))]
    AmbiguousAlias {
        alias: String,
        fields: Vec<&'static str>,
    },
}

///
/// Slot
/// One field's value plus the flag recording that a caller assigned it.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Slot {
    value: Option<String>,
    explicit: bool,
}

impl Slot {
    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

///
/// PathState
///

#[derive(Clone, Debug)]
pub struct PathState {
    schema: &'static Schema,
    slots: Vec<Slot>,
}

impl PathState {
    /// Build from raw (unescaped) values keyed by field or unique wire name.
    pub fn new<I, K, V>(schema: &'static Schema, values: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut state = Self::empty(schema);
        state.assign_raw(values)?;
        state.finish()
    }

    fn empty(schema: &'static Schema) -> Self {
        Self {
            schema,
            slots: vec![Slot::default(); schema.fields.len()],
        }
    }

    // construction-time checks shared by `new` and `merge`
    fn finish(self) -> Result<Self, PathError> {
        self.check_required()?;
        self.validate_all()?;

        debug!(
            source = self.schema.source,
            set = self.values().count(),
            "path state built"
        );

        Ok(self)
    }

    fn assign_raw<I, K, V>(&mut self, values: I) -> Result<(), PathError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in values {
            let field = self.schema.resolve_key(key.as_ref())?;
            let escaped = escape(value.as_ref()).into_owned();
            self.store(field, escaped);
        }

        Ok(())
    }

    fn store(&mut self, field: &FieldDef, value: String) {
        if let Some(idx) = self.schema.position(field.ident) {
            self.slots[idx] = Slot {
                value: (!value.is_empty()).then_some(value),
                explicit: true,
            };
        }
    }

    #[must_use]
    pub const fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Stored (escaped) value of `field`.
    pub fn get(&self, field: &str) -> Result<Option<&str>, PathError> {
        let idx = self
            .schema
            .position(field)
            .ok_or_else(|| self.schema.unknown(field))?;

        Ok(self.slots[idx].value())
    }

    #[must_use]
    pub fn is_set(&self, field: &str) -> bool {
        self.get(field).is_ok_and(|value| value.is_some())
    }

    /// Set fields in declaration order with their stored values.
    pub fn values(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.schema
            .fields
            .iter()
            .zip(&self.slots)
            .filter_map(|(field, slot)| slot.value().map(|value| (field.ident, value)))
    }

    fn check_required(&self) -> Result<(), PathError> {
        for (field, slot) in self.schema.fields.iter().zip(&self.slots) {
            if field.required && slot.value().is_none() {
                return Err(PathError::RequiredFieldMissing { field: field.ident });
            }
        }

        Ok(())
    }

    /// Validate the chain of every explicitly set field.
    pub fn validate_all(&self) -> Result<(), PathError> {
        for (field, slot) in self.schema.fields.iter().zip(&self.slots) {
            if slot.explicit && slot.value().is_some() {
                self.validate_path(field)?;
            }
        }

        Ok(())
    }

    // walk from the nearest ancestor back toward the root
    fn validate_path(&self, field: &'static FieldDef) -> Result<(), PathError> {
        for &ancestor in field.ancestors().iter().rev() {
            if self.is_set(ancestor) {
                continue;
            }
            if self.schema.allows_null(ancestor) {
                return Ok(());
            }

            return Err(PathError::WrongPathOrder {
                field: field.ident,
                missing_ancestor: ancestor,
            });
        }

        Ok(())
    }

    /// Assign one field and re-check only its chain. A rejected value is
    /// rolled back.
    pub fn set_value(&mut self, field: &str, value: &str) -> Result<(), PathError> {
        let def = self
            .schema
            .field(field)
            .ok_or_else(|| self.schema.unknown(field))?;
        let idx = self
            .schema
            .position(def.ident)
            .ok_or_else(|| self.schema.unknown(field))?;

        let previous = self.slots[idx].clone();
        self.store(def, escape(value).into_owned());

        if let Err(err) = self.validate_path(def) {
            debug!(field = def.ident, %err, "path value rejected");
            self.slots[idx] = previous;

            return Err(err);
        }

        debug!(field = def.ident, "path value set");

        Ok(())
    }

    pub fn check_is_set(&self, field: &str) -> Result<(), PathError> {
        let def = self
            .schema
            .field(field)
            .ok_or_else(|| self.schema.unknown(field))?;

        if self.is_set(def.ident) {
            Ok(())
        } else {
            Err(PathError::EmptyPathValue { field: def.ident })
        }
    }

    /// New state from the current values overlaid with `new_values`; every
    /// construction-time check runs again.
    pub fn merge<I, K, V>(&self, new_values: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut state = Self::empty(self.schema);

        // carried values are already escaped
        for (idx, slot) in self.slots.iter().enumerate() {
            if let Some(value) = slot.value() {
                state.slots[idx] = Slot {
                    value: Some(value.to_string()),
                    explicit: true,
                };
            }
        }
        state.assign_raw(new_values)?;

        state.finish()
    }

    /// The one field exposed as `name` that currently holds a value.
    pub fn active_variant(&self, name: &str) -> Result<&'static FieldDef, PathError> {
        let candidates: Vec<_> = self.schema.fields_named(name).collect();
        let Some(first) = candidates.first() else {
            return Err(self.schema.unknown(name));
        };

        let set: Vec<&'static FieldDef> = candidates
            .iter()
            .copied()
            .filter(|field| self.is_set(field.ident))
            .collect();

        match set.as_slice() {
            [] => Err(PathError::EmptyPathValue {
                field: first.external_name(),
            }),
            [field] => Ok(*field),
            _ => Err(PathError::AmbiguousAlias {
                alias: name.to_string(),
                fields: set.iter().map(|field| field.ident).collect(),
            }),
        }
    }

    /// `(wire name, value)` pairs of the chain ending at `field`, root first.
    /// Unset ancestors are skipped.
    pub fn chain(&self, field: &str) -> Result<Vec<(&'static str, &str)>, PathError> {
        let deps = self.schema.get_dependency(field)?;
        let mut pairs = Vec::with_capacity(deps.len());

        for &dep in deps {
            let def = self
                .schema
                .field(dep)
                .ok_or_else(|| self.schema.unknown(dep))?;
            if let Some(value) = self.get(dep)? {
                pairs.push((def.external_name(), value));
            }
        }

        Ok(pairs)
    }
}

#[cfg(test)]
mod tests;
