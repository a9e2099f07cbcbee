//! Static description of one source type's path hierarchy.
//!
//! Tables are plain `'static` data so a new source is a new row, never new
//! engine logic.

use crate::{address::AddressKind, path::PathError};
use std::collections::BTreeSet;
use thiserror::Error as ThisError;

///
/// SchemaError
/// Structural problem found in a schema table.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("source '{source_type}' declares field '{field}' more than once")]
    DuplicateField {
        source_type: &'static str,
        field: &'static str,
    },

    #[error("source '{source_type}', field '{field}': dependency chain is empty")]
    EmptyChain {
        source_type: &'static str,
        field: &'static str,
    },

    #[error("source '{source_type}', field '{field}': dependency chain must end with the field itself")]
    ChainNotSelfTerminated {
        source_type: &'static str,
        field: &'static str,
    },

    #[error("source '{source_type}', field '{field}': '{ancestor}' is not a declared field")]
    UndeclaredAncestor {
        source_type: &'static str,
        field: &'static str,
        ancestor: &'static str,
    },

    #[error("source '{source_type}', field '{field}': ancestor '{ancestor}' is not a prefix of the chain")]
    InconsistentChain {
        source_type: &'static str,
        field: &'static str,
        ancestor: &'static str,
    },

    #[error("source '{source_type}': anchor '{field}' is not a declared field")]
    UndeclaredAnchor {
        source_type: &'static str,
        field: &'static str,
    },

    #[error("source '{source_type}': allows_null entry '{field}' is not a declared field")]
    UndeclaredNullable {
        source_type: &'static str,
        field: &'static str,
    },
}

///
/// FieldDef
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldDef {
    pub ident: &'static str,

    /// Wire name when it differs from `ident`; may be shared by siblings.
    pub alias: Option<&'static str>,

    /// Must carry a value at construction time.
    pub required: bool,

    /// Ancestor chain, root first, ending with `ident`.
    pub deps: &'static [&'static str],
}

impl FieldDef {
    #[must_use]
    pub const fn new(ident: &'static str, deps: &'static [&'static str]) -> Self {
        Self {
            ident,
            alias: None,
            required: false,
            deps,
        }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    /// Name used in the rendered identifier.
    #[must_use]
    pub fn external_name(&self) -> &'static str {
        self.alias.unwrap_or(self.ident)
    }

    /// Ancestors of this field, excluding the field itself.
    #[must_use]
    pub fn ancestors(&self) -> &'static [&'static str] {
        match self.deps.split_last() {
            Some((_, ancestors)) => ancestors,
            None => &[],
        }
    }
}

///
/// Schema
///

#[derive(Clone, Copy, Debug)]
pub struct Schema {
    /// Source tag rendered right after the `//` prefix.
    pub source: &'static str,
    pub address: AddressKind,
    pub fields: &'static [FieldDef],

    /// Field whose value alone makes a minimal identifier.
    pub anchor: Option<&'static str>,

    /// Fields whose absence does not break a descendant's chain.
    pub allows_null: &'static [&'static str],
}

impl Schema {
    // field
    #[must_use]
    pub fn field(&self, ident: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    // position
    #[must_use]
    pub fn position(&self, ident: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.ident == ident)
    }

    /// Ordered ancestor chain of `ident`, root first and inclusive of itself.
    pub fn get_dependency(&self, ident: &str) -> Result<&'static [&'static str], PathError> {
        self.field(ident)
            .map(|field| field.deps)
            .ok_or_else(|| self.unknown(ident))
    }

    #[must_use]
    pub const fn anchor_field(&self) -> Option<&'static str> {
        self.anchor
    }

    #[must_use]
    pub fn allows_null(&self, ident: &str) -> bool {
        self.allows_null.iter().any(|nullable| *nullable == ident)
    }

    /// Field idents in declaration order.
    pub fn available_paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.ident)
    }

    /// Every field surfaced under the wire name `name`.
    pub fn fields_named(&self, name: &str) -> impl Iterator<Item = &'static FieldDef> {
        self.fields.iter().filter(move |f| f.external_name() == name)
    }

    /// Resolve an input key to its field: the internal ident wins, otherwise
    /// an external name that belongs to exactly one field.
    pub fn resolve_key(&self, key: &str) -> Result<&'static FieldDef, PathError> {
        if let Some(field) = self.field(key) {
            return Ok(field);
        }

        let mut named = self.fields_named(key);
        match (named.next(), named.next()) {
            (Some(field), None) => Ok(field),
            (Some(first), Some(second)) => {
                let mut fields = vec![first.ident, second.ident];
                fields.extend(named.map(|f| f.ident));

                Err(PathError::AmbiguousAlias {
                    alias: key.to_string(),
                    fields,
                })
            }
            (None, _) => Err(self.unknown(key)),
        }
    }

    pub(crate) fn unknown(&self, ident: &str) -> PathError {
        PathError::UnknownField {
            source_type: self.source,
            field: ident.to_string(),
        }
    }

    /// Check the table is internally consistent.
    pub fn validate(&self) -> Result<(), Vec<SchemaError>> {
        let mut errs = Vec::new();
        let source_type = self.source;
        let mut seen = BTreeSet::new();

        for field in self.fields {
            if !seen.insert(field.ident) {
                errs.push(SchemaError::DuplicateField {
                    source_type,
                    field: field.ident,
                });
            }

            match field.deps.last() {
                None => {
                    errs.push(SchemaError::EmptyChain {
                        source_type,
                        field: field.ident,
                    });
                    continue;
                }
                Some(last) if *last != field.ident => {
                    errs.push(SchemaError::ChainNotSelfTerminated {
                        source_type,
                        field: field.ident,
                    });
                }
                Some(_) => {}
            }

            // every ancestor's own chain must be a prefix of this one
            for (depth, ancestor) in field.ancestors().iter().enumerate() {
                match self.field(ancestor) {
                    None => errs.push(SchemaError::UndeclaredAncestor {
                        source_type,
                        field: field.ident,
                        ancestor: *ancestor,
                    }),
                    Some(parent) if parent.deps != &field.deps[..=depth] => {
                        errs.push(SchemaError::InconsistentChain {
                            source_type,
                            field: field.ident,
                            ancestor: *ancestor,
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        if let Some(anchor) = self.anchor
            && self.field(anchor).is_none()
        {
            errs.push(SchemaError::UndeclaredAnchor {
                source_type,
                field: anchor,
            });
        }

        for nullable in self.allows_null {
            if self.field(nullable).is_none() {
                errs.push(SchemaError::UndeclaredNullable {
                    source_type,
                    field: *nullable,
                });
            }
        }

        if errs.is_empty() { Ok(()) } else { Err(errs) }
    }
}
