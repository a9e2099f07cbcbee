//! Core engine for ODDRN generation: schema tables, address segments,
//! path state validation and canonical rendering.
//!
//! Everything here is a pure, synchronous transformation over in-memory
//! structures. Concrete per-source tables live in `oddrn-schema`.

pub mod address;
pub mod error;
pub mod escape;
pub mod generator;
pub mod path;
pub mod schema;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::Error;

///
/// CONSTANTS
///

/// Prefix every rendered identifier starts with.
pub const ODDRN_PREFIX: &str = "//";

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        address::{Address, AddressKind, AddressSettings},
        generator::Generator,
        path::PathState,
        schema::{FieldDef, Schema},
    };
}
