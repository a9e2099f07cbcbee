use crate::{
    Error, ODDRN_PREFIX,
    address::{Address, AddressSettings},
    escape::DELIMITER,
    path::PathState,
    schema::Schema,
};
use tracing::{debug, trace};

///
/// Generator
///
/// One address plus the path state of a single catalogued entity. Renders
/// `//{source}/{address}/{name1}/{value1}/.../{nameN}/{valueN}`.
///

#[derive(Clone, Debug)]
pub struct Generator {
    schema: &'static Schema,
    address: Address,
    paths: PathState,
}

impl Generator {
    /// The address is resolved before any path value is looked at.
    pub fn new<I, K, V>(
        schema: &'static Schema,
        address: &AddressSettings,
        values: I,
    ) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let address = address.resolve(schema.address)?;
        let paths = PathState::new(schema, values)?;

        debug!(source = schema.source, %address, "generator created");

        Ok(Self {
            schema,
            address,
            paths,
        })
    }

    #[must_use]
    pub const fn source(&self) -> &'static str {
        self.schema.source
    }

    #[must_use]
    pub const fn schema(&self) -> &'static Schema {
        self.schema
    }

    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    #[must_use]
    pub const fn paths(&self) -> &PathState {
        &self.paths
    }

    /// `//{source}/{address}`, never with a trailing delimiter.
    #[must_use]
    pub fn base_oddrn(&self) -> String {
        format!("{ODDRN_PREFIX}{}{DELIMITER}{}", self.schema.source, self.address)
    }

    #[must_use]
    pub fn available_paths(&self) -> Vec<&'static str> {
        self.schema.available_paths().collect()
    }

    /// Identifier of `path`, optionally assigning `new_value` first.
    /// An empty `new_value` counts as none.
    pub fn get_oddrn_by_path(
        &mut self,
        path: &str,
        new_value: Option<&str>,
    ) -> Result<String, Error> {
        self.schema.get_dependency(path)?;

        match new_value.filter(|value| !value.is_empty()) {
            Some(value) => self.paths.set_value(path, value)?,
            None => self.paths.check_is_set(path)?,
        }

        self.render(path)
    }

    /// Identifier of an already set `path`.
    pub fn oddrn(&self, path: &str) -> Result<String, Error> {
        self.paths.check_is_set(path)?;

        self.render(path)
    }

    /// Identifier of whichever field exposed as `name` currently holds a
    /// value.
    pub fn get_oddrn_by_alias(&self, name: &str) -> Result<String, Error> {
        let field = self.paths.active_variant(name)?;

        self.render(field.ident)
    }

    /// Merge `values` into the current paths; the whole state is rebuilt and
    /// revalidated, and left untouched on error.
    pub fn set_oddrn_paths<I, K, V>(&mut self, values: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.paths = self.paths.merge(values)?;

        Ok(())
    }

    /// Identifier of the anchor field, or the bare base for anchorless
    /// sources.
    pub fn get_data_source_oddrn(&self) -> Result<String, Error> {
        match self.schema.anchor_field() {
            Some(anchor) => self.oddrn(anchor),
            None => Ok(self.base_oddrn()),
        }
    }

    fn render(&self, path: &str) -> Result<String, Error> {
        let mut oddrn = self.base_oddrn();

        for (name, value) in self.paths.chain(path)? {
            oddrn.push(DELIMITER);
            oddrn.push_str(name);
            oddrn.push(DELIMITER);
            oddrn.push_str(value);
        }

        trace!(%oddrn, path, "rendered");

        Ok(oddrn)
    }
}
