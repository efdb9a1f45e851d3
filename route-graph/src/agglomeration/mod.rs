//! Location agglomerations.
//!
//! Several location codes can stand for the same place for routing
//! purposes (e.g. the airports and railway stations of one city). This
//! module maps member codes to the code of the agglomeration they belong
//! to, so the graph builder can collapse them into a single vertex.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::LocationId;
use crate::input::LoadError;

/// A lookup table from member location to agglomeration location.
///
/// Lookups fall back to the original code when it is not a member of any
/// agglomeration.
#[derive(Debug, Clone, Default)]
pub struct Agglomerations {
    members: HashMap<LocationId, LocationId>,
}

impl Agglomerations {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `member` to `agglomeration`, replacing any earlier mapping.
    pub fn add(&mut self, member: LocationId, agglomeration: LocationId) {
        self.members.insert(member, agglomeration);
    }

    /// Resolve a location to its agglomeration, or to itself.
    pub fn resolve(&self, id: &LocationId) -> LocationId {
        self.members.get(id).unwrap_or(id).clone()
    }

    /// Returns the agglomeration of `id`, if it is a member of one.
    pub fn get(&self, id: &str) -> Option<&LocationId> {
        self.members.get(id)
    }

    /// Returns the number of member codes.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if no location is mapped.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Parse a table from a JSON object of `"member": "agglomeration"` pairs.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let members: HashMap<LocationId, LocationId> =
            serde_json::from_str(json).map_err(|e| LoadError::Json {
                message: e.to_string(),
            })?;
        Ok(Self { members })
    }

    /// Load a table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

/// Builder for creating agglomeration tables.
///
/// Provides a fluent API for adding mappings.
#[derive(Debug, Default)]
pub struct AgglomerationsBuilder {
    inner: Agglomerations,
}

impl AgglomerationsBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `member` to `agglomeration`. Invalid codes are ignored.
    pub fn add(mut self, member: &str, agglomeration: &str) -> Self {
        if let (Ok(member), Ok(agglomeration)) =
            (LocationId::parse(member), LocationId::parse(agglomeration))
        {
            self.inner.add(member, agglomeration);
        }
        self
    }

    /// Build the table.
    pub fn build(self) -> Agglomerations {
        self.inner
    }
}
