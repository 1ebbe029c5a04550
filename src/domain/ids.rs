//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for the identifiers Ferry works
//! with. Each type ensures type safety and carries the naming conventions
//! for buckets and destination keys so they live in exactly one place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Organization identifier newtype wrapper
///
/// An org maps to a dedicated source bucket (`{org}-content`) and a key
/// prefix in the single destination bucket (`{org}/...`).
///
/// # Examples
///
/// ```
/// use ferry::domain::ids::OrgId;
/// use std::str::FromStr;
///
/// let org = OrgId::from_str("acme").unwrap();
/// assert_eq!(org.source_bucket(), "acme-content");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrgId(String);

impl OrgId {
    /// Creates a new OrgId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the org name is empty or contains `/`, which
    /// would corrupt bucket names and destination key prefixes.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Org name cannot be empty".to_string());
        }
        if id.contains('/') {
            return Err(format!("Org name cannot contain '/': {id}"));
        }
        Ok(Self(id))
    }

    /// Returns the org name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name of the org's source content bucket
    pub fn source_bucket(&self) -> String {
        format!("{}-content", self.0)
    }

    /// Returns the destination key for one of this org's objects
    ///
    /// All of an org's objects land in the shared destination bucket under
    /// the org's prefix.
    pub fn destination_key(&self, key: &ObjectKey) -> String {
        format!("{}/{}", self.0, key.as_str())
    }
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrgId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for OrgId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Object key newtype wrapper
///
/// An opaque identifier for an object within an org's namespace. Unique
/// within a store and stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Creates a new ObjectKey from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, String> {
        let key = key.into();
        if key.is_empty() {
            return Err("Object key cannot be empty".to_string());
        }
        Ok(Self(key))
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ObjectKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ObjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Continuation token returned by a listing call
///
/// Opaque cursor for resuming a listing at the next page. Absence of a
/// token is the sole termination signal for pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageToken(String);

impl PageToken {
    /// Creates a new PageToken
    ///
    /// Tokens are opaque; no validation beyond taking ownership.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
