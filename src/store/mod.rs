//! In-memory geometry records; every write passes through validation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::policy::ValidationPolicy;
use crate::types::GeomType;
use crate::validate::{Verdict, validate};

/// A named geometry as submitted by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryRecord {
    pub name: String,
    pub wkt: String,
    #[serde(rename = "type")]
    pub geom_type: GeomType,
}

/// Why a store write failed.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The geometry failed validation; the verdict carries the findings.
    Rejected(Verdict),
    /// No record with this id.
    NotFound(u64),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Rejected(verdict) => {
                write!(f, "geometry rejected with {} finding(s)", verdict.errors.len())
            }
            StoreError::NotFound(id) => write!(f, "no geometry with id {id}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// In-memory CRUD store over [`GeometryRecord`]s.
///
/// Create and update validate against the policy snapshot supplied per call
/// (the caller owns configuration reloads); rejected geometries are never
/// stored. Ids are assigned monotonically and never reused.
#[derive(Debug, Default)]
pub struct GeometryStore {
    next_id: u64,
    records: BTreeMap<u64, GeometryRecord>,
}

impl GeometryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in id order.
    pub fn list(&self) -> impl Iterator<Item = (u64, &GeometryRecord)> {
        self.records.iter().map(|(id, record)| (*id, record))
    }

    pub fn get(&self, id: u64) -> Option<&GeometryRecord> {
        self.records.get(&id)
    }

    /// Validate and insert a record, returning its id.
    pub fn create(
        &mut self,
        record: GeometryRecord,
        policy: &ValidationPolicy,
    ) -> Result<u64, StoreError> {
        let verdict = validate(record.geom_type, &record.wkt, policy);
        if !verdict.accepted {
            return Err(StoreError::Rejected(verdict));
        }
        let id = self.next_id;
        self.next_id += 1;
        tracing::info!(id, name = %record.name, "stored geometry");
        self.records.insert(id, record);
        Ok(id)
    }

    /// Validate and replace an existing record.
    pub fn update(
        &mut self,
        id: u64,
        record: GeometryRecord,
        policy: &ValidationPolicy,
    ) -> Result<(), StoreError> {
        if !self.records.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        let verdict = validate(record.geom_type, &record.wkt, policy);
        if !verdict.accepted {
            return Err(StoreError::Rejected(verdict));
        }
        tracing::info!(id, name = %record.name, "updated geometry");
        self.records.insert(id, record);
        Ok(())
    }

    /// Remove a record; returns whether it existed.
    pub fn delete(&mut self, id: u64) -> bool {
        let removed = self.records.remove(&id).is_some();
        if removed {
            tracing::info!(id, "deleted geometry");
        }
        removed
    }
}
