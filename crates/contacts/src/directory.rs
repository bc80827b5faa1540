use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use contactbook_core::{DomainError, DomainResult, Entity};

use crate::name::ContactName;
use crate::record::Record;

/// Aggregate: every contact record, keyed by name, in insertion order.
///
/// The directory owns its records. Lookups hand out references into it, so
/// changes made through [`Directory::find_mut`] are what later lookups see.
/// Collections here are small; lookups are linear scans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Record>", into = "Vec<Record>")]
pub struct Directory {
    records: Vec<Record>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name.
    ///
    /// Fails with `DuplicateKey` if a record with that name already exists.
    pub fn add_record(&mut self, record: Record) -> DomainResult<()> {
        if self.contains(record.name().as_str()) {
            debug!(name = %record.name(), "record already exists");
            return Err(DomainError::duplicate_key(record.name().as_str()));
        }

        info!(name = %record.name(), phones = record.phones().len(), "record added");
        self.records.push(record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> DomainResult<&Record> {
        self.position(name)
            .map(|index| &self.records[index])
            .ok_or_else(|| Self::missing(name))
    }

    pub fn find_mut(&mut self, name: &str) -> DomainResult<&mut Record> {
        match self.position(name) {
            Some(index) => Ok(&mut self.records[index]),
            None => Err(Self::missing(name)),
        }
    }

    /// Remove the record filed under `name` and hand it back.
    pub fn delete(&mut self, name: &str) -> DomainResult<Record> {
        let index = self.position(name).ok_or_else(|| Self::missing(name))?;
        let record = self.records.remove(index);
        info!(name, "record deleted");
        Ok(record)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ContactName, &Record)> + '_ {
        self.records.iter().map(|record| (record.id(), record))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn names(&self) -> impl Iterator<Item = &ContactName> + '_ {
        self.records.iter().map(Record::name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }

    fn missing(name: &str) -> DomainError {
        debug!(name, "record not found");
        DomainError::not_found(format!("a record with name {name}"))
    }
}

impl TryFrom<Vec<Record>> for Directory {
    type Error = DomainError;

    fn try_from(records: Vec<Record>) -> Result<Self, Self::Error> {
        let mut directory = Directory::new();
        for record in records {
            directory.add_record(record)?;
        }
        Ok(directory)
    }
}

impl From<Directory> for Vec<Record> {
    fn from(directory: Directory) -> Self {
        directory.records
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a Record;
    type IntoIter = core::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// One record per line, in insertion order.
impl core::fmt::Display for Directory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}
