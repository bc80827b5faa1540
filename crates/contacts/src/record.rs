use serde::{Deserialize, Serialize};
use tracing::debug;

use contactbook_core::{DomainError, DomainResult, Entity};

use crate::name::ContactName;
use crate::phone::PhoneNumber;

/// Entity: a named contact owning a deduplicated, ordered list of phone numbers.
///
/// Phone numbers have no life of their own outside the record that holds them;
/// editing one replaces it with a freshly validated value in the same slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordRepr")]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
}

/// Wire shape of a record. Phones are already validated by `PhoneNumber`'s
/// serde impl; converting into a `Record` drops duplicates.
#[derive(Deserialize)]
struct RecordRepr {
    name: ContactName,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
}

impl From<RecordRepr> for Record {
    fn from(repr: RecordRepr) -> Self {
        let mut record = Record::new(repr.name);
        for phone in repr.phones {
            record.push_unique(phone);
        }
        record
    }
}

impl Record {
    pub fn new(name: impl Into<ContactName>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate `raw` and append it, unless an equal phone is already present.
    ///
    /// Adding a phone the record already holds is a no-op, not an error.
    pub fn add_phone(&mut self, raw: &str) -> DomainResult<()> {
        let phone = PhoneNumber::new(raw)?;
        if self.push_unique(phone) {
            debug!(name = %self.name, phone = raw, "phone added");
        } else {
            debug!(name = %self.name, phone = raw, "phone already present");
        }
        Ok(())
    }

    /// Replace `old_raw` with `new_raw`, keeping its position.
    ///
    /// If `old_raw` is not in the record nothing happens and `Ok(())` is
    /// returned. `new_raw` is validated before anything is touched, so a
    /// validation failure leaves the record as it was. If `new_raw` is already
    /// held elsewhere in the record, the edited slot is dropped instead.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> DomainResult<()> {
        let Some(index) = self.position(old_raw) else {
            debug!(name = %self.name, phone = old_raw, "phone to edit not present");
            return Ok(());
        };

        let phone = PhoneNumber::new(new_raw)?;
        let held_elsewhere = self
            .phones
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && *p == phone);

        if held_elsewhere {
            self.phones.remove(index);
        } else {
            self.phones[index] = phone;
        }

        debug!(name = %self.name, old = old_raw, new = new_raw, "phone edited");
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| *p == raw)
    }

    /// Remove `raw` from the record and hand it back.
    pub fn remove_phone(&mut self, raw: &str) -> DomainResult<PhoneNumber> {
        let index = self.position(raw).ok_or_else(|| {
            DomainError::not_found(format!("phone number {raw} in record {}", self.name))
        })?;

        let removed = self.phones.remove(index);
        debug!(name = %self.name, phone = raw, "phone removed");
        Ok(removed)
    }

    fn position(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|p| p == raw)
    }

    /// Append unless already present. Returns whether the phone was appended.
    fn push_unique(&mut self, phone: PhoneNumber) -> bool {
        if self.phones.contains(&phone) {
            return false;
        }
        self.phones.push(phone);
        true
    }
}

impl Entity for Record {
    type Id = ContactName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl core::fmt::Display for Record {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{phone}")?;
        }
        Ok(())
    }
}
