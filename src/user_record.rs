use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

use crate::errors::{ConsentError, ConsentResult};

/// The three membership lists kept on every user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentList {
    Orgs,
    Purposes,
    Hpos,
}

impl ConsentList {
    /// Name of the stored field backing this list
    pub fn field_name(&self) -> &'static str {
        match self {
            ConsentList::Orgs => "consent_orgs",
            ConsentList::Purposes => "consent_purposes",
            ConsentList::Hpos => "consent_hpos",
        }
    }
}

impl fmt::Display for ConsentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// A user participating in the consent system, with typed membership lists.
#[derive(Clone, Debug, PartialEq)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub consent_orgs: Vec<i32>,
    pub consent_purposes: Vec<String>,
    pub consent_hpos: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a user; the store assigns the id.
#[derive(Clone, Debug, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
}

/// Partial profile update. `None` leaves the field alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserRecord {
    /// Overwrite the profile fields that carry a non-empty value.
    ///
    /// An empty string counts as "not provided", so clients cannot blank a
    /// field through an update.
    pub fn apply_update(&mut self, update: UserUpdate) {
        if let Some(email) = update.email.filter(|v| !v.is_empty()) {
            self.email = email;
        }
        if let Some(first_name) = update.first_name.filter(|v| !v.is_empty()) {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name.filter(|v| !v.is_empty()) {
            self.last_name = last_name;
        }
    }
}

/// Append every entry, in order. Duplicates are kept.
pub fn append_entries<T: Clone>(list: &mut Vec<T>, entries: &[T]) {
    list.extend_from_slice(entries);
}

/// Remove the first occurrence of every entry, in order.
///
/// Either the whole batch applies or `list` is left untouched: the first
/// entry that cannot be found aborts with `ValueNotFound`.
pub fn remove_entries<T>(
    list: &mut Vec<T>,
    entries: &[T],
    kind: ConsentList,
) -> ConsentResult<()>
where
    T: Clone + PartialEq + fmt::Display,
{
    let mut remaining = list.clone();
    for entry in entries {
        let position = remaining
            .iter()
            .position(|existing| existing == entry)
            .ok_or_else(|| ConsentError::ValueNotFound {
                list: kind,
                value: entry.to_string(),
            })?;
        remaining.remove(position);
    }
    *list = remaining;
    Ok(())
}

/// Convert an epoch-milliseconds string into a UTC calendar date.
///
/// Sub-second precision is truncated towards negative infinity before the
/// conversion, so `-1` maps to 1969-12-31.
pub fn date_of_birth_from_millis(raw: &str) -> ConsentResult<NaiveDate> {
    let millis = raw.trim().parse::<i64>().map_err(|e| {
        ConsentError::invalid_argument(
            "date_of_birth",
            format!("expected epoch milliseconds, got '{}': {}", raw, e),
        )
    })?;

    DateTime::<Utc>::from_timestamp(millis.div_euclid(1000), 0)
        .map(|timestamp| timestamp.date_naive())
        .ok_or_else(|| {
            ConsentError::invalid_argument(
                "date_of_birth",
                format!("timestamp {} is out of range", millis),
            )
        })
}
