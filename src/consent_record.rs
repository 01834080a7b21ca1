use chrono::{DateTime, Utc};

use crate::errors::{ConsentError, ConsentResult};

/// One entry of the consent catalogue users can grant or revoke
#[derive(Clone, Debug, PartialEq)]
pub struct ConsentRecord {
    pub id: i32,
    pub name: String,
    pub purpose: String,
    pub commercial: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewConsent {
    pub name: String,
    pub purpose: String,
    pub commercial: bool,
}

impl NewConsent {
    /// Trim both text fields and reject an entry without a name
    pub fn normalized(self) -> ConsentResult<Self> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ConsentError::invalid_argument(
                "name",
                "consent name cannot be empty",
            ));
        }

        Ok(Self {
            name,
            purpose: self.purpose.trim().to_string(),
            commercial: self.commercial,
        })
    }
}
