//! Link entity mapping a branded short path to its deep link.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored deep-link mapping.
///
/// A link is addressed by `id` for administration and by the
/// `(subdomain, name)` pair for resolution. `branded_link` is derived from
/// `subdomain` and `name` by the hook chain on every write and is only a
/// presentation convenience, never a lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub name: String,
    pub subdomain: String,
    pub deep_link: String,
    pub branded_link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Returns the writable portion of this record.
    pub fn fields(&self) -> LinkFields {
        LinkFields {
            name: self.name.clone(),
            subdomain: self.subdomain.clone(),
            deep_link: self.deep_link.clone(),
            branded_link: self.branded_link.clone(),
        }
    }
}

/// The field set written to the store on create and update.
///
/// Hooks receive a mutable reference to this struct right before the write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkFields {
    pub name: String,
    pub subdomain: String,
    pub deep_link: String,
    pub branded_link: String,
}

/// Input data for creating a new link.
///
/// There is no `branded_link` here: it cannot be set by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub name: String,
    pub subdomain: String,
    pub deep_link: String,
}

impl From<NewLink> for LinkFields {
    fn from(new_link: NewLink) -> Self {
        Self {
            name: new_link.name,
            subdomain: new_link.subdomain,
            deep_link: new_link.deep_link,
            branded_link: String::new(),
        }
    }
}

/// Partial update for an existing link.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    pub name: Option<String>,
    pub subdomain: Option<String>,
    pub deep_link: Option<String>,
}

impl LinkPatch {
    /// Applies the patch onto `fields` in place.
    pub fn apply(self, fields: &mut LinkFields) {
        if let Some(name) = self.name {
            fields.name = name;
        }
        if let Some(subdomain) = self.subdomain {
            fields.subdomain = subdomain;
        }
        if let Some(deep_link) = self.deep_link {
            fields.deep_link = deep_link;
        }
    }
}
