use std::hash::Hash;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Anything that can be judged against a prize unlock date.
///
/// Two observations of the same contestant must return equal ids.
pub trait Participant {
    type Id: Eq + Hash + Clone;

    fn participant_id(&self) -> &Self::Id;
    fn participation_date(&self) -> OffsetDateTime;
}

#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contestant {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub participation_date: OffsetDateTime,
}

impl Contestant {
    pub fn new(id: impl Into<String>, participation_date: OffsetDateTime) -> Self {
        Contestant {
            id: id.into(),
            name: None,
            participation_date,
        }
    }
}

impl Participant for Contestant {
    type Id = String;

    fn participant_id(&self) -> &String {
        &self.id
    }

    fn participation_date(&self) -> OffsetDateTime {
        self.participation_date
    }
}
