use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prize {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Participations before this instant never qualify for the prize.
    #[serde(with = "time::serde::rfc3339")]
    pub unlocked_date: OffsetDateTime,
}

impl Prize {
    pub fn new(id: impl Into<String>, unlocked_date: OffsetDateTime) -> Self {
        Prize {
            id: id.into(),
            name: None,
            unlocked_date,
        }
    }
}
