use serde::{Deserialize, Serialize};

use crate::table::Record;
use crate::Id;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concert {
    pub id: Id,
    pub title: String,
    /// Free-form; not parsed as a calendar date.
    pub date: String,
    pub artist_id: Id,
    pub ticket_url: String,
}

impl Record for Concert {
    const KIND: &'static str = "concert";

    fn id(&self) -> Id {
        self.id
    }
}

/// Ticket link for a concert: `{base}/{id}`.
pub fn ticket_url(base: &str, id: Id) -> String {
    format!("{}/{id}", base.trim_end_matches('/'))
}
