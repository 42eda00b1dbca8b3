use serde::{Deserialize, Serialize};

use crate::table::Record;
use crate::Id;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: Id,
    pub name: String,
}

impl Record for Artist {
    const KIND: &'static str = "artist";

    fn id(&self) -> Id {
        self.id
    }
}
