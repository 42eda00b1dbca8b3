use serde::{Deserialize, Serialize};

use crate::table::Record;
use crate::Id;

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Id,
    pub rating: i64,
    pub comment: String,
    pub user_id: Id,
    pub artist_id: Id,
    /// Set when the review is about a specific concert. Deleting that concert
    /// removes the review with it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concert_id: Option<Id>,
}

impl Record for Review {
    const KIND: &'static str = "review";

    fn id(&self) -> Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_without_concert_omits_field() {
        let review = Review {
            id: 1,
            rating: 5,
            comment: "Amazing performance!".into(),
            user_id: 1,
            artist_id: 1,
            concert_id: None,
        };
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["userId"], 1);
        assert!(json.get("concertId").is_none());
    }

    #[test]
    fn test_review_deserializes_without_concert() {
        let json = r#"{"id":2,"rating":3,"comment":"ok","userId":1,"artistId":4}"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.artist_id, 4);
        assert!(review.concert_id.is_none());
    }
}
