pub mod artist;
pub mod concert;
pub mod review;
pub mod user;

pub use artist::Artist;
pub use concert::Concert;
pub use review::Review;
pub use user::{User, UserRole, UserView};
