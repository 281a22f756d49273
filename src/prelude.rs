pub use crate::client::RedditClient;
pub use crate::auth::{AnonymousAuthenticator, TokenAuthenticator};
pub use crate::options::{ClientOptions, DistinguishHow, ListingOptions, NewSubmission, TimeFilter};
pub use crate::errors::APIError;
pub use crate::structures::relationship::RelationshipKind;
pub use crate::structures::subreddit::Subreddit;
pub use crate::structures::thing::Thing;
pub use crate::traits::*;
