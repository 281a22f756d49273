//! Responses from subreddit endpoints.

use serde::Deserialize;

use crate::responses::BasicThing;
use crate::util::deserialize_timestamp;

/// API response for /r/sub/about
pub type SubredditAbout = BasicThing<SubredditAboutData>;

#[derive(Deserialize, Debug)]
pub struct SubredditAboutData {
    pub display_name: String,
    pub subscribers: Option<u64>,
    pub accounts_active: Option<u64>,
    #[serde(default)]
    pub public_traffic: bool,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created: i64,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_utc: i64,
}
