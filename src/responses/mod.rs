#![allow(missing_docs)]

pub mod listing;
pub mod subreddit;
pub mod user;

use serde::Deserialize;

/// A base structure that can represent both 'Thing' objects and 'Listing' objects, which both
/// return a `kind` and `data`.
#[derive(Deserialize, Debug)]
pub struct BasicThing<T> {
    /// An identifier that specifies the type of object that this is.
    /// The valid kinds are:
    /// - t1_ - Comment
    /// - t2_ - Account
    /// - t3_ - Link
    /// - t4_ - Message
    /// - t5_ - Subreddit
    /// - t6_ - Award
    /// - t8_ - PromoCampaign
    ///
    /// Collections use `Listing`, and some relationship endpoints use `UserList`.
    pub kind: String,
    /// The data contained by this struct. This will vary depending on the type parameter
    /// because each endpoint returns different contents.
    pub data: T,
}

/// The `data` of a `Listing` or `UserList`.
#[derive(Deserialize, Debug)]
pub struct ListingData<T> {
    pub children: Vec<T>,
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub before: Option<String>,
}
