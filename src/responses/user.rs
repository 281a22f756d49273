//! Responses from user-related endpoints: relationship lists and the flair list.

use serde::Deserialize;

use crate::responses::{BasicThing, ListingData};
use crate::util::deserialize_optional_timestamp;

/// API response for the relationship endpoints (`/r/sub/about/banned` etc.). Depending on the
/// relationship, Reddit answers with a `Listing`, a `UserList`, or a bare array.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum MemberList {
    Thing(BasicThing<ListingData<RelationshipMember>>),
    Bare(Vec<RelationshipMember>),
}

impl MemberList {
    pub fn into_members(self) -> Vec<RelationshipMember> {
        match self {
            MemberList::Thing(thing) => thing.data.children,
            MemberList::Bare(members) => members,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RelationshipMember {
    pub name: String,
    pub id: Option<String>,
    /// When the user was added to the relationship.
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub date: Option<i64>,
    /// Ban or mute note, only present for those relationships.
    pub note: Option<String>,
    /// Only present for moderators.
    pub mod_permissions: Option<Vec<String>>,
}

/// One entry in `/r/sub/api/flairlist`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FlairListItem {
    pub user: String,
    pub flair_text: Option<String>,
    pub flair_css_class: Option<String>,
}
