use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::responses::user::{FlairListItem, RelationshipMember};

/// A redditor that is a member of one of a subreddit's relationships (e.g. a moderator or a
/// banned user), as returned when iterating a `SubredditRelationship`.
#[derive(Debug, Clone, PartialEq)]
pub struct Redditor {
    data: RelationshipMember,
}

impl Redditor {
    /// Internal method. Iterate a `SubredditRelationship` instead.
    pub fn new(data: RelationshipMember) -> Redditor {
        Redditor { data }
    }

    /// The username.
    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// The full ID of the account (e.g. `t2_eqyvc`), if Reddit sent it.
    pub fn id(&self) -> Option<&str> {
        self.data.id.as_deref()
    }

    /// UTC timestamp of when the user was added to the relationship.
    pub fn date(&self) -> Option<i64> {
        self.data.date
    }

    /// The moderator note attached to a ban or mute.
    pub fn note(&self) -> Option<&str> {
        self.data.note.as_deref()
    }

    /// The permissions of a moderator, e.g. `["all"]` or `["flair", "posts"]`.
    pub fn mod_permissions(&self) -> Option<&[String]> {
        self.data.mod_permissions.as_deref()
    }
}

impl Display for Redditor {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.data.name)
    }
}

/// The flair of one redditor in a subreddit, as returned when iterating `SubredditFlair`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFlair {
    data: FlairListItem,
}

impl UserFlair {
    /// Internal method. Iterate `SubredditFlair` instead.
    pub fn new(data: FlairListItem) -> UserFlair {
        UserFlair { data }
    }

    /// The name of the redditor.
    pub fn user(&self) -> &str {
        &self.data.user
    }

    /// The flair text, if present.
    pub fn flair_text(&self) -> Option<&str> {
        self.data.flair_text.as_deref()
    }

    /// The CSS class of the flair, if present.
    pub fn flair_css_class(&self) -> Option<&str> {
        self.data.flair_css_class.as_deref()
    }
}
