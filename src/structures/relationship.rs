use std::cell::Cell;
use std::fmt::{self, Display, Formatter};
use std::vec::IntoIter;

use log::debug;
use serde_json::{from_value, Value};

use crate::endpoints::Endpoint;
use crate::errors::APIError;
use crate::responses::user::{MemberList, RelationshipMember};
use crate::structures::user::Redditor;
use crate::traits::{Data, Transport};

/// The kinds of relationship between a redditor and a subreddit.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    Banned,
    Contributor,
    Moderator,
    Muted,
    WikiBanned,
    WikiContributor,
}

impl RelationshipKind {
    /// Every relationship, in the order a `Subreddit` creates them.
    pub const ALL: [RelationshipKind; 6] = [RelationshipKind::Banned,
                                            RelationshipKind::Contributor,
                                            RelationshipKind::Moderator,
                                            RelationshipKind::Muted,
                                            RelationshipKind::WikiBanned,
                                            RelationshipKind::WikiContributor];

    /// The value sent as `type` to the friend/unfriend endpoints.
    pub fn as_str(&self) -> &'static str {
        match *self {
            RelationshipKind::Banned => "banned",
            RelationshipKind::Contributor => "contributor",
            RelationshipKind::Moderator => "moderator",
            RelationshipKind::Muted => "muted",
            RelationshipKind::WikiBanned => "wikibanned",
            RelationshipKind::WikiContributor => "wikicontributor",
        }
    }

    /// The endpoint that lists the members of this relationship.
    pub fn endpoint(&self) -> Endpoint {
        match *self {
            RelationshipKind::Banned => Endpoint::Banned,
            RelationshipKind::Contributor => Endpoint::Contributor,
            RelationshipKind::Moderator => Endpoint::Moderator,
            RelationshipKind::Muted => Endpoint::Muted,
            RelationshipKind::WikiBanned => Endpoint::WikiBanned,
            RelationshipKind::WikiContributor => Endpoint::WikiContributor,
        }
    }
}

impl Display for RelationshipKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A relationship between redditors and a subreddit, such as its moderators or banned users.
/// Get one with `Subreddit.moderator()`, `Subreddit.banned()` etc.
///
/// Iterating over `&SubredditRelationship` lists the members. The list is requested when the
/// iterator is first advanced, with a `unique` parameter that goes up by one for every
/// iteration of this relationship, so that Reddit's cache never serves a stale list.
/// # Examples
/// ```rust,no_run
/// use subrawr::prelude::*;
/// let client = RedditClient::new("subrawr", TokenAuthenticator::new("token"))
///     .expect("Could not create client");
/// let sub = client.subreddit("rust").expect("Invalid name");
/// for moderator in sub.moderator() {
///     println!("{}", moderator.expect("Could not list moderators"));
/// }
/// sub.banned().add("spammer").expect("Could not ban");
/// ```
pub struct SubredditRelationship<'a> {
    client: &'a dyn Transport,
    subreddit: String,
    relationship: RelationshipKind,
    unique_counter: Cell<u64>,
}

impl<'a> SubredditRelationship<'a> {
    /// Internal method. Use the relationship accessors on `Subreddit` instead.
    pub fn new(client: &'a dyn Transport,
               subreddit: &str,
               relationship: RelationshipKind)
               -> SubredditRelationship<'a> {
        SubredditRelationship {
            client,
            subreddit: subreddit.to_owned(),
            relationship,
            unique_counter: Cell::new(0),
        }
    }

    /// The name of the subreddit of this relationship.
    pub fn subreddit(&self) -> &str {
        &self.subreddit
    }

    /// The kind of this relationship.
    pub fn kind(&self) -> RelationshipKind {
        self.relationship
    }

    /// Lists the members of this relationship. No request is made until the iterator is first
    /// advanced.
    pub fn iter(&self) -> RelationshipIter<'_, 'a> {
        RelationshipIter {
            relationship: self,
            members: None,
        }
    }

    /// Adds `redditor` (a name or a `Redditor`) to this relationship, e.g. bans them or makes
    /// them a contributor. Returns the JSON response.
    pub fn add<R: Display>(&self, redditor: R) -> Result<Value, APIError> {
        self.client.post(Endpoint::Friend.fixed(), &self.payload(redditor))
    }

    /// Removes `redditor` (a name or a `Redditor`) from this relationship. Returns the JSON
    /// response.
    pub fn remove<R: Display>(&self, redditor: R) -> Result<Value, APIError> {
        self.client.post(Endpoint::Unfriend.fixed(), &self.payload(redditor))
    }

    fn payload<R: Display>(&self, redditor: R) -> Data {
        let mut data = Data::new();
        data.insert("name".to_owned(), Value::from(redditor.to_string()));
        data.insert("r".to_owned(), Value::from(self.subreddit.as_str()));
        data.insert("type".to_owned(), Value::from(self.relationship.as_str()));
        data
    }

    fn fetch_members(&self) -> Result<Vec<RelationshipMember>, APIError> {
        let unique = self.unique_counter.get();
        self.unique_counter.set(unique + 1);
        debug!("listing {} of /r/{} (unique={})", self.relationship, self.subreddit, unique);

        let mut params = Data::new();
        params.insert("unique".to_owned(), Value::from(unique));
        let path = self.relationship.endpoint().path(&self.subreddit);
        let list: MemberList = from_value(self.client.get(&path, &params)?)?;
        Ok(list.into_members())
    }
}

impl<'s, 'a> IntoIterator for &'s SubredditRelationship<'a> {
    type Item = Result<Redditor, APIError>;
    type IntoIter = RelationshipIter<'s, 'a>;

    fn into_iter(self) -> RelationshipIter<'s, 'a> {
        self.iter()
    }
}

/// Iterator over the members of a relationship. See `SubredditRelationship`.
pub struct RelationshipIter<'s, 'a> {
    relationship: &'s SubredditRelationship<'a>,
    members: Option<IntoIter<RelationshipMember>>,
}

impl<'s, 'a> Iterator for RelationshipIter<'s, 'a> {
    type Item = Result<Redditor, APIError>;

    fn next(&mut self) -> Option<Result<Redditor, APIError>> {
        if self.members.is_none() {
            match self.relationship.fetch_members() {
                Ok(members) => self.members = Some(members.into_iter()),
                Err(err) => {
                    self.members = Some(Vec::new().into_iter());
                    return Some(Err(err));
                }
            }
        }
        self.members.as_mut()?.next().map(|member| Ok(Redditor::new(member)))
    }
}
