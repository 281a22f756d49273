use std::cell::Cell;

use log::debug;
use serde_json::{from_value, Value};

use crate::endpoints::Endpoint;
use crate::errors::APIError;
use crate::structures::listing::ListingGenerator;
use crate::structures::thing::Thing;
use crate::structures::user::UserFlair;
use crate::traits::{Data, Transport};

/// The user and link flair of a subreddit. Get it with `Subreddit.flair()`.
///
/// Iterating over `&SubredditFlair` lists every redditor that has flair in the subreddit. Each
/// iteration starts a fresh, paginated fetch from the start of the list. Every iteration also
/// sends a `unique` parameter that is one higher than the previous iteration's (starting at 0),
/// so that Reddit's cache never serves a stale list.
/// # Examples
/// ```rust,no_run
/// use subrawr::prelude::*;
/// let client = RedditClient::new("subrawr", TokenAuthenticator::new("token"))
///     .expect("Could not create client");
/// let sub = client.subreddit("rust").expect("Invalid name");
/// for flair in sub.flair() {
///     let flair = flair.expect("Could not fetch flair");
///     println!("{}: {:?}", flair.user(), flair.flair_text());
/// }
/// sub.flair().set(&Thing::from("Aurora0001"), "rawr dev", "dev").expect("Could not set flair");
/// ```
pub struct SubredditFlair<'a> {
    client: &'a dyn Transport,
    subreddit: String,
    unique_counter: Cell<u64>,
}

impl<'a> SubredditFlair<'a> {
    /// Internal method. Use `Subreddit.flair()` instead.
    pub fn new(client: &'a dyn Transport, subreddit: &str) -> SubredditFlair<'a> {
        SubredditFlair {
            client,
            subreddit: subreddit.to_owned(),
            unique_counter: Cell::new(0),
        }
    }

    /// The name of the subreddit this flair belongs to.
    pub fn subreddit(&self) -> &str {
        &self.subreddit
    }

    /// Lists the redditors with flair in this subreddit. No request is made until the iterator
    /// is first advanced.
    pub fn iter(&self) -> FlairIter<'_, 'a> {
        FlairIter {
            flair: self,
            listing: None,
        }
    }

    /// Sets the flair of a redditor or a submission. A `Thing::Submission` gets link flair;
    /// anything else is treated as the name of a redditor and gets user flair. Empty `text` and
    /// `css_class` clear the flair.
    ///
    /// This can only be used by a moderator of the subreddit.
    pub fn set(&self, thing: &Thing, text: &str, css_class: &str) -> Result<(), APIError> {
        let mut data = Data::new();
        data.insert("css_class".to_owned(), Value::from(css_class));
        data.insert("text".to_owned(), Value::from(text));
        match *thing {
            Thing::Submission(_) => {
                data.insert("link".to_owned(), Value::from(thing.fullname()?));
            }
            _ => {
                data.insert("name".to_owned(), Value::from(thing.identifier()));
            }
        }
        self.client.post(&Endpoint::Flair.path(&self.subreddit), &data)?;
        Ok(())
    }

    fn start_listing(&self) -> ListingGenerator<'a> {
        let unique = self.unique_counter.get();
        self.unique_counter.set(unique + 1);
        debug!("listing flair of /r/{} (unique={})", self.subreddit, unique);

        let mut params = Data::new();
        params.insert("unique".to_owned(), Value::from(unique));
        ListingGenerator::new(self.client, &Endpoint::FlairList.path(&self.subreddit), params)
    }
}

impl<'s, 'a> IntoIterator for &'s SubredditFlair<'a> {
    type Item = Result<UserFlair, APIError>;
    type IntoIter = FlairIter<'s, 'a>;

    fn into_iter(self) -> FlairIter<'s, 'a> {
        self.iter()
    }
}

/// Iterator over the flair of a subreddit. See `SubredditFlair`.
pub struct FlairIter<'s, 'a> {
    flair: &'s SubredditFlair<'a>,
    listing: Option<ListingGenerator<'a>>,
}

impl<'s, 'a> Iterator for FlairIter<'s, 'a> {
    type Item = Result<UserFlair, APIError>;

    fn next(&mut self) -> Option<Result<UserFlair, APIError>> {
        let flair = self.flair;
        let listing = self.listing.get_or_insert_with(|| flair.start_listing());
        let item = listing.next()?;
        Some(item.and_then(|value| Ok(UserFlair::new(from_value(value)?))))
    }
}
