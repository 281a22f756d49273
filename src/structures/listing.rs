use std::collections::VecDeque;

use log::debug;
use serde_json::{from_value, Value};

use crate::errors::APIError;
use crate::responses::listing::ListingPage;
use crate::traits::{Data, Transport};

/// The largest page Reddit will return.
const BATCH_SIZE: usize = 100;

/// A paginated listing that can be iterated through. Items are fetched lazily, one page at a
/// time, until the listing is exhausted (similar to an infinite scroll of posts). Nothing is
/// requested until the first call to `next()`.
///
/// Each item is a `Result`: if a page cannot be fetched, the error is yielded once and the
/// iteration ends.
/// # Examples
/// ```rust,no_run
/// use serde_json::Map;
/// use subrawr::prelude::*;
/// use subrawr::structures::listing::ListingGenerator;
/// let client = RedditClient::new("subrawr", TokenAuthenticator::new("token"))
///     .expect("Could not create client");
/// let listing = ListingGenerator::new(&client, "r/rust/about/edited/", Map::new())
///     .limit(Some(50));
/// for item in listing {
///     let item = item.expect("Request failed");
/// }
/// ```
/// # Gotchas
/// Be careful when looping directly over a very long listing without a `limit` - your code
/// may run for a long time. Prefer `.limit(Some(n))` or `Iterator::take(n)`.
pub struct ListingGenerator<'a> {
    client: &'a dyn Transport,
    path: String,
    params: Data,
    limit: Option<usize>,
    yielded: usize,
    batch: VecDeque<Value>,
    after: Option<String>,
    exhausted: bool,
}

impl<'a> ListingGenerator<'a> {
    /// Creates a listing of the endpoint at `path`. `params` are sent with every page request.
    pub fn new(client: &'a dyn Transport, path: &str, params: Data) -> ListingGenerator<'a> {
        ListingGenerator {
            client,
            path: path.to_owned(),
            params,
            limit: None,
            yielded: 0,
            batch: VecDeque::new(),
            after: None,
            exhausted: false,
        }
    }

    /// Sets the maximum number of items to yield. `None` yields every item.
    pub fn limit(mut self, limit: Option<usize>) -> ListingGenerator<'a> {
        self.limit = limit;
        self
    }

    /// Starts the listing after the item with this fullname instead of at the top.
    pub fn after(mut self, after: Option<String>) -> ListingGenerator<'a> {
        self.after = after;
        self
    }

    fn fetch_batch(&mut self) -> Result<(), APIError> {
        let mut params = self.params.clone();
        let page_size = match self.limit {
            Some(limit) => (limit - self.yielded).min(BATCH_SIZE),
            None => BATCH_SIZE,
        };
        params.insert("limit".to_owned(), Value::from(page_size));
        if let Some(ref after) = self.after {
            params.insert("after".to_owned(), Value::from(after.as_str()));
        }
        debug!("fetching {} (after {:?})", self.path, self.after);

        let page: ListingPage = from_value(self.client.get(&self.path, &params)?)?;
        let (items, after) = page.into_parts();
        if items.is_empty() || after.is_none() {
            self.exhausted = true;
        }
        self.batch.extend(items);
        self.after = after;
        Ok(())
    }
}

impl<'a> Iterator for ListingGenerator<'a> {
    type Item = Result<Value, APIError>;

    fn next(&mut self) -> Option<Result<Value, APIError>> {
        if self.limit.is_some_and(|limit| self.yielded >= limit) {
            return None;
        }
        if self.batch.is_empty() {
            if self.exhausted {
                return None;
            }
            if let Err(err) = self.fetch_batch() {
                self.exhausted = true;
                return Some(Err(err));
            }
        }
        let item = self.batch.pop_front()?;
        self.yielded += 1;
        Some(Ok(item))
    }
}
