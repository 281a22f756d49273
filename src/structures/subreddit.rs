use std::fmt::{Display, Formatter, Result as FmtResult};

use log::debug;
use serde_json::{from_value, Value};

use crate::endpoints::Endpoint;
use crate::errors::APIError;
use crate::options::{ListingOptions, NewSubmission, TimeFilter};
use crate::responses::subreddit;
use crate::structures::flair::SubredditFlair;
use crate::structures::listing::ListingGenerator;
use crate::structures::moderation::SubredditModeration;
use crate::structures::relationship::{RelationshipKind, SubredditRelationship};
use crate::traits::{Created, Data, Transport};

/// The `Subreddit` struct represents a subreddit and gives access to its post listings, its
/// flair, its relationships (moderators, banned users...), moderation actions and submission.
///
/// Two subreddits are equal if their display names are exactly equal.
pub struct Subreddit<'a> {
    client: &'a dyn Transport,
    display_name: String,
    path: String,
    data: Option<Data>,
    banned: SubredditRelationship<'a>,
    contributor: SubredditRelationship<'a>,
    moderator: SubredditRelationship<'a>,
    muted: SubredditRelationship<'a>,
    wikibanned: SubredditRelationship<'a>,
    wikicontributor: SubredditRelationship<'a>,
    flair: SubredditFlair<'a>,
    moderation: SubredditModeration<'a>,
}

impl<'a> PartialEq for Subreddit<'a> {
    fn eq(&self, other: &Subreddit) -> bool {
        self.display_name == other.display_name
    }
}

impl<'a> Display for Subreddit<'a> {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.display_name)
    }
}

impl<'a> Subreddit<'a> {
    /// Creates a `Subreddit` from either its display name (e.g. `rust`, without the leading
    /// `/r/`) or a bundle of attributes previously fetched from the API, which must contain
    /// `display_name`. Exactly one of the two must be given: passing both or neither gives
    /// `APIError::InvalidArguments`. An empty name or an empty bundle counts as not given.
    ///
    /// Usually `RedditClient.subreddit(NAME)` is more convenient.
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use subrawr::prelude::*;
    /// let client = RedditClient::new("subrawr", AnonymousAuthenticator::new())
    ///     .expect("Could not create client");
    /// let named = Subreddit::new(&client, Some("rust"), None).unwrap();
    /// let data = json!({"display_name": "rust", "subscribers": 1}).as_object().cloned();
    /// let fetched = Subreddit::new(&client, None, data).unwrap();
    /// assert!(named == fetched);
    /// assert!(Subreddit::new(&client, None, None).is_err());
    /// ```
    pub fn new(client: &'a dyn Transport,
               display_name: Option<&str>,
               data: Option<Data>)
               -> Result<Subreddit<'a>, APIError> {
        let display_name = display_name.filter(|name| !name.is_empty());
        let data = data.filter(|data| !data.is_empty());
        let display_name = match (display_name, &data) {
            (Some(name), None) => name.to_owned(),
            (None, Some(data)) => {
                data.get("display_name")
                    .and_then(Value::as_str)
                    .ok_or(APIError::MissingField("display_name"))?
                    .to_owned()
            }
            _ => {
                return Err(APIError::InvalidArguments("Either `display_name` or `data` must be \
                                                       provided."))
            }
        };

        let path = Endpoint::Subreddit.path(&display_name);
        let relationship = |kind| SubredditRelationship::new(client, &display_name, kind);
        let banned = relationship(RelationshipKind::Banned);
        let contributor = relationship(RelationshipKind::Contributor);
        let moderator = relationship(RelationshipKind::Moderator);
        let muted = relationship(RelationshipKind::Muted);
        let wikibanned = relationship(RelationshipKind::WikiBanned);
        let wikicontributor = relationship(RelationshipKind::WikiContributor);
        Ok(Subreddit {
            client,
            path,
            data,
            banned,
            contributor,
            moderator,
            muted,
            wikibanned,
            wikicontributor,
            flair: SubredditFlair::new(client, &display_name),
            moderation: SubredditModeration::new(client, &display_name),
            display_name,
        })
    }

    /// The display name of the subreddit, not including leading /r/
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The API path of this subreddit, e.g. `r/rust/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The attributes this subreddit was created from, if it was created from fetched data.
    pub fn data(&self) -> Option<&Data> {
        self.data.as_ref()
    }

    /// The flair of this subreddit. See `SubredditFlair`.
    pub fn flair(&self) -> &SubredditFlair<'a> {
        &self.flair
    }

    /// Moderation actions for this subreddit. See `SubredditModeration`.
    pub fn moderation(&self) -> &SubredditModeration<'a> {
        &self.moderation
    }

    /// The specified relationship of this subreddit. See `SubredditRelationship`.
    pub fn relationship(&self, kind: RelationshipKind) -> &SubredditRelationship<'a> {
        match kind {
            RelationshipKind::Banned => &self.banned,
            RelationshipKind::Contributor => &self.contributor,
            RelationshipKind::Moderator => &self.moderator,
            RelationshipKind::Muted => &self.muted,
            RelationshipKind::WikiBanned => &self.wikibanned,
            RelationshipKind::WikiContributor => &self.wikicontributor,
        }
    }

    /// The users banned from this subreddit.
    pub fn banned(&self) -> &SubredditRelationship<'a> {
        &self.banned
    }

    /// The approved submitters of this subreddit.
    pub fn contributor(&self) -> &SubredditRelationship<'a> {
        &self.contributor
    }

    /// The moderators of this subreddit.
    pub fn moderator(&self) -> &SubredditRelationship<'a> {
        &self.moderator
    }

    /// The users muted in this subreddit's modmail.
    pub fn muted(&self) -> &SubredditRelationship<'a> {
        &self.muted
    }

    /// The users banned from this subreddit's wiki.
    pub fn wikibanned(&self) -> &SubredditRelationship<'a> {
        &self.wikibanned
    }

    /// The approved wiki editors of this subreddit.
    pub fn wikicontributor(&self) -> &SubredditRelationship<'a> {
        &self.wikicontributor
    }

    fn feed(&self,
            endpoint: Endpoint,
            params: Data,
            opts: ListingOptions)
            -> ListingGenerator<'a> {
        ListingGenerator::new(self.client, &endpoint.path(&self.display_name), params)
            .limit(opts.limit)
            .after(opts.after)
    }

    fn timed_feed(&self,
                  endpoint: Endpoint,
                  opts: ListingOptions,
                  time: TimeFilter)
                  -> ListingGenerator<'a> {
        let mut params = Data::new();
        params.insert("t".to_owned(), Value::from(time.as_str()));
        self.feed(endpoint, params, opts)
    }

    /// Gets a listing of the hot feed for this subreddit. The first page may include some sticky
    /// posts in addition to the expected posts. Each item is the JSON data of a submission.
    /// Nothing is requested until the listing is iterated.
    /// # Examples
    /// ```rust,no_run
    /// use subrawr::prelude::*;
    /// let client = RedditClient::new("subrawr", AnonymousAuthenticator::new())
    ///     .expect("Could not create client");
    /// let sub = client.subreddit("askreddit").expect("Invalid name");
    /// for post in sub.hot(ListingOptions::default().limit(10)) {
    ///     println!("{}", post.expect("Request failed")["title"]);
    /// }
    /// ```
    pub fn hot(&self, opts: ListingOptions) -> ListingGenerator<'a> {
        self.feed(Endpoint::Hot, Data::new(), opts)
    }

    /// Gets a listing of the new feed for this subreddit, newest first.
    pub fn new_posts(&self, opts: ListingOptions) -> ListingGenerator<'a> {
        self.feed(Endpoint::New, Data::new(), opts)
    }

    /// Gets a listing of the rising feed for this subreddit. Usually much shorter than the other
    /// listings; may be empty.
    pub fn rising(&self, opts: ListingOptions) -> ListingGenerator<'a> {
        self.feed(Endpoint::Rising, Data::new(), opts)
    }

    /// Gets a listing of the top feed for this subreddit over the period `time`.
    /// # Examples
    /// ```rust,no_run
    /// use subrawr::prelude::*;
    /// let client = RedditClient::new("subrawr", AnonymousAuthenticator::new())
    ///     .expect("Could not create client");
    /// let sub = client.subreddit("rust").expect("Invalid name");
    /// let best = sub.top(ListingOptions::default().limit(5), TimeFilter::Week);
    /// assert!(best.count() <= 5);
    /// ```
    pub fn top(&self, opts: ListingOptions, time: TimeFilter) -> ListingGenerator<'a> {
        self.timed_feed(Endpoint::Top, opts, time)
    }

    /// Gets a listing of the controversial feed for this subreddit over the period `time`.
    pub fn controversial(&self, opts: ListingOptions, time: TimeFilter) -> ListingGenerator<'a> {
        self.timed_feed(Endpoint::Controversial, opts, time)
    }

    /// Submits a post to this subreddit. The post must have exactly one of `selftext` (a self
    /// post) or `url` (a link post); otherwise `APIError::InvalidArguments` is returned and
    /// nothing is sent. Returns the JSON response describing the new submission.
    ///
    /// The request is sent once. If it fails, the post may still have been created, so check
    /// before submitting again.
    /// # Examples
    /// ## Submitting a self post
    /// ```rust,no_run
    /// use subrawr::prelude::*;
    /// let client = RedditClient::new("subrawr", TokenAuthenticator::new("token"))
    ///     .expect("Could not create client");
    /// let sub = client.subreddit("rust").expect("Invalid name");
    /// let post = NewSubmission::new("I love rawr!").selftext("You should download it *now*!");
    /// sub.submit(post).expect("Posting failed!");
    /// ```
    /// ## Submitting a link that may not be a repost
    /// ```rust,no_run
    /// use subrawr::prelude::*;
    /// let client = RedditClient::new("subrawr", TokenAuthenticator::new("token"))
    ///     .expect("Could not create client");
    /// let sub = client.subreddit("rust").expect("Invalid name");
    /// let post = NewSubmission::new("rawr!").url("http://example.com").resubmit(false);
    /// sub.submit(post).expect("Posting failed!");
    /// ```
    pub fn submit(&self, post: NewSubmission) -> Result<Value, APIError> {
        let selftext = post.selftext.filter(|text| !text.is_empty());
        let url = post.url.filter(|url| !url.is_empty());
        let (kind, field, value) = match (selftext, url) {
            (Some(text), None) => ("self", "text", text),
            (None, Some(url)) => ("link", "url", url),
            _ => {
                return Err(APIError::InvalidArguments("Either `selftext` or `url` must be \
                                                       provided."))
            }
        };

        let mut data = Data::new();
        data.insert("sr".to_owned(), Value::from(self.display_name.as_str()));
        data.insert("resubmit".to_owned(), Value::from(post.resubmit));
        data.insert("sendreplies".to_owned(), Value::from(post.send_replies));
        data.insert("title".to_owned(), Value::from(post.title));
        data.insert("kind".to_owned(), Value::from(kind));
        data.insert(field.to_owned(), Value::from(value));
        debug!("submitting a {} post to /r/{}", kind, self.display_name);
        self.client.post(Endpoint::Submit.fixed(), &data)
    }

    /// Fetches information about a subreddit such as subscribers and active users.
    /// # Examples
    /// ```rust,no_run
    /// use subrawr::prelude::*;
    /// let client = RedditClient::new("subrawr", AnonymousAuthenticator::new())
    ///     .expect("Could not create client");
    /// let learn_programming = client.subreddit("learnprogramming").unwrap().about()
    ///     .expect("Could not fetch 'about' data");
    /// assert_eq!(learn_programming.display_name(), "learnprogramming");
    /// ```
    pub fn about(&self) -> Result<SubredditAbout, APIError> {
        let url = Endpoint::SubredditAbout.path(&self.display_name);
        let res: subreddit::SubredditAbout = from_value(self.client.get(&url, &Data::new())?)?;
        Ok(SubredditAbout::new(res.data))
    }
}

/// Information about a subreddit such as subscribers and active users.
pub struct SubredditAbout {
    data: subreddit::SubredditAboutData,
}

impl Created for SubredditAbout {
    fn created(&self) -> i64 {
        self.data.created
    }

    fn created_utc(&self) -> i64 {
        self.data.created_utc
    }
}

impl SubredditAbout {
    /// Creates a new `SubredditAbout` instance. Use `Subreddit.about()` instead to get
    /// information about a subreddit.
    pub fn new(data: subreddit::SubredditAboutData) -> SubredditAbout {
        SubredditAbout { data }
    }

    /// The number of subscribers to this subreddit, if visible.
    pub fn subscribers(&self) -> Option<u64> {
        self.data.subscribers
    }

    /// The number of logged-in users who have viewed this subreddit in the last 15
    /// minutes, if visible.
    pub fn active_users(&self) -> Option<u64> {
        self.data.accounts_active
    }

    /// Returns `true` if the subreddit's traffic stats are public.
    pub fn public(&self) -> bool {
        self.data.public_traffic
    }

    /// The display name of the subreddit, not including leading /r/
    pub fn display_name(&self) -> &str {
        &self.data.display_name
    }
}

#[cfg(test)]
mod tests {
    use super::Subreddit;
    use crate::errors::APIError;
    use crate::options::{ListingOptions, NewSubmission, TimeFilter};
    use crate::structures::relationship::RelationshipKind;
    use crate::test_utils::{data, do_logging, Method, RecordingTransport};
    use crate::traits::{Created, Data};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn page(ids: &[&str], after: Option<&str>) -> Value {
        let children: Vec<Value> = ids
            .iter()
            .map(|id| json!({"kind": "t3", "data": {"id": id, "subreddit": "rust"}}))
            .collect();
        json!({"kind": "Listing", "data": {"children": children, "after": after}})
    }

    #[test]
    fn its_path_is_the_formatted_template() {
        let transport = RecordingTransport::new();
        for name in ["rust", "AskReddit", "redditdev", "a_b"] {
            let sub = Subreddit::new(&transport, Some(name), None).unwrap();
            assert_eq!(sub.path(), format!("r/{}/", name));
            assert_eq!(sub.display_name(), name);
            assert_eq!(sub.to_string(), name);
        }
    }

    #[test]
    fn it_can_be_built_from_fetched_data() {
        let transport = RecordingTransport::new();
        let bundle = data(json!({"display_name": "rust", "subscribers": 300000}));
        let sub = Subreddit::new(&transport, None, Some(bundle.clone())).unwrap();
        assert_eq!(sub.path(), "r/rust/");
        assert_eq!(sub.data(), Some(&bundle));
    }

    #[test]
    fn it_needs_exactly_one_of_name_and_data() {
        let transport = RecordingTransport::new();
        let bundle = data(json!({"display_name": "rust"}));
        let both = Subreddit::new(&transport, Some("rust"), Some(bundle));
        assert!(matches!(both, Err(APIError::InvalidArguments(_))));
        let neither = Subreddit::new(&transport, None, None);
        assert!(matches!(neither, Err(APIError::InvalidArguments(_))));
        let empty = Subreddit::new(&transport, Some(""), Some(Data::new()));
        assert!(matches!(empty, Err(APIError::InvalidArguments(_))));
    }

    #[test]
    fn data_without_a_display_name_is_rejected() {
        let transport = RecordingTransport::new();
        let bundle = data(json!({"subscribers": 1}));
        let sub = Subreddit::new(&transport, None, Some(bundle));
        assert!(matches!(sub, Err(APIError::MissingField("display_name"))));
    }

    #[test]
    fn equality_is_exact_on_the_display_name() {
        let transport = RecordingTransport::new();
        let a = Subreddit::new(&transport, Some("rust"), None).unwrap();
        let b = Subreddit::new(&transport, Some("rust"), None).unwrap();
        let c = Subreddit::new(&transport, Some("Rust"), None).unwrap();
        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn it_creates_every_relationship() {
        let transport = RecordingTransport::new();
        let sub = Subreddit::new(&transport, Some("rust"), None).unwrap();
        for kind in RelationshipKind::ALL {
            assert_eq!(sub.relationship(kind).kind(), kind);
            assert_eq!(sub.relationship(kind).subreddit(), "rust");
        }
        assert_eq!(sub.banned().kind(), RelationshipKind::Banned);
        assert_eq!(sub.contributor().kind(), RelationshipKind::Contributor);
        assert_eq!(sub.moderator().kind(), RelationshipKind::Moderator);
        assert_eq!(sub.muted().kind(), RelationshipKind::Muted);
        assert_eq!(sub.wikibanned().kind(), RelationshipKind::WikiBanned);
        assert_eq!(sub.wikicontributor().kind(), RelationshipKind::WikiContributor);
        assert!(std::ptr::eq(sub.relationship(RelationshipKind::Muted), sub.muted()));
        assert!(std::ptr::eq(sub.relationship(RelationshipKind::Banned), sub.banned()));
        assert_eq!(sub.flair().subreddit(), "rust");
        assert_eq!(sub.moderation().subreddit(), "rust");
    }

    #[test]
    fn construction_makes_no_requests() {
        let transport = RecordingTransport::new();
        let _sub = Subreddit::new(&transport, Some("rust"), None).unwrap();
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn submit_sends_a_self_post() {
        do_logging();
        let transport = RecordingTransport::new().with_post(json!({"json": {"errors": []}}));
        let sub = Subreddit::new(&transport, Some("rust"), None).unwrap();
        let response = sub.submit(NewSubmission::new("title").selftext("body")).unwrap();
        assert_eq!(response, json!({"json": {"errors": []}}));

        let request = transport.last();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "api/submit/");
        assert_eq!(
            request.data,
            data(json!({
                "sr": "rust",
                "resubmit": true,
                "sendreplies": true,
                "title": "title",
                "kind": "self",
                "text": "body"
            }))
        );
    }

    #[test]
    fn submit_sends_a_link_post() {
        let transport = RecordingTransport::new();
        let sub = Subreddit::new(&transport, Some("rust"), None).unwrap();
        let post = NewSubmission::new("rawr")
            .url("https://example.com")
            .resubmit(false)
            .send_replies(false);
        sub.submit(post).unwrap();
        assert_eq!(
            transport.last().data,
            data(json!({
                "sr": "rust",
                "resubmit": false,
                "sendreplies": false,
                "title": "rawr",
                "kind": "link",
                "url": "https://example.com"
            }))
        );
    }

    #[test]
    fn submit_needs_exactly_one_of_selftext_and_url() {
        let transport = RecordingTransport::new();
        let sub = Subreddit::new(&transport, Some("rust"), None).unwrap();
        let both = NewSubmission::new("t").selftext("body").url("https://example.com");
        assert!(matches!(sub.submit(both), Err(APIError::InvalidArguments(_))));
        assert!(matches!(sub.submit(NewSubmission::new("t")), Err(APIError::InvalidArguments(_))));
        let empty = NewSubmission::new("t").selftext("");
        assert!(matches!(sub.submit(empty), Err(APIError::InvalidArguments(_))));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn about_decodes_subreddit_data() {
        let transport = RecordingTransport::new().with_get(json!({
            "kind": "t5",
            "data": {
                "display_name": "learnprogramming",
                "subscribers": 1200000,
                "accounts_active": 3000,
                "public_traffic": false,
                "created": 1238479200.0,
                "created_utc": 1238450400.0
            }
        }));
        let sub = Subreddit::new(&transport, Some("learnprogramming"), None).unwrap();
        let about = sub.about().unwrap();
        assert_eq!(about.display_name(), "learnprogramming");
        assert_eq!(about.subscribers(), Some(1200000));
        assert_eq!(about.active_users(), Some(3000));
        assert!(!about.public());
        assert_eq!(about.created_utc(), 1238450400);
        assert_eq!(transport.last().path, "r/learnprogramming/about/");
    }

    #[test]
    fn feeds_list_posts_of_this_subreddit() {
        let transport = RecordingTransport::new();
        let sub = Subreddit::new(&transport, Some("rust"), None).unwrap();
        sub.hot(ListingOptions::default()).next();
        sub.new_posts(ListingOptions::default()).next();
        sub.rising(ListingOptions::default()).next();
        let paths: Vec<_> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["r/rust/hot/", "r/rust/new/", "r/rust/rising/"]);
        assert_eq!(transport.last().method, Method::Get);
        assert_eq!(transport.last().data, data(json!({"limit": 100})));
    }

    #[test]
    fn feeds_are_lazy() {
        let transport = RecordingTransport::new();
        let sub = Subreddit::new(&transport, Some("rust"), None).unwrap();
        let _hot = sub.hot(ListingOptions::default());
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn feeds_follow_the_cursor_up_to_the_limit() {
        let transport = RecordingTransport::new()
            .with_get(page(&["a", "b"], Some("t3_b")))
            .with_get(page(&["c", "d"], Some("t3_d")));
        let sub = Subreddit::new(&transport, Some("rust"), None).unwrap();
        let ids: Vec<Value> = sub
            .new_posts(ListingOptions::default().limit(3))
            .map(|post| post.unwrap()["id"].clone())
            .collect();
        assert_eq!(ids, vec![json!("a"), json!("b"), json!("c")]);

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].data, data(json!({"limit": 3})));
        assert_eq!(requests[1].data, data(json!({"limit": 1, "after": "t3_b"})));
    }

    #[test]
    fn top_and_controversial_send_the_time_filter() {
        let transport = RecordingTransport::new();
        let sub = Subreddit::new(&transport, Some("rust"), None).unwrap();
        sub.top(ListingOptions::default().after("t3_x"), TimeFilter::Week).next();
        assert_eq!(transport.last().path, "r/rust/top/");
        assert_eq!(
            transport.last().data,
            data(json!({"t": "week", "limit": 100, "after": "t3_x"}))
        );
        sub.controversial(ListingOptions::default(), TimeFilter::AllTime).next();
        assert_eq!(transport.last().path, "r/rust/controversial/");
        assert_eq!(transport.last().data["t"], json!("all"));
    }
}
