use std::fmt::{Display, Formatter, Result as FmtResult};
use std::time::Duration;

/// Configures a `RedditClient`.
pub struct ClientOptions {
    /// The user agent sent with every request. The recommended format is
    /// `platform:program:version (by /u/yourname)`.
    pub user_agent: String,
    /// Overrides the API host (e.g. `http://localhost:8080`). If `None`, the host is chosen by
    /// the authenticator: `https://oauth.reddit.com` for OAuth, `https://api.reddit.com`
    /// otherwise.
    pub api_url: Option<String>,
    /// Timeout for each request. If `None`, reqwest's default is used.
    pub timeout: Option<Duration>,
}

impl ClientOptions {
    /// Creates the default options for the specified user agent.
    pub fn new(user_agent: &str) -> ClientOptions {
        ClientOptions {
            user_agent: user_agent.to_owned(),
            api_url: None,
            timeout: None,
        }
    }

    /// Sends all requests to `url` instead of the Reddit API host.
    /// # Examples
    /// ```
    /// use subrawr::options::ClientOptions;
    /// let opts = ClientOptions::new("subrawr").api_url("http://localhost:8080");
    /// assert_eq!(opts.api_url.as_deref(), Some("http://localhost:8080"));
    /// ```
    pub fn api_url(mut self, url: &str) -> ClientOptions {
        self.api_url = Some(url.trim_end_matches('/').to_owned());
        self
    }

    /// Sets the timeout for each request.
    pub fn timeout(mut self, timeout: Duration) -> ClientOptions {
        self.timeout = Some(timeout);
        self
    }
}

/// Options for the post listings of a subreddit (`hot`, `new_posts`, `top`...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOptions {
    /// The maximum number of posts to yield in total. `None` pages through the whole listing.
    pub limit: Option<usize>,
    /// Starts the listing after the post with this fullname, e.g. to get posts older than it in
    /// the new queue.
    pub after: Option<String>,
}

impl ListingOptions {
    /// Stops the listing after `limit` posts.
    /// # Examples
    /// ```
    /// use subrawr::options::ListingOptions;
    /// let opts = ListingOptions::default().limit(10).after("t3_4uule8");
    /// assert_eq!(opts.limit, Some(10));
    /// ```
    pub fn limit(mut self, limit: usize) -> ListingOptions {
        self.limit = Some(limit);
        self
    }

    /// Starts the listing after the post with the fullname `fullname`.
    pub fn after(mut self, fullname: &str) -> ListingOptions {
        self.after = Some(fullname.to_owned());
        self
    }
}

/// Time filter for the `top` and `controversial` listings, equivalent to the "links from"
/// dropdown on the website.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFilter {
    Hour,
    Day,
    Week,
    Month,
    Year,
    #[default]
    AllTime,
}

impl TimeFilter {
    /// The value sent in the `t` parameter.
    pub fn as_str(&self) -> &'static str {
        match *self {
            TimeFilter::Hour => "hour",
            TimeFilter::Day => "day",
            TimeFilter::Week => "week",
            TimeFilter::Month => "month",
            TimeFilter::Year => "year",
            TimeFilter::AllTime => "all",
        }
    }
}

impl Display for TimeFilter {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// Options used when creating a submission. Exactly one of `selftext` and `url` must be set
/// (a self post has a body, a link post has a URL); this is checked when the post is submitted.
/// See `Subreddit.submit()`.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    /// The title of the post.
    pub title: String,
    /// The markdown body of a self post.
    pub selftext: Option<String>,
    /// The URL of a link post.
    pub url: Option<String>,
    /// When `false`, the API rejects a URL that has been submitted before. Defaults to `true`.
    pub resubmit: bool,
    /// When `true`, replies are sent to the author's inbox. Defaults to `true`.
    pub send_replies: bool,
}

impl NewSubmission {
    /// Creates a new `NewSubmission` with the given title. Add a body with `selftext()` or a
    /// link with `url()`. The post is not actually sent at this point.
    /// # Examples
    /// ```
    /// use subrawr::options::NewSubmission;
    /// let post = NewSubmission::new("Look at this!")
    ///     .url("http://example.com/foo")
    ///     .resubmit(false);
    /// assert!(post.send_replies);
    /// ```
    pub fn new(title: &str) -> NewSubmission {
        NewSubmission {
            title: title.to_owned(),
            selftext: None,
            url: None,
            resubmit: true,
            send_replies: true,
        }
    }

    /// Sets the markdown body, making this a self post.
    pub fn selftext(mut self, text: &str) -> NewSubmission {
        self.selftext = Some(text.to_owned());
        self
    }

    /// Sets the URL, making this a link post.
    pub fn url(mut self, url: &str) -> NewSubmission {
        self.url = Some(url.to_owned());
        self
    }

    /// Sets whether a URL that was already posted may be submitted again.
    pub fn resubmit(mut self, resubmit: bool) -> NewSubmission {
        self.resubmit = resubmit;
        self
    }

    /// Sets whether replies are sent to the author's inbox.
    pub fn send_replies(mut self, send_replies: bool) -> NewSubmission {
        self.send_replies = send_replies;
        self
    }
}

/// The kind of distinguish to apply to a comment or submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistinguishHow {
    /// A moderator distinguish ([M]).
    #[default]
    Yes,
    /// Removes any distinguish.
    No,
    /// An admin distinguish ([A]). Requires admin privileges.
    Admin,
    /// Other special distinguishes. Requires special privileges.
    Special,
}

impl DistinguishHow {
    /// The value sent in the `how` field.
    pub fn as_str(&self) -> &'static str {
        match *self {
            DistinguishHow::Yes => "yes",
            DistinguishHow::No => "no",
            DistinguishHow::Admin => "admin",
            DistinguishHow::Special => "special",
        }
    }
}

impl Display for DistinguishHow {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
