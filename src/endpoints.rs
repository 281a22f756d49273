//! The table of API endpoints used by this crate. Each endpoint has a URL template relative to
//! the API host, which may contain a `{subreddit}` placeholder.

/// A symbolic API endpoint.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Approve,
    Banned,
    Controversial,
    Contributor,
    Distinguish,
    Flair,
    FlairList,
    Friend,
    Hot,
    IgnoreReports,
    Moderator,
    Muted,
    New,
    Remove,
    Rising,
    Submit,
    Subreddit,
    SubredditAbout,
    Top,
    Unfriend,
    UnignoreReports,
    WikiBanned,
    WikiContributor,
}

impl Endpoint {
    /// The URL template of this endpoint.
    pub fn template(&self) -> &'static str {
        match *self {
            Endpoint::Approve => "api/approve/",
            Endpoint::Banned => "r/{subreddit}/about/banned/",
            Endpoint::Controversial => "r/{subreddit}/controversial/",
            Endpoint::Contributor => "r/{subreddit}/about/contributors/",
            Endpoint::Distinguish => "api/distinguish/",
            Endpoint::Flair => "r/{subreddit}/api/flair/",
            Endpoint::FlairList => "r/{subreddit}/api/flairlist/",
            Endpoint::Friend => "api/friend/",
            Endpoint::Hot => "r/{subreddit}/hot/",
            Endpoint::IgnoreReports => "api/ignore_reports/",
            Endpoint::Moderator => "r/{subreddit}/about/moderators/",
            Endpoint::Muted => "r/{subreddit}/about/muted/",
            Endpoint::New => "r/{subreddit}/new/",
            Endpoint::Remove => "api/remove/",
            Endpoint::Rising => "r/{subreddit}/rising/",
            Endpoint::Submit => "api/submit/",
            Endpoint::Subreddit => "r/{subreddit}/",
            Endpoint::SubredditAbout => "r/{subreddit}/about/",
            Endpoint::Top => "r/{subreddit}/top/",
            Endpoint::Unfriend => "api/unfriend/",
            Endpoint::UnignoreReports => "api/unignore_reports/",
            Endpoint::WikiBanned => "r/{subreddit}/about/wikibanned/",
            Endpoint::WikiContributor => "r/{subreddit}/about/wikicontributors/",
        }
    }

    /// The path of a subreddit-scoped endpoint, with `{subreddit}` replaced by `subreddit`.
    pub fn path(&self, subreddit: &str) -> String {
        self.template().replace("{subreddit}", subreddit)
    }

    /// The path of an endpoint that takes no placeholders.
    pub fn fixed(&self) -> &'static str {
        debug_assert!(!self.template().contains('{'), "{:?} needs a subreddit", self);
        self.template()
    }
}
