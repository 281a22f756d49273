/// A paginated listing of any endpoint.
pub mod listing;
/// Structures representing subreddits, giving access to their flair, relationships and
/// moderation actions.
pub mod subreddit;
/// Flair of a subreddit.
pub mod flair;
/// Moderation actions of a subreddit.
pub mod moderation;
/// Relationships between redditors and a subreddit (moderators, banned users...).
pub mod relationship;
/// The targets of flair and moderation actions.
pub mod thing;
/// Redditors and their flair, as they appear in subreddit listings.
pub mod user;
