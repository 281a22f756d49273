#![warn(missing_docs)]

//! # subrawr - Subreddit moderation for the Reddit API
//! This crate provides the subreddit side of the Reddit API: post listings, listing and setting
//! flair, managing relationships (moderators, contributors, banned and muted users), moderating
//! comments and submissions, and submitting posts.
//! ## Quick Start
//! ### Creating a Client
//! To access the Reddit API, create a `RedditClient` with a user agent and an *authenticator*.
//! Almost everything in this crate needs a logged-in moderator, so you'll want a
//! `TokenAuthenticator` holding an OAuth access token. See the [auth](./auth/index.html) module
//! documentation to find out how to get one.
//!
//! ```rust,no_run
//! use subrawr::client::RedditClient;
//! use subrawr::auth::TokenAuthenticator;
//! let client = RedditClient::new("linux:subrawr:v0.1.0 (by /u/Aurora0001)",
//!                                TokenAuthenticator::new("access token"))
//!     .expect("Could not create client");
//! ```
//!
//! It is important that you pick a good user agent. The ideal format is
//! `platform:program:version (by /u/yourname)`.
//!
//! ### Getting a Subreddit
//! ```rust,no_run
//! # use subrawr::prelude::*;
//! # let client = RedditClient::new("subrawr", TokenAuthenticator::new("token")).unwrap();
//! let rust = client.subreddit("rust").expect("Invalid subreddit name");
//! ```
//!
//! *Why do I need the `expect` call?* Since it is possible for a request to the API to fail,
//! most of the API wrapper returns `Result<_, APIError>` where `_` is the actual value from the
//! API. This allows you to handle the error gracefully if you want, but for our examples
//! we will always use `expect` to simplify the examples. Be prepared to accept HTTP 5xx errors
//! if reddit is having trouble with their servers; this will be returned to you as a
//! `APIError::HTTPError` with the error status in the enum variant. Nothing is retried for you.
//!
//! ### Post Listings
//! The `hot`, `new_posts`, `rising`, `top` and `controversial` listings of a subreddit are
//! paginated lazily. Use `ListingOptions` to cap how many posts are fetched:
//!
//! ```rust,no_run
//! # use subrawr::prelude::*;
//! # let client = RedditClient::new("subrawr", TokenAuthenticator::new("token")).unwrap();
//! let rust = client.subreddit("rust").expect("Invalid subreddit name");
//! for post in rust.top(ListingOptions::default().limit(25), TimeFilter::Week) {
//!     println!("{}", post.expect("Could not fetch post")["title"]);
//! }
//! ```
//!
//! ### Relationships
//! Each subreddit has six relationships: `banned`, `contributor`, `moderator`, `muted`,
//! `wikibanned` and `wikicontributor`. You can loop through the members of any of them, and add
//! or remove members:
//!
//! ```rust,no_run
//! # use subrawr::prelude::*;
//! # let client = RedditClient::new("subrawr", TokenAuthenticator::new("token")).unwrap();
//! let rust = client.subreddit("rust").expect("Invalid subreddit name");
//! for moderator in rust.moderator() {
//!     println!("{}", moderator.expect("Could not list moderators"));
//! }
//! rust.contributor().add("Aurora0001").expect("Could not add contributor");
//! ```
//!
//! Listings are lazy: nothing is requested until you start iterating, and every new loop
//! fetches the list again from the start.
//!
//! ### Flair
//! ```rust,no_run
//! # use subrawr::prelude::*;
//! # let client = RedditClient::new("subrawr", TokenAuthenticator::new("token")).unwrap();
//! let rust = client.subreddit("rust").expect("Invalid subreddit name");
//! for flair in rust.flair() {
//!     let flair = flair.expect("Could not fetch flair");
//!     println!("{} has flair {:?}", flair.user(), flair.flair_text());
//! }
//! rust.flair().set(&Thing::from("Aurora0001"), "rawr dev", "").expect("Could not set flair");
//! ```
//!
//! ### Moderating
//! Moderation actions take a `Thing`, which is a comment or submission:
//!
//! ```rust,no_run
//! # use subrawr::prelude::*;
//! # let client = RedditClient::new("subrawr", TokenAuthenticator::new("token")).unwrap();
//! let rust = client.subreddit("rust").expect("Invalid subreddit name");
//! let spam = Thing::from_fullname("t3_4uule8").expect("Not a comment or submission");
//! rust.moderation().remove(&spam, true).expect("Could not remove post");
//! ```
//!
//! ### Posting a Thread
//! Reddit has two types of submissions: link posts and self posts. Link posts are hyperlinked
//! to their URL, but have no body text. Self posts have a body but don't link anywhere.
//! A `NewSubmission` must have exactly one of the two.
//!
//! ```rust,no_run
//! # use subrawr::prelude::*;
//! # let client = RedditClient::new("subrawr", TokenAuthenticator::new("token")).unwrap();
//! let rust = client.subreddit("rust").expect("Invalid subreddit name");
//! let post = NewSubmission::new("I love Rust!").url("https://rust-lang.org");
//! rust.submit(post).expect("Could not submit link!");
//! ```
//!
//! # Logging
//! `subrawr` logs every request through the `log` crate (`debug` for requests, `trace` for
//! request and response bodies). Install any logger, e.g. `env_logger`, to see them.

pub mod auth;
pub mod client;
/// The table of API endpoints.
pub mod endpoints;
/// Deserialized API responses.
pub mod responses;
/// Traits for common API functionality.
pub mod traits;
/// Error types used to signal problems with requests.
pub mod errors;
/// Subreddits, their flair, relationships and moderation actions.
pub mod structures;
/// Configuration options for the client and API requests.
pub mod options;
/// Basic `subrawr` structures to import with `use subrawr::prelude::*;`
pub mod prelude;

mod util;

#[cfg(test)]
mod test_utils;
