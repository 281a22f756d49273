use serde_json::Value;

use crate::endpoints::Endpoint;
use crate::errors::APIError;
use crate::options::DistinguishHow;
use crate::structures::thing::Thing;
use crate::traits::{Data, Transport};

/// Moderation actions on the comments and submissions of a subreddit. Get it with
/// `Subreddit.moderation()`. Each action sends exactly one request; the targets must be
/// `Thing::Comment` or `Thing::Submission`.
/// # Examples
/// ```rust,no_run
/// use subrawr::prelude::*;
/// let client = RedditClient::new("subrawr", TokenAuthenticator::new("token"))
///     .expect("Could not create client");
/// let sub = client.subreddit("rust").expect("Invalid name");
/// let post = Thing::from_fullname("t3_4uule8").expect("Invalid fullname");
/// sub.moderation().approve(&post).expect("Could not approve");
/// sub.moderation().distinguish(&post, DistinguishHow::Yes).expect("Could not distinguish");
/// ```
pub struct SubredditModeration<'a> {
    client: &'a dyn Transport,
    subreddit: String,
}

impl<'a> SubredditModeration<'a> {
    /// Internal method. Use `Subreddit.moderation()` instead.
    pub fn new(client: &'a dyn Transport, subreddit: &str) -> SubredditModeration<'a> {
        SubredditModeration {
            client,
            subreddit: subreddit.to_owned(),
        }
    }

    /// The name of the subreddit being moderated.
    pub fn subreddit(&self) -> &str {
        &self.subreddit
    }

    /// Approves the comment or submission, reverting any removal and clearing its reports.
    pub fn approve(&self, thing: &Thing) -> Result<(), APIError> {
        self.send(Endpoint::Approve, thing, Data::new())?;
        Ok(())
    }

    /// Distinguishes the comment or submission. `DistinguishHow::Yes` is a moderator
    /// distinguish, `DistinguishHow::No` removes it. Returns the JSON response.
    pub fn distinguish(&self, thing: &Thing, how: DistinguishHow) -> Result<Value, APIError> {
        let mut extra = Data::new();
        extra.insert("how".to_owned(), Value::from(how.as_str()));
        self.send(Endpoint::Distinguish, thing, extra)
    }

    /// Ignores future reports on the comment or submission. Reports are still counted, but do
    /// not notify moderators.
    pub fn ignore_reports(&self, thing: &Thing) -> Result<(), APIError> {
        self.send(Endpoint::IgnoreReports, thing, Data::new())?;
        Ok(())
    }

    /// Removes the comment or submission. If `spam` is `true`, the removal also trains the
    /// subreddit's spam filter.
    pub fn remove(&self, thing: &Thing, spam: bool) -> Result<(), APIError> {
        let mut extra = Data::new();
        extra.insert("spam".to_owned(), Value::from(spam));
        self.send(Endpoint::Remove, thing, extra)?;
        Ok(())
    }

    /// Removes any distinguish. Same as `distinguish(thing, DistinguishHow::No)`.
    pub fn undistinguish(&self, thing: &Thing) -> Result<Value, APIError> {
        self.distinguish(thing, DistinguishHow::No)
    }

    /// Stops ignoring reports on the comment or submission.
    pub fn unignore_reports(&self, thing: &Thing) -> Result<(), APIError> {
        self.send(Endpoint::UnignoreReports, thing, Data::new())?;
        Ok(())
    }

    fn send(&self, endpoint: Endpoint, thing: &Thing, mut data: Data) -> Result<Value, APIError> {
        data.insert("id".to_owned(), Value::from(thing.fullname()?));
        self.client.post(endpoint.fixed(), &data)
    }
}

#[cfg(test)]
mod tests {
    use super::SubredditModeration;
    use crate::errors::APIError;
    use crate::options::DistinguishHow;
    use crate::structures::thing::Thing;
    use crate::test_utils::{data, Method, RecordingTransport};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn post() -> Thing {
        Thing::Submission("4uule8".into())
    }

    #[test]
    fn simple_actions_send_only_the_fullname() {
        let transport = RecordingTransport::new();
        let moderation = SubredditModeration::new(&transport, "rust");
        let comment = Thing::Comment("d5x2q".into());
        moderation.approve(&comment).unwrap();
        moderation.ignore_reports(&comment).unwrap();
        moderation.unignore_reports(&comment).unwrap();

        let requests = transport.requests();
        let paths: Vec<_> = requests.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["api/approve/", "api/ignore_reports/", "api/unignore_reports/"]);
        for request in &requests {
            assert_eq!(request.method, Method::Post);
            assert_eq!(request.data, data(json!({"id": "t1_d5x2q"})));
        }
    }

    #[test]
    fn distinguish_returns_the_response() {
        let transport = RecordingTransport::new().with_post(json!({"json": {"errors": []}}));
        let moderation = SubredditModeration::new(&transport, "rust");
        let response = moderation.distinguish(&post(), DistinguishHow::default()).unwrap();
        assert_eq!(response, json!({"json": {"errors": []}}));
        assert_eq!(transport.last().path, "api/distinguish/");
        assert_eq!(transport.last().data, data(json!({"id": "t3_4uule8", "how": "yes"})));
    }

    #[test]
    fn undistinguish_is_distinguish_with_no() {
        let transport = RecordingTransport::new();
        let moderation = SubredditModeration::new(&transport, "rust");
        moderation.undistinguish(&post()).unwrap();
        moderation.distinguish(&post(), DistinguishHow::No).unwrap();
        let requests = transport.requests();
        assert_eq!(requests[0], requests[1]);
        assert_eq!(requests[0].data["how"], json!("no"));
    }

    #[test]
    fn remove_sends_the_spam_flag() {
        let transport = RecordingTransport::new();
        let moderation = SubredditModeration::new(&transport, "rust");
        moderation.remove(&post(), false).unwrap();
        assert_eq!(transport.last().data, data(json!({"id": "t3_4uule8", "spam": false})));
        moderation.remove(&post(), true).unwrap();
        assert_eq!(transport.last().path, "api/remove/");
        assert_eq!(transport.last().data, data(json!({"id": "t3_4uule8", "spam": true})));
    }

    #[test]
    fn named_targets_are_rejected_before_sending() {
        let transport = RecordingTransport::new();
        let moderation = SubredditModeration::new(&transport, "rust");
        let err = moderation.approve(&Thing::from("spez")).unwrap_err();
        assert!(matches!(err, APIError::InvalidArguments(_)));
        assert!(transport.requests().is_empty());
    }
}
