use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::APIError;

/// The target of a moderation or flair action.
///
/// Comments and submissions are identified by their base-36 ID (e.g. `4uule8`) and have a
/// *fullname* (kind + ID, e.g. `t3_4uule8`). A `Named` thing is a bare name, such as a
/// username, and has no fullname.
/// # Examples
/// ```
/// use subrawr::structures::thing::Thing;
/// let post = Thing::from_fullname("t3_4uule8").expect("Not a comment or submission");
/// assert_eq!(post, Thing::Submission(String::from("4uule8")));
/// assert_eq!(post.identifier(), "4uule8");
/// assert_eq!(post.fullname().unwrap(), "t3_4uule8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Thing {
    /// A comment, by ID.
    Comment(String),
    /// A link post or self post, by ID.
    Submission(String),
    /// Anything else that is referred to by name, usually a redditor.
    Named(String),
}

impl Thing {
    /// Parses a `t1_` (comment) or `t3_` (submission) fullname. Returns `None` for other kinds.
    pub fn from_fullname(fullname: &str) -> Option<Thing> {
        if let Some(id) = fullname.strip_prefix("t1_") {
            Some(Thing::Comment(id.to_owned()))
        } else if let Some(id) = fullname.strip_prefix("t3_") {
            Some(Thing::Submission(id.to_owned()))
        } else {
            None
        }
    }

    /// The fullname (kind + ID) of this comment or submission. `Named` things cannot be
    /// moderated, so they give an `APIError::InvalidArguments`.
    pub fn fullname(&self) -> Result<String, APIError> {
        match *self {
            Thing::Comment(ref id) => Ok(format!("t1_{}", id)),
            Thing::Submission(ref id) => Ok(format!("t3_{}", id)),
            Thing::Named(_) => Err(APIError::InvalidArguments("A named thing has no fullname.")),
        }
    }

    /// The ID of a comment or submission, or the name of a named thing.
    pub fn identifier(&self) -> &str {
        match *self {
            Thing::Comment(ref id) | Thing::Submission(ref id) | Thing::Named(ref id) => id,
        }
    }
}

impl Display for Thing {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", self.identifier())
    }
}

impl<'a> From<&'a str> for Thing {
    fn from(name: &'a str) -> Thing {
        Thing::Named(name.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::Thing;
    use crate::errors::APIError;

    #[test]
    fn comments_and_submissions_have_fullnames() {
        assert_eq!(Thing::Comment("d5x2q".into()).fullname().unwrap(), "t1_d5x2q");
        assert_eq!(Thing::Submission("4uule8".into()).fullname().unwrap(), "t3_4uule8");
    }

    #[test]
    fn named_things_have_no_fullname() {
        let err = Thing::from("spez").fullname().unwrap_err();
        assert!(matches!(err, APIError::InvalidArguments(_)));
    }

    #[test]
    fn it_parses_fullnames() {
        assert_eq!(Thing::from_fullname("t1_abc"), Some(Thing::Comment("abc".into())));
        assert_eq!(Thing::from_fullname("t5_2qh1i"), None);
    }

    #[test]
    fn its_string_form_is_the_identifier() {
        assert_eq!(Thing::Submission("4uule8".into()).to_string(), "4uule8");
        assert_eq!(Thing::from("spez").to_string(), "spez");
    }
}
