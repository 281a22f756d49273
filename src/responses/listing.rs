//! Pages returned by paginated endpoints.

use serde::Deserialize;
use serde_json::Value;

use crate::responses::{BasicThing, ListingData};

/// One page of a paginated endpoint. Regular listings wrap their items in `data.children` and
/// carry the cursor in `data.after`; the flair list has a flat `users` array and a `next`
/// cursor.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum ListingPage {
    Listing(BasicThing<ListingData<Value>>),
    FlairList(FlairListPage),
}

#[derive(Deserialize, Debug)]
pub struct FlairListPage {
    pub users: Vec<Value>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

impl ListingPage {
    /// Splits the page into its items and the cursor of the following page. Children of the
    /// form `{"kind": ..., "data": {...}}` are unwrapped to their `data`.
    pub fn into_parts(self) -> (Vec<Value>, Option<String>) {
        match self {
            ListingPage::Listing(listing) => {
                let items = listing.data
                    .children
                    .into_iter()
                    .map(|mut child| {
                        if child.get("kind").is_some() {
                            if let Some(data) = child.get_mut("data") {
                                return data.take();
                            }
                        }
                        child
                    })
                    .collect();
                (items, listing.data.after)
            }
            ListingPage::FlairList(page) => (page.users, page.next),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ListingPage;
    use serde_json::json;

    #[test]
    fn it_unwraps_listing_children() {
        let page: ListingPage = serde_json::from_value(json!({
            "kind": "Listing",
            "data": {
                "children": [{"kind": "t3", "data": {"id": "abc"}}, {"id": "def"}],
                "after": "t3_def",
                "before": null
            }
        })).unwrap();
        let (items, after) = page.into_parts();
        assert_eq!(items, vec![json!({"id": "abc"}), json!({"id": "def"})]);
        assert_eq!(after.as_deref(), Some("t3_def"));
    }

    #[test]
    fn it_reads_flair_list_pages() {
        let page: ListingPage = serde_json::from_value(json!({
            "users": [{"user": "spez", "flair_text": "admin", "flair_css_class": null}],
            "next": null
        })).unwrap();
        let (items, after) = page.into_parts();
        assert_eq!(items.len(), 1);
        assert_eq!(after, None);
    }
}
