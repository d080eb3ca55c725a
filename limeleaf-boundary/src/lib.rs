use serde::{Deserialize, Serialize};

mod lenient;

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Account {
    pub username: String,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub account: Option<Account>,
    #[serde(default)]
    pub profile_img: Option<String>,
}

impl Profile {
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.account.as_ref().map(|a| a.username.as_str())
    }
}

/// Reference from a comment to the post it belongs to.
///
/// Depending on the endpoint the backend either sends the plain
/// post ID or the (possibly partial) post object.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(untagged)]
pub enum PostRef {
    Id(String),
    Post {
        #[serde(rename = "_id")]
        id: String,
    },
}

impl PostRef {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) | Self::Post { id } => id,
        }
    }
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id             : String,
    #[serde(default, deserialize_with = "lenient::profile_or_default")]
    pub profile        : Profile,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub comment        : String,
    #[serde(default)]
    pub post           : Option<PostRef>,
    #[serde(default, deserialize_with = "lenient::replies_or_ids")]
    pub replies        : Vec<Comment>,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub created        : String,
    #[serde(default)]
    pub likes          : u64,
    #[serde(default)]
    pub dislikes       : u64,
    #[serde(default)]
    pub is_reply       : bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction_score : Option<f64>,
}

/// The comments of a post.
///
/// Listing endpoints only send the number of comments
/// whereas the detail endpoint embeds the whole list.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(untagged)]
pub enum Comments {
    Count(u64),
    List(Vec<Comment>),
}

impl Default for Comments {
    fn default() -> Self {
        Self::Count(0)
    }
}

impl Comments {
    #[must_use]
    pub fn count(&self) -> u64 {
        match self {
            Self::Count(count) => *count,
            Self::List(comments) => comments.len() as u64,
        }
    }

    /// The embedded comment list; empty if only the count is known.
    #[must_use]
    pub fn list(&self) -> &[Comment] {
        match self {
            Self::Count(_) => &[],
            Self::List(comments) => comments,
        }
    }
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Community {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub community_icon: String,
    #[serde(
        default,
        rename = "communityBG",
        deserialize_with = "lenient::string_or_empty"
    )]
    pub community_bg: String,
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub followers: u64,
    #[serde(default, deserialize_with = "lenient::strings_or_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub follows_community: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id             : String,
    pub title          : String,
    #[serde(default)]
    pub body           : String,
    #[serde(default, deserialize_with = "lenient::profile_or_default")]
    pub author         : Profile,
    #[serde(default)]
    pub community      : Community,
    #[serde(default)]
    pub likes          : u64,
    #[serde(default)]
    pub dislikes       : u64,
    #[serde(default)]
    pub comments       : Comments,
    #[serde(default)]
    pub reaction_score : f64,
    pub created        : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct FollowedCommunity {
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string_or_empty")]
    pub community_icon: String,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct FollowedCommunities {
    #[serde(default)]
    pub followed_communities: Vec<FollowedCommunity>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub comment: String,
    pub is_reply: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct EditComment {
    pub comment: String,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub community_name: String,
    pub title: String,
    pub body: String,
}

/// Counters returned by the backend after a like or dislike.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
#[serde(rename_all = "camelCase")]
pub struct Reactions {
    pub likes: u64,
    pub dislikes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction_score: Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error)
)]
#[cfg_attr(feature = "extra-derive", error("{http_status}: {message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn comment_json(id: &str, replies: serde_json::Value) -> serde_json::Value {
        json!({
            "_id": id,
            "profile": {
                "account": { "username": "lime" },
                "profileImg": "https://img/lime.png"
            },
            "comment": "<p>hello</p>",
            "post": "p1",
            "replies": replies,
            "created": "2024-03-01T10:00:00.000Z",
            "likes": 3,
            "dislikes": 1,
            "isReply": false
        })
    }

    #[test]
    fn decode_nested_comment() {
        let json = comment_json("c1", json!([comment_json("c2", json!([]))]));
        let comment: Comment = serde_json::from_value(json).unwrap();
        assert_eq!(comment.id, "c1");
        assert_eq!(comment.profile.username(), Some("lime"));
        assert_eq!(comment.post.as_ref().map(PostRef::id), Some("p1"));
        assert_eq!(comment.replies.len(), 1);
        assert_eq!(comment.replies[0].id, "c2");
        assert_eq!(comment.reaction_score, None);
    }

    #[test]
    fn decode_comment_without_replies_field() {
        let mut json = comment_json("c1", json!([]));
        json.as_object_mut().unwrap().remove("replies");
        let comment: Comment = serde_json::from_value(json).unwrap();
        assert!(comment.replies.is_empty());
    }

    #[test]
    fn decode_post_with_unpopulated_deep_reply() {
        let mut reply = comment_json("c2", json!(["c3", null]));
        reply["profile"] = json!("6500aa");
        let post: Post = serde_json::from_value(json!({
            "_id": "p1",
            "title": "Hello",
            "body": "<p>world</p>",
            "author": { "account": { "username": "lime" } },
            "community": { "name": "rust" },
            "comments": [comment_json("c1", json!([reply]))],
            "created": "2024-03-01T10:00:00.000Z"
        }))
        .unwrap();
        let comments = post.comments.list();
        assert_eq!(comments.len(), 1);
        let reply = &comments[0].replies[0];
        assert_eq!(reply.profile, Profile::default());
        assert_eq!(reply.replies.len(), 1);
        assert_eq!(reply.replies[0].id, "c3");
        assert!(reply.replies[0].comment.is_empty());
    }

    #[test]
    fn decode_comment_without_created() {
        let mut json = comment_json("c1", json!([]));
        json.as_object_mut().unwrap().remove("created");
        json["comment"] = json!(null);
        let comment: Comment = serde_json::from_value(json).unwrap();
        assert_eq!(comment.created, "");
        assert_eq!(comment.comment, "");
    }

    #[test]
    fn decode_embedded_post_reference() {
        let mut json = comment_json("c1", json!([]));
        json["post"] = json!({ "_id": "p9", "title": "ignored" });
        let comment: Comment = serde_json::from_value(json).unwrap();
        assert_eq!(comment.post.unwrap().id(), "p9");
    }

    #[test]
    fn comments_as_count_or_list() {
        let count: Comments = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(count.count(), 7);
        assert!(count.list().is_empty());

        let list: Comments = serde_json::from_value(json!([
            comment_json("a", json!([])),
            comment_json("b", json!([]))
        ]))
        .unwrap();
        assert_eq!(list.count(), 2);
        assert_eq!(list.list()[1].id, "b");
    }

    #[test]
    fn decode_post_with_comment_count() {
        let post: Post = serde_json::from_value(json!({
            "_id": "p1",
            "title": "Hello",
            "body": "<p>world</p>",
            "author": { "account": { "username": "lime" } },
            "community": { "name": "rust", "communityIcon": "icon.png", "followers": 12 },
            "likes": 4,
            "dislikes": 0,
            "comments": 5,
            "reactionScore": 4.0,
            "created": "2024-03-01T10:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(post.comments.count(), 5);
        assert_eq!(post.community.followers, 12);
        assert_eq!(post.author.username(), Some("lime"));
    }

    #[test]
    fn decode_malformed_community_fields() {
        let community: Community = serde_json::from_value(json!({
            "name": "rust",
            "description": "crabs",
            "communityIcon": "icon.png",
            "communityBG": { "unexpected": true },
            "followers": ["u1", "u2"],
            "tags": "not a list"
        }))
        .unwrap();
        assert_eq!(community.community_bg, "");
        assert_eq!(community.followers, 0);
        assert!(community.tags.is_empty());
        assert!(!community.follows_community);
    }

    #[test]
    fn encode_new_comment() {
        let json = serde_json::to_value(NewComment {
            comment: "<p>hi</p>".into(),
            is_reply: false,
        })
        .unwrap();
        assert_eq!(json, json!({ "comment": "<p>hi</p>", "isReply": false }));
    }
}
