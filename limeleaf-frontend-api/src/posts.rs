use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use limeleaf_boundary::{Comment, EditComment, NewComment, NewPost, Post, Reactions};

use crate::{Api, Result};

/// The feeds offered by `/posts?filter=`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PostFilter {
    #[default]
    Home,
    Popular,
    /// Posts of a single community.
    Community(String),
}

impl PostFilter {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Home => "home",
            Self::Popular => "popular",
            Self::Community(name) => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Like,
    Dislike,
}

impl Reaction {
    const fn path_segment(self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
}

impl Api {
    pub async fn posts(&self, filter: &PostFilter) -> Result<Vec<Post>> {
        let request = self.get_request(&format!("/posts?filter={}", encode(filter.as_str())));
        self.send(request).await
    }

    pub async fn post(&self, id: &str) -> Result<Post> {
        let request = self.get_request(&format!("/posts/{}", encode(id)));
        self.send(request).await
    }

    /// A comment together with all of its descendant replies.
    pub async fn comment_thread(&self, comment_id: &str) -> Result<Comment> {
        let request = self.get_request(&format!("/posts/comment-thread/{}", encode(comment_id)));
        self.send(request).await
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<Post> {
        self.send_json(self.post_request("/posts/create"), post).await
    }

    pub async fn create_comment(&self, post_id: &str, comment: &NewComment) -> Result<Comment> {
        let request = self.post_request(&format!("/posts/{}/comment", encode(post_id)));
        self.send_json(request, comment).await
    }

    pub async fn edit_comment(&self, comment_id: &str, comment: &EditComment) -> Result<()> {
        let request = self.put_request(&format!("/posts/comment/{}", encode(comment_id)));
        self.send_json_without_content(request, comment).await
    }

    pub async fn react_to_post(&self, post_id: &str, reaction: Reaction) -> Result<Reactions> {
        let request = self.post_request(&format!(
            "/posts/{}/{}",
            encode(post_id),
            reaction.path_segment()
        ));
        self.send(request).await
    }

    pub async fn react_to_comment(
        &self,
        comment_id: &str,
        reaction: Reaction,
    ) -> Result<Reactions> {
        let request = self.post_request(&format!(
            "/posts/comment/{}/{}",
            encode(comment_id),
            reaction.path_segment()
        ));
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_query_values() {
        assert_eq!(PostFilter::default().as_str(), "home");
        assert_eq!(PostFilter::Popular.as_str(), "popular");
        assert_eq!(PostFilter::Community("rust".into()).as_str(), "rust");
    }

    #[test]
    fn route_segments_are_encoded() {
        assert_eq!(encode("abc123"), "abc123");
        assert_eq!(encode("a/b c"), "a%2Fb%20c");
    }
}
