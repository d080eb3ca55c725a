use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

// Characters that would break a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(s: &str) -> String {
    utf8_percent_encode(s, SEGMENT).to_string()
}

/// Decodes a route parameter.
#[must_use]
pub fn decode_param(param: &str) -> String {
    percent_decode_str(param).decode_utf8_lossy().into_owned()
}

#[must_use]
pub fn community(name: &str) -> String {
    format!("/community/{}", segment(name))
}

#[must_use]
pub fn post(community_name: &str, title: &str, id: &str) -> String {
    format!(
        "/community/{}/{}/{}",
        segment(community_name),
        segment(title),
        segment(id)
    )
}

#[must_use]
pub fn comment_thread(community_name: &str, title: &str, post_id: &str, comment_id: &str) -> String {
    format!(
        "{}/comment-thread/{}",
        post(community_name, title, post_id),
        segment(comment_id)
    )
}

/// Route parameters identifying a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostLocation {
    pub community_name: String,
    pub title: String,
    pub post_id: String,
}

impl PostLocation {
    #[must_use]
    pub fn path(&self) -> String {
        post(&self.community_name, &self.title, &self.post_id)
    }

    #[must_use]
    pub fn comment_thread(&self, comment_id: &str) -> String {
        comment_thread(&self.community_name, &self.title, &self.post_id, comment_id)
    }
}

#[must_use]
pub fn create_post_in(community_name: &str) -> String {
    format!("{}/create-post", community(community_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_and_thread_paths() {
        assert_eq!(post("rust", "Hello", "p1"), "/community/rust/Hello/p1");
        assert_eq!(
            comment_thread("rust", "Hello", "p1", "c9"),
            "/community/rust/Hello/p1/comment-thread/c9"
        );
        assert_eq!(create_post_in("rust"), "/community/rust/create-post");
    }

    #[test]
    fn post_location_paths() {
        let location = PostLocation {
            community_name: "rust".into(),
            title: "Hello".into(),
            post_id: "p1".into(),
        };
        assert_eq!(location.path(), "/community/rust/Hello/p1");
        assert_eq!(
            location.comment_thread("c2"),
            "/community/rust/Hello/p1/comment-thread/c2"
        );
    }

    #[test]
    fn segments_are_encoded_and_decoded() {
        let path = post("rust lang", "What? 50/50", "p1");
        assert_eq!(path, "/community/rust%20lang/What%3F%2050%2F50/p1");
        assert_eq!(decode_param("What%3F%2050%2F50"), "What? 50/50");
    }
}
