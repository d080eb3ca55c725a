use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use limeleaf_boundary::{NewComment, NewPost};

/// What the editor produces if nothing was typed.
pub const EMPTY_EDITOR_CONTENT: &str = "<p></p>";

const TITLE_MIN_LEN: usize = 2;
const TITLE_MAX_LEN: usize = 50;

lazy_static! {
    static ref EMPTY_PARAGRAPH_REGEX: Regex = Regex::new(r"^<p>\s*</p>$").unwrap();
}

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

/// `true` if the HTML produced by the editor contains no text.
#[must_use]
pub fn is_empty_html(html: &str) -> bool {
    let trimmed = html.trim();
    trimmed.is_empty() || EMPTY_PARAGRAPH_REGEX.is_match(trimmed)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommentInvalidation {
    #[error("Comment must be at least 2 characters long.")]
    Empty,
}

impl Validate for NewComment {
    type Error = CommentInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if is_empty_html(&self.comment) {
            return Err(Self::Error::Empty);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PostInvalidation {
    #[error("You must choose a community.")]
    Community,
    #[error("You must have a title thats between 2 and 50 characters long.")]
    Title,
    #[error("You must have a body thats at least 2 characters long.")]
    Body,
}

fn is_valid_title(title: &str) -> bool {
    let len = title.chars().count();
    (TITLE_MIN_LEN..=TITLE_MAX_LEN).contains(&len)
}

impl Validate for NewPost {
    type Error = PostInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.community_name.is_empty() {
            return Err(Self::Error::Community);
        }
        if !is_valid_title(&self.title) {
            return Err(Self::Error::Title);
        }
        if is_empty_html(&self.body) {
            return Err(Self::Error::Body);
        }
        Ok(())
    }
}

/// Text fields of a community that is about to be created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommunityDraft {
    pub name: String,
    pub description: String,
    pub icon_selected: bool,
    pub background_selected: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommunityInvalidation {
    #[error("You must choose a community name without slashes.")]
    Name,
    #[error("You must have a description.")]
    Description,
    #[error("You must choose an icon and a background image.")]
    Images,
}

impl Validate for CommunityDraft {
    type Error = CommunityInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        let name = self.name.trim();
        if name.is_empty() || name.contains('/') {
            return Err(Self::Error::Name);
        }
        if self.description.trim().is_empty() {
            return Err(Self::Error::Description);
        }
        if !(self.icon_selected && self.background_selected) {
            return Err(Self::Error::Images);
        }
        Ok(())
    }
}

/// Splits a comma separated tag list.
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = vec![];
    for tag in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let tag = tag.to_lowercase();
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(community_name: &str, title: &str, body: &str) -> NewPost {
        NewPost {
            community_name: community_name.into(),
            title: title.into(),
            body: body.into(),
        }
    }

    #[test]
    fn empty_html() {
        assert!(is_empty_html(""));
        assert!(is_empty_html("   \n"));
        assert!(is_empty_html(EMPTY_EDITOR_CONTENT));
        assert!(is_empty_html("  <p>   </p>  "));
        assert!(!is_empty_html("<p>hi</p>"));
        assert!(!is_empty_html("<p></p><p>x</p>"));
    }

    #[test]
    fn comment_with_empty_body_is_rejected() {
        for comment in ["<p></p>", "  ", "<p> \t </p>"] {
            let new_comment = NewComment {
                comment: comment.into(),
                is_reply: false,
            };
            assert_eq!(new_comment.validate(), Err(CommentInvalidation::Empty));
        }
        let ok = NewComment {
            comment: "<p>ok</p>".into(),
            is_reply: false,
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn post_validation_order() {
        assert_eq!(
            new_post("", "", "").validate(),
            Err(PostInvalidation::Community)
        );
        assert_eq!(
            new_post("rust", "x", "").validate(),
            Err(PostInvalidation::Title)
        );
        assert_eq!(
            new_post("rust", "Hello", "<p></p>").validate(),
            Err(PostInvalidation::Body)
        );
        assert!(new_post("rust", "Hello", "<p>World</p>").validate().is_ok());
    }

    #[test]
    fn post_invalidation_messages() {
        assert_eq!(
            PostInvalidation::Title.to_string(),
            "You must have a title thats between 2 and 50 characters long."
        );
        assert_eq!(
            PostInvalidation::Body.to_string(),
            "You must have a body thats at least 2 characters long."
        );
    }

    #[test]
    fn title_length_bounds() {
        assert!(!is_valid_title("a"));
        assert!(is_valid_title("ab"));
        assert!(is_valid_title(&"a".repeat(50)));
        assert!(!is_valid_title(&"a".repeat(51)));
        assert!(is_valid_title("äö"));
    }

    #[test]
    fn community_draft_validation() {
        let mut draft = CommunityDraft {
            name: "rust".into(),
            description: "crabs".into(),
            icon_selected: true,
            background_selected: true,
        };
        assert!(draft.validate().is_ok());
        draft.background_selected = false;
        assert_eq!(draft.validate(), Err(CommunityInvalidation::Images));
        draft.description = " ".into();
        assert_eq!(draft.validate(), Err(CommunityInvalidation::Description));
        draft.name = "a/b".into();
        assert_eq!(draft.validate(), Err(CommunityInvalidation::Name));
    }

    #[test]
    fn tags_are_split_and_deduplicated() {
        assert_eq!(
            parse_tags(" Rust, wasm,,rust , Web "),
            vec!["rust", "wasm", "web"]
        );
        assert!(parse_tags(" , ").is_empty());
    }
}
