//! Nested comment threads.
//!
//! Replies are rendered inline up to [`MAX_INLINE_DEPTH`].
//! A comment at that depth that still has replies is not expanded:
//! clicking it opens its subtree as a thread of its own.

use limeleaf_boundary::{Comment, Profile};

pub const MAX_INLINE_DEPTH: usize = 4;

/// Shown if a comment's author has no account anymore.
pub const UNKNOWN_AUTHOR: &str = "error";

/// Key that collapses a comment while it is held down.
pub const COLLAPSE_KEY: &str = "Space";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerAction {
    /// Expand or collapse the replies inline.
    Toggle,
    /// Navigate to the comment thread page.
    OpenThread,
}

#[must_use]
pub const fn trigger_action(depth: usize, reply_count: usize) -> TriggerAction {
    if depth == MAX_INLINE_DEPTH && reply_count > 0 {
        TriggerAction::OpenThread
    } else {
        TriggerAction::Toggle
    }
}

#[must_use]
pub const fn renders_replies(depth: usize) -> bool {
    depth < MAX_INLINE_DEPTH
}

/// Expanded/collapsed state of a single comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collapse {
    open: bool,
}

impl Default for Collapse {
    fn default() -> Self {
        Self { open: true }
    }
}

impl Collapse {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn click(&mut self, depth: usize, reply_count: usize) -> TriggerAction {
        let action = trigger_action(depth, reply_count);
        if action == TriggerAction::Toggle {
            self.open = !self.open;
        }
        action
    }

    pub fn key_down(&mut self, code: &str) {
        if code == COLLAPSE_KEY {
            self.open = false;
        }
    }

    pub fn key_up(&mut self, code: &str) {
        if code == COLLAPSE_KEY {
            self.open = true;
        }
    }
}

/// Comments rendered directly below the post.
pub fn top_level(comments: &[Comment]) -> impl Iterator<Item = &Comment> {
    comments.iter().filter(|c| !c.is_reply)
}

/// Replies of `comment` rendered inline at `depth`.
///
/// Replies without a profile image are incomplete
/// and therefore skipped.
#[must_use]
pub fn inline_replies(comment: &Comment, depth: usize) -> Vec<&Comment> {
    if !renders_replies(depth) {
        return vec![];
    }
    comment
        .replies
        .iter()
        .filter(|reply| reply.profile.profile_img.is_some())
        .collect()
}

#[must_use]
pub fn author_name(profile: &Profile) -> &str {
    profile.username().unwrap_or(UNKNOWN_AUTHOR)
}

/// A comment that was just created by the current user.
///
/// It is shown on top of the thread before the post is reloaded.
#[must_use]
pub fn fresh(mut comment: Comment) -> Comment {
    comment.likes = 0;
    comment.dislikes = 0;
    comment
}

#[cfg(test)]
mod tests {
    use limeleaf_boundary::Account;

    use super::*;

    fn comment(id: &str, replies: Vec<Comment>) -> Comment {
        Comment {
            id: id.to_string(),
            profile: Profile {
                account: Some(Account {
                    username: "lime".to_string(),
                }),
                profile_img: Some("img.png".to_string()),
            },
            comment: format!("<p>{id}</p>"),
            post: None,
            replies,
            created: "2024-03-01T10:00:00Z".to_string(),
            likes: 2,
            dislikes: 1,
            is_reply: false,
            reaction_score: None,
        }
    }

    /// A linear chain of `len` comments, each replying to the previous one.
    fn chain(len: usize) -> Comment {
        (1..len).rev().fold(comment(&format!("c{len}"), vec![]), |mut child, i| {
            child.is_reply = true;
            comment(&format!("c{i}"), vec![child])
        })
    }

    fn rendered_ids(comment: &Comment, depth: usize, ids: &mut Vec<String>) {
        ids.push(comment.id.clone());
        for reply in inline_replies(comment, depth) {
            rendered_ids(reply, depth + 1, ids);
        }
    }

    #[test]
    fn replies_up_to_max_depth_render_inline() {
        let root = chain(MAX_INLINE_DEPTH + 1);
        let mut ids = vec![];
        rendered_ids(&root, 0, &mut ids);
        assert_eq!(ids, vec!["c1", "c2", "c3", "c4", "c5"]);
    }

    #[test]
    fn replies_below_max_depth_are_not_rendered() {
        let root = chain(MAX_INLINE_DEPTH + 3);
        let mut ids = vec![];
        rendered_ids(&root, 0, &mut ids);
        assert_eq!(ids.len(), MAX_INLINE_DEPTH + 1);
    }

    #[test]
    fn click_at_max_depth_with_replies_opens_thread() {
        let mut collapse = Collapse::default();
        assert_eq!(
            collapse.click(MAX_INLINE_DEPTH, 1),
            TriggerAction::OpenThread
        );
        assert!(collapse.is_open());
    }

    #[test]
    fn click_toggles_otherwise() {
        let mut collapse = Collapse::default();
        assert_eq!(collapse.click(MAX_INLINE_DEPTH, 0), TriggerAction::Toggle);
        assert!(!collapse.is_open());
        assert_eq!(collapse.click(2, 3), TriggerAction::Toggle);
        assert!(collapse.is_open());
        assert_eq!(trigger_action(0, 5), TriggerAction::Toggle);
    }

    #[test]
    fn space_key_collapses_while_held() {
        let mut collapse = Collapse::default();
        collapse.key_down("Enter");
        assert!(collapse.is_open());
        collapse.key_down(COLLAPSE_KEY);
        assert!(!collapse.is_open());
        collapse.key_up(COLLAPSE_KEY);
        assert!(collapse.is_open());
    }

    #[test]
    fn top_level_skips_replies() {
        let mut reply = comment("r", vec![]);
        reply.is_reply = true;
        let comments = vec![comment("a", vec![]), reply, comment("b", vec![])];
        let ids: Vec<_> = top_level(&comments).map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn replies_without_profile_image_are_skipped() {
        let mut incomplete = comment("x", vec![]);
        incomplete.profile.profile_img = None;
        let parent = comment("p", vec![incomplete, comment("y", vec![])]);
        let ids: Vec<_> = inline_replies(&parent, 0)
            .into_iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ids, vec!["y"]);
    }

    #[test]
    fn unpopulated_replies_count_but_are_not_rendered() {
        let unpopulated = Comment {
            id: "x".to_string(),
            ..Comment::default()
        };
        let parent = comment("p", vec![unpopulated]);
        assert!(inline_replies(&parent, 0).is_empty());
        assert_eq!(
            trigger_action(MAX_INLINE_DEPTH, parent.replies.len()),
            TriggerAction::OpenThread
        );
    }

    #[test]
    fn author_name_falls_back() {
        let mut c = comment("a", vec![]);
        assert_eq!(author_name(&c.profile), "lime");
        c.profile.account = None;
        assert_eq!(author_name(&c.profile), UNKNOWN_AUTHOR);
    }

    #[test]
    fn fresh_comment_has_no_reactions() {
        let c = fresh(comment("a", vec![]));
        assert_eq!((c.likes, c.dislikes), (0, 0));
    }
}
