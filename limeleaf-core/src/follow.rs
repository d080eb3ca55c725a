/// Follow button of a community card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Follow {
    followers: u64,
    following: bool,
}

impl Follow {
    #[must_use]
    pub const fn new(followers: u64, following: bool) -> Self {
        Self {
            followers,
            following,
        }
    }

    #[must_use]
    pub const fn followers(&self) -> u64 {
        self.followers
    }

    #[must_use]
    pub const fn is_following(&self) -> bool {
        self.following
    }

    /// Optimistic update; the request is sent independently.
    pub fn toggle(&mut self) {
        if self.following {
            self.followers = self.followers.saturating_sub(1);
        } else {
            self.followers += 1;
        }
        self.following = !self.following;
    }

    #[must_use]
    pub const fn button_label(&self) -> &'static str {
        if self.following {
            "Unfollow"
        } else {
            "Follow"
        }
    }

    #[must_use]
    pub fn followers_label(&self) -> String {
        if self.followers == 1 {
            "1 follower".to_string()
        } else {
            format!("{} followers", self.followers)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_count_and_label() {
        let mut follow = Follow::new(5, false);
        assert_eq!(follow.button_label(), "Follow");
        follow.toggle();
        assert_eq!(follow.followers(), 6);
        assert_eq!(follow.button_label(), "Unfollow");
        follow.toggle();
        assert_eq!(follow.followers(), 5);
        assert_eq!(follow.button_label(), "Follow");
    }

    #[test]
    fn unfollow_decrements() {
        let mut follow = Follow::new(1, true);
        assert_eq!(follow.followers_label(), "1 follower");
        follow.toggle();
        assert!(!follow.is_following());
        assert_eq!(follow.followers_label(), "0 followers");
    }
}
