use limeleaf_boundary::Reactions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Vote {
    #[default]
    None,
    Like,
    Dislike,
}

/// Like/dislike counters of a post or comment.
///
/// Clicks update the counters immediately.
/// The counters sent back by the server replace them afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReactionState {
    pub likes: u64,
    pub dislikes: u64,
    pub score: f64,
    pub vote: Vote,
}

impl ReactionState {
    #[must_use]
    pub const fn new(likes: u64, dislikes: u64, score: f64) -> Self {
        Self {
            likes,
            dislikes,
            score,
            vote: Vote::None,
        }
    }

    pub fn like(&mut self) {
        match self.vote {
            Vote::Like => {
                self.likes = self.likes.saturating_sub(1);
                self.vote = Vote::None;
            }
            Vote::Dislike => {
                self.dislikes = self.dislikes.saturating_sub(1);
                self.likes += 1;
                self.vote = Vote::Like;
            }
            Vote::None => {
                self.likes += 1;
                self.vote = Vote::Like;
            }
        }
    }

    pub fn dislike(&mut self) {
        match self.vote {
            Vote::Dislike => {
                self.dislikes = self.dislikes.saturating_sub(1);
                self.vote = Vote::None;
            }
            Vote::Like => {
                self.likes = self.likes.saturating_sub(1);
                self.dislikes += 1;
                self.vote = Vote::Dislike;
            }
            Vote::None => {
                self.dislikes += 1;
                self.vote = Vote::Dislike;
            }
        }
    }

    pub fn reconcile(&mut self, reactions: Reactions) {
        let Reactions {
            likes,
            dislikes,
            reaction_score,
        } = reactions;
        self.likes = likes;
        self.dislikes = dislikes;
        if let Some(score) = reaction_score {
            self.score = score;
        }
    }
}

/// Scores are shown without fraction if they are whole numbers.
#[must_use]
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_twice_removes_like() {
        let mut state = ReactionState::new(3, 1, 2.0);
        state.like();
        assert_eq!((state.likes, state.dislikes, state.vote), (4, 1, Vote::Like));
        state.like();
        assert_eq!((state.likes, state.dislikes, state.vote), (3, 1, Vote::None));
    }

    #[test]
    fn dislike_moves_existing_like() {
        let mut state = ReactionState::new(3, 1, 2.0);
        state.like();
        state.dislike();
        assert_eq!(
            (state.likes, state.dislikes, state.vote),
            (3, 2, Vote::Dislike)
        );
        state.like();
        assert_eq!((state.likes, state.dislikes, state.vote), (4, 1, Vote::Like));
    }

    #[test]
    fn server_counters_win() {
        let mut state = ReactionState::new(3, 1, 2.0);
        state.like();
        state.reconcile(Reactions {
            likes: 10,
            dislikes: 4,
            reaction_score: None,
        });
        assert_eq!((state.likes, state.dislikes), (10, 4));
        assert!((state.score - 2.0).abs() < f64::EPSILON);
        state.reconcile(Reactions {
            likes: 10,
            dislikes: 4,
            reaction_score: Some(6.5),
        });
        assert_eq!(format_score(state.score), "6.5");
        assert_eq!(state.vote, Vote::Like);
    }

    #[test]
    fn whole_scores_without_fraction() {
        assert_eq!(format_score(12.0), "12");
        assert_eq!(format_score(-3.0), "-3");
    }
}
