//! User-facing messages for HTTP status codes.

pub const INVALID_CREDENTIALS: &str = "Invalid credentials, please log back in.";
pub const INCORRECT_COMMENT_FORMAT: &str = "Incorrect comment formatting.";
pub const INCORRECT_COMMUNITY_FORMAT: &str = "Incorrect community formatting.";
pub const COMMUNITY_NAME_TAKEN: &str = "Community name already taken.";
pub const SERVER_ERROR: &str = "Server error, try again later.";

/// How a status code changes the displayed error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageUpdate {
    Clear,
    Set(&'static str),
    Keep,
}

impl MessageUpdate {
    pub fn apply(self, message: &mut Option<String>) {
        match self {
            Self::Clear => *message = None,
            Self::Set(msg) => *message = Some(msg.to_string()),
            Self::Keep => {}
        }
    }
}

#[must_use]
pub const fn comment_submission(status: u16) -> MessageUpdate {
    match status {
        200 => MessageUpdate::Clear,
        401 | 403 => MessageUpdate::Set(INVALID_CREDENTIALS),
        400 => MessageUpdate::Set(INCORRECT_COMMENT_FORMAT),
        500 => MessageUpdate::Set(SERVER_ERROR),
        _ => MessageUpdate::Keep,
    }
}

#[must_use]
pub const fn community_creation(status: u16) -> MessageUpdate {
    match status {
        200 | 201 => MessageUpdate::Clear,
        401 | 403 => MessageUpdate::Set(INVALID_CREDENTIALS),
        400 => MessageUpdate::Set(INCORRECT_COMMUNITY_FORMAT),
        409 => MessageUpdate::Set(COMMUNITY_NAME_TAKEN),
        _ => MessageUpdate::Set(SERVER_ERROR),
    }
}

/// Message of a failed post submission.
#[must_use]
pub const fn post_submission_error(status: u16) -> &'static str {
    match status {
        401 | 403 => INVALID_CREDENTIALS,
        _ => SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(update: MessageUpdate, previous: Option<&str>) -> Option<String> {
        let mut msg = previous.map(ToString::to_string);
        update.apply(&mut msg);
        msg
    }

    #[test]
    fn comment_submission_messages() {
        for status in [401, 403] {
            assert_eq!(
                after(comment_submission(status), None).as_deref(),
                Some("Invalid credentials, please log back in.")
            );
        }
        assert_eq!(
            after(comment_submission(400), None).as_deref(),
            Some("Incorrect comment formatting.")
        );
        assert_eq!(
            after(comment_submission(500), None).as_deref(),
            Some("Server error, try again later.")
        );
    }

    #[test]
    fn success_clears_previous_message() {
        assert_eq!(after(comment_submission(200), Some(SERVER_ERROR)), None);
    }

    #[test]
    fn unknown_status_keeps_message() {
        assert_eq!(
            after(comment_submission(418), Some(INCORRECT_COMMENT_FORMAT)).as_deref(),
            Some(INCORRECT_COMMENT_FORMAT)
        );
        assert_eq!(after(comment_submission(404), None), None);
    }

    #[test]
    fn community_creation_messages() {
        assert_eq!(community_creation(409), MessageUpdate::Set(COMMUNITY_NAME_TAKEN));
        assert_eq!(community_creation(401), MessageUpdate::Set(INVALID_CREDENTIALS));
        assert_eq!(community_creation(502), MessageUpdate::Set(SERVER_ERROR));
        assert_eq!(community_creation(201), MessageUpdate::Clear);
    }

    #[test]
    fn post_submission_errors() {
        assert_eq!(post_submission_error(403), INVALID_CREDENTIALS);
        assert_eq!(post_submission_error(400), SERVER_ERROR);
    }
}
