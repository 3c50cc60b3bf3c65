use crate::core::clock::ClockSession;
use crate::models::theme::Theme;
use crate::models::user::UserRecord;

/// Who is logged in, the clock status and the current theme.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionState {
    pub user: Option<UserRecord>,
    pub clock: ClockSession,
    pub theme: Theme,
}

impl SessionState {
    pub fn new(theme: Theme, clock: ClockSession) -> Self {
        Self {
            user: None,
            clock,
            theme,
        }
    }

    pub fn logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn login(&mut self, user: UserRecord) {
        self.user = Some(user);
    }

    /// Drops the user and always ends the clock session.
    pub fn logout(&mut self) {
        self.user = None;
        self.clock = ClockSession::ClockedOut;
    }
}
