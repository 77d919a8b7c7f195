//! User fixtures for creating in-memory test data.

use chrono::{TimeZone, Utc};
use entity::user;

/// Default test user id.
pub const DEFAULT_USER_ID: &str = "user-1";

/// Default test username.
pub const DEFAULT_USERNAME: &str = "player1";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - user_id: `"user-1"`, username: `"player1"`
/// - role: `"user"`, active, not referred
/// - all balances and totals `0.0`, not locked, not suspicious
///
/// # Returns
/// - `user::Model` - In-memory user entity
pub fn entity() -> user::Model {
    user::Model {
        user_id: DEFAULT_USER_ID.to_string(),
        username: DEFAULT_USERNAME.to_string(),
        display_name: None,
        role: "user".to_string(),
        is_active: true,
        referred_by_user_id: None,
        cash_balance: 0.0,
        bonus_balance: 0.0,
        play_credits: 0.0,
        total_deposited: 0.0,
        total_withdrawn: 0.0,
        withdraw_locked: false,
        is_suspicious: false,
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder { entity: entity() }
}

/// Builder for in-memory user entity models.
pub struct UserEntityBuilder {
    entity: user::Model,
}

impl UserEntityBuilder {
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.entity.user_id = user_id.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.entity.username = username.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.entity.role = role.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.entity.is_active = is_active;
        self
    }

    pub fn referred_by(mut self, referrer: Option<String>) -> Self {
        self.entity.referred_by_user_id = referrer;
        self
    }

    /// Sets cash, bonus and play credit balances.
    pub fn balances(mut self, cash: f64, bonus: f64, play_credits: f64) -> Self {
        self.entity.cash_balance = cash;
        self.entity.bonus_balance = bonus;
        self.entity.play_credits = play_credits;
        self
    }

    /// Sets lifetime deposited and withdrawn totals.
    pub fn totals(mut self, deposited: f64, withdrawn: f64) -> Self {
        self.entity.total_deposited = deposited;
        self.entity.total_withdrawn = withdrawn;
        self
    }

    pub fn withdraw_locked(mut self, locked: bool) -> Self {
        self.entity.withdraw_locked = locked;
        self
    }

    pub fn is_suspicious(mut self, suspicious: bool) -> Self {
        self.entity.is_suspicious = suspicious;
        self
    }

    pub fn build(self) -> user::Model {
        self.entity
    }
}
