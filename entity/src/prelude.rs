pub use super::game::Entity as Game;
pub use super::order::Entity as Order;
pub use super::referral_client_override::Entity as ReferralClientOverride;
pub use super::referral_earning::Entity as ReferralEarning;
pub use super::referral_global_override::Entity as ReferralGlobalOverride;
pub use super::referral_tier::Entity as ReferralTier;
pub use super::system_settings::Entity as SystemSettings;
pub use super::user::Entity as User;
