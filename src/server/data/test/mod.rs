mod client_override;
mod global_override;
mod order;
mod referral_earning;
mod settings;
mod tier;
mod user;
