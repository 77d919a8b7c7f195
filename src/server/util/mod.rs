pub mod number;
pub mod timezone;
