//! Google Authenticator compatible one-time codes.
//!
//! A strict RFC 4648 base32 decoder feeds an RFC 6238 TOTP generator
//! (HMAC-SHA1, 30 second steps, 6 digits).

pub mod base32;
pub mod cmd;
pub mod error;
pub mod hotp;
pub mod totp;
pub mod utils;
pub mod writer;

#[cfg(test)]
mod tests;

pub use error::DecodeError;
pub use totp::{generate, generate_with_clock, get_code, get_code_with_time_slice, Clock, GetTime};
