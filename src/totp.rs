use log::debug;
use std::time::SystemTime;

use crate::base32;
use crate::error::DecodeError;
use crate::hotp::get_hotp;
use crate::utils::format_code;

// TOTP https://datatracker.ietf.org/doc/html/rfc6238

// HOTP over SHA-1 with a time-based moving factor, 30 second steps,
// as used by Google Authenticator

pub const TIME_STEP: u64 = 30;

pub trait GetTime {
    fn get_now(&self) -> SystemTime;
}

/// The system wall clock.
#[derive(Debug, Default)]
pub struct Clock {}

impl Clock {
    pub fn new() -> Self {
        Clock {}
    }
}

impl GetTime for Clock {
    fn get_now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Number of whole 30 second steps since the Unix epoch, truncated to 32 bits.
/// A clock reading before the epoch counts as step 0.
pub fn get_time_slice(clock: &impl GetTime) -> u32 {
    let secs = clock
        .get_now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    (secs / TIME_STEP) as u32
}

/// Compute the 6 digit code for `secret` at `time_slice`, reading `clock`
/// only when no time slice is given.
///
/// The time slice becomes the low 32 bits of the 8-byte big-endian HOTP
/// counter. `Some(0)` is a real time slice, distinct from `None`.
pub fn generate_with_clock(
    secret: &str,
    time_slice: Option<u32>,
    clock: &impl GetTime,
) -> Result<String, DecodeError> {
    let time_slice = time_slice.unwrap_or_else(|| get_time_slice(clock));
    debug!("generating code for time slice {}", time_slice);

    let key = base32::decode(secret)?;
    debug!("decoded {} byte key", key.len());

    let value = get_hotp(&key, u64::from(time_slice));
    Ok(format_code(value))
}

/// [`generate_with_clock`] against the system clock.
pub fn generate(secret: &str, time_slice: Option<u32>) -> Result<String, DecodeError> {
    generate_with_clock(secret, time_slice, &Clock::new())
}

/// The code for the current 30 second window.
pub fn get_code(secret: &str) -> Result<String, DecodeError> {
    generate(secret, None)
}

/// Like [`generate`], but a time slice of `0` means "now".
///
/// Kept for callers that pass a bare integer and rely on zero as the unset
/// value; time slice 0 itself cannot be requested through this function.
pub fn get_code_with_time_slice(secret: &str, time_slice: u32) -> Result<String, DecodeError> {
    generate(secret, sentinel_time_slice(time_slice))
}

fn sentinel_time_slice(time_slice: u32) -> Option<u32> {
    match time_slice {
        0 => None,
        t => Some(t),
    }
}
