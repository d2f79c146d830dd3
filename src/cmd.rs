use clap::{arg, command, ArgMatches, Command};
use log::debug;

use crate::totp::{generate_with_clock, GetTime};
use crate::writer::OutErr;

pub const EXIT_OK: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

pub fn command() -> Command<'static> {
    command!()
        .about("Print the current Google Authenticator code for a base32 secret")
        .args(&[arg!(<SECRET> "Base32 encoded shared secret (A-Z, 2-7, '=' padding)")])
}

/// Print the code for the current time slice, or the reason the secret was
/// rejected. Returns the process exit status.
pub fn run_code<W, C>(code_args: &ArgMatches, clock: &C, writer: &mut W) -> i32
where
    W: OutErr,
    C: GetTime,
{
    let secret = match code_args.value_of("SECRET") {
        Some(secret) => secret,
        None => {
            writer.write_err("lack argument\n");
            return EXIT_USAGE;
        }
    };

    match generate_with_clock(secret, None, clock) {
        Ok(code) => {
            writer.write(&format!("{}\n", code));
            EXIT_OK
        }
        Err(err) => {
            debug!("secret rejected: {:?}", err);
            writer.write_err(&format!("{}\n", err));
            EXIT_FAILURE
        }
    }
}
