use clap::ArgMatches;

use crate::cmd::command;

pub fn get_cmd_args(arg_vec: &[&str]) -> Result<ArgMatches, clap::Error> {
    command().try_get_matches_from(arg_vec)
}
