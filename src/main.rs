use authcode::cmd::{command, run_code};
use authcode::totp::Clock;
use authcode::writer::ConsoleWriter;

fn main() {
    env_logger::init();

    let matches = command().get_matches();
    let mut writer = ConsoleWriter::new();

    let status = run_code(&matches, &Clock::new(), &mut writer);
    std::process::exit(status);
}
