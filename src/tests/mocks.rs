use std::ops::Add;
use std::time::{Duration, SystemTime};

use crate::totp::GetTime;
use crate::writer::OutErr;

pub struct MockCodeWriter {
    pub out: Vec<u8>,
    pub err: Vec<u8>,
}

impl MockCodeWriter {
    pub fn new() -> Self {
        MockCodeWriter {
            out: Vec::new(),
            err: Vec::new(),
        }
    }

    pub fn out_str(&self) -> &str {
        std::str::from_utf8(&self.out).unwrap()
    }

    pub fn err_str(&self) -> &str {
        std::str::from_utf8(&self.err).unwrap()
    }
}

impl OutErr for MockCodeWriter {
    fn write_err(&mut self, s: &str) {
        self.err.extend_from_slice(s.as_bytes());
    }

    fn write(&mut self, s: &str) {
        self.out.extend_from_slice(s.as_bytes());
    }
}

// Fixed clock, 90 seconds after the epoch unless told otherwise
pub struct MockClock {
    secs: u64,
}

impl MockClock {
    pub fn new() -> Self {
        MockClock::at(90)
    }

    pub fn at(secs: u64) -> Self {
        MockClock { secs }
    }
}

impl GetTime for MockClock {
    fn get_now(&self) -> SystemTime {
        SystemTime::UNIX_EPOCH.add(Duration::new(self.secs, 0))
    }
}
