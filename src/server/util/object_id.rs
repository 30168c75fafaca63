//! Document identifiers assigned by the character store.
//!
//! An `ObjectId` is 12 bytes rendered as 24 lowercase hexadecimal characters:
//!
//! | Bytes | Content                                        |
//! |-------|------------------------------------------------|
//! | 0..4  | Unix timestamp in seconds, big-endian          |
//! | 4..9  | Random value chosen once per process           |
//! | 9..12 | Counter seeded randomly per process, big-endian |
//!
//! Any string that is not exactly 24 hexadecimal characters is rejected with
//! `ParseObjectIdError`, which the API reports as a malformed id.

use std::{
    fmt,
    str::FromStr,
    sync::{
        atomic::{AtomicU32, Ordering},
        LazyLock,
    },
};

use chrono::Utc;
use rand::Rng;
use thiserror::Error;

const COUNTER_MASK: u32 = 0x00ff_ffff;

static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(|| {
    let mut bytes = [0u8; 5];
    rand::rng().fill(&mut bytes);
    bytes
});

static COUNTER: LazyLock<AtomicU32> =
    LazyLock::new(|| AtomicU32::new(rand::random::<u32>() & COUNTER_MASK));

/// Failure to interpret a string as an `ObjectId`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cast to ObjectId failed for value \"{value}\"")]
pub struct ParseObjectIdError {
    /// The rejected input.
    pub value: String,
}

/// Identifier of a stored character document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Generates a fresh identifier from the current time, the process value and
    /// the next counter value.
    pub fn new() -> Self {
        let timestamp = Utc::now().timestamp() as u32;
        let counter = COUNTER.fetch_add(1, Ordering::Relaxed) & COUNTER_MASK;

        let mut bytes = [0u8; 12];
        bytes[0..4].copy_from_slice(&timestamp.to_be_bytes());
        bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
        bytes[9..12].copy_from_slice(&counter.to_be_bytes()[1..4]);

        Self(bytes)
    }

    /// Parses a 24 character hexadecimal string. Both cases are accepted.
    ///
    /// # Returns
    /// - `Ok(ObjectId)` - Input was a well-formed identifier
    /// - `Err(ParseObjectIdError)` - Wrong length or a non-hexadecimal character
    pub fn parse(value: &str) -> Result<Self, ParseObjectIdError> {
        let error = || ParseObjectIdError {
            value: value.to_string(),
        };

        let raw = value.as_bytes();
        if raw.len() != 24 {
            return Err(error());
        }

        let mut bytes = [0u8; 12];
        for (byte, pair) in bytes.iter_mut().zip(raw.chunks_exact(2)) {
            let high = hex_value(pair[0]).ok_or_else(error)?;
            let low = hex_value(pair[1]).ok_or_else(error)?;
            *byte = (high << 4) | low;
        }

        Ok(Self(bytes))
    }

    /// Seconds since the Unix epoch at which this identifier was generated.
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ObjectId {
    type Err = ParseObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
