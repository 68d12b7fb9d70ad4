//! Host time-sync line protocol
//!
//! The host sends `T <unix seconds>` terminated by `\n` (a `\r` anywhere is
//! ignored). Each complete line gets one reply line:
//!
//! | Reply          | Meaning                                       |
//! |----------------|-----------------------------------------------|
//! | `OK`           | Clock set                                     |
//! | `ERR fmt`      | Line is not `T` followed by an integer        |
//! | `ERR range`    | Epoch outside (1_700_000_000, 4_102_444_800)  |
//! | `ERR overflow` | Line too long; the partial line is discarded  |

use heapless::Vec;

/// Receive buffer size; a line may hold one byte less
pub const LINE_CAPACITY: usize = 64;

/// Epochs at or below this are rejected (mid-November 2023)
pub const MIN_EPOCH: u64 = 1_700_000_000;

/// Epochs at or above this are rejected (2100-01-01)
pub const MAX_EPOCH: u64 = 4_102_444_800;

/// Reasons a sync line is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncError {
    /// Not `T <integer>`
    Format,
    /// Integer outside the accepted window
    Range,
    /// Line exceeded the receive buffer
    Overflow,
}

impl SyncError {
    pub fn reply(&self) -> &'static str {
        match self {
            SyncError::Format => "ERR fmt",
            SyncError::Range => "ERR range",
            SyncError::Overflow => "ERR overflow",
        }
    }
}

/// Outcome of a completed (or overflowed) line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncEvent {
    /// Valid UTC epoch seconds
    SetEpoch(u64),
    Error(SyncError),
}

impl SyncEvent {
    /// Reply line to send back, without the newline
    pub fn reply(&self) -> &'static str {
        match self {
            SyncEvent::SetEpoch(_) => "OK",
            SyncEvent::Error(e) => e.reply(),
        }
    }
}

/// Byte-at-a-time line assembler
#[derive(Debug, Default)]
pub struct TimeSyncParser {
    buf: Vec<u8, LINE_CAPACITY>,
}

impl TimeSyncParser {
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Feed one received byte
    pub fn feed(&mut self, byte: u8) -> Option<SyncEvent> {
        match byte {
            b'\r' => None,
            b'\n' => {
                let event = match parse_line(&self.buf) {
                    Ok(epoch) => SyncEvent::SetEpoch(epoch),
                    Err(e) => SyncEvent::Error(e),
                };
                self.buf.clear();
                Some(event)
            }
            _ if self.buf.len() + 1 < LINE_CAPACITY => {
                // Cannot fail: length checked above
                let _ = self.buf.push(byte);
                None
            }
            _ => {
                self.buf.clear();
                Some(SyncEvent::Error(SyncError::Overflow))
            }
        }
    }

    /// Bytes buffered for the current line
    pub fn pending(&self) -> usize {
        self.buf.len()
    }
}

/// Parse one line without its terminator
///
/// Accepts `T`, optional whitespace, an optionally signed decimal integer,
/// and ignores anything after the digits.
pub fn parse_line(line: &[u8]) -> Result<u64, SyncError> {
    let rest = match line.split_first() {
        Some((b'T', rest)) => rest,
        _ => return Err(SyncError::Format),
    };

    let start = rest
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .ok_or(SyncError::Format)?;
    let rest = &rest[start..];

    let (negative, digits) = match rest.split_first() {
        Some((b'-', d)) => (true, d),
        Some((b'+', d)) => (false, d),
        _ => (false, rest),
    };

    let len = digits.iter().take_while(|b| b.is_ascii_digit()).count();
    if len == 0 {
        return Err(SyncError::Format);
    }

    let mut value: u64 = 0;
    for &d in &digits[..len] {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((d - b'0') as u64))
            .ok_or(SyncError::Range)?;
    }

    if negative || value <= MIN_EPOCH || value >= MAX_EPOCH {
        return Err(SyncError::Range);
    }
    Ok(value)
}
