//! UA DateTime: 100-nanosecond ticks since 1601-01-01 UTC

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::binary::{BinaryDecode, BinaryEncode, Reader, Result, Writer};

/// Ticks between 1601-01-01 and 1970-01-01.
const UNIX_EPOCH_TICKS: i64 = 116_444_736_000_000_000;

const TICKS_PER_SECOND: i64 = 10_000_000;
const NANOS_PER_TICK: u32 = 100;

/// A UA timestamp, stored as the raw tick count.
///
/// Zero ticks is the UA null sentinel; conversions that fall outside the
/// representable range clamp to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct DateTime(i64);

impl DateTime {
    pub const NULL: DateTime = DateTime(0);

    pub fn from_ticks(ticks: i64) -> Self {
        DateTime(ticks)
    }

    pub fn ticks(&self) -> i64 {
        self.0
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    /// Convert from host time, clamping anything before 1601 or past the
    /// tick range to the null sentinel.
    pub fn from_system_time(time: SystemTime) -> Self {
        let ticks = match time.duration_since(UNIX_EPOCH) {
            Ok(after) => duration_ticks(after).and_then(|t| UNIX_EPOCH_TICKS.checked_add(t)),
            Err(err) => {
                duration_ticks(err.duration()).and_then(|t| UNIX_EPOCH_TICKS.checked_sub(t))
            }
        };
        match ticks {
            Some(t) if t > 0 => DateTime(t),
            _ => DateTime::NULL,
        }
    }

    /// Convert to host time. The null sentinel maps to 1601-01-01.
    pub fn to_system_time(&self) -> SystemTime {
        let from_unix = self.0 - UNIX_EPOCH_TICKS;
        let secs = from_unix / TICKS_PER_SECOND;
        let sub_ticks = from_unix % TICKS_PER_SECOND;
        if from_unix >= 0 {
            UNIX_EPOCH + Duration::new(secs as u64, sub_ticks as u32 * NANOS_PER_TICK)
        } else {
            let (borrow, sub) = if sub_ticks == 0 {
                (0, 0)
            } else {
                (1, TICKS_PER_SECOND + sub_ticks)
            };
            UNIX_EPOCH - Duration::new((-secs + borrow) as u64, 0)
                + Duration::new(0, sub as u32 * NANOS_PER_TICK)
        }
    }
}

fn duration_ticks(duration: Duration) -> Option<i64> {
    let secs = i64::try_from(duration.as_secs()).ok()?;
    secs.checked_mul(TICKS_PER_SECOND)?
        .checked_add(i64::from(duration.subsec_nanos() / NANOS_PER_TICK))
}

impl BinaryEncode for DateTime {
    fn encode(&self, writer: &mut Writer) -> Result<()> {
        writer.write_i64(self.0);
        Ok(())
    }

    fn byte_len(&self) -> usize {
        8
    }
}

impl BinaryDecode for DateTime {
    fn decode(reader: &mut Reader<'_>) -> Result<Self> {
        Ok(DateTime(reader.read_i64()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2018-08-10T23:00:00Z
    const AUG_10_2018_SECS: u64 = 1_533_942_000;
    const AUG_10_2018_TICKS: i64 = 131_784_156_000_000_000;

    #[test]
    fn known_instant_matches_wire_value() {
        let time = UNIX_EPOCH + Duration::from_secs(AUG_10_2018_SECS);
        let dt = DateTime::from_system_time(time);
        assert_eq!(dt.ticks(), AUG_10_2018_TICKS);

        let mut w = Writer::new();
        dt.encode(&mut w).unwrap();
        assert_eq!(
            w.as_slice(),
            &[0x00, 0x98, 0x67, 0xdd, 0xfd, 0x30, 0xd4, 0x01]
        );
    }

    #[test]
    fn system_time_roundtrip_is_lossless() {
        let time = UNIX_EPOCH + Duration::new(AUG_10_2018_SECS, 123_456_700);
        let dt = DateTime::from_system_time(time);
        assert_eq!(dt.to_system_time(), time);
    }

    #[test]
    fn out_of_range_clamps_to_null() {
        let before_1601 = UNIX_EPOCH - Duration::from_secs(12_000_000_000);
        assert!(DateTime::from_system_time(before_1601).is_null());

        let far_future = UNIX_EPOCH + Duration::from_secs(u64::MAX / 2);
        assert!(DateTime::from_system_time(far_future).is_null());
    }

    #[test]
    fn null_sentinel() {
        assert!(DateTime::NULL.is_null());
        assert!(!DateTime::from_ticks(AUG_10_2018_TICKS).is_null());
    }
}
