//! Byte layout constants and little-endian field readers for the wire formats.
//!
//! ```text
//! point set:   u32 N | N × (f32 X, f32 Y)
//! result:      <point set bytes> | u32 M | M × (u32 i1, u32 i2, u32 i3)
//! ```
//!
//! Every field is little-endian.

/// Size of the `u32` count field that opens both formats.
pub const COUNT_FIELD_LEN: usize = 4;

/// Size of a single `f32` coordinate.
pub const COORDINATE_LEN: usize = 4;

/// Size of one encoded point (X then Y).
pub const POINT_RECORD_LEN: usize = 2 * COORDINATE_LEN;

/// Size of one encoded triangle (three `u32` indices).
pub const TRIANGLE_RECORD_LEN: usize = 3 * COUNT_FIELD_LEN;

/// Exact byte length of a point-set payload declaring `count` points.
///
/// Computed in `u64` so that no declared count can overflow.
#[inline]
#[must_use]
pub const fn point_set_len(count: u32) -> u64 {
    COUNT_FIELD_LEN as u64 + POINT_RECORD_LEN as u64 * count as u64
}

/// Reads a little-endian `u32` at `offset`, or `None` if fewer than four bytes remain.
#[inline]
#[must_use]
pub fn read_u32_le(bytes: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(COUNT_FIELD_LEN)?;
    let field: [u8; COUNT_FIELD_LEN] = bytes.get(offset..end)?.try_into().ok()?;
    Some(u32::from_le_bytes(field))
}

/// Reads a little-endian `f32` at `offset`, or `None` if fewer than four bytes remain.
#[inline]
#[must_use]
pub fn read_f32_le(bytes: &[u8], offset: usize) -> Option<f32> {
    let end = offset.checked_add(COORDINATE_LEN)?;
    let field: [u8; COORDINATE_LEN] = bytes.get(offset..end)?.try_into().ok()?;
    Some(f32::from_le_bytes(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_set_len() {
        assert_eq!(point_set_len(0), 4);
        assert_eq!(point_set_len(3), 28);
        assert_eq!(point_set_len(u32::MAX), 4 + 8 * u64::from(u32::MAX));
    }

    #[test]
    fn test_readers() {
        let bytes = [0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x3F];
        assert_eq!(read_u32_le(&bytes, 0), Some(3));
        assert_eq!(read_f32_le(&bytes, 4), Some(1.0));
        assert_eq!(read_f32_le(&bytes, 5), None);
        assert_eq!(read_u32_le(&bytes, usize::MAX), None);
    }
}
