//! GBK lookup tables, embedded at compile time.
//!
//! The build script derives both tables from `data/GBK.TXT` and writes
//! them to `$OUT_DIR` as binary blobs: `gbk_decode.dat` holds one
//! little-endian u16 per valid double-byte sequence, `gbk_encode.dat` one
//! byte pair per code point in `ENCODE_MIN..=ENCODE_MAX`.

/// First and last valid lead bytes of a double-byte sequence.
pub(crate) const LEAD_MIN: u8 = 0x81;
pub(crate) const LEAD_MAX: u8 = 0xFE;

/// First and last valid trail bytes. 0x7F inside this range is excluded.
pub(crate) const TRAIL_MIN: u8 = 0x40;
pub(crate) const TRAIL_MAX: u8 = 0xFE;

/// Trail bytes per lead byte (0x40..=0xFE minus 0x7F).
const TRAIL_COUNT: usize = 190;

const DECODE_ENTRIES: usize = 126 * TRAIL_COUNT;

/// First and last code points covered by the encode table.
pub(crate) const ENCODE_MIN: u16 = 0x00A4;
pub(crate) const ENCODE_MAX: u16 = 0xFFE5;

const ENCODE_ENTRIES: usize = ENCODE_MAX as usize - ENCODE_MIN as usize + 1;

static DECODE_TABLE: &[u8; DECODE_ENTRIES * 2] =
  include_bytes!(concat!(env!("OUT_DIR"), "/gbk_decode.dat"));

static ENCODE_TABLE: &[u8; ENCODE_ENTRIES * 2] =
  include_bytes!(concat!(env!("OUT_DIR"), "/gbk_encode.dat"));

/// Code point for the double-byte sequence `lead` `trail`.
///
/// `lead` must be within `LEAD_MIN..=LEAD_MAX` and `trail` within
/// `TRAIL_MIN..=TRAIL_MAX`. The excluded trail byte 0x7F has no slot of
/// its own; the index formula maps it onto the slot of trail 0x80.
/// Unassigned sequences hold the replacement code point U+003F.
pub(crate) fn decode_entry(lead: u8, trail: u8) -> u16 {
  let adjust = (trail > 0x7F) as usize;
  let index = (lead - LEAD_MIN) as usize * TRAIL_COUNT
    + ((trail - TRAIL_MIN) as usize - adjust);
  u16::from_le_bytes([DECODE_TABLE[index * 2], DECODE_TABLE[index * 2 + 1]])
}

/// First and last byte of the GBK encoding of `unit`, which must be within
/// `ENCODE_MIN..=ENCODE_MAX`. Slots of code points with no GBK mapping
/// hold the replacement byte 0x3F twice.
pub(crate) fn encode_entry(unit: u16) -> [u8; 2] {
  let index = (unit - ENCODE_MIN) as usize * 2;
  [ENCODE_TABLE[index], ENCODE_TABLE[index + 1]]
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn decode_table_spot_checks() {
    assert_eq!(decode_entry(0x81, 0x40), 0x4E02);
    assert_eq!(decode_entry(0x81, 0x80), 0x4E90);
    assert_eq!(decode_entry(0xA1, 0xA1), 0x3000);
    assert_eq!(decode_entry(0xB0, 0xA1), 0x554A);
    assert_eq!(decode_entry(0xCA, 0xC0), 0x4E16);
    assert_eq!(decode_entry(0xBD, 0xE7), 0x754C);
  }

  #[test]
  fn excluded_trail_aliases_the_next_slot() {
    assert_eq!(decode_entry(0x81, 0x7F), decode_entry(0x81, 0x80));
  }

  #[test]
  fn unassigned_pair_decodes_to_replacement() {
    assert_eq!(decode_entry(0xA1, 0x40), 0x003F);
  }

  #[test]
  fn encode_table_spot_checks() {
    assert_eq!(encode_entry(0x00A4), [0xA1, 0xE8]);
    assert_eq!(encode_entry(0xFFE5), [0xA3, 0xA4]);
    assert_eq!(encode_entry(0x4E16), [0xCA, 0xC0]);
    assert_eq!(encode_entry(0x754C), [0xBD, 0xE7]);
  }

  #[test]
  fn unmappable_code_point_slot_holds_replacement_bytes() {
    assert_eq!(encode_entry(0x00A5), [0x3F, 0x3F]);
  }
}
