use crate::tables;

/// Substitute code point for input that does not decode.
const REPLACEMENT_UNIT: u16 = 0x003F;

/// Substitute byte for code units that do not encode; emitted twice.
const REPLACEMENT_BYTE: u8 = 0x3F;

/// A fixed-width Unicode code unit.
///
/// Every value the codec produces fits in 16 bits, so one unit always
/// holds one whole scalar value; surrogate pairs never occur.
pub trait CodeUnit: Copy + Eq {
  fn from_u16(unit: u16) -> Self;
  fn to_u32(self) -> u32;
}

impl CodeUnit for u16 {
  fn from_u16(unit: u16) -> Self {
    unit
  }

  fn to_u32(self) -> u32 {
    self as u32
  }
}

impl CodeUnit for u32 {
  fn from_u16(unit: u16) -> Self {
    unit as u32
  }

  fn to_u32(self) -> u32 {
    self
  }
}

fn is_lead(b: u8) -> bool {
  (tables::LEAD_MIN..=tables::LEAD_MAX).contains(&b)
}

fn is_trail(b: u8) -> bool {
  (tables::TRAIL_MIN..=tables::TRAIL_MAX).contains(&b)
}

/// Decodes a GBK byte sequence into fixed-width code units.
///
/// Returns the number of code units produced. With `dst = None` only that
/// count is computed and nothing is written; call again with a destination
/// of at least the returned length to fill it (a shorter destination
/// panics).
///
/// Decoding never fails. Bytes ≤ 0x7F pass through unchanged, eligible
/// byte pairs consume two bytes and yield the table entry, and anything
/// else yields one U+003F per byte consumed.
pub fn decode<C: CodeUnit>(src: &[u8], mut dst: Option<&mut [C]>) -> usize {
  let mut len = 0;
  let mut i = 0;

  while i < src.len() {
    let b = src[i];
    let unit = if b <= 0x7F {
      i += 1;
      b as u16
    } else {
      match src.get(i + 1) {
        // A pair is eligible when the lead *or* the trail is in range.
        Some(&trail) if is_lead(b) || is_trail(trail) => {
          i += 2;
          if is_lead(b) && is_trail(trail) {
            tables::decode_entry(b, trail)
          } else {
            // Eligible, but outside the table's index domain.
            REPLACEMENT_UNIT
          }
        }
        _ => {
          i += 1;
          REPLACEMENT_UNIT
        }
      }
    };

    if let Some(dst) = dst.as_deref_mut() {
      dst[len] = C::from_u16(unit);
    }
    len += 1;
  }

  len
}

/// Encodes fixed-width code units into a GBK byte sequence.
///
/// Returns the number of bytes produced, with the same measurement-mode
/// contract as [`decode`]: `dst = None` computes the length only.
///
/// Encoding never fails. Units ≤ 0x7F pass through as one byte, units
/// within the encode table's range emit both stored bytes, and anything
/// else emits the two replacement bytes 0x3F 0x3F.
pub fn encode<C: CodeUnit>(src: &[C], mut dst: Option<&mut [u8]>) -> usize {
  let mut len = 0;

  for &unit in src {
    let unit = unit.to_u32();
    if unit <= 0x7F {
      if let Some(dst) = dst.as_deref_mut() {
        dst[len] = unit as u8;
      }
      len += 1;
    } else {
      let bytes = if (tables::ENCODE_MIN as u32..=tables::ENCODE_MAX as u32)
        .contains(&unit)
      {
        tables::encode_entry(unit as u16)
      } else {
        [REPLACEMENT_BYTE, REPLACEMENT_BYTE]
      };
      if let Some(dst) = dst.as_deref_mut() {
        dst[len] = bytes[0];
        dst[len + 1] = bytes[1];
      }
      len += 2;
    }
  }

  len
}

/// Decodes into a freshly allocated, exactly sized buffer via the two-call
/// protocol.
pub fn decode_to_vec<C: CodeUnit>(src: &[u8]) -> Vec<C> {
  let mut dst = vec![C::from_u16(0); decode::<C>(src, None)];
  decode(src, Some(&mut dst));
  dst
}

/// Encodes into a freshly allocated, exactly sized buffer via the two-call
/// protocol.
pub fn encode_to_vec<C: CodeUnit>(src: &[C]) -> Vec<u8> {
  let mut dst = vec![0; encode(src, None)];
  encode(src, Some(&mut dst));
  dst
}
