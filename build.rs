use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
  let oracle = MappingOracle::load("data/GBK.TXT")?;

  let decode_table = generate_decode_table(&oracle)?;
  let encode_table = generate_encode_table(&oracle)?;

  let out_dir = env::var("OUT_DIR")?;

  fs::write(Path::new(&out_dir).join("gbk_decode.dat"), decode_table)?;
  fs::write(Path::new(&out_dir).join("gbk_encode.dat"), encode_table)?;

  Ok(())
}

/// GBK ↔ Unicode correspondences parsed from the mapping data file.
///
/// Stands in for a platform GBK codec: input with no assigned mapping
/// converts to the `?` replacement, the same lossy fallback such codecs
/// apply.
struct MappingOracle {
  to_unicode: HashMap<u16, u16>,
  to_gbk: HashMap<u16, u16>,
}

impl MappingOracle {
  fn load(path: &str) -> Result<Self, Box<dyn Error>> {
    println!("cargo:rerun-if-changed={}", path);

    let file = fs::read_to_string(path)?;
    let mut to_unicode = HashMap::new();
    let mut to_gbk = HashMap::new();

    for line in file.lines() {
      if line.starts_with('#') || line.is_empty() {
        continue;
      }

      let segments = line.split_whitespace().take(2).collect::<Vec<_>>();
      let gbk = u16::from_str_radix(&segments[0][2..], 16)?;
      let unicode = u16::from_str_radix(&segments[1][2..], 16)?;

      to_unicode.insert(gbk, unicode);
      to_gbk.insert(unicode, gbk);
    }

    Ok(Self { to_unicode, to_gbk })
  }

  /// Decodes a double-byte sequence to Unicode scalar values.
  fn decode_pair(&self, lead: u8, trail: u8) -> Vec<u16> {
    let code = ((lead as u16) << 8) | trail as u16;
    match self.to_unicode.get(&code) {
      Some(&unicode) => vec![unicode],
      None => vec![0x003F],
    }
  }

  /// Encodes a Unicode scalar value to GBK bytes.
  fn encode_scalar(&self, unit: u16) -> Vec<u8> {
    if unit <= 0x7F {
      return vec![unit as u8];
    }
    match self.to_gbk.get(&unit) {
      Some(&code) => vec![(code >> 8) as u8, code as u8],
      None => vec![0x3F],
    }
  }
}

/// One little-endian u16 per valid double-byte sequence: lead byte
/// 0x81..=0xFE, trail byte 0x40..=0xFE skipping 0x7F, lead-major order.
fn generate_decode_table(
  oracle: &MappingOracle,
) -> Result<Vec<u8>, Box<dyn Error>> {
  let mut table = Vec::with_capacity(126 * 190 * 2);

  for lead in 0x81..=0xFEu8 {
    for trail in 0x40..=0xFEu8 {
      if trail == 0x7F {
        continue;
      }

      let scalars = oracle.decode_pair(lead, trail);
      if scalars.len() != 1 {
        return Err(
          format!(
            "0x{:02X} 0x{:02X} decodes to {} scalars, expected 1",
            lead,
            trail,
            scalars.len()
          )
          .into(),
        );
      }
      table.extend_from_slice(&scalars[0].to_le_bytes());
    }
  }

  Ok(table)
}

/// First and last encoded byte for every code point in U+00A4..=U+FFE5, in
/// code point order. Single-byte encodings store the same byte twice.
fn generate_encode_table(
  oracle: &MappingOracle,
) -> Result<Vec<u8>, Box<dyn Error>> {
  let mut table = Vec::with_capacity((0xFFE5 - 0xA4 + 1) * 2);

  for unit in 0xA4..=0xFFE5u16 {
    let bytes = oracle.encode_scalar(unit);
    if bytes.is_empty() || bytes.len() > 2 {
      return Err(
        format!(
          "U+{:04X} encodes to {} bytes, expected 1 or 2",
          unit,
          bytes.len()
        )
        .into(),
      );
    }
    table.push(bytes[0]);
    table.push(bytes[bytes.len() - 1]);
  }

  Ok(table)
}
