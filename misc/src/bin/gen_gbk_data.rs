use std::fs::File;
use std::io::prelude::*;

// Derives data/GBK.TXT from the unicode.org CP936 mapping file. Run from
// the repository root with CP936.TXT next to it; the build script consumes
// the output. Single-byte codes and undefined lead-byte entries are
// dropped, leaving only assigned double-byte codes.
fn main() {
  let mut in_file = File::open("CP936.TXT").unwrap();
  let mut s = String::new();
  in_file.read_to_string(&mut s).unwrap();

  let mut mapping: Vec<(u32, u32)> = s
    .lines()
    .filter(|line| !line.starts_with('#'))
    .filter_map(|line| {
      let segments: Vec<_> = line.split('\t').take(2).collect();
      if segments.len() < 2 || !segments[1].starts_with("0x") {
        return None;
      }
      let gbk = u32::from_str_radix(&segments[0][2..], 16).unwrap();
      let unicode = u32::from_str_radix(&segments[1][2..], 16).unwrap();
      if gbk <= 0xFF {
        return None;
      }
      Some((gbk, unicode))
    })
    .collect();
  mapping.sort();

  let mut out_file = File::create("data/GBK.TXT").unwrap();
  writeln!(out_file, "# GBK (CP936) double-byte code to Unicode mapping")
    .unwrap();
  writeln!(
    out_file,
    "# Columns: GBK code (lead byte << 8 | trail byte), Unicode code point"
  )
  .unwrap();
  writeln!(out_file, "#").unwrap();
  for (gbk, unicode) in mapping {
    writeln!(out_file, "0x{:04X}\t0x{:04X}", gbk, unicode).unwrap();
  }
}
