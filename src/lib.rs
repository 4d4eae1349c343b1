//! Conversion between the legacy GBK encoding and fixed-width Unicode
//! code-unit sequences (16-bit or 32-bit).
//!
//! The lookup tables behind the codec are generated by the build script
//! from the CP936 mapping dataset in `data/GBK.TXT` and embedded into the
//! binary. The conversions themselves are allocation-free, constant time
//! per element, and never fail: unmappable input is substituted with `?`.

mod codec;
mod tables;

pub use self::codec::{decode, decode_to_vec, encode, encode_to_vec, CodeUnit};
