//! Name hashing for component identifiers and property names.
//!
//! Both the type namespace and descriptor lookups key on the same 32-bit
//! hash, so a property name hashed here can be compared directly against
//! [`PropertyDescriptor::name_hash`](crate::PropertyDescriptor::name_hash).

/// Reflected CRC-32 (IEEE 802.3) polynomial.
const POLYNOMIAL: u32 = 0xEDB8_8320;

static TABLE: [u32; 256] = build_table();

#[allow(clippy::cast_possible_truncation)]
const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 == 0 {
                crc >> 1
            } else {
                (crc >> 1) ^ POLYNOMIAL
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Computes the CRC-32 checksum of `bytes`.
#[must_use]
pub fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = !0u32;
    for &byte in bytes {
        crc = TABLE[((crc ^ u32::from(byte)) & 0xFF) as usize] ^ (crc >> 8);
    }
    !crc
}

/// Hashes a component identifier or property name.
///
/// Deterministic across runs and platforms.
#[must_use]
pub fn name_hash(name: &str) -> u32 {
    crc32(name.as_bytes())
}
