//! Content-derived error identifiers.

use sha2::{Digest, Sha256};

/// Returns the identifier of an error: the lowercase hex SHA-256 of its
/// payload field names, sorted byte-wise, followed by the error name, all
/// joined with `,`.
///
/// Field types and the HTTP code play no part, so changing either keeps the
/// identifier stable.
pub fn identifier_for<'a, I>(name: &str, field_names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut parts: Vec<&str> = field_names.into_iter().collect();
    parts.sort_unstable();
    parts.push(name);
    to_hex(&hash_bytes(parts.join(",").as_bytes()))
}

pub fn hash_bytes(bytes: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let result = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&result);
    out
}

fn to_hex(bytes: &[u8; 32]) -> String {
    let mut out = String::with_capacity(64);
    for b in bytes {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
