/// Generate a random RFC4122 v4 identifier as raw 16 bytes
pub fn generate_id_bytes() -> [u8; 16] {
    let mut bytes: [u8; 16] = rand::random();
    // RFC4122 v4
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    bytes
}

/// Generate a random opaque identifier for a deck or slide.
///
/// The identifier is 32 lowercase hex characters with no separators.
pub fn generate_id() -> String {
    format_id(&generate_id_bytes())
}

/// Format raw identifier bytes as 32 lowercase hex characters
pub fn format_id(bytes: &[u8; 16]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
