/// Renders bytes as their decimal values separated by ", ".
pub fn format_byte_values(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
