/// Parse `--max-field-len`, rejecting zero
pub fn parse_capacity(s: &str) -> Result<usize, String> {
    let bytes: usize = s
        .parse()
        .map_err(|_| format!("invalid byte count '{}'", s))?;
    if bytes == 0 {
        return Err("field length must be at least 1 byte".to_string());
    }
    Ok(bytes)
}
