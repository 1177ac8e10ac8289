//! Hex text → header bytes

use thiserror::Error;

/// Errors parsing user-supplied hex
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// Parse hex, ignoring an optional `0x` prefix and any whitespace
pub fn parse_hex(text: &str) -> Result<Vec<u8>, InputError> {
    let text = text.trim();
    let text = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(hex::decode(compact)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_accepts_prefix_and_whitespace() {
        assert_eq!(parse_hex("0xdeadBEEF").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(parse_hex(" de ad\nbe\tef ").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(parse_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(matches!(parse_hex("0xabc"), Err(InputError::Hex(_))));
        assert!(matches!(parse_hex("zz"), Err(InputError::Hex(_))));
    }

}
