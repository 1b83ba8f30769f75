//! Push subscription helpers.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Decode a VAPID public key (URL-safe base64, padding optional) into the
/// raw bytes the Push API expects as `applicationServerKey`.
///
/// Keys are also accepted in the standard alphabet, as some key generators
/// print them that way.
pub fn application_server_key(vapid_public_key: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let normalized: String = vapid_public_key
        .trim()
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect();
    URL_SAFE_NO_PAD.decode(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_url_safe_key() {
        // 0xfb 0xff encodes to "-_8" in the URL-safe alphabet
        assert_eq!(application_server_key("-_8").unwrap(), vec![0xfb, 0xff]);
        assert_eq!(application_server_key("-_8=").unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn test_decode_standard_alphabet() {
        assert_eq!(application_server_key("+/8=").unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn test_uncompressed_p256_key_length() {
        let key = "BEl62iUYgUivxIkv69yViEuiBIa-Ib9-SkvMeAtA3LFgDzkrxZJjSgSnfckjBJuBkr3qBUYIHBQFLXYp5Nksh8U";
        assert_eq!(application_server_key(key).unwrap().len(), 65);
    }

    #[test]
    fn test_invalid_key() {
        assert!(application_server_key("not a key!").is_err());
    }
}
