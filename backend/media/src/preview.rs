//! Locally resolvable previews for captured images.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode image bytes as a `data:` URL the UI can render directly.
pub fn data_url(mime: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_shape() {
        let url = data_url("image/jpeg", &[0xFF, 0xD8, 0xFF]);
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn data_url_round_trips() {
        let payload = b"plant bytes";
        let url = data_url("image/png", payload);
        let b64 = url.rsplit(',').next().unwrap();
        assert_eq!(STANDARD.decode(b64).unwrap(), payload);
    }
}
