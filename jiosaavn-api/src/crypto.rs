//! Stream URL decryption.
//!
//! Song payloads carry `encrypted_media_url`: base64 of a DES-ECB encrypted
//! (PKCS#5 padded) CDN URL, always pointing at the 96 kbps rendition.
//! Flow: base64 decode → DES-ECB(`38346591`) → UTF-8 → swap `_96` for the
//! best available bitrate suffix.

use base64::{Engine, engine::general_purpose::STANDARD as B64};
use des::Des;
use ecb::cipher::{BlockDecryptMut, KeyInit, block_padding::Pkcs7};

use crate::error::{Result, SaavnError};

const MEDIA_KEY: &[u8; 8] = b"38346591";

type DesEcbDec = ecb::Decryptor<Des>;

/// Decrypt an `encrypted_media_url` value into a playable CDN URL.
///
/// `hq` selects the 320 kbps rendition (when the song's `320kbps` flag is
/// set); otherwise 160 kbps.
pub fn decrypt_media_url(encrypted: &str, hq: bool) -> Result<String> {
    let data = B64
        .decode(encrypted.trim())
        .map_err(|e| SaavnError::Other(format!("media url base64: {e}")))?;
    let plain = des_ecb_decrypt(&data)?;
    let url = String::from_utf8(plain)
        .map_err(|e| SaavnError::Other(format!("media url utf-8: {e}")))?;
    let suffix = if hq { "_320." } else { "_160." };
    Ok(url.replace("_96.", suffix))
}

/// DES-ECB decrypt with PKCS#5 unpadding.
fn des_ecb_decrypt(data: &[u8]) -> Result<Vec<u8>> {
    let mut buf = data.to_vec();
    DesEcbDec::new(MEDIA_KEY.into())
        .decrypt_padded_mut::<Pkcs7>(&mut buf)
        .map(<[u8]>::to_vec)
        .map_err(|e| SaavnError::Other(format!("media url decrypt: {e}")))
}

#[cfg(test)]
pub(crate) fn encrypt_media_url(url: &str) -> String {
    use ecb::cipher::BlockEncryptMut;
    type DesEcbEnc = ecb::Encryptor<Des>;

    let len = url.len();
    let mut buf = vec![0u8; len + 8 - len % 8];
    buf[..len].copy_from_slice(url.as_bytes());
    let ct = DesEcbEnc::new(MEDIA_KEY.into())
        .encrypt_padded_mut::<Pkcs7>(&mut buf, len)
        .unwrap();
    B64.encode(ct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrypts_and_upgrades_bitrate() {
        let enc = encrypt_media_url("https://aac.saavncdn.com/815/abc_96.mp4");
        assert_eq!(
            decrypt_media_url(&enc, true).unwrap(),
            "https://aac.saavncdn.com/815/abc_320.mp4"
        );
        assert_eq!(
            decrypt_media_url(&enc, false).unwrap(),
            "https://aac.saavncdn.com/815/abc_160.mp4"
        );
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(decrypt_media_url("%%%not base64", false).is_err());
        // valid base64, but not a whole number of DES blocks
        assert!(decrypt_media_url("YWJj", false).is_err());
    }
}
