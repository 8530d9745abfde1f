//! One-shot flash notice transport.
//!
//! The notice set by a redirecting handler rides a short-lived cookie: the
//! redirect response sets it, the next HTML render reads it and sends a
//! clearing `Set-Cookie` so the message appears exactly once.

use axum::http::{HeaderMap, header};

const FLASH_COOKIE_NAME: &str = "flash_notice";

/// Builds the `Set-Cookie` value carrying a notice to the next request.
#[must_use]
pub fn set_header_value(notice: &str) -> String {
    format!(
        "{FLASH_COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Lax",
        encode(notice)
    )
}

/// Builds the `Set-Cookie` value that expires a consumed notice.
#[must_use]
pub fn clear_header_value() -> String {
    format!("{FLASH_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// Reads a pending notice from the request headers.
///
/// Returns `None` when no notice is pending or the cookie value does not
/// decode.
#[must_use]
pub fn read(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == FLASH_COOKIE_NAME)
        .and_then(|(_, value)| decode(value))
        .filter(|notice| !notice.is_empty())
}

/// Percent-encodes a notice for use as a cookie value.
fn encode(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(char::from(byte));
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

/// Decodes a percent-encoded cookie value.
fn decode(value: &str) -> Option<String> {
    let mut bytes = Vec::with_capacity(value.len());
    let mut iter = value.bytes();
    while let Some(byte) = iter.next() {
        if byte == b'%' {
            let high = hex_value(iter.next()?)?;
            let low = hex_value(iter.next()?)?;
            bytes.push(high * 16 + low);
        } else {
            bytes.push(byte);
        }
    }
    String::from_utf8(bytes).ok()
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
