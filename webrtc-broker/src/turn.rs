/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Time-limited TURN credential derivation (RFC 5766-style).
//!
//! The relay server holds the same shared secret and recomputes the HMAC
//! from the username it receives, so nothing beyond the username/password
//! pair needs to be transmitted: the expiry timestamp is embedded in the
//! username itself.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Days, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Derive a TURN password: base64(HMAC-SHA1(key = secret, message = username)).
///
/// Deterministic and total — any inputs, including empty strings, produce a
/// well-formed output.
pub fn generate_turn_password(username: &str, secret: &str) -> String {
    let mut mac =
        HmacSha1::new_from_slice(secret.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(username.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Build the time-scoped TURN username: `"<unix-ts>:<base_username>"`.
///
/// The timestamp is the end of the next calendar day (23:59:59 UTC), giving
/// the credential a validity window between roughly 24 and 48 hours
/// depending on the time of generation.
pub fn turn_username(base_username: &str, now: DateTime<Utc>) -> String {
    format!("{}:{}", credential_expiry(now), base_username)
}

/// Unix seconds of 23:59:59 UTC one calendar day after `now`.
fn credential_expiry(now: DateTime<Utc>) -> i64 {
    let next_day = now.date_naive() + Days::new(1);
    next_day
        .and_hms_opt(23, 59, 59)
        .expect("23:59:59 is a valid time of day")
        .and_utc()
        .timestamp()
}
