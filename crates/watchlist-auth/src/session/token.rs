//! Opaque session tokens.

use std::fmt;

use argon2::password_hash::rand_core::{OsRng, RngCore};

/// Number of random bytes behind a token.
const TOKEN_BYTES: usize = 32;

/// Random identifier of a server-side session, carried in the session cookie.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Draws a fresh token from the OS random number generator.
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// Accepts a client-presented value only if it is well formed.
    pub fn parse(value: &str) -> Option<Self> {
        let well_formed = value.len() == TOKEN_BYTES * 2
            && value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        well_formed.then(|| Self(value.to_string()))
    }

    /// The hex form written into the cookie.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Tokens are bearer secrets; keep them out of debug logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken({}…)", self.0.get(..8).unwrap_or_default())
    }
}
