//! Credentials embedded in the userinfo part of an RPC endpoint URL.

use base64::Engine;
use std::fmt;

/// Marker that turns userinfo into an aria2 `--rpc-secret` directive.
const TOKEN_MARKER: &str = "token:";

/// How the aria2 daemon expects to be authenticated.
///
/// A token travels in-band as the first JSON-RPC param; basic auth travels as
/// an `Authorization` header. A request never carries both.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// Raw `token:<secret>` directive, passed through unchanged.
    Token(String),
    /// Complete `Basic <base64(user:pass)>` header value.
    Basic(String),
}

impl Credential {
    /// Builds a credential from the decoded `user:password` pair.
    pub fn from_userinfo(userinfo: &str) -> Self {
        if userinfo.contains(TOKEN_MARKER) {
            Credential::Token(userinfo.to_string())
        } else {
            let encoded = base64::engine::general_purpose::STANDARD.encode(userinfo);
            Credential::Basic(format!("Basic {encoded}"))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Credential::Token(s) | Credential::Basic(s) => s,
        }
    }
}

/// Never print secrets into logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credential::Token(_) => f.write_str("Token(<hidden>)"),
            Credential::Basic(_) => f.write_str("Basic(<hidden>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_userinfo_is_basic() {
        let c = Credential::from_userinfo("u:p");
        assert_eq!(c, Credential::Basic("Basic dTpw".to_string()));
    }

    #[test]
    fn token_directive_passes_through() {
        let c = Credential::from_userinfo("token:s3cret");
        assert_eq!(c, Credential::Token("token:s3cret".to_string()));
        assert_eq!(c.as_str(), "token:s3cret");
    }

    #[test]
    fn debug_hides_secret() {
        let c = Credential::from_userinfo("token:s3cret");
        let dbg = format!("{c:?}");
        assert!(!dbg.contains("s3cret"));
    }
}
