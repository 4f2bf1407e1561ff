use crate::SameSite;

use std::time::Duration;

use http::HeaderMap;
use http::header::COOKIE;

const EXPIRED_DATE: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Attributes of the session cookie.
///
/// Setting and clearing share `attributes()`: browsers only drop a cookie
/// when name, path and flags match the ones it was set with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSettings {
    pub name: String,
    pub path: String,
    pub secure: bool,
    pub same_site: SameSite,
    pub max_age: Duration,
}

impl CookieSettings {
    /// `Set-Cookie` value delivering `token`
    pub fn session_cookie(&self, token: &str) -> String {
        format!(
            "{}={}; {}; Max-Age={}",
            self.name,
            token,
            self.attributes(),
            self.max_age.as_secs()
        )
    }

    /// `Set-Cookie` value deleting the session cookie
    pub fn clearing_cookie(&self) -> String {
        format!(
            "{}=; {}; Max-Age=0; Expires={}",
            self.name,
            self.attributes(),
            EXPIRED_DATE
        )
    }

    fn attributes(&self) -> String {
        let mut attributes = format!("Path={}; HttpOnly", self.path);
        if self.secure {
            attributes.push_str("; Secure");
        }
        attributes.push_str(&format!("; SameSite={}", self.same_site));
        attributes
    }

    /// Read the session cookie from request headers. Empty values count as absent.
    pub fn read(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|header| header.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, value)| *name == self.name && !value.is_empty())
            .map(|(_, value)| value.to_string())
    }
}
