//! Cookie Management Infrastructure
//!
//! Session cookie construction and lookup.

use axum::http::{HeaderMap, header};

/// Value written into a cleared cookie
pub const CLEARED_VALUE: &str = "null";

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    #[default]
    Strict,
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie configuration
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age_secs: Option<i64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "token".to_string(),
            secure: false,
            http_only: true,
            same_site: SameSite::Strict,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

impl CookieConfig {
    /// Build Set-Cookie header value
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut cookie = format!("{}={}", self.name, value);
        self.push_attributes(&mut cookie);

        if let Some(max_age) = self.max_age_secs {
            cookie.push_str(&format!("; Max-Age={}", max_age));
        }

        cookie
    }

    /// Build Set-Cookie header that overwrites the cookie with a sentinel
    /// and expires it immediately
    ///
    /// Uses the same Path/SameSite/Secure attributes as the issuing cookie,
    /// otherwise the browser treats it as a different cookie.
    pub fn build_delete_cookie(&self) -> String {
        let mut cookie = format!("{}={}", self.name, CLEARED_VALUE);
        self.push_attributes(&mut cookie);
        cookie.push_str("; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT");
        cookie
    }

    fn push_attributes(&self, cookie: &mut String) {
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site.as_str()));
        cookie.push_str(&format!("; Path={}", self.path));
    }
}

/// Result of looking a named cookie up in the request headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieLookup {
    /// The request carried no Cookie header at all
    NoCookies,
    /// Cookies were sent, but the named one is missing or empty
    Missing,
    /// The named cookie and its value
    Found(String),
}

/// Find a cookie by name across every Cookie header of the request
///
/// HTTP/2 clients may split cookies over several headers.
pub fn lookup_cookie(headers: &HeaderMap, name: &str) -> CookieLookup {
    let mut saw_cookie_header = false;

    for value in headers.get_all(header::COOKIE) {
        let Ok(raw) = value.to_str() else {
            continue;
        };
        if raw.trim().is_empty() {
            continue;
        }
        saw_cookie_header = true;

        // An empty pair does not hide a later one with the same name
        let found = raw.split(';').find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            let value = value.trim().trim_matches('"');
            (key.trim() == name && !value.is_empty()).then(|| value.to_string())
        });

        if let Some(value) = found {
            return CookieLookup::Found(value);
        }
    }

    if saw_cookie_header {
        CookieLookup::Missing
    } else {
        CookieLookup::NoCookies
    }
}
