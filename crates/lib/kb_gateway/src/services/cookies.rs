//! Cookie service — set/get/clear the httpOnly session cookie pair.
//!
//! Cookie names match the backend token fields: `access_token`, `refresh_token`.
//! Both cookies are always set together and cleared together.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// Cookie name for the access token.
pub const ACCESS_COOKIE: &str = "access_token";
/// Cookie name for the refresh token.
pub const REFRESH_COOKIE: &str = "refresh_token";

/// Access cookie lifetime: 24 hours.
pub const ACCESS_MAX_AGE_SECS: i64 = 86_400;
/// Refresh cookie lifetime: 7 days.
pub const REFRESH_MAX_AGE_SECS: i64 = 604_800;

fn session_cookie(name: &str, value: String, max_age: Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((name.to_string(), value))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .path("/".to_string())
        .max_age(max_age)
        .build()
}

/// Build the httpOnly cookie for the access token.
pub fn access_cookie(token: &str, secure: bool) -> Cookie<'static> {
    session_cookie(
        ACCESS_COOKIE,
        token.to_string(),
        Duration::seconds(ACCESS_MAX_AGE_SECS),
        secure,
    )
}

/// Build the httpOnly cookie for the refresh token.
pub fn refresh_cookie(token: &str, secure: bool) -> Cookie<'static> {
    session_cookie(
        REFRESH_COOKIE,
        token.to_string(),
        Duration::seconds(REFRESH_MAX_AGE_SECS),
        secure,
    )
}

/// Build an expired access cookie to clear auth state.
pub fn clear_access_cookie(secure: bool) -> Cookie<'static> {
    session_cookie(ACCESS_COOKIE, String::new(), Duration::ZERO, secure)
}

/// Build an expired refresh cookie to clear auth state.
pub fn clear_refresh_cookie(secure: bool) -> Cookie<'static> {
    session_cookie(REFRESH_COOKIE, String::new(), Duration::ZERO, secure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_cookie_attributes() {
        let c = access_cookie("tok", false);
        assert_eq!(c.name(), "access_token");
        assert_eq!(c.value(), "tok");
        assert_eq!(c.http_only(), Some(true));
        assert_eq!(c.secure(), Some(false));
        assert_eq!(c.same_site(), Some(SameSite::Strict));
        assert_eq!(c.path(), Some("/"));
        assert_eq!(c.max_age(), Some(Duration::seconds(86_400)));
    }

    #[test]
    fn refresh_cookie_lives_seven_days() {
        let c = refresh_cookie("tok", false);
        assert_eq!(c.name(), "refresh_token");
        assert_eq!(c.max_age(), Some(Duration::seconds(604_800)));
    }

    #[test]
    fn secure_flag_follows_production_mode() {
        assert_eq!(access_cookie("tok", true).secure(), Some(true));
        assert_eq!(refresh_cookie("tok", true).secure(), Some(true));
        assert_eq!(clear_access_cookie(true).secure(), Some(true));
    }

    #[test]
    fn clear_cookies_expire_immediately() {
        let a = clear_access_cookie(false);
        let r = clear_refresh_cookie(false);
        assert_eq!(a.max_age(), Some(Duration::ZERO));
        assert_eq!(r.max_age(), Some(Duration::ZERO));
        assert_eq!(a.value(), "");
        assert_eq!(r.value(), "");
    }
}
