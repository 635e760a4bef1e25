/// Horizon's rate limit headers. Missing or unparseable headers read as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed per window (`X-Ratelimit-Limit`)
    pub limit: u32,
    /// Requests left in the current window (`X-Ratelimit-Remaining`)
    pub remaining: u32,
    /// Seconds until the window resets (`X-Ratelimit-Reset`)
    pub reset: u32,
}

impl RateLimit {
    /// Collect the rate limit from response headers; names match case-insensitively
    pub fn from_headers<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut rate_limit = RateLimit::default();
        for (name, value) in headers {
            let slot = if name.eq_ignore_ascii_case("x-ratelimit-limit") {
                &mut rate_limit.limit
            } else if name.eq_ignore_ascii_case("x-ratelimit-remaining") {
                &mut rate_limit.remaining
            } else if name.eq_ignore_ascii_case("x-ratelimit-reset") {
                &mut rate_limit.reset
            } else {
                continue;
            };
            if let Ok(parsed) = value.trim().parse() {
                *slot = parsed;
            }
        }
        rate_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_headers() {
        let headers = [
            ("X-Ratelimit-Limit", "3600"),
            ("x-ratelimit-remaining", "3599"),
            ("X-RATELIMIT-RESET", "12"),
            ("Content-Type", "application/hal+json"),
        ];
        assert_eq!(
            RateLimit::from_headers(headers),
            RateLimit {
                limit: 3600,
                remaining: 3599,
                reset: 12,
            }
        );
    }

    #[test]
    fn test_missing_or_bad_headers() {
        let rate_limit = RateLimit::from_headers([("X-Ratelimit-Limit", "lots")]);
        assert_eq!(rate_limit, RateLimit::default());
        assert_eq!(RateLimit::from_headers(std::iter::empty()), RateLimit::default());
    }
}
