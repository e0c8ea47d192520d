//! Base URL of the management backend.
//!
//! Overridable at build time with `INENG_API_BASE_URL`; defaults to the local
//! development server. A trailing slash is tolerated and stripped so path
//! joining stays uniform.

const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

pub fn base_url() -> String {
    option_env!("INENG_API_BASE_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_no_trailing_slash() {
        assert!(!base_url().ends_with('/'));
    }
}
