//! Classification of non-200 responses into operator-facing hints.

use reqwest::StatusCode;

/// Short hint appended to the message of a rejected request.
///
/// Takes a reference so it can be called from `thiserror` format arguments.
pub fn status_hint(status: &u16) -> &'static str {
    let Ok(status) = StatusCode::from_u16(*status) else {
        return "";
    };

    match status {
        StatusCode::UNAUTHORIZED => " (invalid or missing token, check your FREESOUND_API_KEY)",
        StatusCode::FORBIDDEN => " (access to this resource is forbidden)",
        StatusCode::NOT_FOUND => " (the requested resource was not found)",
        StatusCode::TOO_MANY_REQUESTS => " (too many requests, try again later)",
        s if s.is_client_error() => " (the request was rejected)",
        s if s.is_server_error() => " (server error)",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_hint_unauthorized() {
        assert!(status_hint(&401).contains("FREESOUND_API_KEY"));
    }

    #[test]
    fn test_status_hint_not_found() {
        assert!(status_hint(&404).contains("not found"));
    }

    #[test]
    fn test_status_hint_rate_limit() {
        assert!(status_hint(&429).contains("too many requests"));
    }

    #[test]
    fn test_status_hint_other_client_error() {
        assert_eq!(status_hint(&400), " (the request was rejected)");
    }

    #[test]
    fn test_status_hint_server_error() {
        assert_eq!(status_hint(&503), " (server error)");
    }

    #[test]
    fn test_status_hint_redirect_and_invalid() {
        assert_eq!(status_hint(&302), "");
        assert_eq!(status_hint(&42), "");
    }
}
