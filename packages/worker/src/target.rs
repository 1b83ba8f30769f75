use url::Url;

/// Whether a window at `client_url` already shows `target`.
///
/// Only paths are compared: `target` may be a bare path such as
/// `/new-story` or an absolute URL. Query, fragment and a trailing slash are
/// ignored.
pub fn is_target(client_url: &str, target: &str) -> bool {
    let Ok(client) = Url::parse(client_url) else {
        return false;
    };
    let wanted = match Url::parse(target) {
        Ok(absolute) => absolute.path().to_string(),
        Err(_) => match client.join(target) {
            Ok(joined) => joined.path().to_string(),
            Err(_) => return false,
        },
    };
    normalize(client.path()) == normalize(&wanted)
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_path_matches() {
        assert!(is_target("https://diary.example/new-story", "/new-story"));
        assert!(is_target("https://diary.example/new-story/?draft=1#top", "/new-story"));
        assert!(is_target(
            "https://diary.example/new-story",
            "https://diary.example/new-story"
        ));
    }

    #[test]
    fn test_other_pages_do_not_match() {
        assert!(!is_target("https://diary.example/stories", "/new-story"));
        assert!(!is_target("https://diary.example/", "/new-story"));
        assert!(!is_target("not a url", "/new-story"));
    }
}
