/// Navigation mode and the base path URLs are addressed relative to.
///
/// The base is normalized on construction: leading `/` added, trailing `/` removed, so
/// `"calc"`, `"/calc"` and `"/calc/"` are the same base. An empty base means the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum History {
    /// Clean URLs (`/calc/breeds`); deep links need host support.
    Web { base: String },
    /// Fragment URLs (`/calc/#/breeds`).
    Hash { base: String },
}

impl Default for History {
    fn default() -> Self {
        Self::web("/")
    }
}

impl History {
    pub fn web(base: impl AsRef<str>) -> Self {
        Self::Web { base: normalize_base(base.as_ref()) }
    }

    pub fn hash(base: impl AsRef<str>) -> Self {
        Self::Hash { base: normalize_base(base.as_ref()) }
    }

    /// The normalized base path; `/` for the site root.
    #[must_use]
    pub fn base(&self) -> &str {
        let (Self::Web { base } | Self::Hash { base }) = self;
        if base.is_empty() { "/" } else { base }
    }

    /// Maps a browser location (path, optional query and fragment) to the route path.
    ///
    /// Returns `None` when a web-mode location lies outside the base path.
    #[must_use]
    pub fn location(&self, raw: &str) -> Option<String> {
        match self {
            Self::Web { base } => {
                let path = ensure_leading_slash(strip_query(strip_fragment(raw)));
                strip_base(&path, base).map(ToOwned::to_owned)
            }
            Self::Hash { .. } => {
                let fragment = raw.split_once('#').map_or("", |(_, fragment)| fragment);
                Some(ensure_leading_slash(strip_query(fragment)))
            }
        }
    }

    /// Builds the browser URL for a route path; inverse of [`History::location`].
    #[must_use]
    pub fn href(&self, path: &str) -> String {
        let path = ensure_leading_slash(path);
        match self {
            Self::Web { base } => format!("{base}{path}"),
            Self::Hash { base } => format!("{base}/#{path}"),
        }
    }
}

fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

fn strip_fragment(raw: &str) -> &str {
    raw.split_once('#').map_or(raw, |(path, _)| path)
}

fn strip_query(raw: &str) -> &str {
    raw.split_once('?').map_or(raw, |(path, _)| path)
}

fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') { path.to_owned() } else { format!("/{path}") }
}

/// Strips `base` from `path` at a segment boundary, ignoring ASCII case.
fn strip_base<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    if base.is_empty() {
        return Some(path);
    }

    let head = path.get(..base.len())?;
    if !head.eq_ignore_ascii_case(base) {
        return None;
    }

    match &path[base.len()..] {
        "" => Some("/"),
        rest if rest.starts_with('/') => Some(rest),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bases_are_normalized() {
        assert_eq!(History::web("").base(), "/");
        assert_eq!(History::web("/").base(), "/");
        assert_eq!(History::web("calc").base(), "/calc");
        assert_eq!(History::web("/calc/").base(), "/calc");
        assert_eq!(History::hash(" /a/b// ").base(), "/a/b");
    }

    #[test]
    fn web_location_strips_query_and_fragment() {
        let history = History::web("/");
        assert_eq!(history.location("/").as_deref(), Some("/"));
        assert_eq!(history.location("").as_deref(), Some("/"));
        assert_eq!(history.location("/?breed=5#top").as_deref(), Some("/"));
        assert_eq!(history.location("/breeds/5?x=1").as_deref(), Some("/breeds/5"));
    }

    #[test]
    fn web_location_respects_the_base() {
        let history = History::web("/calc/");
        assert_eq!(history.location("/calc").as_deref(), Some("/"));
        assert_eq!(history.location("/calc/").as_deref(), Some("/"));
        assert_eq!(history.location("/CALC/about").as_deref(), Some("/about"));
        assert_eq!(history.location("/calculator"), None);
        assert_eq!(history.location("/other"), None);
        assert_eq!(history.location("/ca"), None);
    }

    #[test]
    fn hash_location_reads_the_fragment() {
        let history = History::hash("/app");
        assert_eq!(history.location("/app/").as_deref(), Some("/"));
        assert_eq!(history.location("/app/#/").as_deref(), Some("/"));
        assert_eq!(history.location("/app/#/breeds?x=1").as_deref(), Some("/breeds"));
        assert_eq!(history.location("/app/#breeds").as_deref(), Some("/breeds"));
    }

    #[test]
    fn href_is_the_inverse_of_location() {
        let web = History::web("/calc");
        assert_eq!(web.href("/"), "/calc/");
        assert_eq!(web.location(&web.href("/breeds")).as_deref(), Some("/breeds"));
        assert_eq!(History::web("/").href("/"), "/");

        let hash = History::hash("/calc");
        assert_eq!(hash.href("/breeds"), "/calc/#/breeds");
        assert_eq!(hash.location(&hash.href("/breeds")).as_deref(), Some("/breeds"));
    }
}
