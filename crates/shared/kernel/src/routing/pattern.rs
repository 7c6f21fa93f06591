use super::RoutingError;
use std::borrow::Cow;
use std::fmt;

/// Matcher flags shared by every route of a router.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Compare static segments case-sensitively.
    pub sensitive: bool,
    /// Require the trailing slash of the location to match the pattern's.
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed route path such as `/` or `/breeds/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
    trailing_slash: bool,
}

impl RoutePattern {
    /// Parses a pattern.
    ///
    /// # Errors
    /// [`RoutingError::InvalidPattern`] if the pattern is not absolute, contains an empty
    /// segment, a query/fragment marker, or an unnamed or repeated parameter.
    pub fn parse(raw: &str) -> Result<Self, RoutingError> {
        let Some(rest) = raw.strip_prefix('/') else {
            return Err(invalid_pattern(raw, "must start with '/'"));
        };
        if raw.contains(['?', '#']) {
            return Err(invalid_pattern(raw, "must not contain '?' or '#'"));
        }

        let (rest, trailing_slash) = split_trailing_slash(rest);
        let mut segments = Vec::new();

        for part in path_segments(rest) {
            let segment = match part.strip_prefix(':') {
                Some(name) if is_param_name(name) => Segment::Param(name.to_owned()),
                Some(_) => return Err(invalid_pattern(raw, "parameter names must be [A-Za-z0-9_]+")),
                None if part.is_empty() => return Err(invalid_pattern(raw, "empty path segment")),
                None => Segment::Static(part.to_owned()),
            };

            if let Segment::Param(name) = &segment
                && segments.contains(&segment)
            {
                return Err(invalid_pattern(raw, format!("parameter ':{name}' is repeated")));
            }
            segments.push(segment);
        }

        Ok(Self { raw: raw.to_owned(), segments, trailing_slash })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names of the `:param` segments, in order.
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Matches a route path, returning the decoded parameters on success.
    #[must_use]
    pub fn matches(&self, path: &str, options: MatchOptions) -> Option<Vec<(String, String)>> {
        let rest = path.strip_prefix('/')?;
        let (rest, trailing_slash) = split_trailing_slash(rest);
        if options.strict && trailing_slash != self.trailing_slash {
            return None;
        }

        let mut parts = path_segments(rest);
        let mut params = Vec::new();

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Static(expected) => {
                    let equal = if options.sensitive {
                        part == expected
                    } else {
                        part.eq_ignore_ascii_case(expected)
                    };
                    if !equal {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    let value = urlencoding::decode(part).map_or_else(|_| part.to_owned(), Cow::into_owned);
                    params.push((name.clone(), value));
                }
            }
        }

        parts.next().is_none().then_some(params)
    }

    /// Renders the pattern into a path, percent-encoding parameter values.
    ///
    /// # Errors
    /// [`RoutingError::MissingParam`] if a `:param` has no value in `params`.
    pub fn render(&self, params: &[(&str, &str)]) -> Result<String, RoutingError> {
        let mut path = String::new();

        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(value) => path.push_str(value),
                Segment::Param(name) => {
                    let (_, value) =
                        params.iter().find(|(key, _)| key == name).ok_or_else(|| {
                            RoutingError::MissingParam {
                                message: format!("no value for ':{name}'").into(),
                                context: Some(self.raw.clone().into()),
                            }
                        })?;
                    path.push_str(&urlencoding::encode(value));
                }
            }
        }

        if path.is_empty() || self.trailing_slash {
            path.push('/');
        }
        Ok(path)
    }

    /// Canonical form used to detect patterns that would always match the same paths.
    pub(crate) fn shape(&self, options: MatchOptions) -> String {
        let mut shape = String::new();
        for segment in &self.segments {
            shape.push('/');
            match segment {
                Segment::Static(value) if options.sensitive => shape.push_str(value),
                Segment::Static(value) => shape.push_str(&value.to_ascii_lowercase()),
                Segment::Param(_) => shape.push(':'),
            }
        }
        if options.strict && self.trailing_slash {
            shape.push('/');
        }
        shape
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Splits off one trailing slash unless it is the only character left.
fn split_trailing_slash(rest: &str) -> (&str, bool) {
    match rest.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => (stripped, true),
        _ => (rest, false),
    }
}

/// Segments of a path with its leading slash removed; the root has none.
fn path_segments(rest: &str) -> impl Iterator<Item = &str> {
    (!rest.is_empty()).then(|| rest.split('/')).into_iter().flatten()
}

fn is_param_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn invalid_pattern(raw: &str, message: impl Into<Cow<'static, str>>) -> RoutingError {
    RoutingError::InvalidPattern { message: message.into(), context: Some(raw.to_owned().into()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOOSE: MatchOptions = MatchOptions { sensitive: false, strict: false };

    #[test]
    fn root_matches_only_root() {
        let root = RoutePattern::parse("/").unwrap();
        assert_eq!(root.matches("/", LOOSE), Some(vec![]));
        assert_eq!(root.matches("//", LOOSE), None);
        assert_eq!(root.matches("/a", LOOSE), None);
        assert_eq!(root.matches("", LOOSE), None);
    }

    #[test]
    fn params_are_captured_and_decoded() {
        let pattern = RoutePattern::parse("/breeds/:id/:name").unwrap();
        assert_eq!(pattern.params().collect::<Vec<_>>(), ["id", "name"]);

        let params = pattern.matches("/Breeds/5/Akbash%20Dog", LOOSE).unwrap();
        assert_eq!(
            params,
            [("id".to_owned(), "5".to_owned()), ("name".to_owned(), "Akbash Dog".to_owned())]
        );
        assert_eq!(pattern.matches("/breeds/5", LOOSE), None);
        assert_eq!(pattern.matches("/breeds//x", LOOSE), None);
    }

    #[test]
    fn sensitivity_and_strictness_are_honored() {
        let pattern = RoutePattern::parse("/about").unwrap();
        assert!(pattern.matches("/ABOUT", LOOSE).is_some());
        assert!(pattern.matches("/about/", LOOSE).is_some());

        let exact = MatchOptions { sensitive: true, strict: true };
        assert!(pattern.matches("/ABOUT", exact).is_none());
        assert!(pattern.matches("/about/", exact).is_none());
        assert!(pattern.matches("/about", exact).is_some());
    }

    #[test]
    fn malformed_patterns_are_rejected() {
        for raw in ["", "about", "/a//b", "/:", "/:id/:id", "/a?b", "/#x", "/:na-me"] {
            assert!(
                matches!(RoutePattern::parse(raw), Err(RoutingError::InvalidPattern { .. })),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn render_fills_and_encodes_params() {
        let pattern = RoutePattern::parse("/breeds/:name/").unwrap();
        assert_eq!(pattern.render(&[("name", "Akbash Dog")]).unwrap(), "/breeds/Akbash%20Dog/");
        assert!(matches!(pattern.render(&[]), Err(RoutingError::MissingParam { .. })));
        assert_eq!(RoutePattern::parse("/").unwrap().render(&[]).unwrap(), "/");
    }

    #[test]
    fn shape_ignores_param_names_and_case() {
        let a = RoutePattern::parse("/Breeds/:id").unwrap();
        let b = RoutePattern::parse("/breeds/:slug").unwrap();
        assert_eq!(a.shape(LOOSE), b.shape(LOOSE));

        let sensitive = MatchOptions { sensitive: true, strict: false };
        assert_ne!(a.shape(sensitive), b.shape(sensitive));
    }
}
