use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SCHEME_REGEX: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*:").unwrap();
}

/// Rule applied to the source of every image in a document
pub trait ImageRewriter: Send + Sync {
    fn rewrite(&self, src: &str) -> String;
}

/// Prefix relative image sources with a base URL.
///
/// Absolute URLs, root-relative paths, fragments and `data:` URIs are left alone.
#[derive(Debug, Clone)]
pub struct BaseUrlRewriter {
    base: String,
}

impl BaseUrlRewriter {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn is_relative(src: &str) -> bool {
        !(src.is_empty()
            || src.starts_with('/')
            || src.starts_with('#')
            || SCHEME_REGEX.is_match(src))
    }
}

impl ImageRewriter for BaseUrlRewriter {
    fn rewrite(&self, src: &str) -> String {
        if self.base.is_empty() || !Self::is_relative(src) {
            return src.to_string();
        }

        let mut path = src;
        while let Some(rest) = path.strip_prefix("./") {
            path = rest;
        }

        format!("{}/{}", self.base, path)
    }
}
