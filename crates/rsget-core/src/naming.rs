//! Output filename derivation.
//!
//! The default strategy is positional: item `i` is saved as
//! `request_<i>.html`, independent of the URL. That keeps names collision-free
//! within a run (the index is unique) and makes re-runs overwrite
//! deterministically. `UrlStem` is the configurable alternative: the
//! sanitized last URL path segment, falling back to the positional name when
//! the URL yields nothing usable.

/// How output filenames are derived from a batch item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingStrategy {
    /// `<prefix><index><extension>`, e.g. `request_0.html`. Depends only on
    /// the item's position, never on the URL.
    Positional { prefix: String, extension: String },
    /// Last URL path segment, sanitized for Linux filesystems. Two URLs with
    /// the same final segment collide within a run (last write wins).
    UrlStem,
}

impl Default for NamingStrategy {
    fn default() -> Self {
        NamingStrategy::Positional {
            prefix: "request_".to_string(),
            extension: ".html".to_string(),
        }
    }
}

/// Derives the output filename for the item at `index` fetched from `url`.
pub fn derive_output_name(strategy: &NamingStrategy, index: usize, url: &str) -> String {
    match strategy {
        NamingStrategy::Positional { prefix, extension } => {
            format!("{prefix}{index}{extension}")
        }
        NamingStrategy::UrlStem => {
            stem_from_url(url).unwrap_or_else(|| format!("request_{index}.html"))
        }
    }
}

/// Sanitized last path segment of `url`, or `None` if the URL does not parse
/// or the path is empty/root/unusable.
fn stem_from_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    let sanitized = sanitize_filename(segment);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        return None;
    }
    Some(sanitized)
}

/// Sanitizes a candidate filename for safe use on Linux: path separators,
/// NUL, control characters, and whitespace become `_` (collapsed), leading
/// and trailing dots/underscores are trimmed, and the result is capped at
/// 255 bytes (NAME_MAX).
fn sanitize_filename(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;
    for c in name.chars() {
        let keep = !(c == '\0' || c == '/' || c == '\\' || c.is_control() || c.is_whitespace());
        if keep {
            out.push(c);
            prev_underscore = false;
        } else if !prev_underscore {
            out.push('_');
            prev_underscore = true;
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}
