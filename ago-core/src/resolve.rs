//! Alias resolution
//!
//! Rewrites a single command-line token into a full package reference when
//! it starts with a known alias. A token is read as
//! `<alias><remainder>[@version]`, where the remainder may open with a
//! `/vN` segment requesting a different major version of the target:
//!
//! ```
//! use ago_core::{resolve, AliasData};
//!
//! let mut aliases = AliasData::empty();
//! aliases.set("foo", "github.com/foo/bar/v2");
//!
//! assert_eq!(resolve("foo@v2.1.0", &aliases), "github.com/foo/bar/v2@v2.1.0");
//! assert_eq!(resolve("foo/v3/sub", &aliases), "github.com/foo/bar/v3/sub");
//! assert_eq!(resolve("foo/v1", &aliases), "github.com/foo/bar");
//! assert_eq!(resolve("fmt", &aliases), "fmt");
//! ```

use tracing::debug;

use crate::config::AliasData;

/// Resolve every argument independently, keeping order and count.
pub fn resolve_args<I, S>(args: I, aliases: &AliasData) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|arg| resolve(arg.as_ref(), aliases))
        .collect()
}

/// Resolve a single token against the alias mapping.
///
/// Tokens that start with no alias come back unchanged. A major version
/// segment is only recognised when the text after the alias starts with
/// `/`, so `foobar/v3` under alias `foo` keeps `bar/v3` as a plain suffix.
pub fn resolve(token: &str, aliases: &AliasData) -> String {
    let Some((alias, target)) = longest_match(token, aliases) else {
        return token.to_string();
    };

    let (working, version) = split_version(token);
    let remainder = working.strip_prefix(alias).unwrap_or("");

    let (major, remainder) = split_major(remainder);

    let mut target = target;
    let mut major = major.unwrap_or("");
    if !major.is_empty() {
        target = strip_major_suffix(target);
        // v0 and v1 never appear as a path suffix
        if major == "/v0" || major == "/v1" {
            major = "";
        }
    }

    let resolved = format!("{target}{major}{remainder}{version}");
    debug!("Resolved '{}' via alias '{}' to '{}'", token, alias, resolved);
    resolved
}

/// Find the longest alias that is a literal prefix of `token`.
///
/// Two distinct aliases of equal length can never both prefix the same
/// token, so the longest match is unique. Only a strictly longer alias
/// replaces the current best, which keeps the walk order irrelevant.
fn longest_match<'a>(token: &str, aliases: &'a AliasData) -> Option<(&'a str, &'a str)> {
    let mut best: Option<(&'a str, &'a str)> = None;
    for (alias, target) in aliases.iter() {
        if alias.is_empty() || !token.starts_with(alias) {
            continue;
        }
        if best.map_or(true, |(current, _)| alias.len() > current.len()) {
            best = Some((alias, target));
        }
    }
    best
}

/// Split at the last `@`: `("pkg", "@v1.2.3")`, or `(token, "")` without one.
fn split_version(token: &str) -> (&str, &str) {
    match token.rfind('@') {
        Some(idx) => token.split_at(idx),
        None => (token, ""),
    }
}

/// Pull a leading `/vN` segment off the remainder.
///
/// Returns the segment (with its slash) and what is left of the remainder.
fn split_major(remainder: &str) -> (Option<&str>, &str) {
    let mut parts = remainder.splitn(3, '/');
    let (Some(""), Some(segment)) = (parts.next(), parts.next()) else {
        return (None, remainder);
    };

    if !is_major_segment(segment) {
        return (None, remainder);
    }

    let major = &remainder[..segment.len() + 1];
    let rest = &remainder[major.len()..];
    (Some(major), rest)
}

/// Whether `segment` is `v` followed by one or more decimal digits.
pub fn is_major_segment(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Strip a trailing `/vN` segment from a package path, if present.
pub fn strip_major_suffix(path: &str) -> &str {
    match path.rfind("/v") {
        Some(idx) if is_major_segment(&path[idx + 1..]) => &path[..idx],
        _ => path,
    }
}
