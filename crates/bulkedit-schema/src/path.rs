//! Dotted field paths and diagnostic routes.

use std::fmt::Write as _;

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '.';

/// Append `name` to `path`; an absent name leaves `path` untouched.
#[must_use]
pub fn join(path: &str, name: Option<&str>) -> String {
    match name {
        None => path.to_string(),
        Some(name) if path.is_empty() => name.to_string(),
        Some(name) => {
            let mut out = String::with_capacity(path.len() + 1 + name.len());
            out.push_str(path);
            out.push(PATH_SEPARATOR);
            out.push_str(name);
            out
        }
    }
}

///
/// PathSegment
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PathSegment<'a> {
    Empty,
    Field(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for PathSegment<'a> {
    fn from(s: &'a str) -> Self {
        Self::Field(s)
    }
}

impl From<usize> for PathSegment<'_> {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

impl<'a> From<Option<&'a str>> for PathSegment<'a> {
    fn from(opt: Option<&'a str>) -> Self {
        match opt {
            Some(s) if !s.is_empty() => Self::Field(s),
            _ => Self::Empty,
        }
    }
}

/// Render segments as `a.b[2].c`; `Empty` segments vanish.
#[must_use]
pub fn render_path<'a>(segments: impl IntoIterator<Item = PathSegment<'a>>) -> String {
    let mut out = String::new();

    for seg in segments {
        match seg {
            PathSegment::Field(s) => {
                if !out.is_empty() {
                    out.push(PATH_SEPARATOR);
                }
                out.push_str(s);
            }
            PathSegment::Index(i) => {
                let _ = write!(out, "[{i}]");
            }
            PathSegment::Empty => {}
        }
    }

    out
}

/// Route of the `index`th child under `key` of `parent`, e.g. `[0].fields[2]`.
#[must_use]
pub fn child_route(parent: &str, key: &str, index: usize) -> String {
    render_path([
        PathSegment::from(Some(parent)),
        PathSegment::from(Some(key)),
        PathSegment::Index(index),
    ])
}

///
/// TESTS
///
