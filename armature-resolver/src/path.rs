//! Lexical path helpers.
//!
//! Nothing here touches the filesystem: `..` is resolved against the path
//! text, not against symlinks on disk.

use std::path::{Component, Path, PathBuf, is_separator};

/// Normalize a path, resolving `.` and `..` segments and redundant separators.
///
/// `..` that cannot pop a preceding segment is kept on relative paths and
/// dropped at the filesystem root. An empty result becomes `.`.
pub fn normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            other => components.push(other),
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }

    components.iter().collect()
}

/// Join `name` onto `base` and normalize the result.
///
/// Unlike [`Path::join`], an absolute `name` does not replace `base`; its
/// leading root is ignored and its segments are appended.
pub fn join(base: &Path, name: &Path) -> PathBuf {
    let mut joined = base.to_path_buf();
    for component in name.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {}
            other => joined.push(other),
        }
    }
    normalize(&joined)
}

/// Extension of the final segment of `name`, without the leading dot.
///
/// Dotfiles such as `.env` have no extension.
pub fn extension(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `name` with its extension (and the dot before it) removed from its final segment.
///
/// Trailing separators and `.` segments after the final segment are kept,
/// so `locales.d/` becomes `locales/`.
pub fn strip_extension(name: &str) -> String {
    let Some(ext) = Path::new(name).extension() else {
        return name.to_string();
    };

    let (segment, tail) = name.split_at(final_segment_end(name));
    let suffix = format!(".{}", ext.to_string_lossy());
    match segment.strip_suffix(suffix.as_str()) {
        Some(stem) => format!("{stem}{tail}"),
        None => name.to_string(),
    }
}

/// Byte offset where the final named segment of `name` ends.
fn final_segment_end(name: &str) -> usize {
    let mut head = name;
    loop {
        let trimmed = head.trim_end_matches(is_separator);
        if trimmed.len() < head.len() {
            head = trimmed;
            continue;
        }

        let Some(rest) = head.strip_suffix('.') else {
            break;
        };
        if rest.is_empty() || rest.ends_with(is_separator) {
            head = rest;
        } else {
            break;
        }
    }
    head.len()
}

/// Directory that `name` was joined onto to produce `file`.
///
/// Returns `None` when the normalized `name` is not a trailing run of
/// `file`'s segments (for example when `name` climbs with `..`). Callers
/// fall back to the start directory there, so the base joined with `name`
/// still points at `file`; a plain textual replace would leave `file`
/// itself as the base.
pub fn base_of(file: &Path, name: &str) -> Option<PathBuf> {
    let relative = join(Path::new(""), Path::new(name));
    if relative == Path::new(".") || !file.ends_with(&relative) {
        return None;
    }

    let depth = relative.components().count();
    let base = file.ancestors().nth(depth)?;
    if base.as_os_str().is_empty() {
        Some(PathBuf::from("."))
    } else {
        Some(base.to_path_buf())
    }
}
