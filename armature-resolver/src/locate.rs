//! Root-bounded file location.
//!
//! Resolves a file name against a start directory that must lie inside a
//! root directory, and reports whether the file exists along with the
//! name's extension and extension-less form.
//!
//! Exactly one probe happens per call, at the start directory. Callers that
//! want to keep looking in parent directories do that themselves.

use crate::path;
use crate::{ResolverError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// How the start directory is checked against the root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Containment {
    /// The normalized root appears anywhere in the normalized start text.
    ///
    /// Also accepts siblings sharing a textual prefix, e.g. root `/project`
    /// with start `/project-other`.
    #[default]
    Substring,
    /// The normalized start begins with the normalized root, segment by segment.
    PathPrefix,
}

impl Containment {
    /// Check whether `start` lies within `root`. Both are expected normalized.
    pub fn contains(&self, root: &Path, start: &Path) -> bool {
        match self {
            Containment::Substring => start.to_string_lossy().contains(&*root.to_string_lossy()),
            Containment::PathPrefix => start.starts_with(root),
        }
    }
}

/// Configuration for a [`FileLocator`].
#[derive(Debug, Clone)]
pub struct LocatorConfig {
    /// Directory the locator must not escape
    pub root: PathBuf,

    /// Containment policy for start directories
    pub containment: Containment,
}

impl LocatorConfig {
    /// Create a configuration bounded by `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            containment: Containment::default(),
        }
    }

    /// Set the containment policy
    pub fn with_containment(mut self, containment: Containment) -> Self {
        self.containment = containment;
        self
    }
}

/// Where a located file lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Directory the requested name was resolved against
    pub root: PathBuf,
    /// Full path to the file
    pub file: PathBuf,
}

/// Outcome of a locate call.
///
/// `ext` and `name` come from the requested name alone and are filled in
/// whether or not the file was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocateResult {
    /// Set when the file exists
    pub location: Option<Location>,
    /// Extension of the requested name, without the dot
    pub ext: String,
    /// Requested name with its extension removed
    pub name: String,
}

impl LocateResult {
    /// Whether the file was found.
    pub fn is_found(&self) -> bool {
        self.location.is_some()
    }

    /// Base directory of the located file, if found.
    pub fn root(&self) -> Option<&Path> {
        self.location.as_ref().map(|l| l.root.as_path())
    }

    /// Full path of the located file, if found.
    pub fn file(&self) -> Option<&Path> {
        self.location.as_ref().map(|l| l.file.as_path())
    }
}

/// Locates files under a fixed root.
///
/// # Example
///
/// ```no_run
/// use armature_resolver::{Containment, FileLocator, LocatorConfig};
///
/// let locator = FileLocator::new(
///     LocatorConfig::new("/srv/app").with_containment(Containment::PathPrefix),
/// );
///
/// let result = locator.locate("locales/en-US/messages.json", "/srv/app/views");
/// if let Some(file) = result.file() {
///     println!("found {}", file.display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FileLocator {
    config: LocatorConfig,
}

impl FileLocator {
    /// Create a new locator.
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    /// Create a locator bounded by `root` with the default containment policy.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self::new(LocatorConfig::new(root))
    }

    /// Get the configuration.
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Locate `name` under `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` does not lie within the configured root. Use
    /// [`try_locate`](Self::try_locate) to get an error instead.
    pub fn locate(&self, name: &str, start: impl AsRef<Path>) -> LocateResult {
        match self.try_locate(name, start) {
            Ok(result) => result,
            Err(err) => panic!("{err}"),
        }
    }

    /// Locate `name` under `start`, returning an error if `start` is outside the root.
    pub fn try_locate(&self, name: &str, start: impl AsRef<Path>) -> Result<LocateResult> {
        let start = path::normalize(start.as_ref());
        let root = path::normalize(&self.config.root);

        if !self.config.containment.contains(&root, &start) {
            debug!(start = ?start, root = ?root, "Start directory is outside root");
            return Err(ResolverError::OutsideRoot { start, root });
        }

        let file = path::join(&start, Path::new(name));
        debug!(start = ?start, name = %name, file = ?file, "Trying to resolve file");

        let location = if file.exists() {
            let root = path::base_of(&file, name).unwrap_or_else(|| start.clone());
            Some(Location { root, file })
        } else {
            None
        };

        Ok(LocateResult {
            location,
            ext: path::extension(name),
            name: path::strip_extension(name),
        })
    }
}

/// Locate `name` under `start`, where `start` must lie within `root`.
///
/// Uses [`Containment::Substring`].
///
/// # Panics
///
/// Panics if `start` does not lie within `root`. This is a caller bug,
/// not a runtime condition; see [`try_locate`] for a recoverable variant.
pub fn locate(name: &str, root: impl AsRef<Path>, start: impl AsRef<Path>) -> LocateResult {
    FileLocator::with_root(root.as_ref()).locate(name, start)
}

/// Like [`locate`], but returns [`ResolverError::OutsideRoot`] instead of panicking.
pub fn try_locate(
    name: &str,
    root: impl AsRef<Path>,
    start: impl AsRef<Path>,
) -> Result<LocateResult> {
    FileLocator::with_root(root.as_ref()).try_locate(name, start)
}
