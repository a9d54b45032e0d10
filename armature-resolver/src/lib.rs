//! Language Tag and File Resolution for Armature
//!
//! Two small, stateless helpers used when resolving localized resources:
//!
//! - **Language tags**: split `en-US` / `en_US` / `en` into a
//!   language/country pair
//! - **File location**: resolve a file name against a start directory that
//!   must stay within a root directory
//!
//! # Language Tags
//!
//! ```rust
//! use armature_resolver::parse_lang_tag;
//!
//! let tag = parse_lang_tag("en-us");
//! assert_eq!(tag.language, "en");
//! assert_eq!(tag.country, "US");
//!
//! // Parsing a parsed tag is a no-op
//! assert_eq!(parse_lang_tag(tag.clone()), tag);
//! ```
//!
//! # File Location
//!
//! ```rust,no_run
//! use armature_resolver::locate;
//!
//! let result = locate("inc/header.hbs", "/srv/app", "/srv/app/templates");
//! match result.file() {
//!     Some(file) => println!("found {}", file.display()),
//!     None => println!("no {}.{} under templates", result.name, result.ext),
//! }
//! ```
//!
//! # Diagnostics
//!
//! Both helpers emit `tracing` events at `debug`/`trace` level. No
//! subscriber is installed here; scope one around a call with
//! `tracing::subscriber::with_default` to capture them.

mod error;
mod lang_tag;
mod locate;
mod path;

pub use error::ResolverError;
pub use lang_tag::{LangTagInput, LanguageTag, parse_lang_tag};
pub use locate::{
    Containment, FileLocator, LocateResult, Location, LocatorConfig, locate, try_locate,
};

/// Result type for resolver operations
pub type Result<T> = std::result::Result<T, ResolverError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Containment, FileLocator, LangTagInput, LanguageTag, LocateResult, LocatorConfig,
        ResolverError, Result, locate, parse_lang_tag, try_locate,
    };
}
