//! Junk policy trait and diff options
//!
//! A junk policy marks line values the sequence matcher must not anchor a
//! match on. Junk lines can still be absorbed at the edges of a match that was
//! anchored on real content, so a blank line between two shared paragraphs
//! stays shared.

use serde::{Deserialize, Serialize};

use crate::errors::{ExError, Result, ShutterError};

/// Policy trait for classifying line values as junk
///
/// The policy is consulted once per distinct line value of the new side, so
/// it must be a pure function of `line`.
pub trait JunkPolicy {
    /// Check whether a line value should be ignored when searching for anchors
    ///
    /// # Returns
    /// * `true` - line is noise; never used to anchor a match
    /// * `false` - line is ordinary content
    fn is_junk(&self, line: &str) -> bool;
}

/// Policy that treats no line as junk
///
/// # Example
/// ```
/// use shutter_core::policy::{JunkPolicy, NoJunkPolicy};
///
/// assert!(!NoJunkPolicy.is_junk(""));
/// assert!(!NoJunkPolicy.is_junk("   "));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoJunkPolicy;

impl JunkPolicy for NoJunkPolicy {
    fn is_junk(&self, _line: &str) -> bool {
        false
    }
}

/// Policy that treats empty and whitespace-only lines as junk
///
/// # Example
/// ```
/// use shutter_core::policy::{BlankLineJunkPolicy, JunkPolicy};
///
/// assert!(BlankLineJunkPolicy.is_junk(""));
/// assert!(BlankLineJunkPolicy.is_junk(" \t "));
/// assert!(!BlankLineJunkPolicy.is_junk("  x"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankLineJunkPolicy;

impl JunkPolicy for BlankLineJunkPolicy {
    fn is_junk(&self, line: &str) -> bool {
        line.trim().is_empty()
    }
}

/// Adapter turning a closure into a [`JunkPolicy`]
///
/// # Example
/// ```
/// use shutter_core::policy::{FnJunkPolicy, JunkPolicy};
///
/// let policy = FnJunkPolicy(|line: &str| line.starts_with('#'));
/// assert!(policy.is_junk("# comment"));
/// assert!(!policy.is_junk("code"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnJunkPolicy<F>(pub F);

impl<F> JunkPolicy for FnJunkPolicy<F>
where
    F: Fn(&str) -> bool,
{
    fn is_junk(&self, line: &str) -> bool {
        (self.0)(line)
    }
}

/// Built-in junk policies selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JunkMode {
    /// No line is junk
    #[default]
    None,
    /// Empty and whitespace-only lines are junk
    BlankLines,
}

impl JunkMode {
    /// The policy object this mode selects
    pub fn policy(self) -> &'static dyn JunkPolicy {
        match self {
            JunkMode::None => &NoJunkPolicy,
            JunkMode::BlankLines => &BlankLineJunkPolicy,
        }
    }
}

/// Tunables for the line diff
///
/// Defaults reproduce the plain `histogram` behaviour: auto-junk enabled and
/// no junk predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiffOptions {
    /// Drop very frequent lines from the anchor index when the new side has
    /// at least 200 lines
    pub auto_junk: bool,
    /// Junk predicate applied while matching
    pub junk: JunkMode,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            auto_junk: true,
            junk: JunkMode::None,
        }
    }
}

impl DiffOptions {
    /// Parse options from a TOML document
    ///
    /// Keys may sit at the top level or under a `[diff]` table. Missing keys
    /// take their defaults.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig`: the document is not valid TOML, holds an unknown
    ///   key, or names an unknown junk mode
    ///
    /// # Example
    /// ```
    /// use shutter_core::policy::{DiffOptions, JunkMode};
    ///
    /// let opts = DiffOptions::from_toml_str("[diff]\njunk = \"blank_lines\"\n").unwrap();
    /// assert_eq!(opts.junk, JunkMode::BlankLines);
    /// assert!(opts.auto_junk);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct Wrapped {
            diff: DiffOptions,
        }

        let invalid = |e: toml::de::Error| {
            ExError::from(ShutterError::InvalidOptions {
                reason: e.to_string(),
            })
            .with_op("DiffOptions::from_toml_str")
        };

        let value: toml::Table = text.parse().map_err(invalid)?;
        if value.contains_key("diff") {
            let wrapped: Wrapped = toml::from_str(text).map_err(invalid)?;
            Ok(wrapped.diff)
        } else {
            toml::from_str(text).map_err(invalid)
        }
    }

    /// The junk policy selected by these options
    pub fn junk_policy(&self) -> &'static dyn JunkPolicy {
        self.junk.policy()
    }
}
