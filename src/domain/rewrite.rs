//! Rewriting of library-style header imports into quoted relative imports.

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::domain::AppError;

/// Result of applying the import rule to one file's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite<'a> {
    pub content: Cow<'a, str>,
    pub replacements: usize,
}

impl Rewrite<'_> {
    pub fn changed(&self) -> bool {
        self.replacements > 0
    }
}

/// Turns `<Library/Path>` into `"Path"`.
#[derive(Debug, Clone)]
pub struct ImportRewriter {
    pattern: Regex,
}

impl ImportRewriter {
    pub fn new(library_name: &str) -> Result<Self, AppError> {
        let pattern = Regex::new(&format!("<{}/(.*)>", regex::escape(library_name)))?;
        Ok(Self { pattern })
    }

    /// Replace every import match, counting substitutions.
    ///
    /// The capture is greedy and stops at line ends, so two imports on one
    /// line collapse into a single match spanning both.
    pub fn rewrite<'a>(&self, contents: &'a str) -> Rewrite<'a> {
        let mut replacements = 0;
        let content = self.pattern.replace_all(contents, |caps: &Captures<'_>| {
            replacements += 1;
            format!("\"{}\"", &caps[1])
        });
        Rewrite { content, replacements }
    }
}
