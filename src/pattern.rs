use crate::error::{RefSieveError, Result};
use regex::Regex;

/// Anchored matcher compiled from a space-separated wildcard pattern list.
///
/// Each pattern in the list is a sequence of literal runs and `*` markers,
/// where `*` matches any run of characters, including the empty one. The list
/// is an alternation: a name matches when the whole name equals one of the
/// patterns. There is no other metacharacter and no escaping syntax.
#[derive(Debug, Clone)]
pub struct WildcardMatcher {
    regex: Regex,
}

impl WildcardMatcher {
    /// Compile a pattern list into an anchored matcher.
    ///
    /// The list is split on single spaces and empty tokens are skipped. A
    /// blank list compiles to the empty alternation, which matches only the
    /// empty string, so it rejects every real reference name. "Match
    /// everything" must be spelled `"*"`.
    pub fn compile(pattern_list: &str) -> Result<Self> {
        let alternation = pattern_list
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(token_pattern)
            .collect::<Vec<_>>()
            .join("|");

        let regex = Regex::new(&format!("^(?:{})$", alternation))
            .map_err(|e| RefSieveError::pattern(e.to_string()))?;

        Ok(WildcardMatcher { regex })
    }

    /// Check whether the entire name matches one of the compiled patterns.
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Translate one wildcard token into regex form: literal runs are quoted,
/// each `*` becomes `.*`.
fn token_pattern(token: &str) -> String {
    token
        .split('*')
        .map(|run| regex::escape(run))
        .collect::<Vec<_>>()
        .join(".*")
}
