//! Formula validation
//!
//! Validation runs four stages, each of which can reject the formula:
//!
//! 1. unsafe-token scan over the raw text
//! 2. identifier extraction (builtins removed)
//! 3. dependency check against the enabled parameters
//! 4. syntax check: every parameter is replaced by `1.0` and the result is
//!    parsed with the arithmetic grammar
//!
//! The formula is never evaluated.

use std::collections::BTreeSet;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::FormulaError;
use crate::functions::is_builtin;
use crate::parser::parse_formula;
use crate::scanner::{identifiers, substitute};

/// Substrings that reject a formula outright, in reporting order
///
/// Matching is plain substring search, so a parameter such as `cost` is
/// rejected because it contains `os`.
pub const UNSAFE_TOKENS: [&str; 8] = [
    "import",
    "eval",
    "exec",
    "__",
    "open",
    "os",
    "sys",
    "subprocess",
];

/// Literal substituted for every parameter reference before parsing
const PLACEHOLDER: &str = "1.0";

/// Why a formula was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Formula contains a denied substring
    #[error("Unsafe token detected: '{token}'")]
    UnsafeToken { token: &'static str },

    /// Formula references parameters that are not enabled (sorted)
    #[error("Parameter(s) not enabled: {}", .missing.join(", "))]
    UndeclaredParameter { missing: Vec<String> },

    /// Formula is not a well-formed arithmetic expression
    #[error("Syntax error: {0}")]
    Syntax(#[from] FormulaError),
}

/// Outcome of validating one formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub depends_on: Vec<String>,
    pub error: Option<String>,
}

impl ValidationResult {
    fn accepted(depends_on: Vec<String>) -> Self {
        Self {
            valid: true,
            depends_on,
            error: None,
        }
    }

    fn rejected(depends_on: Vec<String>, error: &ValidationError) -> Self {
        Self {
            valid: false,
            depends_on,
            error: Some(error.to_string()),
        }
    }
}

/// Find the first deny-listed token contained in `expression`
pub fn find_unsafe_token(expression: &str) -> Option<&'static str> {
    UNSAFE_TOKENS
        .iter()
        .copied()
        .find(|token| expression.contains(token))
}

/// Validate a formula against the set of enabled parameter names
///
/// Never fails: every rejection is reported through [`ValidationResult`].
///
/// # Example
/// ```rust
/// use plant_onboard_formula::validate_formula;
///
/// let result = validate_formula("a + b + c", &["a"]);
/// assert!(!result.valid);
/// assert_eq!(result.error.as_deref(), Some("Parameter(s) not enabled: b, c"));
/// ```
pub fn validate_formula<S: AsRef<str>>(
    expression: &str,
    enabled_parameters: &[S],
) -> ValidationResult {
    let enabled: AHashSet<&str> = enabled_parameters.iter().map(|s| s.as_ref()).collect();

    match check(expression, |name| enabled.contains(name)) {
        Ok(variables) => ValidationResult::accepted(variables),
        Err((variables, error)) => ValidationResult::rejected(variables, &error),
    }
}

type Rejection = (Vec<String>, ValidationError);

fn check<F>(expression: &str, is_enabled: F) -> Result<Vec<String>, Rejection>
where
    F: Fn(&str) -> bool,
{
    if let Some(token) = find_unsafe_token(expression) {
        return Err((Vec::new(), ValidationError::UnsafeToken { token }));
    }

    let variables: BTreeSet<&str> = identifiers(expression)
        .into_iter()
        .filter(|name| !is_builtin(name))
        .collect();
    let depends_on = || variables.iter().map(|v| v.to_string()).collect::<Vec<_>>();

    let missing: Vec<String> = variables
        .iter()
        .filter(|name| !is_enabled(name))
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err((depends_on(), ValidationError::UndeclaredParameter { missing }));
    }

    let numeric = substitute(expression, |name| variables.contains(name), PLACEHOLDER);
    if let Err(e) = parse_formula(&numeric) {
        return Err((depends_on(), ValidationError::Syntax(e)));
    }

    Ok(depends_on())
}

/// Formula validator bound to a fixed set of enabled parameters
///
/// Useful when many formulas of one configuration are checked against the
/// same parameter list.
#[derive(Debug, Clone, Default)]
pub struct FormulaValidator {
    enabled: AHashSet<String>,
}

impl FormulaValidator {
    /// Create a validator for the given enabled parameter names
    pub fn new<I, S>(enabled_parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: enabled_parameters.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a parameter name is enabled
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.contains(name)
    }

    /// Validate one formula
    pub fn validate(&self, expression: &str) -> ValidationResult {
        match check(expression, |name| self.is_enabled(name)) {
            Ok(variables) => ValidationResult::accepted(variables),
            Err((variables, error)) => ValidationResult::rejected(variables, &error),
        }
    }

    /// Validate one formula, returning the typed rejection
    pub fn check(&self, expression: &str) -> Result<Vec<String>, ValidationError> {
        check(expression, |name| self.is_enabled(name)).map_err(|(_, error)| error)
    }
}
