//! Built-in math functions and constants
//!
//! Formulas may call a fixed allow-list of math functions and reference two
//! constants. Nothing else is callable.

/// Every builtin name, in declaration order.
///
/// Identifiers with these names are never treated as parameter references.
pub const BUILTIN_NAMES: [&str; 13] = [
    "abs", "round", "min", "max", "sum", "pow", "sqrt", "log", "sin", "cos", "tan", "pi", "e",
];

/// Check whether a name is a builtin function or constant
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

/// Callable math builtins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathFunction {
    Abs,
    Round,
    Min,
    Max,
    Sum,
    Pow,
    Sqrt,
    Log,
    Sin,
    Cos,
    Tan,
}

impl MathFunction {
    /// All functions, in declaration order
    pub const ALL: [MathFunction; 11] = [
        MathFunction::Abs,
        MathFunction::Round,
        MathFunction::Min,
        MathFunction::Max,
        MathFunction::Sum,
        MathFunction::Pow,
        MathFunction::Sqrt,
        MathFunction::Log,
        MathFunction::Sin,
        MathFunction::Cos,
        MathFunction::Tan,
    ];

    /// Look up a function by its (case-sensitive) name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Name as written in formulas
    pub fn name(self) -> &'static str {
        match self {
            MathFunction::Abs => "abs",
            MathFunction::Round => "round",
            MathFunction::Min => "min",
            MathFunction::Max => "max",
            MathFunction::Sum => "sum",
            MathFunction::Pow => "pow",
            MathFunction::Sqrt => "sqrt",
            MathFunction::Log => "log",
            MathFunction::Sin => "sin",
            MathFunction::Cos => "cos",
            MathFunction::Tan => "tan",
        }
    }

    /// Minimum number of arguments
    pub fn min_args(self) -> usize {
        match self {
            MathFunction::Pow => 2,
            _ => 1,
        }
    }

    /// Maximum number of arguments (None = unlimited)
    pub fn max_args(self) -> Option<usize> {
        match self {
            MathFunction::Abs
            | MathFunction::Sqrt
            | MathFunction::Sin
            | MathFunction::Cos
            | MathFunction::Tan => Some(1),
            MathFunction::Pow | MathFunction::Round | MathFunction::Log => Some(2),
            MathFunction::Min | MathFunction::Max | MathFunction::Sum => None,
        }
    }

    /// Check an argument count against this function's arity
    pub fn accepts(self, count: usize) -> bool {
        count >= self.min_args() && self.max_args().map_or(true, |max| count <= max)
    }

    /// Human-readable arity, e.g. "1 argument", "1 to 2 arguments"
    pub fn arity_description(self) -> String {
        let min = self.min_args();
        match self.max_args() {
            Some(max) if max == min => {
                format!("{} argument{}", min, if min == 1 { "" } else { "s" })
            }
            Some(max) => format!("{} to {} arguments", min, max),
            None => format!("at least {} argument{}", min, if min == 1 { "" } else { "s" }),
        }
    }
}

/// Named math constants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathConstant {
    Pi,
    E,
}

impl MathConstant {
    /// Look up a constant by its (case-sensitive) name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" => Some(MathConstant::Pi),
            "e" => Some(MathConstant::E),
            _ => None,
        }
    }

    /// Name as written in formulas
    pub fn name(self) -> &'static str {
        match self {
            MathConstant::Pi => "pi",
            MathConstant::E => "e",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_cover_functions_and_constants() {
        for f in MathFunction::ALL {
            assert!(is_builtin(f.name()), "{} missing", f.name());
        }
        assert!(is_builtin(MathConstant::Pi.name()));
        assert!(is_builtin(MathConstant::E.name()));
        assert_eq!(BUILTIN_NAMES.len(), MathFunction::ALL.len() + 2);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(MathFunction::from_name("sqrt"), Some(MathFunction::Sqrt));
        assert_eq!(MathFunction::from_name("SQRT"), None);
        assert!(!is_builtin("PI"));
    }

    #[test]
    fn test_arity() {
        assert!(MathFunction::Pow.accepts(2));
        assert!(!MathFunction::Pow.accepts(1));
        assert!(MathFunction::Round.accepts(1));
        assert!(MathFunction::Round.accepts(2));
        assert!(!MathFunction::Round.accepts(3));
        assert!(MathFunction::Max.accepts(5));
        assert!(!MathFunction::Max.accepts(0));

        assert_eq!(MathFunction::Abs.arity_description(), "1 argument");
        assert_eq!(MathFunction::Pow.arity_description(), "2 arguments");
        assert_eq!(MathFunction::Log.arity_description(), "1 to 2 arguments");
        assert_eq!(MathFunction::Sum.arity_description(), "at least 1 argument");
    }
}
