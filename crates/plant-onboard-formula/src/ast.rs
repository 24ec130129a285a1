//! Formula Abstract Syntax Tree types

use crate::functions::{MathConstant, MathFunction};

/// Formula expression AST
///
/// Parameter references never appear here: the validator replaces them with
/// numeric literals before parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaExpr {
    /// Numeric literal
    Number(f64),
    /// Named constant (`pi`, `e`)
    Constant(MathConstant),

    /// Left-associative run of operators of one precedence level:
    /// `first op1 operand1 op2 operand2 ...`
    ///
    /// Kept flat so a long sum does not turn into a deep tree.
    BinaryChain {
        first: Box<FormulaExpr>,
        rest: Vec<(BinaryOperator, FormulaExpr)>,
    },
    /// Unary operation
    UnaryOp {
        op: UnaryOperator,
        operand: Box<FormulaExpr>,
    },

    /// Call to a builtin math function
    Function {
        function: MathFunction,
        args: Vec<FormulaExpr>,
    },
}

impl FormulaExpr {
    /// Visit every function call in the tree, outermost first
    pub fn functions(&self) -> Vec<MathFunction> {
        let mut out = Vec::new();
        self.collect_functions(&mut out);
        out
    }

    fn collect_functions(&self, out: &mut Vec<MathFunction>) {
        match self {
            FormulaExpr::Number(_) | FormulaExpr::Constant(_) => {}
            FormulaExpr::BinaryChain { first, rest } => {
                first.collect_functions(out);
                for (_, operand) in rest {
                    operand.collect_functions(out);
                }
            }
            FormulaExpr::UnaryOp { operand, .. } => operand.collect_functions(out),
            FormulaExpr::Function { function, args } => {
                out.push(*function);
                for arg in args {
                    arg.collect_functions(out);
                }
            }
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
    Plus,
}
