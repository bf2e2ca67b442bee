use std::fmt;

use crate::ast::Operator;

/// Errors raised while constructing symbols or expression trees.
///
/// All variants are detected at construction time; a tree that exists is
/// structurally valid.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The factory input contained no identifiers
    EmptySpec,

    /// An identifier repeated within a single factory call
    DuplicateName(String),

    /// A variable name was empty or contained whitespace
    InvalidName(String),

    /// `symbols::<N>` was given a spec with a different identifier count
    ArityMismatch { expected: usize, found: usize },

    /// A leaf was configured with both a name and a constant
    NameAndConstant { name: String },

    /// A builder finished with neither a name, a constant, nor an operator
    EmptyLeaf,

    /// Leaf fields were combined with an operator
    LeafWithOperator(Operator),

    /// Children were supplied without an operator
    OperandWithoutOperator,

    /// An operator was missing a required operand
    MissingOperand(Operator),

    /// A unary operator was given a right operand
    ExtraOperand(Operator),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptySpec => {
                write!(f, "Symbol specification contains no identifiers")
            }
            ValidationError::DuplicateName(name) => {
                write!(f, "Duplicate variable name '{}' in one symbol() call", name)
            }
            ValidationError::InvalidName(name) => {
                write!(f, "Invalid variable name '{}'", name)
            }
            ValidationError::ArityMismatch { expected, found } => {
                write!(
                    f,
                    "Expected {} symbol name(s), but the specification has {}",
                    expected, found
                )
            }
            ValidationError::NameAndConstant { name } => {
                write!(
                    f,
                    "Leaf '{}' cannot carry both a name and a constant",
                    name
                )
            }
            ValidationError::EmptyLeaf => {
                write!(f, "Leaf must carry either a name or a constant")
            }
            ValidationError::LeafWithOperator(op) => {
                write!(
                    f,
                    "Node with operator '{}' cannot also carry leaf fields",
                    op
                )
            }
            ValidationError::OperandWithoutOperator => {
                write!(f, "Operands were supplied without an operator")
            }
            ValidationError::MissingOperand(op) => {
                write!(
                    f,
                    "Operator '{}' requires {} operand(s)",
                    op,
                    op.arity()
                )
            }
            ValidationError::ExtraOperand(op) => {
                write!(f, "Unary operator '{}' takes a single operand", op)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A variable referenced by the tree was missing from the evaluation point.
///
/// Raised by `eval`, `deriv` and `deriv_along`; the whole call aborts, there
/// is no partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnboundVariableError {
    name: String,
}

impl UnboundVariableError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        UnboundVariableError { name: name.into() }
    }

    /// The variable name that had no binding
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnboundVariableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Variable '{}' is not bound in the point", self.name)
    }
}

impl std::error::Error for UnboundVariableError {}
