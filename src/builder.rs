//! Builder for direct `Symbol` construction
//!
//! Operator overloads are the normal way to grow a tree; the builder is the
//! named-parameter escape hatch mirroring the full node configuration
//! `{name, constant, left, right, operator}`, with every invalid combination
//! rejected at `build()`.

use crate::ast::{Operator, Symbol, SymbolKind};
use crate::error::ValidationError;

/// Configurable constructor for a single [`Symbol`] node.
///
/// # Example
/// ```ignore
/// use symgrad::Symbol;
///
/// let a = Symbol::builder().name("a").build()?;
/// let two = Symbol::builder().constant(2.0).build()?;
///
/// // Both leaf fields at once is a construction error:
/// assert!(Symbol::builder().name("a").constant(1.0).build().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymbolBuilder {
    name: Option<String>,
    constant: Option<f64>,
    left: Option<Symbol>,
    right: Option<Symbol>,
    operator: Option<Operator>,
}

impl SymbolBuilder {
    pub fn new() -> Self {
        SymbolBuilder::default()
    }

    /// Set the variable name (leaf configuration)
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the constant value (leaf configuration)
    pub fn constant(mut self, value: f64) -> Self {
        self.constant = Some(value);
        self
    }

    /// Set the left child (internal-node configuration)
    pub fn left(mut self, left: Symbol) -> Self {
        self.left = Some(left);
        self
    }

    /// Set the right child (internal-node configuration)
    pub fn right(mut self, right: Symbol) -> Self {
        self.right = Some(right);
        self
    }

    /// Set the operator tag (internal-node configuration)
    pub fn operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    /// Validate the configuration and produce the node.
    ///
    /// # Errors
    /// See [`ValidationError`]; a node must be exactly one of variable leaf,
    /// constant leaf, or operator with the operands its arity requires.
    pub fn build(self) -> Result<Symbol, ValidationError> {
        let SymbolBuilder {
            name,
            constant,
            left,
            right,
            operator,
        } = self;

        if let Some(op) = operator {
            if name.is_some() || constant.is_some() {
                return Err(ValidationError::LeafWithOperator(op));
            }
            return Self::build_node(op, left, right);
        }

        if left.is_some() || right.is_some() {
            return Err(ValidationError::OperandWithoutOperator);
        }

        match (name, constant) {
            (Some(name), Some(_)) => Err(ValidationError::NameAndConstant { name }),
            (Some(name), None) => Symbol::variable(name),
            (None, Some(value)) => Ok(Symbol::constant(value)),
            (None, None) => Err(ValidationError::EmptyLeaf),
        }
    }

    fn build_node(
        op: Operator,
        left: Option<Symbol>,
        right: Option<Symbol>,
    ) -> Result<Symbol, ValidationError> {
        if op == Operator::Neg {
            if right.is_some() {
                return Err(ValidationError::ExtraOperand(op));
            }
            let operand = left.ok_or(ValidationError::MissingOperand(op))?;
            return Ok(Symbol::neg(operand));
        }

        let left = left.ok_or(ValidationError::MissingOperand(op))?;
        let right = right.ok_or(ValidationError::MissingOperand(op))?;
        let kind = match op {
            Operator::Add => SymbolKind::Add(left.into(), right.into()),
            Operator::Sub => SymbolKind::Sub(left.into(), right.into()),
            Operator::Mul => SymbolKind::Mul(left.into(), right.into()),
            Operator::Div => SymbolKind::Div(left.into(), right.into()),
            Operator::Pow => SymbolKind::Pow(left.into(), right.into()),
            Operator::Neg => unreachable!("handled above"),
        };
        Ok(Symbol::new(kind))
    }
}

impl Symbol {
    /// Start a named-parameter node configuration
    pub fn builder() -> SymbolBuilder {
        SymbolBuilder::new()
    }
}
