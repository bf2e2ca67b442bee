//! Expression tree for forward-mode automatic differentiation

use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::error::ValidationError;

/// Operator tag carried by internal nodes.
///
/// `Neg` is the single unary operator; all others take two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition
    Add,
    /// Subtraction (left − right)
    Sub,
    /// Multiplication
    Mul,
    /// Division (left / right)
    Div,
    /// Exponentiation (left ^ right)
    Pow,
    /// Unary negation
    Neg,
}

impl Operator {
    /// Number of operands the operator requires
    pub fn arity(&self) -> usize {
        match self {
            Operator::Neg => 1,
            _ => 2,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
            Operator::Neg => "neg",
        };
        write!(f, "{}", token)
    }
}

/// An immutable node in a symbolic expression tree.
///
/// Leaves are named variables or numeric constants; internal nodes are
/// produced by the arithmetic operators and [`Symbol::pow`]. Once built, a
/// tree never changes: operators allocate new nodes instead of mutating,
/// so a `Symbol` can be shared and evaluated concurrently without
/// coordination.
///
/// # Example
/// ```ignore
/// use symgrad::symbols;
///
/// let [a, b] = symbols::<2>("a b")?;
/// let f = a.clone().pow(2.0) + a * b.clone() - b;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub kind: SymbolKind,
}

/// The three shapes a node can take: variable leaf, constant leaf, or an
/// operator applied to owned children.
#[derive(Debug, Clone, PartialEq)]
pub enum SymbolKind {
    /// Named variable leaf; bound by name lookup at evaluation time
    Variable(String),

    /// Numeric constant leaf
    Constant(f64),

    /// Addition
    Add(Arc<Symbol>, Arc<Symbol>),

    /// Subtraction
    Sub(Arc<Symbol>, Arc<Symbol>),

    /// Multiplication
    Mul(Arc<Symbol>, Arc<Symbol>),

    /// Division
    Div(Arc<Symbol>, Arc<Symbol>),

    /// Exponentiation; either operand may be a full subtree
    Pow(Arc<Symbol>, Arc<Symbol>),

    /// Unary negation
    Neg(Arc<Symbol>),
}

impl Symbol {
    pub(crate) fn new(kind: SymbolKind) -> Self {
        Symbol { kind }
    }

    // Leaf constructors

    /// Create a constant leaf
    pub fn constant(value: f64) -> Self {
        Symbol::new(SymbolKind::Constant(value))
    }

    /// Create a variable leaf
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidName`] if the name is empty or
    /// contains whitespace.
    pub fn variable(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(ValidationError::InvalidName(name));
        }
        Ok(Symbol::variable_unchecked(name))
    }

    /// Variable leaf from a name the caller has already validated
    pub(crate) fn variable_unchecked(name: impl Into<String>) -> Self {
        Symbol::new(SymbolKind::Variable(name.into()))
    }

    // Node constructors; the operator overloads delegate here

    /// Create an addition node
    pub fn add(left: Symbol, right: Symbol) -> Self {
        Symbol::new(SymbolKind::Add(Arc::new(left), Arc::new(right)))
    }

    /// Create a subtraction node
    pub fn sub(left: Symbol, right: Symbol) -> Self {
        Symbol::new(SymbolKind::Sub(Arc::new(left), Arc::new(right)))
    }

    /// Create a multiplication node
    pub fn mul(left: Symbol, right: Symbol) -> Self {
        Symbol::new(SymbolKind::Mul(Arc::new(left), Arc::new(right)))
    }

    /// Create a division node
    pub fn div(left: Symbol, right: Symbol) -> Self {
        Symbol::new(SymbolKind::Div(Arc::new(left), Arc::new(right)))
    }

    /// Create a negation node
    pub fn neg(operand: Symbol) -> Self {
        Symbol::new(SymbolKind::Neg(Arc::new(operand)))
    }

    // Accessors

    /// Variable name, if this node is a variable leaf
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            SymbolKind::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Constant value, if this node is a constant leaf
    pub fn constant_value(&self) -> Option<f64> {
        match &self.kind {
            SymbolKind::Constant(n) => Some(*n),
            _ => None,
        }
    }

    /// Operator tag, if this node is an internal node
    pub fn operator(&self) -> Option<Operator> {
        match &self.kind {
            SymbolKind::Variable(_) | SymbolKind::Constant(_) => None,
            SymbolKind::Add(_, _) => Some(Operator::Add),
            SymbolKind::Sub(_, _) => Some(Operator::Sub),
            SymbolKind::Mul(_, _) => Some(Operator::Mul),
            SymbolKind::Div(_, _) => Some(Operator::Div),
            SymbolKind::Pow(_, _) => Some(Operator::Pow),
            SymbolKind::Neg(_) => Some(Operator::Neg),
        }
    }

    /// Left child (the sole child for `neg`), if any
    pub fn left(&self) -> Option<&Symbol> {
        match &self.kind {
            SymbolKind::Variable(_) | SymbolKind::Constant(_) => None,
            SymbolKind::Add(l, _)
            | SymbolKind::Sub(l, _)
            | SymbolKind::Mul(l, _)
            | SymbolKind::Div(l, _)
            | SymbolKind::Pow(l, _) => Some(l),
            SymbolKind::Neg(operand) => Some(operand),
        }
    }

    /// Right child, if any; always absent for leaves and `neg`
    pub fn right(&self) -> Option<&Symbol> {
        match &self.kind {
            SymbolKind::Variable(_) | SymbolKind::Constant(_) | SymbolKind::Neg(_) => None,
            SymbolKind::Add(_, r)
            | SymbolKind::Sub(_, r)
            | SymbolKind::Mul(_, r)
            | SymbolKind::Div(_, r)
            | SymbolKind::Pow(_, r) => Some(r),
        }
    }

    /// True for variable and constant leaves
    pub fn is_leaf(&self) -> bool {
        matches!(
            self.kind,
            SymbolKind::Variable(_) | SymbolKind::Constant(_)
        )
    }

    /// Collect the names of all variables reachable from this node
    pub fn variables(&self) -> FxHashSet<String> {
        let mut vars = FxHashSet::default();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut FxHashSet<String>) {
        match &self.kind {
            SymbolKind::Variable(name) => {
                vars.insert(name.clone());
            }
            SymbolKind::Constant(_) => {}
            SymbolKind::Add(l, r)
            | SymbolKind::Sub(l, r)
            | SymbolKind::Mul(l, r)
            | SymbolKind::Div(l, r)
            | SymbolKind::Pow(l, r) => {
                l.collect_variables(vars);
                r.collect_variables(vars);
            }
            SymbolKind::Neg(operand) => operand.collect_variables(vars),
        }
    }
}
