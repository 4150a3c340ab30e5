//! Operation selector and the static operations catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of binary operations the calculator supports.
///
/// Serializes as the lowercase canonical key (`"add"`, `"divide"`, ...),
/// which is also what [`FromStr`] accepts. Unrecognized keys are rejected at
/// the boundary before evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

/// Catalog entry describing one operation for client discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationInfo {
    /// Canonical lowercase key (`"add"`).
    pub key: &'static str,
    /// Operator symbol (`"+"`).
    pub symbol: &'static str,
    /// Human-readable name (`"Addition"`).
    pub name: &'static str,
}

impl Operation {
    /// All supported operations, in catalog order.
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
    ];

    /// Canonical lowercase key used on the wire and in configs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
        }
    }

    /// Operator symbol as used by the interactive REPL.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Power => "^",
        }
    }

    /// Human-readable display name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
            Operation::Divide => "Division",
            Operation::Power => "Power",
        }
    }

    /// Look an operation up by its REPL symbol.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Operation> {
        Operation::ALL.iter().copied().find(|op| op.symbol() == symbol)
    }

    /// Catalog entry for this operation.
    #[must_use]
    pub fn info(self) -> OperationInfo {
        OperationInfo {
            key: self.as_str(),
            symbol: self.symbol(),
            name: self.display_name(),
        }
    }

    /// The full operations catalog, in declaration order.
    #[must_use]
    pub fn catalog() -> Vec<OperationInfo> {
        Operation::ALL.iter().map(|op| op.info()).collect()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an operation key is not in the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown operation: {0:?}")]
pub struct UnknownOperation(pub String);

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            "power" => Ok(Operation::Power),
            other => Err(UnknownOperation(other.to_owned())),
        }
    }
}
