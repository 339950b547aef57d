// Copyright 2026 Sqltree Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for tree traversals
//!
//! A failed traversal reports which node variant triggered the failure and
//! where it sits in the source. Failures are local to one traversal call;
//! traversals never mutate the tree, so retrying without changing the tree
//! reproduces the same failure.

use crate::ast::NodeKind;
use crate::position::Position;
use thiserror::Error;

/// Result type alias for traversal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for tree traversals
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The traversal reached a node variant it defines no handling for.
    ///
    /// Fatal to the traversal call. A consumer must never fall back to an
    /// empty or default result for a variant it does not understand.
    #[error("unsupported node kind {kind} at {position}")]
    UnsupportedNodeKind { kind: NodeKind, position: Position },

    /// A structural invariant of the tree is violated.
    ///
    /// Detected opportunistically where a traversal must branch on the
    /// shape of a node, e.g. an INSERT with neither a VALUES clause nor a
    /// SELECT populated.
    #[error("malformed tree: {reason} in {kind} at {position}")]
    MalformedTree {
        kind: NodeKind,
        reason: String,
        position: Position,
    },
}

impl Error {
    /// Create an `UnsupportedNodeKind` error
    pub fn unsupported(kind: NodeKind, position: Position) -> Self {
        Error::UnsupportedNodeKind { kind, position }
    }

    /// Create a `MalformedTree` error
    pub fn malformed(kind: NodeKind, position: Position, reason: impl Into<String>) -> Self {
        Error::MalformedTree {
            kind,
            reason: reason.into(),
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_display() {
        let err = Error::unsupported(NodeKind::TableConstraint, Position::new(3, 14));
        assert_eq!(
            err.to_string(),
            "unsupported node kind TableConstraint at line 3, column 14"
        );
    }

    #[test]
    fn test_malformed_display() {
        let err = Error::malformed(
            NodeKind::InsertStatement,
            Position::new(1, 1),
            "neither VALUES nor SELECT populated",
        );
        assert_eq!(
            err.to_string(),
            "malformed tree: neither VALUES nor SELECT populated in InsertStatement at line 1, column 1"
        );
    }
}
