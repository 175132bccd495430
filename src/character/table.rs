//! Full character tables and the `S<n>` / `H<n>` request dispatcher.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CharacterEngine;
use crate::diagram::{Diagram, SignedDiagram};
use crate::error::{Error, Result};
use crate::partition::{Partition, SignedPartition};

/// Rows are irreducible characters, columns conjugacy classes.
pub type Matrix = Vec<Vec<i64>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    /// `S_n`, permutations of `n` symbols.
    Symmetric,
    /// `B_n`, signed permutations of `n` symbols.
    Hyperoctahedral,
}

impl GroupKind {
    fn tag(self) -> char {
        match self {
            GroupKind::Symmetric => 'S',
            GroupKind::Hyperoctahedral => 'H',
        }
    }
}

/// A parsed table request such as `S10` or `h3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableRequest {
    pub kind: GroupKind,
    pub n: usize,
}

impl FromStr for TableRequest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::MalformedRequest(s.to_string());
        let mut chars = s.chars();
        let kind = match chars.next().map(|c| c.to_ascii_lowercase()) {
            Some('s') => GroupKind::Symmetric,
            Some('h') => GroupKind::Hyperoctahedral,
            _ => return Err(malformed()),
        };
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let n = digits.parse().map_err(|_| malformed())?;
        Ok(Self { kind, n })
    }
}

impl Display for TableRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.tag(), self.n)
    }
}

/// The character table of `S_n`, rows and columns in canonical partition order.
pub fn generate_sn_table(n: usize) -> Matrix {
    let classes = Partition::all(n);
    let characters = Diagram::all(n);
    let mut engine = CharacterEngine::new();
    let table = engine.table(&characters, &classes);
    debug!(
        n,
        classes = classes.len(),
        memo_entries = engine.memo().len(),
        memo_hits = engine.memo().hits(),
        "generated symmetric group table"
    );
    table
}

/// The character table of `B_n`, rows and columns in signed partition order.
pub fn generate_hn_table(n: usize) -> Matrix {
    let classes = SignedPartition::all(n);
    let characters = SignedDiagram::all(n);
    let mut engine = CharacterEngine::new();
    let table = engine.table(&characters, &classes);
    debug!(
        n,
        classes = classes.len(),
        memo_entries = engine.memo().len(),
        memo_hits = engine.memo().hits(),
        "generated hyperoctahedral group table"
    );
    table
}

/// Parses `request` and generates the matching table.
pub fn generate_table(request: &str) -> Result<Matrix> {
    let request: TableRequest = request.parse()?;
    Ok(match request.kind {
        GroupKind::Symmetric => generate_sn_table(request.n),
        GroupKind::Hyperoctahedral => generate_hn_table(request.n),
    })
}

/// A character table together with its row and column labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterTable {
    pub kind: GroupKind,
    pub n: usize,
    /// Labels of the irreducible characters, one per row.
    pub characters: Vec<String>,
    /// Labels of the conjugacy classes, one per column.
    pub classes: Vec<String>,
    pub values: Matrix,
}

impl CharacterTable {
    pub fn generate(request: TableRequest) -> Self {
        let TableRequest { kind, n } = request;
        let (labels, values): (Vec<String>, Matrix) = match kind {
            GroupKind::Symmetric => (
                Partition::all(n).iter().map(ToString::to_string).collect(),
                generate_sn_table(n),
            ),
            GroupKind::Hyperoctahedral => (
                SignedPartition::all(n).iter().map(ToString::to_string).collect(),
                generate_hn_table(n),
            ),
        };
        Self {
            kind,
            n,
            characters: labels.clone(),
            classes: labels,
            values,
        }
    }

    pub fn request(&self) -> TableRequest {
        TableRequest {
            kind: self.kind,
            n: self.n,
        }
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request() {
        assert_eq!(
            "S10".parse::<TableRequest>().unwrap(),
            TableRequest {
                kind: GroupKind::Symmetric,
                n: 10
            }
        );
        assert_eq!(
            "h0".parse::<TableRequest>().unwrap(),
            TableRequest {
                kind: GroupKind::Hyperoctahedral,
                n: 0
            }
        );
        for bad in ["", "S", "X3", "S-1", "S+1", "3S", " S3", "S3 ", "H1.5", "SS3"] {
            assert!(
                matches!(bad.parse::<TableRequest>(), Err(Error::MalformedRequest(_))),
                "{bad:?}"
            );
        }
        assert_eq!("s7".parse::<TableRequest>().unwrap().to_string(), "S7");
    }

    #[test]
    fn test_small_symmetric_tables() {
        assert_eq!(generate_sn_table(0), vec![vec![1]]);
        assert_eq!(generate_sn_table(1), vec![vec![1]]);
        assert_eq!(generate_sn_table(2), vec![vec![1, -1], vec![1, 1]]);
        assert_eq!(
            generate_sn_table(3),
            vec![vec![1, -1, 1], vec![2, 0, -1], vec![1, 1, 1]]
        );
        assert_eq!(
            generate_sn_table(4),
            vec![
                vec![1, -1, 1, 1, -1],
                vec![3, -1, -1, 0, 1],
                vec![2, 0, 2, -1, 0],
                vec![3, 1, -1, 0, -1],
                vec![1, 1, 1, 1, 1],
            ]
        );
    }

    #[test]
    fn test_small_hyperoctahedral_tables() {
        assert_eq!(generate_hn_table(0), vec![vec![1]]);
        assert_eq!(generate_hn_table(1), vec![vec![1, 1], vec![1, -1]]);
        assert_eq!(
            generate_hn_table(2),
            vec![
                vec![1, -1, 1, -1, 1],
                vec![1, 1, 1, 1, 1],
                vec![2, 0, 0, 0, -2],
                vec![1, 1, -1, -1, 1],
                vec![1, -1, -1, 1, 1],
            ]
        );
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(generate_table("s3").unwrap(), generate_sn_table(3));
        assert_eq!(generate_table("H2").unwrap(), generate_hn_table(2));
        assert!(matches!(
            generate_table("Q2"),
            Err(Error::MalformedRequest(_))
        ));
    }

    #[test]
    fn test_labelled_table() {
        let table = CharacterTable::generate("S3".parse().unwrap());
        assert_eq!(table.classes, vec!["(1,1,1)", "(2,1)", "(3)"]);
        assert_eq!(table.characters, table.classes);
        assert_eq!(table.values, generate_sn_table(3));
        assert_eq!(table.len(), 3);
        assert_eq!(table.request().to_string(), "S3");

        let table = CharacterTable::generate("H1".parse().unwrap());
        assert_eq!(table.classes, vec!["((1),())", "((),(1))"]);
    }
}
