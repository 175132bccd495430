//! Character tables of the symmetric groups `S_n` and the hyperoctahedral
//! groups `B_n` (signed permutations).
//!
//! Rows are indexed by (signed) Young diagrams, columns by (signed) cycle
//! types, both in a fixed canonical order. Each entry is computed with the
//! Murnaghan–Nakayama rule: border strips are removed from the diagram one
//! cycle at a time, with a memo shared across the whole table.
//!
//! ```
//! use hyperoctahedral::generate_sn_table;
//!
//! assert_eq!(
//!     generate_sn_table(3),
//!     vec![vec![1, -1, 1], vec![2, 0, -1], vec![1, 1, 1]]
//! );
//! ```

pub mod character;
pub mod diagram;
pub mod error;
pub mod partition;
pub mod render;
pub mod verify;

pub use character::{
    generate_hn_table, generate_sn_table, generate_table, CharacterEngine, CharacterTable,
    GroupKind, Matrix, TableRequest,
};
pub use diagram::{Diagram, Shape, SignedDiagram};
pub use error::{Error, Result};
pub use partition::{Partition, PartitionBuilder, SignedPartition, SignedPartitionBuilder};
