//! Row orthogonality of a character table.
//!
//! For irreducible characters `χ_i`, `χ_k` of a group `G`,
//! `Σ_j χ_i(j)·χ_k(j)·|class_j| = |G|·δ_ik`, where the class sizes are
//! `|G| / |C(j)|` and the centralizer orders `|C(j)|` follow from the cycle
//! type alone.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::character::{CharacterTable, GroupKind, Matrix};
use crate::partition::{Partition, SignedPartition};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrthogonalityError {
    #[error("table has {rows} rows but {n} has {classes} classes")]
    Shape {
        rows: usize,
        classes: usize,
        n: usize,
    },

    #[error("row {row} has {len} entries, expected {classes}")]
    Ragged {
        row: usize,
        len: usize,
        classes: usize,
    },

    #[error("rows {first} and {second}: inner product {actual}, expected {expected}")]
    InnerProduct {
        first: usize,
        second: usize,
        actual: i128,
        expected: i128,
    },

    #[error("group order for n = {0} does not fit in 128 bits")]
    Overflow(usize),
}

pub fn factorial(n: usize) -> Option<u128> {
    (2..=n as u128).try_fold(1u128, |acc, k| acc.checked_mul(k))
}

/// `n!` for `S_n`, `2^n·n!` for `B_n`.
pub fn group_order(kind: GroupKind, n: usize) -> Option<u128> {
    let base = factorial(n)?;
    match kind {
        GroupKind::Symmetric => Some(base),
        GroupKind::Hyperoctahedral => 1u128.checked_shl(n as u32)?.checked_mul(base),
    }
}

fn multiplicities(partition: &Partition) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    for &part in partition.parts() {
        *counts.entry(part).or_default() += 1;
    }
    counts
}

/// `Π k^m·m!` over the parts `k` of multiplicity `m`.
pub fn centralizer_order(cycle_type: &Partition) -> Option<u128> {
    centralizer_with(cycle_type, 1)
}

/// `Π (2k)^m·m!` over both halves.
pub fn signed_centralizer_order(cycle_type: &SignedPartition) -> Option<u128> {
    centralizer_with(cycle_type.positive(), 2)?.checked_mul(centralizer_with(cycle_type.negative(), 2)?)
}

fn centralizer_with(cycle_type: &Partition, scale: u128) -> Option<u128> {
    multiplicities(cycle_type)
        .into_iter()
        .try_fold(1u128, |acc, (part, count)| {
            let power = (scale * part as u128).checked_pow(count as u32)?;
            acc.checked_mul(power)?.checked_mul(factorial(count)?)
        })
}

/// Sizes of the conjugacy classes in canonical column order.
pub fn class_sizes(kind: GroupKind, n: usize) -> Option<Vec<u128>> {
    let order = group_order(kind, n)?;
    let centralizers: Option<Vec<u128>> = match kind {
        GroupKind::Symmetric => Partition::all(n).iter().map(centralizer_order).collect(),
        GroupKind::Hyperoctahedral => SignedPartition::all(n)
            .iter()
            .map(signed_centralizer_order)
            .collect(),
    };
    Some(centralizers?.into_iter().map(|c| order / c).collect())
}

pub fn check_orthogonality(table: &CharacterTable) -> Result<(), OrthogonalityError> {
    check_matrix(table.kind, table.n, &table.values)
}

/// Checks that `values` is square over the classes of the group and that its
/// rows are orthogonal with the right norms.
pub fn check_matrix(kind: GroupKind, n: usize, values: &Matrix) -> Result<(), OrthogonalityError> {
    let overflow = || OrthogonalityError::Overflow(n);
    let order = group_order(kind, n)
        .and_then(|order| i128::try_from(order).ok())
        .ok_or_else(overflow)?;
    let sizes: Vec<i128> = class_sizes(kind, n)
        .ok_or_else(overflow)?
        .into_iter()
        .map(|size| i128::try_from(size).map_err(|_| overflow()))
        .collect::<Result<_, _>>()?;
    if values.len() != sizes.len() {
        return Err(OrthogonalityError::Shape {
            rows: values.len(),
            classes: sizes.len(),
            n,
        });
    }
    if let Some((row, entries)) = values.iter().enumerate().find(|(_, r)| r.len() != sizes.len()) {
        return Err(OrthogonalityError::Ragged {
            row,
            len: entries.len(),
            classes: sizes.len(),
        });
    }
    for (first, a) in values.iter().enumerate() {
        for (second, b) in values.iter().enumerate().skip(first) {
            let actual = a
                .iter()
                .zip(b)
                .zip(&sizes)
                .try_fold(0i128, |acc, ((&x, &y), &size)| {
                    (x as i128 * y as i128)
                        .checked_mul(size)
                        .and_then(|term| acc.checked_add(term))
                })
                .ok_or_else(overflow)?;
            let expected = if first == second { order } else { 0 };
            if actual != expected {
                return Err(OrthogonalityError::InnerProduct {
                    first,
                    second,
                    actual,
                    expected,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{generate_hn_table, generate_sn_table};

    #[test]
    fn test_orders() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert_eq!(group_order(GroupKind::Hyperoctahedral, 3), Some(48));
        assert_eq!(factorial(40), None);
    }

    #[test]
    fn test_centralizers() {
        let p = |parts: &[usize]| Partition::new(parts.to_vec()).unwrap();
        assert_eq!(centralizer_order(&p(&[1, 1, 1])), Some(6));
        assert_eq!(centralizer_order(&p(&[2, 2, 1])), Some(8));
        assert_eq!(
            signed_centralizer_order(&SignedPartition::new(p(&[1]), p(&[1, 1]))),
            Some(2 * 8)
        );
    }

    #[test]
    fn test_class_sizes_sum_to_order() {
        for n in 0..=8 {
            let sizes = class_sizes(GroupKind::Symmetric, n).unwrap();
            assert_eq!(sizes.iter().sum::<u128>(), factorial(n).unwrap());
        }
        for n in 0..=6 {
            let sizes = class_sizes(GroupKind::Hyperoctahedral, n).unwrap();
            assert_eq!(
                sizes.iter().sum::<u128>(),
                group_order(GroupKind::Hyperoctahedral, n).unwrap()
            );
        }
    }

    #[test]
    fn test_generated_tables_are_orthogonal() {
        for n in 0..=8 {
            assert_eq!(check_matrix(GroupKind::Symmetric, n, &generate_sn_table(n)), Ok(()));
        }
        for n in 0..=5 {
            assert_eq!(
                check_matrix(GroupKind::Hyperoctahedral, n, &generate_hn_table(n)),
                Ok(())
            );
        }
    }

    #[test]
    fn test_order_beyond_i128_is_overflow() {
        // 34! fits in u128 but not in i128.
        assert!(group_order(GroupKind::Symmetric, 34).is_some());
        assert_eq!(
            check_matrix(GroupKind::Symmetric, 34, &Matrix::new()),
            Err(OrthogonalityError::Overflow(34))
        );
        assert_eq!(
            check_matrix(GroupKind::Hyperoctahedral, 30, &Matrix::new()),
            Err(OrthogonalityError::Overflow(30))
        );
    }

    #[test]
    fn test_detects_corruption() {
        let mut table = generate_sn_table(4);
        table[2][3] = 1;
        assert!(matches!(
            check_matrix(GroupKind::Symmetric, 4, &table),
            Err(OrthogonalityError::InnerProduct { .. })
        ));
        table.pop();
        assert!(matches!(
            check_matrix(GroupKind::Symmetric, 4, &table),
            Err(OrthogonalityError::Shape { rows: 4, classes: 5, n: 4 })
        ));
        let mut table = generate_sn_table(3);
        table[1].push(0);
        assert!(matches!(
            check_matrix(GroupKind::Symmetric, 3, &table),
            Err(OrthogonalityError::Ragged { row: 1, .. })
        ));
    }
}
