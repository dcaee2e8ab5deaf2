//! Integration tests for the indexed grouped sums

use groupsum::{
    grouped_sum_indexed, grouped_sum_indexed_one_pass, grouped_sum_indexed_one_pass_unchecked,
    typed::{
        grouped_sum_indexed_f64, grouped_sum_indexed_i32, grouped_sum_one_pass_i32,
        grouped_sum_one_pass_i64,
    },
    GroupSumError,
};

#[test]
fn test_two_groups_float() {
    let status = [1.0f64, 2.0, 3.0, 4.0];
    let group = [0i32, 1, 0, 1];

    let nested = grouped_sum_indexed(&status, &group, 2).unwrap();
    let one_pass = grouped_sum_indexed_one_pass(&status, &group, 2).unwrap();

    let expected = [4.0f64, 6.0];
    for i in 0..2 {
        let diff: f64 = (nested[i] - expected[i]).abs();
        assert!(diff < 1.0e-10);
        let diff: f64 = (one_pass[i] - expected[i]).abs();
        assert!(diff < 1.0e-10);
    }
}

#[test]
fn test_two_groups_integer() {
    let status = [1, 2, 3, 4];
    let group = [0, 1, 0, 1];

    assert_eq!(grouped_sum_indexed_i32(&status, &group, 2).unwrap(), vec![4, 6]);
    assert_eq!(grouped_sum_one_pass_i32(&status, &group, 2).unwrap(), vec![4, 6]);
}

#[test]
fn test_empty_input() {
    let status: [i32; 0] = [];
    let group: [i32; 0] = [];

    assert!(grouped_sum_indexed(&status, &group, 0).unwrap().is_empty());
    assert!(grouped_sum_indexed_one_pass(&status, &group, 0).unwrap().is_empty());
    assert!(grouped_sum_indexed_f64(&[], &[], 0).unwrap().is_empty());
}

#[test]
fn test_empty_input_with_groups_gives_zeros() {
    let status: [i64; 0] = [];
    let group: [i64; 0] = [];

    assert_eq!(grouped_sum_one_pass_i64(&status, &group, 3).unwrap(), vec![0, 0, 0]);
}

#[test]
fn test_single_group() {
    let status = [3, 1, 4, 1, 5, 9, 2, 6];
    let group = [0; 8];

    let total: i32 = status.iter().sum();
    assert_eq!(grouped_sum_indexed_i32(&status, &group, 1).unwrap(), vec![total]);
    assert_eq!(grouped_sum_one_pass_i32(&status, &group, 1).unwrap(), vec![total]);
}

#[test]
fn test_event_indicator_counts() {
    // Event/censoring indicators for eight subjects in three strata
    let status = [1, 0, 1, 1, 0, 0, 1, 1];
    let strata = [2, 0, 0, 2, 1, 2, 0, 2];

    assert_eq!(grouped_sum_one_pass_i32(&status, &strata, 3).unwrap(), vec![2, 0, 3]);
}

#[test]
fn test_out_of_range_rejected_by_both_variants() {
    let status = [1.0, 2.0, 3.0];
    let group = [0i32, 2, 1];

    let expected = Err(GroupSumError::GroupOutOfRange { position: 1, n_groups: 2 });
    assert_eq!(grouped_sum_indexed(&status, &group, 2), expected);
    assert_eq!(grouped_sum_indexed_one_pass(&status, &group, 2), expected);
}

#[test]
fn test_negative_index_rejected() {
    let result = grouped_sum_one_pass_i32(&[1, 1], &[0, -1], 2);

    assert_eq!(result, Err(GroupSumError::GroupOutOfRange { position: 1, n_groups: 2 }));
}

#[test]
fn test_length_mismatch_rejected() {
    let result = grouped_sum_indexed_one_pass(&[1, 2, 3], &[0u8, 0], 1);

    assert_eq!(result, Err(GroupSumError::LengthMismatch { status: 3, group: 2 }));
}

#[test]
fn test_unsigned_group_labels() {
    let status = [5u64, 6, 7];
    let group = [1usize, 1, 0];

    assert_eq!(grouped_sum_indexed(&status, &group, 2).unwrap(), vec![7, 11]);
}

#[test]
fn test_unchecked_one_pass() {
    let status = [2.0f32, 4.0, 8.0];
    let group = [1u16, 1, 0];

    // SAFETY: lengths match and every index is below 2
    let sums = unsafe { grouped_sum_indexed_one_pass_unchecked(&status, &group, 2) };

    assert_eq!(sums, vec![8.0, 6.0]);
}
