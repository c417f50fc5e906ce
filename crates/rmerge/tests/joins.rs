// dependencies
use std::collections::{BTreeSet, HashMap, HashSet};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rstest::rstest;
use serde_json::{json, Value};
use rmerge::data_frame::prelude::*;

/* -----------------------------------------------------------------------------
fixtures
----------------------------------------------------------------------------- */
fn table_a() -> DataFrame {
    DataFrame::from_json_rows(&[
        json!({"id": 1, "v": "x"}),
        json!({"id": 2, "v": "y"}),
    ]).unwrap()
}
fn table_b() -> DataFrame {
    DataFrame::from_json_rows(&[
        json!({"id": 2, "w": "z"}),
        json!({"id": 3, "w": "q"}),
    ]).unwrap()
}

// random tables with a small key space, so that keys repeat on both sides
fn random_table(rng: &mut StdRng, n_row: usize, value_col: &str) -> DataFrame {
    let k1: Vec<Option<i32>> = (0..n_row).map(|_| {
        if rng.gen_bool(0.1) { None } else { Some(rng.gen_range(0..6)) }
    }).collect();
    let k2: Vec<Option<String>> = (0..n_row).map(|_| {
        Some(["a", "b"][rng.gen_range(0..2)].to_string())
    }).collect();
    let vals: Vec<Option<i32>> = (0..n_row as i32).map(Some).collect();
    let mut df = DataFrame::new();
    df.add_col("k1", k1).unwrap();
    df.add_col("k2", k2).unwrap();
    df.add_col(value_col, vals).unwrap();
    df
}
fn random_pair(seed: u64) -> (DataFrame, DataFrame) {
    let mut rng = StdRng::seed_from_u64(seed);
    let n_a = rng.gen_range(0..40);
    let n_b = rng.gen_range(0..40);
    (random_table(&mut rng, n_a, "a"), random_table(&mut rng, n_b, "b"))
}

fn join(df_a: &DataFrame, df_b: &DataFrame, join_type: JoinType, sorted: bool, na: NaMatches) -> DataFrame {
    Join::new()
        .set_join_type(join_type)
        .by(&["k1", "k2"])
        .sorted(sorted)
        .na_matches(na)
        .execute_join(&[df_a, df_b])
        .unwrap()
}

// rows as comparable strings, for set and multiset comparisons
fn row_strings(df: &DataFrame) -> Vec<String> {
    let mut rows: Vec<String> = df.to_json_rows().iter().map(Value::to_string).collect();
    rows.sort();
    rows
}
fn key_counts(df: &DataFrame) -> HashMap<(Option<i32>, Option<String>), usize> {
    let k1 = df.get_ref::<i32>("k1").unwrap();
    let k2 = df.get_ref::<String>("k2").unwrap();
    let mut counts = HashMap::new();
    for (a, b) in k1.iter().zip(k2) {
        *counts.entry((*a, b.clone())).or_insert(0) += 1;
    }
    counts
}

/* -----------------------------------------------------------------------------
worked example
----------------------------------------------------------------------------- */
#[rstest]
#[case::inner(JoinType::Inner, json!([{"id": 2, "v": "y", "w": "z"}]))]
#[case::left(JoinType::Left, json!([
    {"id": 1, "v": "x", "w": null},
    {"id": 2, "v": "y", "w": "z"}
]))]
#[case::right(JoinType::Right, json!([
    {"id": 2, "v": "y",  "w": "z"},
    {"id": 3, "v": null, "w": "q"}
]))]
#[case::full(JoinType::Full, json!([
    {"id": 1, "v": "x",  "w": null},
    {"id": 2, "v": "y",  "w": "z"},
    {"id": 3, "v": null, "w": "q"}
]))]
#[case::semi(JoinType::Semi, json!([{"id": 2, "v": "y"}]))]
#[case::anti(JoinType::Anti, json!([{"id": 1, "v": "x"}]))]
fn example_tables_join(
    #[case] join_type: JoinType,
    #[case] expected: Value,
    #[values(false, true)] sorted: bool,
) {
    let df = Join::new()
        .set_join_type(join_type)
        .by(&["id"])
        .sorted(sorted)
        .execute_join(&[&table_a(), &table_b()])
        .unwrap();
    assert_eq!(Value::Array(df.to_json_rows()), expected);
}

#[rstest]
#[case("inner", JoinType::Inner)]
#[case("LEFT", JoinType::Left)]
#[case("outer", JoinType::Full)]
#[case("anti", JoinType::Anti)]
fn join_types_parse(#[case] name: &str, #[case] expected: JoinType) {
    assert_eq!(name.parse::<JoinType>().unwrap(), expected);
}

#[test]
fn unknown_key_column_is_reported() {
    let err = table_a().inner_join(&table_b(), &["nope"]).unwrap_err();
    assert!(matches!(err, DataFrameError::ColumnNotFound { .. }));
}

#[test]
fn key_type_mismatch_is_rejected() {
    let b = DataFrame::from_json_rows(&[json!({"id": "2", "w": "z"})]).unwrap();
    let err = table_a().left_join(&b, &["id"]).unwrap_err();
    assert!(matches!(err, DataFrameError::KeyTypeMismatch { .. }));
}

#[test]
fn empty_tables_join_to_typed_empty_tables() {
    let a = DataFrame::from_schema(&table_a());
    let df = a.full_join(&table_b(), &["id"]).unwrap();
    assert_eq!(df.n_row(), 2);
    assert_eq!(df.col_type("v").unwrap(), ColType::String);
    let df = a.inner_join(&table_b(), &["id"]).unwrap();
    assert_eq!(df.n_row(), 0);
    assert_eq!(df.col_names(), &vec!["id", "v", "w"]);
}

/* -----------------------------------------------------------------------------
properties over random tables
----------------------------------------------------------------------------- */
#[test]
fn inner_join_rows_are_products_of_key_multiplicities() {
    for seed in 0..20 {
        let (a, b) = random_pair(seed);
        let (counts_a, counts_b) = (key_counts(&a), key_counts(&b));
        for na in [NaMatches::Na, NaMatches::Never] {
            let expected: usize = counts_a.iter()
                .filter(|((k1, k2), _)| na == NaMatches::Na || (k1.is_some() && k2.is_some()))
                .map(|(key, m)| m * counts_b.get(key).copied().unwrap_or(0))
                .sum();
            for sorted in [false, true] {
                assert_eq!(join(&a, &b, JoinType::Inner, sorted, na).n_row(), expected, "seed {seed}");
            }
        }
    }
}

#[test]
fn semi_and_anti_joins_partition_the_left_table() {
    for seed in 0..20 {
        let (a, b) = random_pair(seed);
        let keys_b: HashSet<_> = key_counts(&b).into_keys().collect();
        let n_matched = key_counts(&a).iter()
            .filter(|(key, _)| keys_b.contains(key))
            .map(|(_, m)| m)
            .sum::<usize>();
        for sorted in [false, true] {
            let semi = join(&a, &b, JoinType::Semi, sorted, NaMatches::Na);
            let anti = join(&a, &b, JoinType::Anti, sorted, NaMatches::Na);
            assert_eq!(semi.col_names(), a.col_names());
            assert_eq!(anti.col_names(), a.col_names());
            assert!(semi.n_row() <= a.n_row());
            assert_eq!(semi.n_row(), n_matched, "seed {seed}");

            let mut both = row_strings(&semi);
            both.extend(row_strings(&anti));
            both.sort();
            assert_eq!(both, row_strings(&a), "seed {seed}");
        }
    }
}

#[test]
fn full_join_contains_left_and_right_joins() {
    for seed in 0..20 {
        let (a, b) = random_pair(seed);
        for na in [NaMatches::Na, NaMatches::Never] {
            let full:  BTreeSet<String> = row_strings(&join(&a, &b, JoinType::Full,  false, na)).into_iter().collect();
            let left:  BTreeSet<String> = row_strings(&join(&a, &b, JoinType::Left,  false, na)).into_iter().collect();
            let right: BTreeSet<String> = row_strings(&join(&a, &b, JoinType::Right, false, na)).into_iter().collect();
            assert!(left.is_subset(&full), "seed {seed}");
            assert!(right.is_subset(&full), "seed {seed}");
        }
    }
}

#[test]
fn mutating_joins_keep_every_row_of_the_retained_sides() {
    for seed in 0..20 {
        let (a, b) = random_pair(seed);
        let left = join(&a, &b, JoinType::Left, false, NaMatches::Never);
        let left_a: HashSet<i32> = left.get_ref::<i32>("a").unwrap().iter().flatten().copied().collect();
        assert_eq!(left_a.len(), a.n_row(), "seed {seed}");
        let full = join(&a, &b, JoinType::Full, false, NaMatches::Never);
        let full_b: HashSet<i32> = full.get_ref::<i32>("b").unwrap().iter().flatten().copied().collect();
        assert_eq!(full_b.len(), b.n_row(), "seed {seed}");
    }
}

#[test]
fn hash_and_merge_joins_agree() {
    for seed in 0..20 {
        let (a, b) = random_pair(seed);
        for join_type in [JoinType::Inner, JoinType::Left, JoinType::Right, JoinType::Full, JoinType::Semi, JoinType::Anti] {
            for na in [NaMatches::Na, NaMatches::Never] {
                assert_eq!(
                    row_strings(&join(&a, &b, join_type, false, na)),
                    row_strings(&join(&a, &b, join_type, true, na)),
                    "seed {seed} {join_type}"
                );
            }
        }
    }
}

#[test]
fn unsorted_left_join_keeps_left_row_order() {
    for seed in 0..10 {
        let (a, b) = random_pair(seed);
        let df = join(&a, &b, JoinType::Left, false, NaMatches::Na);
        let order = df.get_ref::<i32>("a").unwrap();
        assert!(order.windows(2).all(|w| w[0] <= w[1]), "seed {seed}");
    }
}

#[rstest]
#[case::signed_zero(0.0, -0.0)]
#[case::signed_nan(f64::NAN, -f64::NAN)]
#[case::computed_nan(f64::NAN, f64::from_bits(f64::NAN.to_bits() | 1))]
fn equal_numeric_keys_join(
    #[case] key_a: f64,
    #[case] key_b: f64,
    #[values(false, true)] sorted: bool,
) {
    let mut a = DataFrame::new();
    a.add_col("k", vec![key_a].to_rl()).unwrap();
    a.add_col("v", vec!["x"].to_rl()).unwrap();
    let mut b = DataFrame::new();
    b.add_col("k", vec![key_b].to_rl()).unwrap();
    b.add_col("w", vec!["z"].to_rl()).unwrap();
    let df = Join::new()
        .set_join_type(JoinType::Full)
        .by(&["k"])
        .sorted(sorted)
        .execute_join(&[&a, &b])
        .unwrap();
    assert_eq!(df.n_row(), 1);
    assert_eq!(df.get::<String>("w").unwrap(), vec!["z"].to_rl());
    assert_eq!(a.semi_join(&b, &["k"]).unwrap().n_row(), 1);
}
