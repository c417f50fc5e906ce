//! Unsorted join execution by the hash join algorithm

// dependencies
use std::collections::{HashMap, HashSet};
use rayon::prelude::*;
use super::{Join, JoinType};
use crate::rlike::data_frame::key::RowKey;
use crate::rlike::data_frame::query::Query;

/* -----------------------------------------------------------------------------
implement unsorted join methods on Join type
----------------------------------------------------------------------------- */
impl Join {

    /// Perform an unsorted mutating join, returning the (left, right) source row
    /// indices of each output row. Output follows left row order, with unmatched
    /// right rows appended in right row order when the join keeps all right rows.
    pub(super) fn execute_join_unsorted(
        &self,
        qry_l: &Query, qry_r: &Query,
    ) -> Vec<(Option<usize>, Option<usize>)> {

        // construct a HashMap of the right DataFrame, matching keys to a vector of row indices
        let mut i_map_r: HashMap<&RowKey, Vec<usize>> = HashMap::new();
        qry_r.i_map.iter().for_each(|src_i_r| {
            let key_r = &qry_r.row_keys[*src_i_r];
            if self.key_can_match(key_r.has_na()) {
                i_map_r.entry(key_r).or_default().push(*src_i_r);
            }
        });

        // iterate over the left DataFrame rows, matching them to the right DataFrame
        let mut pairs = Vec::with_capacity(qry_l.i_map.len()); // a guess, could be less, could be more
        let mut matched_r = vec![false; if self.all_right { qry_r.row_keys.len() } else { 0 }];
        qry_l.i_map.iter().for_each(|src_i_l| {
            let key_l = &qry_l.row_keys[*src_i_l];

            // inner joined rows
            if let Some(src_is_r) = i_map_r.get(key_l) {
                src_is_r.iter().for_each(|src_i_r| {
                    pairs.push((Some(*src_i_l), Some(*src_i_r)));
                    if self.all_right { matched_r[*src_i_r] = true; }
                });

            // left join rows with no right side match
            } else if self.all_left {
                pairs.push((Some(*src_i_l), None));
            }
        });

        // right join rows with no left side match
        if self.all_right {
            qry_r.i_map.iter()
                .filter(|src_i_r| !matched_r[**src_i_r])
                .for_each(|src_i_r| pairs.push((None, Some(*src_i_r))));
        }
        pairs
    }

    /// Perform a semi or anti join, returning the source indices of the kept left
    /// rows in query row order. Each left row is kept at most once.
    pub(super) fn execute_join_filtering(&self, qry_l: &Query, qry_r: &Query) -> Vec<usize> {
        let keys_r: HashSet<&RowKey> = qry_r.row_keys.iter()
            .filter(|key_r| self.key_can_match(key_r.has_na()))
            .collect();
        let keep_matched = self.join_type == JoinType::Semi;
        qry_l.i_map.par_iter()
            .filter(|src_i_l| keys_r.contains(&qry_l.row_keys[**src_i_l]) == keep_matched)
            .copied()
            .collect()
    }
}
