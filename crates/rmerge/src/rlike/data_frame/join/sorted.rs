//! Sorted join execution by the sort merge join algorithm

// dependencies
use std::cmp::Ordering;
use super::Join;
use crate::rlike::data_frame::query::Query;

// find the end of the run of rows starting at query position i that share the same key
fn run_end(qry: &Query, i: usize) -> usize {
    let key = qry.key_at(i);
    let mut end = i + 1;
    while end < qry.i_map.len() && qry.key_at(end) == key {
        end += 1;
    }
    end
}

/* -----------------------------------------------------------------------------
implement sorted join methods on Join type
----------------------------------------------------------------------------- */
impl Join {

    /// Perform a sorted mutating join on two queries whose row maps are already
    /// sorted by row key, returning the (left, right) source row indices of each
    /// output row in key order.
    pub(super) fn execute_join_sorted(
        &self,
        qry_l: &Query, qry_r: &Query,
    ) -> Vec<(Option<usize>, Option<usize>)> {

        // initialize join process
        let (n_rows_l, n_rows_r) = (qry_l.i_map.len(), qry_r.i_map.len());
        let (mut i_l, mut i_r) = (0, 0);
        let mut pairs = Vec::with_capacity(n_rows_l); // a guess, could be less, could be more

        // advance through both sorted row maps one key run at a time
        while i_l < n_rows_l || i_r < n_rows_r {
            if (i_l >= n_rows_l && !self.all_right) || (i_r >= n_rows_r && !self.all_left) {
                break; // nothing left to commit
            }
            let ord = if i_l >= n_rows_l {
                Ordering::Greater
            } else if i_r >= n_rows_r {
                Ordering::Less
            } else {
                qry_l.key_at(i_l).cmp(qry_r.key_at(i_r))
            };
            match ord {

                // handle left join with unmatched left rows
                Ordering::Less => {
                    if self.all_left {
                        pairs.push((Some(qry_l.i_map[i_l]), None));
                    }
                    i_l += 1;
                },

                // handle right join with unmatched right rows
                Ordering::Greater => {
                    if self.all_right {
                        pairs.push((None, Some(qry_r.i_map[i_r])));
                    }
                    i_r += 1;
                },

                // handle inner join with matched runs of left and right rows
                Ordering::Equal => {
                    let (end_l, end_r) = (run_end(qry_l, i_l), run_end(qry_r, i_r));
                    if self.key_can_match(qry_l.key_at(i_l).has_na()) {
                        for src_i_l in &qry_l.i_map[i_l..end_l] {
                            for src_i_r in &qry_r.i_map[i_r..end_r] {
                                pairs.push((Some(*src_i_l), Some(*src_i_r)));
                            }
                        }
                    } else { // equal NA keys that are not allowed to match
                        if self.all_left {
                            pairs.extend(qry_l.i_map[i_l..end_l].iter().map(|i| (Some(*i), None)));
                        }
                        if self.all_right {
                            pairs.extend(qry_r.i_map[i_r..end_r].iter().map(|i| (None, Some(*i))));
                        }
                    }
                    (i_l, i_r) = (end_l, end_r);
                }
            }
        }
        pairs
    }
}
