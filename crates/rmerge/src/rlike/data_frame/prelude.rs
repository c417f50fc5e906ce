//! RLike DataFrame re-exports to support `use rmerge::data_frame::prelude::*;`

/*-----------------------------------------------------------------------
RLike data types and associated traits
---------------------------------------------------------------------- */
pub use crate::rlike::types::*;
/*-----------------------------------------------------------------------
DataFrame and associated types and traits
---------------------------------------------------------------------- */
pub use crate::rlike::data_frame::{DataFrame, DataFrameError};
pub use crate::rlike::data_frame::column::{Column, ColType};
// DataFrame queries
pub use crate::rlike::data_frame::query::QueryStatus;
// DataFrame joins
pub use crate::rlike::data_frame::join::{Join, JoinType, NaMatches};
// DataFrame exchange
pub use crate::rlike::data_frame::rows::{JsonColumn, JsonTable};
pub use crate::workflow::file::{InputFile, OutputFile};
/*-----------------------------------------------------------------------
re-export macros flagged with #[macro_export]
macro export always happens in the crate root, so we re-export them here
---------------------------------------------------------------------- */
// from new.rs
pub use crate::df_new;
/*-------------------------------------------------------------------- */
// from io.rs
pub use crate::df_read;
pub use crate::df_write;
/*-------------------------------------------------------------------- */
// from display.rs
pub use crate::df_print;
/*-------------------------------------------------------------------- */
// from join.rs
// user macros
pub use crate::df_join;
pub use crate::df_inner;
pub use crate::df_left;
pub use crate::df_right;
pub use crate::df_full;
pub use crate::df_semi;
pub use crate::df_anti;
//internal macros
pub use crate::__join_key_pair;
pub use crate::__df_join2;
pub use crate::__df_join1;
