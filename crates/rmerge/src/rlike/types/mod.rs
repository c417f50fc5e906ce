//! The `rlike::types` module provides a restricted set of data types
//! for use in RLike data objects.
//! - RInteger: `Option<i32>`
//! - RNumeric: `Option<f64>`
//! - RLogical: `Option<bool>`
//! - RString:  `Option<String>`
//!
//! All types are wrapped in `Option<T>` to support R-like NA values, i.e.,
//! missing/null values per cell.
//!
//! For simplicity and to reflect the R-like nature of this library,
//! only a single RInteger (i32-based) and a single RNumeric (f64-based)
//! type are supported, in addition to RLogical (bool) and RString.
//!
//! Importantly, all standard R-like types are stored using distinct Rust primitives,
//! a design choice that makes it possible to refer to column types in different ways.
//! You will typically use the primitive type names in your code, e.g.,
//! `df.get_ref::<i32>("col1")` for a column of the RInteger type.

// dependencies
use paste::paste;

/* -----------------------------------------------------------------------------
RLike and associated trait definitions
----------------------------------------------------------------------------- */
/// Trait RLike is implemented for all data types supported by R-like data objects.
pub trait RLike: Send + Sync {

    // Inner is a Rust primitive type
    type Inner: Clone + PartialOrd;

    fn from_inner(inner: Self::Inner) -> Self;
    fn to_string(&self) -> String;
    fn is_na(&self) -> bool;
}

/// Trait ToRL converts T into Option<T>.
/// Example usage: `(15).to_rl()`, equivalent to `Some(15)`.
pub trait ToRL {
    type Inner; // an R-like type
    fn to_rl(self) -> Self::Inner;
}

/// Trait ToRLVec converts a Vec<T> to a Vec<Option<T>>.
/// Example usage: `vec![1, 2, 3].to_rl()`.
pub trait ToRLVec {
    type Inner; // an R-like type
    fn to_rl(&self) -> Vec<Self::Inner>;
}
fn wrap_option_vec<T: Copy>(x: &[T]) -> Vec<Option<T>> {
    x.iter().map(|&x| Some(x)).collect()
}

/// The string used to represent NA values when printing or writing cells.
pub const NA_STRING: &str = "NA";

/* -----------------------------------------------------------------------------
RLike trait implementation for Rust primitive types
----------------------------------------------------------------------------- */
macro_rules! impl_rlike_primitive {
    ($rlike_type:ident, $primitive:ty) => {
        paste!{
            /// [<$rlike_type Prim>] data type is $primitive.
            pub type [<$rlike_type Prim>] = $primitive;
            /// $rlike_type data type is Option<$primitive>, i.e., Option<[<$rlike_type Prim>]>.
            pub type $rlike_type = Option<$primitive>;
        }
        impl RLike for $rlike_type {
            type Inner = $primitive;
            fn from_inner(inner: Self::Inner) -> Self { Some(inner) }
            fn to_string(&self) -> String {
                self.map(|x| x.to_string()).unwrap_or(NA_STRING.to_string())
            }
            fn is_na(&self) -> bool { self.is_none() }
        }
        impl ToRL for $primitive {
            type Inner = $rlike_type;
            fn to_rl(self) -> Self::Inner { Some(self) }
        }
        impl ToRLVec for Vec<$primitive> {
            type Inner = $rlike_type;
            fn to_rl(&self) -> Vec<Self::Inner> { wrap_option_vec(self) }
        }
    };
}
impl_rlike_primitive!(RInteger, i32);
impl_rlike_primitive!(RNumeric, f64);
impl_rlike_primitive!(RLogical, bool);

/* -----------------------------------------------------------------------------
RLike trait implementation for String data type
----------------------------------------------------------------------------- */
/// RStringPrim data type is String.
pub type RStringPrim = String;
/// RString data type is Option<String>, i.e., Option<RStringPrim>.
pub type RString = Option<String>;
impl RLike for RString {
    type Inner = String;
    fn from_inner(inner: Self::Inner) -> Self { Some(inner) }
    fn to_string(&self) -> String {
        self.as_ref().map_or_else(|| NA_STRING.to_string(), |s| s.clone())
    }
    fn is_na(&self) -> bool { self.is_none() }
}
impl ToRL for String {
    type Inner = RString;
    fn to_rl(self) -> Self::Inner { Some(self) }
}
impl ToRLVec for Vec<String> {
    type Inner = RString;
    fn to_rl(&self) -> Vec<Self::Inner> {
        self.iter().map(|x| Some(x.clone())).collect()
    }
}
impl ToRL for &str {
    type Inner = RString;
    fn to_rl(self) -> Self::Inner { Some(self.to_string()) }
}
impl ToRLVec for Vec<&str> {
    type Inner = RString;
    fn to_rl(&self) -> Vec<Self::Inner> {
        self.iter().map(|x| Some(x.to_string())).collect()
    }
}
