/// An RLike version of the Apache Arrow Row implementation for calculating DataFrame
/// keys to support row-to-row comparisons for sorting and joining.
///
/// See: https://arrow.apache.org/blog/2022/11/07/multi-column-sorts-in-arrow-rust-part-2/

/// The first byte of every CellKey is a flag indicating whether the value is
/// None (0) or Some (1), so that NA sorts before all other values.
pub const NA_FLAG:   u8 = 0;
pub const SOME_FLAG: u8 = 1;

// string cells are escaped so that an embedded 0x00 cannot end the key early;
// 0x00 0x00 terminates the cell and sorts before any escaped or ordinary byte
const STR_ESCAPE:     [u8; 2] = [0x00, 0xFF];
const STR_TERMINATOR: [u8; 2] = [0x00, 0x00];

/// Trait CellKeyValue is implemented for RLike Option<T> types that can be packed into
/// a CellKey using the pack method. A CellKey is a byte string that compares
/// lexicographically in the same order as the values it encodes: NA first, then
/// numbers by value, false before true, and strings by byte order. CellKeys are
/// self-delimiting, so the CellKeys of several columns can be concatenated into a RowKey.
pub trait CellKeyValue {
    fn pack(&self, buf: &mut Vec<u8>);
}
impl CellKeyValue for Option<i32> { // desired sort: None, -2^31, -1, 0, 1, 2^31-1
    fn pack(&self, buf: &mut Vec<u8>) {
        match self {
            None => buf.push(NA_FLAG),
            Some(x) => { // flip the sign bit
                let bytes = x.to_be_bytes();
                buf.extend_from_slice(&[SOME_FLAG, bytes[0] ^ 0x80, bytes[1], bytes[2], bytes[3]]);
            }
        }
    }
}
impl CellKeyValue for Option<f64> { // desired sort: None, -inf, -1, 0, 1, inf, NaN
    fn pack(&self, buf: &mut Vec<u8>) {
        match self {
            None => buf.push(NA_FLAG),
            Some(x) => { // see f64::total_cmp also
                // equal values must pack equally: -0.0 is 0.0, and all NaNs are one NaN
                let x = if x.is_nan() { f64::NAN } else if *x == 0.0 { 0.0 } else { *x };
                let mut as_i64 = x.to_bits() as i64;
                as_i64 ^= (((as_i64 >> 63) as u64) >> 1) as i64;
                let mut bytes = as_i64.to_be_bytes();
                bytes[0] ^= 0x80;
                buf.push(SOME_FLAG);
                buf.extend_from_slice(&bytes);
            }
        }
    }
}
impl CellKeyValue for Option<bool> { // desired sort: None, false, true
    fn pack(&self, buf: &mut Vec<u8>) {
        match self {
            None => buf.push(NA_FLAG),
            Some(x) => buf.extend_from_slice(&[SOME_FLAG, *x as u8]),
        }
    }
}
impl CellKeyValue for Option<String> { // desired sort: None, "", "A", "B", "a", "ab"
    fn pack(&self, buf: &mut Vec<u8>) {
        match self {
            None => buf.push(NA_FLAG),
            Some(x) => {
                buf.push(SOME_FLAG);
                for byte in x.as_bytes() {
                    if *byte == 0x00 {
                        buf.extend_from_slice(&STR_ESCAPE);
                    } else {
                        buf.push(*byte);
                    }
                }
                buf.extend_from_slice(&STR_TERMINATOR);
            }
        }
    }
}

/// A RowKey is the concatenation of the CellKeys of one or more key columns for one row.
/// The first CellKey is the major key. RowKeys can be hashed to match rows between
/// DataFrames and compared to order them.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowKey {
    bytes: Vec<u8>,
    has_na: bool,
}
impl RowKey {
    /// Create an empty RowKey with capacity for `n_bytes` of packed CellKeys.
    pub fn with_capacity(n_bytes: usize) -> Self {
        Self { bytes: Vec::with_capacity(n_bytes), has_na: false }
    }
    /// Get a mutable reference to the packed key bytes for filling by CellKeyValue::pack.
    pub fn buf(&mut self) -> &mut Vec<u8> {
        &mut self.bytes
    }
    /// Record that at least one CellKey in this RowKey is NA.
    pub fn set_na(&mut self) {
        self.has_na = true;
    }
    /// Determine whether any CellKey in this RowKey is NA.
    pub fn has_na(&self) -> bool {
        self.has_na
    }
    /// Return the packed key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
