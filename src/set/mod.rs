//! CodePointSet structure, iterators and lookup trait.

mod iter;
mod lookup;
#[allow(clippy::module_inception)]
mod set;

pub use iter::{Iter, RangeIter};
pub use lookup::CodePointLookup;
pub use set::CodePointSet;
