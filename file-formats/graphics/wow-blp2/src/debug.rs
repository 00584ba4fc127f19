use std::{cmp, fmt};

const FIRST_N_ELEMENTS: usize = 3;

/// Collections that can be shortened for debug output
pub trait HasLength {
    /// Element type
    type Item: fmt::Debug;

    /// Number of elements
    fn len2(&self) -> usize;
    /// The first `elements` elements, or fewer when the collection is shorter
    fn get_first_n(&self, elements: usize) -> &[Self::Item];
}

impl<T: fmt::Debug, const N: usize> HasLength for [T; N] {
    type Item = T;
    fn len2(&self) -> usize {
        N
    }
    fn get_first_n(&self, elements: usize) -> &[Self::Item] {
        &self[..cmp::min(elements, N)]
    }
}

impl<T: fmt::Debug> HasLength for Vec<T> {
    type Item = T;
    fn len2(&self) -> usize {
        self.len()
    }
    fn get_first_n(&self, elements: usize) -> &[Self::Item] {
        &self[..cmp::min(elements, self.len())]
    }
}

/// Prints the first few elements followed by the number left out.
/// Used with `#[debug(with = trimmed_collection_fmt)]` on palettes and pixel
/// buffers.
#[cfg(not(feature = "debug-print-all"))]
pub fn trimmed_collection_fmt<T: HasLength>(n: &T, f: &mut fmt::Formatter) -> fmt::Result {
    let first = n.get_first_n(FIRST_N_ELEMENTS);
    let num_elements = n.len2() - first.len();

    if num_elements == 0 {
        write!(f, "{:?}", first)
    } else {
        write!(f, "{:?} + {} elements", first, num_elements)
    }
}

/// Prints the whole collection.
#[cfg(feature = "debug-print-all")]
pub fn trimmed_collection_fmt<T: HasLength>(n: &T, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{:?}", n.get_first_n(n.len2()))
}
