//! Consumers that visit elements for their side effects, or only the first
//! one.

use seqkit_optional::Optional;

use crate::seq::Seq;

/// Calls `f` for the elements of `seq` in encounter order, stopping after
/// the first call that returns `false`.
pub fn for_each<S: Seq>(seq: S, mut f: impl FnMut(S::Item) -> bool) {
    seq.traverse(&mut |value| f(value));
}

/// Calls `f` with the zero-based position and value of each element,
/// stopping after the first call that returns `false`.
pub fn for_each_idx<S: Seq>(seq: S, mut f: impl FnMut(usize, S::Item) -> bool) {
    let mut idx = 0;
    seq.traverse(&mut |value| {
        if !f(idx, value) {
            return false;
        }
        idx += 1;
        true
    });
}

/// Returns the first element of `seq`, stopping the traversal right after.
pub fn head<S: Seq>(seq: S) -> Option<S::Item> {
    let mut first = None;
    seq.traverse(&mut |value| {
        first = Some(value);
        false
    });
    first
}

/// Same as [`head`], wrapped in an [`Optional`].
pub fn head_o<S: Seq>(seq: S) -> Optional<S::Item> {
    head(seq).into()
}
