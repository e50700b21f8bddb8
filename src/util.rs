use crate::types::Lit;

/// Stable sort by absolute value of the literal code, so literals come out
/// in alphabetical order of their letters and ties keep their input order.
pub fn unsigned_sort(lits: &mut [Lit]) {
    lits.sort_by_key(|l| l.to_i32().unsigned_abs());
}
