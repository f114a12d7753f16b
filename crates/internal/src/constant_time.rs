//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices.
///
/// Returns true if the slices are equal, false otherwise. The comparison
/// runs in time independent of the slice contents; only the length check
/// short-circuits, and lengths are public here.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time equality check returning a `Choice` (0 or 1).
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Constant-time selection.
///
/// Returns `a` if `condition` is false, `b` if `condition` is true.
pub fn ct_select<T>(a: T, b: T, condition: bool) -> T
where
    T: ConditionallySelectable,
{
    let choice = Choice::from(condition as u8);
    T::conditional_select(&a, &b, choice)
}

/// Constant-time conditional assignment.
///
/// Sets `dst[i]` to `src[i]` where `condition` holds, otherwise leaves
/// `dst` unchanged. `dst` and `src` must have the same length.
pub fn ct_assign(dst: &mut [u8], src: &[u8], condition: Choice) {
    assert_eq!(dst.len(), src.len());

    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d = u8::conditional_select(d, s, condition);
    }
}

/// All-ones mask if `condition` is true, all-zeros otherwise.
pub fn ct_mask(condition: bool) -> u8 {
    0u8.wrapping_sub(condition as u8)
}
