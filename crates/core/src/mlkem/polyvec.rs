//! Rank-k vectors of ring elements
//!
//! All elements of a vector share one representation tag; the tag
//! travels through the type, so a coefficient-form vector cannot be fed
//! into a pointwise product by accident.

use core::marker::PhantomData;

use mlkem_algorithms::poly::{Form, Normal, NttForm, Poly};
use zeroize::Zeroize;

use super::params::MlKemParams;

/// A vector of k ring elements sharing a representation tag.
pub(crate) struct PolyVec<P: MlKemParams, F: Form = Normal> {
    pub(crate) polys: Vec<Poly<F>>,
    _params: PhantomData<P>,
}

// Manual impls: the derives would bound the parameter-set marker P,
// which carries no data.
impl<P: MlKemParams, F: Form> Clone for PolyVec<P, F> {
    fn clone(&self) -> Self {
        Self {
            polys: self.polys.clone(),
            _params: PhantomData,
        }
    }
}

impl<P: MlKemParams, F: Form + PartialEq> PartialEq for PolyVec<P, F> {
    fn eq(&self, other: &Self) -> bool {
        self.polys == other.polys
    }
}

impl<P: MlKemParams, F: Form + Eq> Eq for PolyVec<P, F> {}

impl<P: MlKemParams, F: Form> core::fmt::Debug for PolyVec<P, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PolyVec").field("polys", &self.polys).finish()
    }
}

impl<P: MlKemParams, F: Form> Zeroize for PolyVec<P, F> {
    fn zeroize(&mut self) {
        for p in self.polys.iter_mut() {
            p.zeroize();
        }
    }
}

impl<P: MlKemParams, F: Form> PolyVec<P, F> {
    /// The zero vector of rank k.
    pub(crate) fn zero() -> Self {
        Self {
            polys: vec![Poly::<F>::zero(); P::K],
            _params: PhantomData,
        }
    }

    fn from_polys(polys: Vec<Poly<F>>) -> Self {
        debug_assert_eq!(polys.len(), P::K);
        Self {
            polys,
            _params: PhantomData,
        }
    }

    /// Barrett-reduce every element.
    pub(crate) fn reduce(&mut self) {
        for p in self.polys.iter_mut() {
            p.reduce();
        }
    }
}

impl<P: MlKemParams> PolyVec<P, Normal> {
    /// Forward NTT of every element.
    pub(crate) fn into_ntt(self) -> PolyVec<P, NttForm> {
        PolyVec::from_polys(self.polys.into_iter().map(Poly::into_ntt).collect())
    }
}

impl<P: MlKemParams> PolyVec<P, NttForm> {
    /// Inverse NTT of every element. Same Montgomery convention as
    /// `Poly::into_normal`.
    pub(crate) fn into_normal(self) -> PolyVec<P, Normal> {
        PolyVec::from_polys(self.polys.into_iter().map(Poly::into_normal).collect())
    }

    /// Inner product in the NTT domain: Σᵢ self[i] ∘ other[i], reduced.
    /// The result carries the R^{-1} factor of `basemul`.
    pub(crate) fn basemul_acc(&self, other: &Self) -> Poly<NttForm> {
        let mut acc = Poly::<NttForm>::zero();
        for (a, b) in self.polys.iter().zip(other.polys.iter()) {
            acc = acc.add(&a.basemul(b));
        }
        acc.reduce();
        acc
    }
}
