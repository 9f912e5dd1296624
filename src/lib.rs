#![allow(non_snake_case)]
#![allow(clippy::needless_return)]
#![allow(clippy::type_complexity)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::upper_case_acronyms)]

pub mod buchberger;
pub mod families;
pub mod groebner;
pub mod ideal;
pub mod poly;
pub mod reduction;

use crate::poly::{
    order::{DegRevLexOrder, LexOrder},
    polynomial::Polynomial,
};
use ark_ff::{
    fields::{Fp64, MontBackend, MontConfig},
    Field,
};
use std::cmp;

/// Heap entry ordered by its key only.
#[derive(Debug, Clone)]
pub struct Entry<L, R>(pub L, pub R);
impl<L: PartialEq, R> PartialEq for Entry<L, R> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<L: Eq, R> Eq for Entry<L, R> {}
impl<L: PartialOrd, R> PartialOrd for Entry<L, R> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<L: Ord, R> Ord for Entry<L, R> {
    #[inline]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

#[derive(MontConfig)]
#[modulus = "18446744073709551557"]
#[generator = "2"]
pub struct FqConfig18446744073709551557;

pub type GF = Fp64<MontBackend<FqConfig18446744073709551557, 1>>;

pub type LexPolynomial = Polynomial<GF, LexOrder>;
pub type DegRevLexPolynomial = Polynomial<GF, DegRevLexOrder>;

/// Embeds a small signed integer into the field.
pub fn coefficient<F: Field>(n: i64) -> F {
    let value = F::from(n.unsigned_abs());
    if n < 0 {
        -value
    } else {
        value
    }
}
