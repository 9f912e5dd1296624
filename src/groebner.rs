use crate::{
    poly::{order::MonomialOrder, polynomial::Polynomial, set::GeneratorSet},
    reduction::normal_form,
};
use ark_ff::Field;
use log::debug;
use rayon::prelude::*;

/// Check whether the given polynomials form a Gröbner basis of the ideal they span:
/// every S-polynomial reduces to zero.
pub fn is_groebner_basis<F: Field, O: MonomialOrder>(ideal: &[Polynomial<F, O>]) -> bool {
    ideal.par_iter().enumerate().all(|(i, f)| {
        ideal.par_iter().enumerate().skip(i + 1).all(|(_, g)| {
            if f.is_zero() || g.is_zero() {
                true
            } else {
                normal_form(&f.s_polynomial(g), ideal).is_zero()
            }
        })
    })
}

/// Interreduce a basis: every generator is replaced by its normal form against the
/// others until nothing changes. Zeros are dropped and the rest made monic. The
/// result spans the same ideal; applied to a Gröbner basis it gives the reduced one.
/// Generators come out sorted by leading monomial.
pub fn auto_reduce<F: Field, O: MonomialOrder>(basis: &GeneratorSet<F, O>) -> GeneratorSet<F, O> {
    let mut ideal: Vec<Polynomial<F, O>> = basis.iter().cloned().collect();

    loop {
        debug!("Interreduce pass with ideal.len(): {}", ideal.len());
        let mut changed = false;

        let mut i = 0;
        while i < ideal.len() {
            let f = ideal.remove(i);
            let r = normal_form(&f, &ideal).monic();
            if r.is_zero() {
                changed = true;
                continue;
            }
            if r != f {
                changed = true;
            }
            ideal.insert(i, r);
            i += 1;
        }

        if !changed {
            break;
        }
    }

    if let Some(order) = basis.order() {
        ideal.sort_by(|f, g| order.compare(f.leading_monomial(), g.leading_monomial()));
    }
    ideal.into_iter().collect()
}
