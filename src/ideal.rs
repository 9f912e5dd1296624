//! Membership, radical membership, intersection and elimination for ideals given by
//! generators.
//!
//! Operations needing an auxiliary variable take it from the caller; it must not
//! occur in any input. [`fresh_variable`] picks one.

use crate::{
    buchberger::groebner_basis,
    groebner::auto_reduce,
    poly::{
        monomial::{Monomial, Variable},
        order::{block_order, elimination_order, MonomialOrder},
        polynomial::Polynomial,
        set::GeneratorSet,
    },
    reduction::normal_form,
};
use ark_ff::Field;
use log::debug;

/// The first variable index above every variable the given polynomials use.
pub fn fresh_variable<'a, F: Field, O: MonomialOrder>(
    polys: impl IntoIterator<Item = &'a Polynomial<F, O>>,
) -> Variable {
    polys
        .into_iter()
        .filter_map(|p| p.max_variable())
        .max()
        .map_or(0, |v| v + 1)
}

/// `poly` lies in the ideal spanned by `generators`.
pub fn is_in_ideal<F: Field, O: MonomialOrder>(
    poly: &Polynomial<F, O>,
    generators: &GeneratorSet<F, O>,
) -> bool {
    if poly.is_zero() {
        return true;
    }
    let basis = groebner_basis(generators);
    normal_form(poly, basis.as_slice()).is_zero()
}

/// The ideal spanned by `generators` is the whole ring.
pub fn contains_one<F: Field, O: MonomialOrder>(generators: &GeneratorSet<F, O>) -> bool {
    generators.contains_one() || groebner_basis(generators).contains_one()
}

/// Some power of `poly` lies in the ideal spanned by `generators`.
///
/// Uses `1 - t * poly` with `t = fresh`: `poly` is in the radical exactly when the
/// extended ideal contains 1.
///
/// # Panics
/// When `fresh` occurs in `poly` or in a generator.
pub fn is_in_radical<F: Field, O: MonomialOrder>(
    poly: &Polynomial<F, O>,
    generators: &GeneratorSet<F, O>,
    fresh: Variable,
) -> bool {
    assert!(
        !poly.depends_on(fresh) && !generators.depends_on(fresh),
        "variable x_{} is already in use",
        fresh
    );
    let order = poly.order().clone();
    let one = Polynomial::constant(order, F::one());
    let mut extended = generators.clone();
    extended.add(&one - &(poly * &(F::one(), Monomial::variable(fresh))));
    is_in_ideal(&one, &extended)
}

/// Generators of the intersection of two ideals.
///
/// Computes a basis of `t * ideal1 + (1 - t) * ideal2` under an order eliminating
/// `t = fresh` and keeps the generators free of `t`. The result is interreduced
/// under the caller's order.
///
/// # Panics
/// When `fresh` occurs in either ideal.
pub fn intersect<F: Field, O: MonomialOrder>(
    ideal1: &GeneratorSet<F, O>,
    ideal2: &GeneratorSet<F, O>,
    fresh: Variable,
) -> GeneratorSet<F, O> {
    assert!(
        !ideal1.depends_on(fresh) && !ideal2.depends_on(fresh),
        "variable x_{} is already in use",
        fresh
    );
    // The zero ideal absorbs everything.
    let order = match (ideal1.order(), ideal2.order()) {
        (Some(order), Some(_)) => order.clone(),
        _ => return GeneratorSet::new(),
    };

    let elimination = elimination_order(fresh, order.clone());
    let t = Polynomial::variable(elimination.clone(), fresh);
    let one_minus_t = &Polynomial::constant(elimination.clone(), F::one()) - &t;

    let mut combined = GeneratorSet::new();
    for g in ideal1 {
        combined.add(&g.with_order(elimination.clone()) * &t);
    }
    for h in ideal2 {
        combined.add(&h.with_order(elimination.clone()) * &one_minus_t);
    }

    let basis = groebner_basis(&combined);
    debug!(
        "intersection basis has {} generators before elimination",
        basis.len()
    );
    let intersection = basis
        .iter()
        .filter(|g| !g.depends_on(fresh))
        .map(|g| g.with_order(order.clone()))
        .collect();
    auto_reduce(&intersection)
}

/// Generators of the elimination ideal: the polynomials of the ideal free of `vars`.
pub fn eliminate<F: Field, O: MonomialOrder>(
    generators: &GeneratorSet<F, O>,
    vars: &[Variable],
) -> GeneratorSet<F, O> {
    let order = match generators.order() {
        Some(order) => order.clone(),
        None => return GeneratorSet::new(),
    };
    let basis = groebner_basis(&generators.with_order(block_order(vars, order.clone())));
    let eliminated = basis
        .iter()
        .filter(|g| vars.iter().all(|&var| !g.depends_on(var)))
        .map(|g| g.with_order(order.clone()))
        .collect();
    auto_reduce(&eliminated)
}
