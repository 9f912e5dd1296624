use ark_ff::Field;
use derivative::Derivative;
use hashbrown::HashSet;
use std::{iter::FromIterator, slice};

use crate::poly::{
    monomial::{Monomial, Variable},
    order::MonomialOrder,
    polynomial::Polynomial,
};

/// Generators of a polynomial ideal.
///
/// Generators are stored monic and in insertion order. Zero is never stored and
/// scalar multiples of a generator already present collapse into it.
#[derive(Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""), Default(bound = ""))]
pub struct GeneratorSet<F: Field, O: MonomialOrder> {
    polynomials: Vec<Polynomial<F, O>>,
    #[derivative(Debug = "ignore")]
    members: HashSet<Polynomial<F, O>>,
}

impl<F: Field, O: MonomialOrder> GeneratorSet<F, O> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `poly` divided by its leading coefficient. Returns whether the set changed.
    pub fn add(&mut self, poly: Polynomial<F, O>) -> bool {
        if poly.is_zero() {
            return false;
        }
        let poly = poly.monic();
        if self.members.contains(&poly) {
            return false;
        }
        self.members.insert(poly.clone());
        self.polynomials.push(poly);
        true
    }

    /// Removes the generator equal to `poly` up to a scalar factor.
    pub fn remove(&mut self, poly: &Polynomial<F, O>) -> bool {
        let poly = poly.monic();
        if !self.members.remove(&poly) {
            return false;
        }
        self.polynomials.retain(|p| *p != poly);
        true
    }

    pub fn contains(&self, poly: &Polynomial<F, O>) -> bool {
        self.members.contains(&poly.monic())
    }

    pub fn len(&self) -> usize {
        self.polynomials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polynomials.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Polynomial<F, O>> {
        self.polynomials.iter()
    }

    pub fn as_slice(&self) -> &[Polynomial<F, O>] {
        self.polynomials.as_slice()
    }

    pub fn into_vec(self) -> Vec<Polynomial<F, O>> {
        self.polynomials
    }

    /// The order carried by the generators, if there is any generator.
    pub fn order(&self) -> Option<&O> {
        self.polynomials.first().map(|p| p.order())
    }

    /// Some generator is a non-zero constant, so the set generates the whole ring.
    pub fn contains_one(&self) -> bool {
        self.polynomials.iter().any(|p| p.is_constant())
    }

    pub fn depends_on(&self, var: Variable) -> bool {
        self.polynomials.iter().any(|p| p.depends_on(var))
    }

    pub fn max_variable(&self) -> Option<Variable> {
        self.polynomials.iter().filter_map(|p| p.max_variable()).max()
    }

    pub fn leading_monomials(&self) -> Vec<Monomial> {
        self.polynomials
            .iter()
            .map(|p| p.leading_monomial().clone())
            .collect()
    }

    /// The same generators sorted under another order.
    pub fn with_order<OT: MonomialOrder>(&self, order: OT) -> GeneratorSet<F, OT> {
        self.polynomials
            .iter()
            .map(|p| p.with_order(order.clone()))
            .collect()
    }
}

impl<F: Field, O: MonomialOrder> PartialEq for GeneratorSet<F, O> {
    /// Equal as sets, regardless of insertion order.
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl<F: Field, O: MonomialOrder> Eq for GeneratorSet<F, O> {}

impl<F: Field, O: MonomialOrder> Extend<Polynomial<F, O>> for GeneratorSet<F, O> {
    fn extend<T: IntoIterator<Item = Polynomial<F, O>>>(&mut self, iter: T) {
        for poly in iter {
            self.add(poly);
        }
    }
}

impl<F: Field, O: MonomialOrder> FromIterator<Polynomial<F, O>> for GeneratorSet<F, O> {
    fn from_iter<T: IntoIterator<Item = Polynomial<F, O>>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, F: Field, O: MonomialOrder> IntoIterator for &'a GeneratorSet<F, O> {
    type Item = &'a Polynomial<F, O>;
    type IntoIter = slice::Iter<'a, Polynomial<F, O>>;

    fn into_iter(self) -> Self::IntoIter {
        self.polynomials.iter()
    }
}

impl<F: Field, O: MonomialOrder> IntoIterator for GeneratorSet<F, O> {
    type Item = Polynomial<F, O>;
    type IntoIter = std::vec::IntoIter<Polynomial<F, O>>;

    fn into_iter(self) -> Self::IntoIter {
        self.polynomials.into_iter()
    }
}
