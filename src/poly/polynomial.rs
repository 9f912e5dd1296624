use ark_ff::{Field, One, Zero};
use derivative::Derivative;
use std::{
    cmp::Ordering,
    fmt,
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    vec::Vec,
};

use crate::{
    poly::{
        monomial::{Monomial, Variable, IDENTITY},
        order::MonomialOrder,
    },
    reduction::{reduce, Reduction},
};

/// Stores a sparse multivariate polynomial in coefficient form.
///
/// Terms are kept sorted ascending under the polynomial's monomial order, so the
/// leading term is the last one. Zero coefficients are never stored. Equality and
/// hashing look at the terms only; both operands of an arithmetic operation are
/// expected to carry the same order.
#[derive(Derivative)]
#[derivative(
    Clone(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = ""),
    Hash(bound = "")
)]
pub struct Polynomial<F: Field, O: MonomialOrder> {
    #[derivative(PartialEq = "ignore")]
    #[derivative(Hash = "ignore")]
    pub(crate) order: O,
    pub(crate) terms: Vec<(F, Monomial)>,
}

impl<F: Field, O: MonomialOrder> Polynomial<F, O> {
    /// Builds a polynomial from terms in any order. Terms sharing a monomial are
    /// summed and zero results dropped.
    pub fn new(order: O, terms: &[(F, Monomial)]) -> Self {
        let mut terms: Vec<(F, Monomial)> =
            terms.iter().filter(|(c, _)| !c.is_zero()).cloned().collect();
        terms.sort_unstable_by(|(_, m1), (_, m2)| order.compare(m1, m2));
        let mut terms_dedup: Vec<(F, Monomial)> = Vec::with_capacity(terms.len());
        for term in terms {
            if let Some(prev) = terms_dedup.last_mut() {
                if prev.1 == term.1 {
                    prev.0 += term.0;
                    if prev.0.is_zero() {
                        terms_dedup.pop();
                    }
                    continue;
                }
            };
            terms_dedup.push(term);
        }

        Self {
            order,
            terms: terms_dedup,
        }
    }

    pub fn zero(order: O) -> Self {
        Self {
            order,
            terms: Vec::new(),
        }
    }

    /// The constant polynomial `coefficient`.
    pub fn constant(order: O, coefficient: F) -> Self {
        Self::term(order, coefficient, Monomial::one())
    }

    pub fn monomial(order: O, monomial: Monomial) -> Self {
        Self::term(order, F::one(), monomial)
    }

    pub fn term(order: O, coefficient: F, monomial: Monomial) -> Self {
        let terms = if coefficient.is_zero() {
            Vec::new()
        } else {
            vec![(coefficient, monomial)]
        };
        Self { order, terms }
    }

    /// The polynomial `x_var`.
    pub fn variable(order: O, var: Variable) -> Self {
        Self::monomial(order, Monomial::variable(var))
    }

    /// Converts every coefficient into another field; coefficients mapped to zero are dropped.
    pub fn map_coefficients<G: Field>(&self, f: impl Fn(&F) -> G) -> Polynomial<G, O> {
        Polynomial {
            order: self.order.clone(),
            terms: self
                .terms
                .iter()
                .filter_map(|(c, m)| {
                    let c = f(c);
                    (!c.is_zero()).then(|| (c, m.clone()))
                })
                .collect(),
        }
    }

    /// The same polynomial sorted under another monomial order.
    pub fn with_order<OT: MonomialOrder>(&self, order: OT) -> Polynomial<F, OT> {
        let mut terms = self.terms.clone();
        terms.sort_unstable_by(|(_, m1), (_, m2)| order.compare(m1, m2));
        Polynomial { order, terms }
    }

    pub fn order(&self) -> &O {
        &self.order
    }

    /// Terms in ascending order, leading term last.
    pub fn terms(&self) -> &[(F, Monomial)] {
        self.terms.as_slice()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Zero or a non-zero constant.
    pub fn is_constant(&self) -> bool {
        self.leading_monomial().is_constant()
    }

    /// Maximal total degree over all terms, zero for the zero polynomial.
    pub fn degree(&self) -> u32 {
        self.terms
            .iter()
            .map(|(_, m)| m.degree())
            .max()
            .unwrap_or(0)
    }

    /// Coefficient of `monomial`, zero when absent.
    pub fn coefficient(&self, monomial: &Monomial) -> F {
        self.terms
            .binary_search_by(|(_, m)| self.order.compare(m, monomial))
            .map(|i| self.terms[i].0)
            .unwrap_or_else(|_| F::zero())
    }

    pub fn leading_term(&self) -> Option<&(F, Monomial)> {
        self.terms.last()
    }

    /// Leading monomial; the identity monomial for the zero polynomial.
    pub fn leading_monomial(&self) -> &Monomial {
        self.leading_term().map(|(_, m)| m).unwrap_or(&*IDENTITY)
    }

    /// Leading coefficient; zero for the zero polynomial.
    pub fn leading_coefficient(&self) -> F {
        self.leading_term().map(|(c, _)| *c).unwrap_or_else(F::zero)
    }

    /// Every term but the leading one.
    pub fn trailing_terms(&self) -> &[(F, Monomial)] {
        match self.terms.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    pub fn depends_on(&self, var: Variable) -> bool {
        self.terms.iter().any(|(_, m)| m.depends_on(var))
    }

    /// Variables occurring in the polynomial, ascending.
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars: Vec<Variable> = self
            .terms
            .iter()
            .flat_map(|(_, m)| m.iter().map(|(var, _)| *var))
            .collect();
        vars.sort_unstable();
        vars.dedup();
        vars
    }

    pub fn max_variable(&self) -> Option<Variable> {
        self.terms.iter().filter_map(|(_, m)| m.max_variable()).max()
    }

    pub fn scale(&self, factor: F) -> Self {
        self * &(factor, Monomial::one())
    }

    /// Divides by the leading coefficient. The zero polynomial stays zero.
    pub fn monic(&self) -> Self {
        match self.leading_term() {
            Some((c, _)) if !c.is_one() => self.scale(F::one() / c),
            _ => self.clone(),
        }
    }

    pub fn pow(&self, exp: u32) -> Self {
        let mut result = Self::constant(self.order.clone(), F::one());
        for _ in 0..exp {
            result = &result * self;
        }
        result
    }

    /// `(l / lm(a)) * a / lc(a) - (l / lm(b)) * b / lc(b)` with `l = lcm(lm(a), lm(b))`.
    /// The leading terms of both halves cancel.
    ///
    /// # Panics
    /// When either polynomial is zero.
    pub fn s_polynomial(&self, other: &Self) -> Self {
        let ((coeff_self, lm_self), (coeff_other, lm_other)) =
            match (self.leading_term(), other.leading_term()) {
                (Some(lt_self), Some(lt_other)) => (lt_self, lt_other),
                _ => panic!("S-polynomial of the zero polynomial"),
            };

        // Compute the least common multiple of the leading monomials
        let lcm = Monomial::lcm(lm_self, lm_other);

        let t_self = lcm.divide(lm_self);
        let t_other = lcm.divide(lm_other);

        let mut result = self * &(F::one() / coeff_self, t_self);
        result -= &(other * &(F::one() / coeff_other, t_other));
        result
    }

    /// Multivariate division by `gs`, returning the quotients and the remainder.
    pub fn div_mod_polys(&self, gs: &[Self]) -> (Vec<Self>, Self) {
        let Reduction {
            remainder,
            quotients,
        } = reduce(self, gs);
        (quotients, remainder)
    }

    /// Merges two sorted term lists, adding or subtracting equal monomials.
    fn merge(&self, other: &Self, subtract: bool) -> Vec<(F, Monomial)> {
        let (mut i, ii): (usize, usize) = (0, self.terms.len());
        let (mut j, jj): (usize, usize) = (0, other.terms.len());

        let mut result = Vec::with_capacity(ii + jj);
        loop {
            let which = match (
                i.lt(&ii).then(|| &self.terms[i]),
                j.lt(&jj).then(|| &other.terms[j]),
            ) {
                (Some((_, cur)), Some((_, other))) => Some(self.order.compare(cur, other)),
                (Some(_), None) => Some(Ordering::Less),
                (None, Some(_)) => Some(Ordering::Greater),
                (None, None) => None,
            };

            match which {
                Some(Ordering::Less) => {
                    result.push(self.terms[i].clone());
                    i += 1;
                },
                Some(Ordering::Equal) => {
                    let (cur, monomial) = &self.terms[i];
                    let (other, _) = &other.terms[j];
                    let sum = if subtract { *cur - other } else { *cur + other };
                    if !sum.is_zero() {
                        result.push((sum, monomial.clone()));
                    }
                    i += 1;
                    j += 1;
                },
                Some(Ordering::Greater) => {
                    let (coeff, monomial) = &other.terms[j];
                    let coeff = if subtract { -*coeff } else { *coeff };
                    result.push((coeff, monomial.clone()));
                    j += 1;
                },
                None => break,
            };
        }
        result
    }
}

impl<F: Field, O: MonomialOrder> Debug for Polynomial<F, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for (coeff, term) in self.terms.iter() {
            if term.is_constant() {
                write!(f, "\n{}", coeff)?;
            } else {
                write!(f, "\n{} {:?}", coeff, term)?;
            }
        }
        Ok(())
    }
}

/// Renders terms from the leading one down, e.g. `x^2*y + 3*z + 1`.
impl<F: Field, O: MonomialOrder> Display for Polynomial<F, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (i, (coeff, term)) in self.terms.iter().rev().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            if term.is_constant() {
                write!(f, "{}", coeff)?;
            } else if coeff.is_one() {
                write!(f, "{}", term)?;
            } else {
                write!(f, "{}*{}", coeff, term)?;
            }
        }
        Ok(())
    }
}

impl<F: Field, O: MonomialOrder> Neg for Polynomial<F, O> {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self::Output {
        for coeff in &mut self.terms {
            (coeff).0 = -coeff.0;
        }
        self
    }
}

impl<'a, F: Field, O: MonomialOrder> Neg for &'a Polynomial<F, O> {
    type Output = Polynomial<F, O>;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

impl<'a, F: Field, O: MonomialOrder> AddAssign<&'a Self> for Polynomial<F, O> {
    fn add_assign(&mut self, other: &'a Self) {
        self.terms = self.merge(other, false);
    }
}

impl<F: Field, O: MonomialOrder> Add for Polynomial<F, O> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add(&rhs)
    }
}

impl<'a, F: Field, O: MonomialOrder> Add<&'a Self> for Polynomial<F, O> {
    type Output = Self;

    fn add(self, rhs: &'a Self) -> Self::Output {
        let mut result = self;
        result.add_assign(rhs);
        result
    }
}

impl<'a, 'b, F: Field, O: MonomialOrder> Add<&'a Polynomial<F, O>> for &'b Polynomial<F, O> {
    type Output = Polynomial<F, O>;

    fn add(self, rhs: &'a Polynomial<F, O>) -> Self::Output {
        Polynomial {
            order: self.order.clone(),
            terms: self.merge(rhs, false),
        }
    }
}

impl<'a, F: Field, O: MonomialOrder> SubAssign<&'a Self> for Polynomial<F, O> {
    fn sub_assign(&mut self, other: &'a Self) {
        self.terms = self.merge(other, true);
    }
}

impl<F: Field, O: MonomialOrder> Sub for Polynomial<F, O> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.sub(&rhs)
    }
}

impl<'a, F: Field, O: MonomialOrder> Sub<&'a Self> for Polynomial<F, O> {
    type Output = Self;

    fn sub(self, rhs: &'a Self) -> Self::Output {
        let mut result = self;
        result.sub_assign(rhs);
        result
    }
}

impl<'a, 'b, F: Field, O: MonomialOrder> Sub<&'a Polynomial<F, O>> for &'b Polynomial<F, O> {
    type Output = Polynomial<F, O>;

    fn sub(self, rhs: &'a Polynomial<F, O>) -> Self::Output {
        Polynomial {
            order: self.order.clone(),
            terms: self.merge(rhs, true),
        }
    }
}

impl<'a, 'b, F: Field, O: MonomialOrder> Mul<&'a Polynomial<F, O>> for &'b Polynomial<F, O> {
    type Output = Polynomial<F, O>;

    /// Schoolbook product: one scaled copy of `rhs` per term of `self`, summed.
    fn mul(self, rhs: &'a Polynomial<F, O>) -> Self::Output {
        self.terms
            .iter()
            .fold(Polynomial::zero(self.order.clone()), |acc, term| {
                acc + &(rhs * term)
            })
    }
}

impl<'a, F: Field, O: MonomialOrder> Mul<&'a Self> for Polynomial<F, O> {
    type Output = Self;

    fn mul(self, rhs: &'a Self) -> Self::Output {
        (&self).mul(rhs)
    }
}

impl<F: Field, O: MonomialOrder> Mul for Polynomial<F, O> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        (&self).mul(&rhs)
    }
}

impl<'a, F: Field, O: MonomialOrder> MulAssign<&'a Self> for Polynomial<F, O> {
    fn mul_assign(&mut self, rhs: &'a Self) {
        *self = (&*self).mul(rhs);
    }
}

impl<'a, F: Field, O: MonomialOrder> AddAssign<&'a (F, Monomial)> for Polynomial<F, O> {
    fn add_assign(&mut self, rhs: &'a (F, Monomial)) {
        if !rhs.0.is_zero() {
            match self
                .terms
                .binary_search_by(|(_, m)| self.order.compare(m, &rhs.1))
            {
                Ok(i) => {
                    self.terms[i].0 += rhs.0;
                    if self.terms[i].0.is_zero() {
                        self.terms.remove(i);
                    }
                },
                Err(i) => self.terms.insert(i, rhs.clone()),
            }
        }
    }
}

impl<'a, F: Field, O: MonomialOrder> Add<&'a (F, Monomial)> for Polynomial<F, O> {
    type Output = Self;

    fn add(self, rhs: &'a (F, Monomial)) -> Self::Output {
        let mut result = self;
        result.add_assign(rhs);
        result
    }
}

impl<'a, 'b, F: Field, O: MonomialOrder> Add<&'a (F, Monomial)> for &'b Polynomial<F, O> {
    type Output = Polynomial<F, O>;

    fn add(self, rhs: &'a (F, Monomial)) -> Self::Output {
        let mut result = self.clone();
        result.add_assign(rhs);
        result
    }
}

impl<'a, F: Field, O: MonomialOrder> SubAssign<&'a (F, Monomial)> for Polynomial<F, O> {
    fn sub_assign(&mut self, rhs: &'a (F, Monomial)) {
        self.add_assign(&(-rhs.0, rhs.1.clone()));
    }
}

impl<'a, F: Field, O: MonomialOrder> Sub<&'a (F, Monomial)> for Polynomial<F, O> {
    type Output = Self;

    fn sub(self, rhs: &'a (F, Monomial)) -> Self::Output {
        let mut result = self;
        result.sub_assign(rhs);
        result
    }
}

impl<'a, 'b, F: Field, O: MonomialOrder> Sub<&'a (F, Monomial)> for &'b Polynomial<F, O> {
    type Output = Polynomial<F, O>;

    fn sub(self, rhs: &'a (F, Monomial)) -> Self::Output {
        let mut result = self.clone();
        result.sub_assign(rhs);
        result
    }
}

/// Multiplying every monomial by the same factor keeps the terms sorted, since the
/// order is compatible with multiplication.
impl<'a, F: Field, O: MonomialOrder> MulAssign<&'a (F, Monomial)> for Polynomial<F, O> {
    fn mul_assign(&mut self, rhs: &'a (F, Monomial)) {
        if rhs.0.is_zero() {
            self.terms = Vec::new();
        } else {
            self.terms.iter_mut().for_each(|(c, m)| {
                *c *= rhs.0;
                *m *= &rhs.1;
            });
        }
    }
}

impl<'a, F: Field, O: MonomialOrder> Mul<&'a (F, Monomial)> for Polynomial<F, O> {
    type Output = Self;

    fn mul(self, rhs: &'a (F, Monomial)) -> Self::Output {
        let mut result = self;
        result.mul_assign(rhs);
        result
    }
}

impl<'a, 'b, F: Field, O: MonomialOrder> Mul<&'a (F, Monomial)> for &'b Polynomial<F, O> {
    type Output = Polynomial<F, O>;

    fn mul(self, rhs: &'a (F, Monomial)) -> Self::Output {
        if rhs.0.is_zero() {
            return Polynomial::zero(self.order.clone());
        }
        Polynomial {
            order: self.order.clone(),
            terms: self
                .terms
                .iter()
                .map(|(c, m)| (*c * rhs.0, m * &rhs.1))
                .collect(),
        }
    }
}

impl<'a, F: Field, O: MonomialOrder> MulAssign<&'a Monomial> for Polynomial<F, O> {
    fn mul_assign(&mut self, rhs: &'a Monomial) {
        self.terms.iter_mut().for_each(|(_, m)| {
            *m *= rhs;
        });
    }
}

impl<'a, F: Field, O: MonomialOrder> Mul<&'a Monomial> for Polynomial<F, O> {
    type Output = Self;

    fn mul(self, rhs: &'a Monomial) -> Self::Output {
        let mut result = self;
        result.mul_assign(rhs);
        result
    }
}

impl<'a, 'b, F: Field, O: MonomialOrder> Mul<&'a Monomial> for &'b Polynomial<F, O> {
    type Output = Polynomial<F, O>;

    fn mul(self, rhs: &'a Monomial) -> Self::Output {
        let mut result = self.clone();
        result.mul_assign(rhs);
        result
    }
}

#[cfg(test)]
#[allow(clippy::all)]
mod tests {
    use ark_ff::UniformRand;
    use ark_std::test_rng;
    use ark_test_curves::bls12_381::Fr;
    use rand::Rng;

    use crate::{
        coefficient,
        poly::order::{DegLexOrder, DegRevLexOrder, LexOrder},
        LexPolynomial, GF,
    };

    use super::*;

    /// Generate random `l`-variate polynomial of maximum individual degree `d`
    fn rand_poly<R: Rng, O: MonomialOrder>(
        order: O,
        l: usize,
        d: u32,
        max_terms: usize,
        rng: &mut R,
    ) -> Polynomial<Fr, O> {
        let mut random_terms = Vec::new();
        let num_terms = rng.gen_range(1..max_terms);
        random_terms.push((Fr::rand(rng), Monomial::one()));
        for _ in 1..num_terms {
            let coeff = Fr::rand(rng);
            random_terms.push((coeff, rand_monomial(l, d, rng)));
        }
        Polynomial::new(order, &random_terms)
    }

    fn rand_monomial<R: Rng>(l: usize, d: u32, rng: &mut R) -> Monomial {
        let term: Vec<(usize, u32)> = (0..l)
            .map(|i| {
                if rng.gen_bool(0.5) {
                    Some((i, rng.gen_range(1..(d + 1))))
                } else {
                    None
                }
            })
            .flatten()
            .collect();
        Monomial::new(&term)
    }

    fn x(i: usize) -> LexPolynomial {
        Polynomial::variable(LexOrder, i)
    }

    fn c(n: i64) -> LexPolynomial {
        Polynomial::constant(LexOrder, coefficient(n))
    }

    #[test]
    fn add_polynomials() {
        let rng = &mut test_rng();
        let max_degree = 10;
        for a_var_count in 1..10 {
            for b_var_count in 1..10 {
                let p1 = rand_poly(LexOrder, a_var_count, max_degree, 200, rng);
                let p2 = rand_poly(LexOrder, b_var_count, max_degree, 200, rng);
                let res1 = p1.to_owned() + &p2;
                let res2 = p2.to_owned() + &p1;
                assert_eq!(res1, res2);
                assert!((res2 - &res1).is_zero());
            }
        }
    }

    #[test]
    fn sub_polynomials() {
        let rng = &mut test_rng();
        let max_degree = 10;
        for a_var_count in 1..10 {
            for b_var_count in 1..10 {
                let p1 = rand_poly(DegRevLexOrder::default(), a_var_count, max_degree, 200, rng);
                let p2 = rand_poly(DegRevLexOrder::default(), b_var_count, max_degree, 200, rng);
                let res1 = p1.to_owned() - &p2;
                let res2 = p2.to_owned() - &p1;
                assert_eq!(res1, -res2);
                assert_eq!(res1.to_owned() + &p2, p1);
                assert!((&p1 - &p1).is_zero());
            }
        }
    }

    #[test]
    fn add_tuple() {
        let rng = &mut test_rng();
        let max_degree = 10;
        for a_var_count in 1..10 {
            for _ in 1..10 {
                let p = rand_poly(DegRevLexOrder::default(), a_var_count, max_degree, 200, rng);
                let t = (Fr::rand(rng), rand_monomial(a_var_count, max_degree, rng));
                let res1 = &p + &t;
                let res2 = Polynomial::new(DegRevLexOrder::default(), &[t.to_owned()]) + &p;
                assert_eq!(res1, res2);
                assert_eq!(res1 - &t, p);
            }
        }
    }

    #[test]
    fn sub_tuple() {
        let rng = &mut test_rng();
        let max_degree = 10;
        for a_var_count in 1..10 {
            for _ in 1..10 {
                let p = rand_poly(LexOrder, a_var_count, max_degree, 200, rng);
                let t = (Fr::rand(rng), rand_monomial(a_var_count, max_degree, rng));
                let res1 = &p - &t;
                let res2 = Polynomial::new(LexOrder, &[t.to_owned()]) - &p;
                assert_eq!(&res1 + &t, p);
                assert_eq!(res1, -res2);
            }
        }
    }

    #[test]
    fn mul_tuple() {
        let rng = &mut test_rng();
        let max_degree = 10;
        for a_var_count in 1..10 {
            for _ in 1..10 {
                let p = rand_poly(DegRevLexOrder::default(), a_var_count, max_degree, 200, rng);
                let t = (Fr::rand(rng), rand_monomial(a_var_count, max_degree, rng));
                let res1 = &p * &t;
                let res2 = p
                    .terms
                    .iter()
                    .map(|tt| Polynomial::new(p.order, &[tt.to_owned()]) * &t)
                    .reduce(|a, b| a + &b)
                    .unwrap();
                assert_eq!(res1, res2);
            }
        }
    }

    #[test]
    fn mul_monomial() {
        let rng = &mut test_rng();
        let max_degree = 10;
        for a_var_count in 1..10 {
            for _ in 1..10 {
                let p = rand_poly(LexOrder, a_var_count, max_degree, 200, rng);
                let t = rand_monomial(a_var_count, max_degree, rng);
                let res1 = &p * &t;
                let res2 = p
                    .terms
                    .iter()
                    .map(|tt| Polynomial::new(LexOrder, &[tt.to_owned()]) * &t)
                    .reduce(|a, b| a + &b)
                    .unwrap();
                assert_eq!(res1, res2);
            }
        }
    }

    #[test]
    fn ring_laws() {
        let rng = &mut test_rng();
        for _ in 0..50 {
            let a = rand_poly(DegLexOrder::default(), 4, 3, 12, rng);
            let b = rand_poly(DegLexOrder::default(), 4, 3, 12, rng);
            let d = rand_poly(DegLexOrder::default(), 4, 3, 12, rng);
            assert_eq!(&a * &(&b + &d), &(&a * &b) + &(&a * &d));
            assert_eq!(&a * &b, &b * &a);
            assert_eq!(&a + &b, &b + &a);
            assert!((&a - &a).is_zero());
            assert_eq!(a.pow(2), &a * &a);
        }
    }

    #[test]
    fn leading_monomial_of_product() {
        let rng = &mut test_rng();
        for _ in 0..50 {
            let a = rand_poly(LexOrder, 4, 3, 12, rng);
            let b = rand_poly(LexOrder, 4, 3, 12, rng);
            assert_eq!((&a * &b).leading_monomial(), &(a.leading_monomial() * b.leading_monomial()));

            let a = a.with_order(DegRevLexOrder::default());
            let b = b.with_order(DegRevLexOrder::default());
            assert_eq!((&a * &b).leading_monomial(), &(a.leading_monomial() * b.leading_monomial()));

            let a = a.with_order(DegLexOrder::default());
            let b = b.with_order(DegLexOrder::default());
            assert_eq!((&a * &b).leading_monomial(), &(a.leading_monomial() * b.leading_monomial()));
        }
    }

    #[test]
    fn test_arithmetic_identities() {
        let (x, y, z) = (x(0), x(1), x(2));
        let a = &(&(&x * &y) + &z.scale(coefficient(4))) - &(&(&y * &y) * &y).scale(coefficient(23));
        let xyz = &(&x * &y) * &z;
        let b = &a - &(&a + &xyz);
        assert_eq!(b, -&xyz);
        assert_ne!(&b * &a, &a * &a);
        assert_eq!(&b * &a, &(-&xyz) * &a);
        assert_eq!(&b + &Polynomial::zero(LexOrder), b);
        assert!((&b * &Polynomial::zero(LexOrder)).is_zero());
    }

    #[test]
    fn test_new_merges_and_cancels() {
        let m = Monomial::from_exponents(&[1, 1]);
        let p: LexPolynomial = Polynomial::new(
            LexOrder,
            &[
                (coefficient(2), m.clone()),
                (coefficient(3), Monomial::one()),
                (coefficient(-2), m.clone()),
                (GF::zero(), Monomial::variable(4)),
            ],
        );
        assert_eq!(p, c(3));
        assert_eq!(p.coefficient(&m), GF::zero());
        assert_eq!(p.coefficient(&Monomial::one()), coefficient(3));
        assert!(Polynomial::<GF, _>::term(LexOrder, GF::zero(), m).is_zero());
    }

    #[test]
    fn test_leading_term() {
        let (x, y, z) = (x(0), x(1), x(2));
        let a = &(&x * &y) + &z;
        assert_eq!(a.leading_monomial(), &Monomial::from_exponents(&[1, 1]));
        let b = &a + &(&z * &z);
        assert_eq!(b.leading_monomial(), a.leading_monomial());
        let x4 = x.pow(4);
        let b = &b + &x4.scale(coefficient(2));
        assert_eq!(b.leading_monomial(), &Monomial::from_exponents(&[4, 0, 0, 0, 0]));
        assert_eq!(b.leading_coefficient(), coefficient(2));
        assert_eq!(b.trailing_terms().len(), b.len() - 1);

        let zero = Polynomial::<GF, _>::zero(LexOrder);
        assert!(zero.leading_term().is_none());
        assert_eq!(zero.leading_monomial(), &Monomial::one());
        assert!(zero.leading_coefficient().is_zero());
        assert!(zero.trailing_terms().is_empty());
    }

    #[test]
    fn test_s_polynomial() {
        let (x, y, z) = (x(0), x(1), x(2));
        let f1 = &(&(&x * &x) * &y) + &(&y * &z);
        let f2 = &(&x * &y) + &z;
        assert_eq!(f1.s_polynomial(&f2), &(&y * &z) - &(&x * &z));
        assert_eq!(f1.s_polynomial(&f2), -f2.s_polynomial(&f1));
    }

    #[test]
    fn test_s_polynomial_normalizes_leading_coefficients() {
        let x = x(0);
        let poly1 = &x + &x.pow(3).scale(coefficient(2));
        let poly2 = &x.pow(2).scale(coefficient(3)) + &x.pow(4).scale(coefficient(4));
        // (x^4 + x^2 / 2) - (x^4 + 3 x^2 / 4)
        let expected = x.pow(2).scale(coefficient::<GF>(-1) / coefficient::<GF>(4));
        assert_eq!(poly1.s_polynomial(&poly2), expected);
    }

    #[test]
    fn s_polynomial_is_antisymmetric() {
        let rng = &mut test_rng();
        for _ in 0..50 {
            let a = rand_poly(DegRevLexOrder::default(), 4, 3, 12, rng);
            let b = rand_poly(DegRevLexOrder::default(), 4, 3, 12, rng);
            let s = a.s_polynomial(&b);
            assert_eq!(s, -b.s_polynomial(&a));
            let lcm = Monomial::lcm(a.leading_monomial(), b.leading_monomial());
            assert!(s.coefficient(&lcm).is_zero());
        }
    }

    #[test]
    #[should_panic(expected = "zero polynomial")]
    fn test_s_polynomial_of_zero_panics() {
        let _ = x(0).s_polynomial(&Polynomial::zero(LexOrder));
    }

    #[test]
    fn test_casts() {
        let (x, y) = (x(0), x(1));
        let a = &(&x * &y).scale(coefficient(3)) - &y.pow(3);
        let drl = a.with_order(DegRevLexOrder::default());
        assert_eq!(drl.leading_monomial(), &Monomial::from_exponents(&[0, 3]));
        assert_eq!(drl.with_order(LexOrder), a);

        let doubled = a.map_coefficients(|c| *c + c);
        assert_eq!(doubled, a.scale(coefficient(2)));
        let dropped = a.map_coefficients(|c| if *c == coefficient(3) { GF::zero() } else { *c });
        assert_eq!(dropped, -y.pow(3));
    }

    #[test]
    fn test_monic_and_queries() {
        let (x, z) = (x(0), x(5));
        let a = &x.scale(coefficient(4)) + &z.scale(coefficient(2));
        let monic = a.monic();
        assert!(monic.leading_coefficient().is_one());
        assert_eq!(monic.scale(coefficient(4)), a);
        assert_eq!(a.variables(), vec![0, 5]);
        assert_eq!(a.max_variable(), Some(5));
        assert!(a.depends_on(5));
        assert!(!a.depends_on(1));
        assert!(c(7).is_constant());
        assert_eq!(c(7).degree(), 0);
        assert_eq!((&x * &z).degree(), 2);
    }

    #[test]
    fn test_display() {
        let (x, y) = (x(0), x(1));
        let a = &(&(&x * &x) * &y) + &(&y.scale(coefficient(3)) + &c(1));
        assert_eq!(a.to_string(), "x^2*y + 3*y + 1");
        assert_eq!(Polynomial::<GF, _>::zero(LexOrder).to_string(), "0");
    }
}
