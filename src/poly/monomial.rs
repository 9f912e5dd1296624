use once_cell::sync::Lazy;
use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Error, Formatter},
    hash::Hash,
    ops::{Div, Mul, MulAssign},
    vec::Vec,
};

use crate::poly::order::{Comparator, LexOrder};

/// Index of a variable. The index space is unbounded.
pub type Variable = usize;

/// Exponent of a single variable inside a monomial.
pub type Exponent = u32;

/// The identity monomial, returned as the leading monomial of the zero polynomial.
pub(crate) static IDENTITY: Lazy<Monomial> = Lazy::new(Monomial::one);

/// A power product `x_0^e_0 * x_1^e_1 * ...` stored sparsely.
///
/// Exponents are kept as `(variable, exponent)` pairs sorted by variable, and
/// zero exponents are never stored, so structural equality already treats
/// absent variables as having exponent zero.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Monomial {
    exponents: Vec<(Variable, Exponent)>,
    degree: u32,
}

impl Monomial {
    /// Builds a monomial from `(variable, exponent)` pairs in any order.
    /// Repeated variables have their exponents added.
    pub fn new(monomial: &[(Variable, Exponent)]) -> Self {
        let mut term: Vec<(Variable, Exponent)> = monomial
            .iter()
            .filter(|(_, pow)| *pow != 0)
            .copied()
            .collect();
        if term.is_empty() {
            return Self::one();
        }
        term.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
        let mut term_dedup: Vec<(Variable, Exponent)> = Vec::with_capacity(term.len());
        for (var, pow) in term {
            if let Some(prev) = term_dedup.last_mut() {
                if prev.0 == var {
                    prev.1 += pow;
                    continue;
                }
            }
            term_dedup.push((var, pow));
        }
        Self::from_sorted(term_dedup)
    }

    /// Builds a monomial from a dense exponent list, index 0 being the first variable.
    pub fn from_exponents(exponents: &[Exponent]) -> Self {
        Self::from_sorted(
            exponents
                .iter()
                .copied()
                .enumerate()
                .filter(|(_, pow)| *pow != 0)
                .collect(),
        )
    }

    fn from_sorted(exponents: Vec<(Variable, Exponent)>) -> Self {
        let degree = exponents.iter().map(|(_, pow)| pow).sum();
        Self { exponents, degree }
    }

    pub fn one() -> Self {
        Self::default()
    }

    /// The monomial `x_var`.
    pub fn variable(var: Variable) -> Self {
        Self::from_sorted(vec![(var, 1)])
    }

    pub fn degree(&self) -> u32 {
        self.degree
    }

    pub fn is_constant(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Whether this is the identity monomial (all exponents zero).
    pub fn is_zero(&self) -> bool {
        self.is_constant()
    }

    /// Exponent of `var`, zero when the variable does not occur.
    pub fn exponent(&self, var: Variable) -> Exponent {
        self.exponents
            .binary_search_by(|(v, _)| v.cmp(&var))
            .map(|i| self.exponents[i].1)
            .unwrap_or(0)
    }

    pub fn depends_on(&self, var: Variable) -> bool {
        self.exponent(var) != 0
    }

    /// Largest variable index with a non-zero exponent.
    pub fn max_variable(&self) -> Option<Variable> {
        self.exponents.last().map(|(var, _)| *var)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &(Variable, Exponent)> + '_ {
        self.exponents.iter()
    }

    pub fn is_dividable_by(&self, other: &Self) -> bool {
        if other.degree > self.degree {
            return false;
        }
        other
            .exponents
            .iter()
            .all(|(var, pow)| self.exponent(*var) >= *pow)
    }

    /// Exact quotient `self / other`.
    ///
    /// # Panics
    /// When `other` does not divide `self`.
    pub fn divide(&self, other: &Self) -> Self {
        match self / other {
            Some(quotient) => quotient,
            None => panic!("monomial {} is not dividable by {}", self, other),
        }
    }

    /// Pointwise maximum, the least monomial divisible by both.
    pub fn lcm(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a.max(b))
    }

    /// Pointwise minimum.
    pub fn gcd(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a.min(b))
    }

    /// No variable occurs in both monomials.
    pub fn is_coprime(&self, other: &Self) -> bool {
        self.exponents
            .iter()
            .all(|(var, _)| !other.depends_on(*var))
    }

    /// Merges two exponent vectors variable by variable, treating absent variables as zero.
    fn combine(&self, other: &Self, f: impl Fn(Exponent, Exponent) -> Exponent) -> Self {
        let (mut i, mut j) = (0, 0);
        let (lhs, rhs) = (&self.exponents, &other.exponents);
        let mut result = Vec::with_capacity(lhs.len() + rhs.len());
        loop {
            let (var, pow) = match (lhs.get(i), rhs.get(j)) {
                (Some(&(va, ea)), Some(&(vb, eb))) => match va.cmp(&vb) {
                    Ordering::Less => {
                        i += 1;
                        (va, f(ea, 0))
                    },
                    Ordering::Equal => {
                        i += 1;
                        j += 1;
                        (va, f(ea, eb))
                    },
                    Ordering::Greater => {
                        j += 1;
                        (vb, f(0, eb))
                    },
                },
                (Some(&(va, ea)), None) => {
                    i += 1;
                    (va, f(ea, 0))
                },
                (None, Some(&(vb, eb))) => {
                    j += 1;
                    (vb, f(0, eb))
                },
                (None, None) => break,
            };
            if pow != 0 {
                result.push((var, pow));
            }
        }
        Self::from_sorted(result)
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Structural order, independent of the working order of any polynomial.
impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        LexOrder.compare(self, other)
    }
}

impl Debug for Monomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        if self.is_constant() {
            return write!(f, "1");
        }
        for (i, (var, pow)) in self.exponents.iter().enumerate() {
            if i > 0 {
                write!(f, " * ")?;
            }
            match pow.cmp(&1) {
                Ordering::Greater => write!(f, "x_{}^{}", var, pow)?,
                _ => write!(f, "x_{}", var)?,
            }
        }
        Ok(())
    }
}

/// Renders variables 0, 1, 2 as `x`, `y`, `z` and the others as `x_i`.
impl Display for Monomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        if self.is_constant() {
            return write!(f, "1");
        }
        for (i, (var, pow)) in self.exponents.iter().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            match var {
                0 => write!(f, "x")?,
                1 => write!(f, "y")?,
                2 => write!(f, "z")?,
                _ => write!(f, "x_{}", var)?,
            }
            if *pow > 1 {
                write!(f, "^{}", pow)?;
            }
        }
        Ok(())
    }
}

impl<'a> MulAssign<&'a Monomial> for Monomial {
    fn mul_assign(&mut self, other: &'a Monomial) {
        *self = self.combine(other, |a, b| a + b);
    }
}

impl<'a> Mul<&'a Monomial> for Monomial {
    type Output = Self;

    fn mul(self, other: &'a Monomial) -> Self::Output {
        self.combine(other, |a, b| a + b)
    }
}

impl<'a, 'b> Mul<&'a Monomial> for &'b Monomial {
    type Output = Monomial;

    fn mul(self, other: &'a Monomial) -> Self::Output {
        self.combine(other, |a, b| a + b)
    }
}

impl<'a> Div<&'a Monomial> for Monomial {
    type Output = Option<Self>;

    fn div(self, other: &'a Monomial) -> Self::Output {
        (&self).div(other)
    }
}

impl<'a, 'b> Div<&'a Monomial> for &'b Monomial {
    type Output = Option<Monomial>;

    fn div(self, other: &'a Monomial) -> Self::Output {
        if self.is_dividable_by(other) {
            Some(self.combine(other, |a, b| a - b))
        } else {
            None
        }
    }
}

/// Multiplies by the variable with the given index.
impl MulAssign<Variable> for Monomial {
    fn mul_assign(&mut self, var: Variable) {
        match self.exponents.binary_search_by(|(v, _)| v.cmp(&var)) {
            Ok(i) => self.exponents[i].1 += 1,
            Err(i) => self.exponents.insert(i, (var, 1)),
        }
        self.degree += 1;
    }
}

impl Mul<Variable> for Monomial {
    type Output = Self;

    fn mul(self, var: Variable) -> Self::Output {
        let mut result = self;
        result.mul_assign(var);
        result
    }
}

impl<'b> Mul<Variable> for &'b Monomial {
    type Output = Monomial;

    fn mul(self, var: Variable) -> Self::Output {
        let mut result = self.clone();
        result.mul_assign(var);
        result
    }
}

/// Divides by the variable with the given index.
impl Div<Variable> for Monomial {
    type Output = Option<Self>;

    fn div(self, var: Variable) -> Self::Output {
        (&self).div(var)
    }
}

impl<'b> Div<Variable> for &'b Monomial {
    type Output = Option<Monomial>;

    fn div(self, var: Variable) -> Self::Output {
        let i = self.exponents.binary_search_by(|(v, _)| v.cmp(&var)).ok()?;
        let mut exponents = self.exponents.clone();
        if exponents[i].1 == 1 {
            exponents.remove(i);
        } else {
            exponents[i].1 -= 1;
        }
        Some(Monomial::from_sorted(exponents))
    }
}
