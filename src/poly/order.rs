//! Monomial orders as comparator strategies.
//!
//! Every order used by a polynomial must be admissible: a total order, compatible
//! with multiplication, with the identity monomial as its unique minimum. The
//! primitive comparators below are not all admissible on their own (`DegreeOrder`
//! ties distinct monomials, `RevOrder<LexOrder>` puts the identity on top); they are
//! meant to be chained into admissible orders, e.g. [`DegRevLexOrder`].

use std::{cmp::Ordering, fmt::Debug, iter, sync::Arc};
use thiserror::Error;

use crate::poly::monomial::{Monomial, Variable};

/// Three-way comparison of two monomials.
pub trait Comparator: Debug + Send + Sync {
    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering;
}

/// A comparator that polynomials can carry around by value.
pub trait MonomialOrder: Comparator + Clone + 'static {}

impl<T: Comparator + Clone + 'static> MonomialOrder for T {}

impl<C: Comparator + ?Sized> Comparator for Arc<C> {
    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        self.as_ref().compare(lhs, rhs)
    }
}

/// Lexicographic order with variable 0 most significant: `x_0 > x_1 > ...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LexOrder;

/// Lexicographic order read from the highest variable index down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InvLexOrder;

/// Total degree only. Not a total order by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DegreeOrder;

/// Compares the exponent of a single variable; an elimination block for that variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableOrder(pub Variable);

/// The reverse of another comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RevOrder<O>(pub O);

/// Total degree first, ties broken by `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GradedOrder<O>(pub O);

pub type DegLexOrder = GradedOrder<LexOrder>;

/// Graded reverse lexicographic order.
pub type DegRevLexOrder = GradedOrder<RevOrder<InvLexOrder>>;

/// Applies comparators in sequence; the first non-equal answer wins.
#[derive(Debug, Clone, Default)]
pub struct ChainOrder {
    orders: Vec<Arc<dyn Comparator>>,
}

impl ChainOrder {
    pub fn new(orders: Vec<Arc<dyn Comparator>>) -> Self {
        Self { orders }
    }

    pub fn then<C: Comparator + 'static>(mut self, order: C) -> Self {
        self.orders.push(Arc::new(order));
        self
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Block order making `var` dominate every other variable, ties broken by `order`.
pub fn elimination_order<O: MonomialOrder>(var: Variable, order: O) -> ChainOrder {
    ChainOrder::default().then(VariableOrder(var)).then(order)
}

/// Block order making every variable of `vars` dominate the rest; inside the block
/// and outside it, ties are broken by `order`.
pub fn block_order<O: MonomialOrder>(vars: &[Variable], order: O) -> ChainOrder {
    ChainOrder::default()
        .then(BlockDegree(vars.to_vec()))
        .then(order)
}

/// Total degree restricted to a set of variables.
#[derive(Debug, Clone)]
struct BlockDegree(Vec<Variable>);

impl Comparator for BlockDegree {
    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        let degree = |m: &Monomial| -> u64 {
            self.0.iter().map(|&var| u64::from(m.exponent(var))).sum()
        };
        degree(lhs).cmp(&degree(rhs))
    }
}

impl Comparator for LexOrder {
    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        let mut lhs_it = lhs.iter();
        let mut rhs_it = rhs.iter();
        loop {
            match (lhs_it.next(), rhs_it.next()) {
                (Some((va, ea)), Some((vb, eb))) => {
                    // The side owning the smaller variable has a positive exponent
                    // where the other one has zero.
                    let ord = vb.cmp(va).then_with(|| ea.cmp(eb));
                    if ord.is_ne() {
                        return ord;
                    }
                },
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (None, None) => return Ordering::Equal,
            }
        }
    }
}

impl Comparator for InvLexOrder {
    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        let mut lhs_it = lhs.iter().rev();
        let mut rhs_it = rhs.iter().rev();
        loop {
            match (lhs_it.next(), rhs_it.next()) {
                (Some((va, ea)), Some((vb, eb))) => {
                    let ord = va.cmp(vb).then_with(|| ea.cmp(eb));
                    if ord.is_ne() {
                        return ord;
                    }
                },
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (None, None) => return Ordering::Equal,
            }
        }
    }
}

impl Comparator for DegreeOrder {
    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        lhs.degree().cmp(&rhs.degree())
    }
}

impl Comparator for VariableOrder {
    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        lhs.exponent(self.0).cmp(&rhs.exponent(self.0))
    }
}

impl<O: Comparator> Comparator for RevOrder<O> {
    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        self.0.compare(lhs, rhs).reverse()
    }
}

impl<O: Comparator> Comparator for GradedOrder<O> {
    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        lhs.degree()
            .cmp(&rhs.degree())
            .then_with(|| self.0.compare(lhs, rhs))
    }
}

impl Comparator for ChainOrder {
    fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        self.orders
            .iter()
            .map(|order| order.compare(lhs, rhs))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("monomial {0} is not above the identity monomial")]
    IdentityNotMinimal(Monomial),
    #[error("distinct monomials {0} and {1} compare equal")]
    NotTotal(Monomial, Monomial),
    #[error("{lhs} < {rhs} but not after multiplying both by {factor}")]
    NotMultiplicative {
        lhs: Monomial,
        rhs: Monomial,
        factor: Monomial,
    },
}

/// Checks admissibility of `order` on a finite sample of monomials.
///
/// Verifies that the identity is strictly below every other sampled monomial, that
/// distinct sampled monomials never compare equal, and that every strict comparison
/// survives multiplication by each sampled monomial and each variable in use.
/// Passing the check on a sample is necessary, not sufficient.
pub fn check_admissible<C: Comparator + ?Sized>(
    order: &C,
    monomials: &[Monomial],
) -> Result<(), OrderError> {
    let one = Monomial::one();
    for m in monomials.iter().filter(|m| !m.is_constant()) {
        if order.compare(m, &one) != Ordering::Greater {
            return Err(OrderError::IdentityNotMinimal(m.clone()));
        }
    }

    let variables = monomials
        .iter()
        .flat_map(|m| m.iter().map(|(var, _)| *var))
        .collect::<hashbrown::HashSet<Variable>>();
    let factors: Vec<Monomial> = variables
        .into_iter()
        .map(Monomial::variable)
        .chain(monomials.iter().cloned())
        .collect();

    for (i, lhs) in monomials.iter().enumerate() {
        for rhs in monomials[i + 1..].iter() {
            let (lhs, rhs) = match order.compare(lhs, rhs) {
                Ordering::Less => (lhs, rhs),
                Ordering::Greater => (rhs, lhs),
                Ordering::Equal if lhs == rhs => continue,
                Ordering::Equal => return Err(OrderError::NotTotal(lhs.clone(), rhs.clone())),
            };
            if let Some(factor) = factors
                .iter()
                .chain(iter::once(&one))
                .find(|c| order.compare(&(lhs * *c), &(rhs * *c)) != Ordering::Less)
            {
                return Err(OrderError::NotMultiplicative {
                    lhs: lhs.clone(),
                    rhs: rhs.clone(),
                    factor: factor.clone(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::all)]
mod tests {
    use super::*;

    fn m(exponents: &[u32]) -> Monomial {
        Monomial::from_exponents(exponents)
    }

    #[test]
    fn test_lex_order() {
        let order = LexOrder;
        let mut a = m(&[0, 2]);
        let mut c = m(&[0, 2]);
        assert_eq!(order.compare(&a, &c), Ordering::Equal);
        c = m(&[0, 2, 0, 5]);
        assert_eq!(order.compare(&a, &c), Ordering::Less);
        a = m(&[2, 2]);
        assert_eq!(order.compare(&a, &c), Ordering::Greater);
        c = m(&[2, 2, 0, 5]);
        assert_eq!(order.compare(&a, &c), Ordering::Less);
        let m1 = m(&[3, 0, 2, 0, 1, 2, 0, 1]);
        let m18 = m(&[1, 2, 0, 1, 1, 1, 0, 2]);
        assert_eq!(order.compare(&m1, &m18), Ordering::Greater);
        assert!(m1 > m18);
    }

    #[test]
    fn test_lex_order_is_multiplicative() {
        let b = m(&[0, 0, 3, 5, 1, 2]);
        let order = LexOrder;
        let pairs = [
            (m(&[]), m(&[0, 0])),
            (m(&[0, 0, 0, 0, 0, 4]), m(&[])),
            (m(&[0, 0, 0, 0, 0, 5]), m(&[0, 0, 0, 0, 0, 4])),
            (m(&[0, 2, 0, 0, 0, 4]), m(&[2, 0, 0, 0, 0, 4])),
        ];
        for (lhs, rhs) in pairs.iter() {
            assert_eq!(
                order.compare(lhs, rhs),
                order.compare(&(lhs * &b), &(rhs * &b))
            );
        }
    }

    #[test]
    fn test_deg_rev_lex_order() {
        let order = DegRevLexOrder::default();
        // Degree 2 monomials in three variables, descending.
        let expected = [
            m(&[2, 0, 0]),
            m(&[1, 1, 0]),
            m(&[0, 2, 0]),
            m(&[1, 0, 1]),
            m(&[0, 1, 1]),
            m(&[0, 0, 2]),
        ];
        for pair in expected.windows(2) {
            assert_eq!(order.compare(&pair[0], &pair[1]), Ordering::Greater);
        }
        assert_eq!(order.compare(&m(&[0, 0, 1]), &m(&[5])), Ordering::Less);
        assert_eq!(order.compare(&m(&[0, 0, 3]), &m(&[1, 1])), Ordering::Greater);
    }

    #[test]
    fn test_deg_lex_order() {
        let order = DegLexOrder::default();
        assert_eq!(order.compare(&m(&[1, 0, 1]), &m(&[0, 2, 0])), Ordering::Greater);
        assert_eq!(order.compare(&m(&[0, 0, 3]), &m(&[2])), Ordering::Greater);
    }

    #[test]
    fn test_chain_order_matches_graded_order() {
        let chain = ChainOrder::default()
            .then(DegreeOrder)
            .then(RevOrder(InvLexOrder));
        let graded = DegRevLexOrder::default();
        let monomials: Vec<Monomial> = (0..4u32)
            .flat_map(|a| (0..4u32).flat_map(move |b| (0..3u32).map(move |c| m(&[a, b, c]))))
            .collect();
        for lhs in monomials.iter() {
            for rhs in monomials.iter() {
                assert_eq!(chain.compare(lhs, rhs), graded.compare(lhs, rhs));
            }
        }
        assert_eq!(ChainOrder::default().compare(&m(&[1]), &m(&[0, 1])), Ordering::Equal);
    }

    #[test]
    fn test_elimination_order_puts_variable_first() {
        let order = elimination_order(3, DegRevLexOrder::default());
        assert_eq!(order.compare(&m(&[0, 0, 0, 1]), &m(&[9, 9, 9])), Ordering::Greater);
        assert_eq!(order.compare(&m(&[2, 0, 0, 1]), &m(&[0, 1, 0, 1])), Ordering::Greater);

        let order = block_order(&[0, 1], LexOrder);
        assert_eq!(order.compare(&m(&[0, 1]), &m(&[0, 0, 7])), Ordering::Greater);
        assert_eq!(order.compare(&m(&[0, 1]), &m(&[1])), Ordering::Less);
    }

    #[test]
    fn test_check_admissible() {
        let sample = vec![m(&[]), m(&[1]), m(&[0, 1]), m(&[2, 1]), m(&[0, 0, 3]), m(&[1, 1, 1])];
        assert_eq!(check_admissible(&LexOrder, &sample), Ok(()));
        assert_eq!(check_admissible(&DegRevLexOrder::default(), &sample), Ok(()));
        assert_eq!(check_admissible(&elimination_order(2, LexOrder), &sample), Ok(()));

        assert!(matches!(
            check_admissible(&RevOrder(LexOrder), &sample),
            Err(OrderError::IdentityNotMinimal(_))
        ));
        assert!(matches!(
            check_admissible(&DegreeOrder, &sample),
            Err(OrderError::NotTotal(_, _))
        ));
        // Inverse lex inside a chain without a degree block is fine; its reverse is not.
        assert_eq!(check_admissible(&InvLexOrder, &sample), Ok(()));
        assert!(check_admissible(&RevOrder(InvLexOrder), &sample).is_err());
    }
}
