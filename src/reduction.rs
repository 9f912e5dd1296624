//! Multivariate division of a polynomial by a list of divisors.
//!
//! The leading term of the working dividend is cancelled by the first divisor
//! whose leading monomial divides it; after each cancellation the scan starts
//! again from the first divisor. A leading term no divisor can cancel moves to
//! the remainder. Every step lowers the leading monomial of the working dividend,
//! so the loop ends for any admissible order; a step that fails to lower it
//! panics.

use ark_ff::Field;
use std::cmp::Ordering;

use crate::poly::{order::MonomialOrder, polynomial::Polynomial};

/// Result of dividing `f` by `g_1, ..., g_s`:
/// `f == sum(quotients[i] * g_i) + remainder`.
#[derive(Debug, Clone)]
pub struct Reduction<F: Field, O: MonomialOrder> {
    pub remainder: Polynomial<F, O>,
    pub quotients: Vec<Polynomial<F, O>>,
}

/// Divides `dividend` by `divisors`, keeping one quotient per divisor.
///
/// Zero divisors divide nothing and keep a zero quotient. No monomial of the
/// remainder is divisible by the leading monomial of a non-zero divisor.
///
/// # Panics
/// When a cancellation step does not lower the leading monomial, or lowers it
/// to one of its multiples. Both only happen under orders that are not
/// admissible.
pub fn reduce<F: Field, O: MonomialOrder>(
    dividend: &Polynomial<F, O>,
    divisors: &[Polynomial<F, O>],
) -> Reduction<F, O> {
    divide(dividend, divisors, true)
}

/// Remainder of [`reduce`], without bookkeeping for the quotients.
pub fn normal_form<F: Field, O: MonomialOrder>(
    dividend: &Polynomial<F, O>,
    divisors: &[Polynomial<F, O>],
) -> Polynomial<F, O> {
    divide(dividend, divisors, false).remainder
}

fn divide<F: Field, O: MonomialOrder>(
    dividend: &Polynomial<F, O>,
    divisors: &[Polynomial<F, O>],
    with_quotients: bool,
) -> Reduction<F, O> {
    let order = dividend.order().clone();
    let mut quotients: Vec<Polynomial<F, O>> = if with_quotients {
        vec![Polynomial::zero(order.clone()); divisors.len()]
    } else {
        Vec::new()
    };
    let mut working = dividend.clone();
    // Collected from the largest monomial down.
    let mut remainder = Vec::new();

    while let Some((r_coefficient, r_monomial)) = working.leading_term().cloned() {
        let step = divisors.iter().enumerate().find_map(|(i, divisor)| {
            let (g_coefficient, g_monomial) = divisor.leading_term()?;
            (&r_monomial / g_monomial)
                .map(|t_monomial| (i, (r_coefficient / g_coefficient, t_monomial)))
        });

        match step {
            Some((i, t)) => {
                working -= &(&divisors[i] * &t);
                // Under an admissible order the next leading monomial is smaller and,
                // being smaller, cannot be a multiple of the cancelled one.
                if let Some((_, next)) = working.leading_term() {
                    if order.compare(next, &r_monomial) != Ordering::Less
                        || next.is_dividable_by(&r_monomial)
                    {
                        panic!(
                            "monomial order {:?} is not admissible: reducing {} led to {}",
                            order, r_monomial, next
                        );
                    }
                }
                if with_quotients {
                    quotients[i] += &t;
                }
            },
            None => {
                working.terms.pop();
                remainder.push((r_coefficient, r_monomial));
            },
        }
    }

    remainder.reverse();
    Reduction {
        remainder: Polynomial {
            order,
            terms: remainder,
        },
        quotients,
    }
}
