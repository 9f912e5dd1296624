//! Standard benchmark systems.

use crate::poly::{
    monomial::{Monomial, Variable},
    order::MonomialOrder,
    polynomial::Polynomial,
    set::GeneratorSet,
};
use ark_ff::Field;

/// Elementary symmetric polynomial of degree `k` in `x_0..x_{n-1}`.
pub fn elementary_symmetric<F: Field, O: MonomialOrder>(
    n: usize,
    k: usize,
    order: O,
) -> Polynomial<F, O> {
    let mut terms = Vec::new();
    let mut combination: Vec<Variable> = Vec::with_capacity(k);
    combinations(n, k, 0, &mut combination, &mut |vars: &[Variable]| {
        let monomial = Monomial::new(&vars.iter().map(|&v| (v, 1)).collect::<Vec<_>>());
        terms.push((F::one(), monomial));
    });
    Polynomial::new(order, &terms)
}

fn combinations(
    n: usize,
    k: usize,
    start: Variable,
    current: &mut Vec<Variable>,
    visit: &mut impl FnMut(&[Variable]),
) {
    if current.len() == k {
        visit(current);
        return;
    }
    for var in start..n {
        current.push(var);
        combinations(n, k, var + 1, current, visit);
        current.pop();
    }
}

/// `e_1, ..., e_{n-1}` and `e_n - 1` for odd `n`, `e_n + 1` for even `n`.
///
/// The reduced lex basis has exactly `n` generators.
pub fn symmetric<F: Field, O: MonomialOrder>(n: usize, order: O) -> GeneratorSet<F, O> {
    let mut ideal: GeneratorSet<F, O> = (1..n)
        .map(|k| elementary_symmetric(n, k, order.clone()))
        .collect();
    let shift = if n % 2 == 0 { F::one() } else { -F::one() };
    let e_n: Polynomial<F, O> = elementary_symmetric(n, n, order.clone());
    ideal.add(&e_n + &(shift, Monomial::one()));
    ideal
}

/// The cyclic n-roots system.
pub fn cyclic<F: Field, O: MonomialOrder>(n: usize, order: O) -> GeneratorSet<F, O> {
    let mut ideal = GeneratorSet::new();
    for k in 1..n {
        let terms: Vec<(F, Monomial)> = (0..n)
            .map(|i| {
                let vars: Vec<_> = (0..k).map(|j| ((i + j) % n, 1)).collect();
                (F::one(), Monomial::new(&vars))
            })
            .collect();
        ideal.add(Polynomial::new(order.clone(), &terms));
    }
    let product = Monomial::new(&(0..n).map(|v| (v, 1)).collect::<Vec<_>>());
    ideal.add(Polynomial::new(
        order,
        &[(F::one(), product), (-F::one(), Monomial::one())],
    ));
    ideal
}

/// The Katsura system in `u_0..u_n`, `n + 1` equations.
pub fn katsura<F: Field, O: MonomialOrder>(n: usize, order: O) -> GeneratorSet<F, O> {
    // u_{-l} = u_l and u_l = 0 for l > n
    let u = |l: isize| -> Option<Variable> {
        let l = l.unsigned_abs();
        (l <= n).then_some(l)
    };
    let n_signed = n as isize;

    let mut ideal = GeneratorSet::new();
    for m in 0..n_signed {
        let mut terms = Vec::new();
        for l in -n_signed..=n_signed {
            if let (Some(a), Some(b)) = (u(l), u(m - l)) {
                terms.push((F::one(), Monomial::variable(a) * &Monomial::variable(b)));
            }
        }
        terms.push((-F::one(), Monomial::variable(m as Variable)));
        ideal.add(Polynomial::new(order.clone(), &terms));
    }

    let mut terms: Vec<(F, Monomial)> = (-n_signed..=n_signed)
        .filter_map(u)
        .map(|v| (F::one(), Monomial::variable(v)))
        .collect();
    terms.push((-F::one(), Monomial::one()));
    ideal.add(Polynomial::new(order, &terms));
    ideal
}

#[cfg(test)]
#[allow(clippy::all)]
mod tests {
    use super::*;
    use crate::{
        buchberger::reduced_groebner_basis,
        coefficient,
        groebner::is_groebner_basis,
        poly::order::{DegRevLexOrder, LexOrder},
        DegRevLexPolynomial, GF,
    };

    #[test]
    fn test_elementary_symmetric() {
        let e2: Polynomial<GF, _> = elementary_symmetric(4, 2, LexOrder);
        assert_eq!(e2.len(), 6);
        assert_eq!(e2.degree(), 2);
        let e4: Polynomial<GF, _> = elementary_symmetric(4, 4, LexOrder);
        assert_eq!(e4.terms(), &[(coefficient(1), Monomial::from_exponents(&[1, 1, 1, 1]))][..]);
    }

    #[test]
    fn test_symmetric_constant_sign() {
        let odd: GeneratorSet<GF, _> = symmetric(3, LexOrder);
        assert_eq!(odd.len(), 3);
        assert!(odd.iter().any(|p| p.coefficient(&Monomial::one()) == coefficient(-1)));
        let even: GeneratorSet<GF, _> = symmetric(4, LexOrder);
        assert!(even.iter().any(|p| p.coefficient(&Monomial::one()) == coefficient(1)));
    }

    #[test]
    fn test_symmetric_lex_basis_size() {
        for n in 2..=4 {
            let reduced = reduced_groebner_basis(&symmetric::<GF, _>(n, LexOrder));
            assert_eq!(reduced.len(), n);
            assert!(is_groebner_basis(reduced.as_slice()));
        }
    }

    #[test]
    fn test_cyclic_4() {
        let order = DegRevLexOrder::default();
        let ideal: GeneratorSet<GF, _> = cyclic(4, order);
        assert_eq!(ideal.len(), 4);
        assert_eq!(ideal.max_variable(), Some(3));

        let reduced = reduced_groebner_basis(&ideal);
        assert!(is_groebner_basis(reduced.as_slice()));
        assert_eq!(reduced.len(), 7);

        let v = |i| -> DegRevLexPolynomial { Polynomial::variable(order, i) };
        let (a, b, c, d) = (v(0), v(1), v(2), v(3));
        assert!(reduced.contains(&(&(&(&a + &b) + &c) + &d)));
        assert!(reduced.contains(&(&b + &d).pow(2)));
    }

    #[test]
    fn test_katsura_2() {
        let order = DegRevLexOrder::default();
        let ideal: GeneratorSet<GF, _> = katsura(2, order);
        assert_eq!(ideal.len(), 3);
        assert_eq!(ideal.max_variable(), Some(2));

        // u0 + 2 u1 + 2 u2 - 1
        let v = |i| -> DegRevLexPolynomial { Polynomial::variable(order, i) };
        let linear = &(&(&v(0) + &v(1).scale(coefficient(2))) + &v(2).scale(coefficient(2)))
            - &Polynomial::constant(order, coefficient(1));
        assert!(ideal.contains(&linear));

        let reduced = reduced_groebner_basis(&ideal);
        assert!(is_groebner_basis(reduced.as_slice()));
        assert!(!reduced.contains_one());
    }
}
