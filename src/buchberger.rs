use crate::{
    groebner::auto_reduce,
    poly::{
        monomial::Monomial,
        order::{check_admissible, MonomialOrder},
        polynomial::Polynomial,
        set::GeneratorSet,
    },
    reduction::normal_form,
    Entry,
};
use ark_ff::Field;
use hashbrown::HashSet;
use log::{debug, info};
use std::{cmp::Reverse, collections::BinaryHeap};

/// Counters collected while completing a basis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuchbergerStats {
    pub pairs: usize,
    pub coprime_skipped: usize,
    pub chain_skipped: usize,
    pub zero_reductions: usize,
    pub added: usize,
}

/// Buchberger's completion with the coprime and chain criteria.
///
/// Pairs are selected by the total degree of the lcm of their leading monomials,
/// oldest first among equal degrees. Generators are never dropped once added, so
/// the basis can grow well beyond its reduced size; see [`reduced_groebner_basis`].
pub struct Buchberger<F: Field, O: MonomialOrder> {
    generators: Vec<Polynomial<F, O>>,
    pairs: BinaryHeap<Entry<Reverse<(u32, usize)>, (usize, usize)>>,
    processed: HashSet<(usize, usize)>,
    sequence: usize,
    stats: BuchbergerStats,
}

impl<F: Field, O: MonomialOrder> Buchberger<F, O> {
    /// # Panics
    /// When the generators' order fails [`check_admissible`] on their leading
    /// monomials and variables.
    pub fn new(generators: &GeneratorSet<F, O>) -> Self {
        if let Some(order) = generators.order() {
            let variables = generators
                .iter()
                .flat_map(|g| g.variables())
                .collect::<HashSet<_>>();
            let sample: Vec<Monomial> = generators
                .leading_monomials()
                .into_iter()
                .chain(variables.into_iter().map(Monomial::variable))
                .collect::<HashSet<_>>()
                .into_iter()
                .collect();
            if let Err(err) = check_admissible(order, &sample) {
                panic!("monomial order {:?} is not admissible: {}", order, err);
            }
        }

        let mut engine = Self {
            generators: Vec::with_capacity(generators.len()),
            pairs: BinaryHeap::new(),
            processed: HashSet::new(),
            sequence: 0,
            stats: BuchbergerStats::default(),
        };
        for g in generators {
            engine.push(g.clone());
        }
        engine
    }

    pub fn stats(&self) -> BuchbergerStats {
        self.stats
    }

    /// Completes the generators into a Gröbner basis of the same ideal.
    pub fn run(self) -> GeneratorSet<F, O> {
        self.run_with_stats().0
    }

    /// Like [`Buchberger::run`], also returning the counters.
    pub fn run_with_stats(mut self) -> (GeneratorSet<F, O>, BuchbergerStats) {
        info!(
            "Buchberger start with {} generators, {} pairs",
            self.generators.len(),
            self.pairs.len()
        );
        while let Some(Entry(_, (i, j))) = self.pairs.pop() {
            self.stats.pairs += 1;
            self.step(i, j);
            self.processed.insert((i, j));
        }
        info!(
            "Buchberger end with {} generators: {:?}",
            self.generators.len(),
            self.stats
        );
        (self.generators.into_iter().collect(), self.stats)
    }

    fn step(&mut self, i: usize, j: usize) {
        let (lm_i, lm_j) = (
            self.generators[i].leading_monomial(),
            self.generators[j].leading_monomial(),
        );
        let lcm = Monomial::lcm(lm_i, lm_j);

        // Coprime leading monomials
        if lm_i.is_coprime(lm_j) {
            debug!("pair ({}, {}) skipped, coprime leading monomials", i, j);
            self.stats.coprime_skipped += 1;
            return;
        }

        if self.chain_criterion(i, j, &lcm) {
            debug!("pair ({}, {}) skipped by the chain criterion", i, j);
            self.stats.chain_skipped += 1;
            return;
        }

        let s = self.generators[i].s_polynomial(&self.generators[j]);
        let r = normal_form(&s, &self.generators);
        if r.is_zero() {
            debug!("pair ({}, {}) reduced to zero", i, j);
            self.stats.zero_reductions += 1;
        } else {
            debug!(
                "pair ({}, {}) adds generator {} with leading monomial {}",
                i,
                j,
                self.generators.len(),
                r.leading_monomial()
            );
            self.stats.added += 1;
            self.push(r.monic());
        }
    }

    /// Some earlier generator `k` has a leading monomial dividing `lcm` and both of
    /// its pairs with `i` and `j` were already handled.
    fn chain_criterion(&self, i: usize, j: usize, lcm: &Monomial) -> bool {
        (0..i).any(|k| {
            lcm.is_dividable_by(self.generators[k].leading_monomial())
                && self.processed.contains(&(k, i))
                && self.processed.contains(&(k, j))
        })
    }

    fn push(&mut self, poly: Polynomial<F, O>) {
        let n = self.generators.len();
        for k in 0..n {
            let lcm = Monomial::lcm(self.generators[k].leading_monomial(), poly.leading_monomial());
            self.pairs
                .push(Entry(Reverse((lcm.degree(), self.sequence)), (k, n)));
            self.sequence += 1;
        }
        self.generators.push(poly);
    }
}

/// A Gröbner basis of the ideal spanned by `generators`.
pub fn groebner_basis<F: Field, O: MonomialOrder>(
    generators: &GeneratorSet<F, O>,
) -> GeneratorSet<F, O> {
    Buchberger::new(generators).run()
}

/// The reduced Gröbner basis: monic, interreduced, unique for the ideal and order.
pub fn reduced_groebner_basis<F: Field, O: MonomialOrder>(
    generators: &GeneratorSet<F, O>,
) -> GeneratorSet<F, O> {
    auto_reduce(&groebner_basis(generators))
}
