//! # Generated instances
//!
//! Pseudo random packing problems with positive data, small enough to be checked against a brute
//! force enumeration of all integer points.
use num_rational::Rational64;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Linear congruential generator, so that every run sees the same instances.
struct Generator(u64);

impl Generator {
    fn next(&mut self, low: i64, high: i64) -> Rational64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let range = (high - low + 1) as u64;
        Rational64::from_integer(low + ((self.0 >> 33) % range) as i64)
    }
}

/// A problem `max objective · x s.t. weights x <= limits`.
struct Instance {
    objective: Vec<Rational64>,
    weights: Vec<Vec<Rational64>>,
    limits: Vec<Rational64>,
}

fn generate(seed: u64, nr_variables: usize, nr_constraints: usize) -> Instance {
    let mut generator = Generator(seed);

    let objective = (0..nr_variables).map(|_| generator.next(1, 20)).collect();
    let weights = (0..nr_constraints)
        .map(|_| (0..nr_variables).map(|_| generator.next(1, 10)).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    let limits = weights.iter()
        .map(|row| {
            let total = row.iter().sum::<Rational64>();
            (total / Rational64::from_integer(2)).floor()
        })
        .collect();

    Instance { objective, weights, limits }
}
