//! Distance metrics between target and candidate frequency vectors.
//!
//! Both vectors must share the same fixed layout (see
//! [`TargetSpec::target_vector`](crate::freqs::TargetSpec::target_vector));
//! a length mismatch is a violated invariant, not a recoverable error.

use strum_macros::{Display, EnumString};

/// Built-in distance metric selector. Lower is better for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Metric {
    #[strum(serialize = "euclidean")]
    Euclidean,
    #[default]
    #[strum(serialize = "jensen-shannon", serialize = "jensenshannon")]
    JensenShannon,
}

impl Metric {
    pub fn distance(&self, target: &[f64], candidate: &[f64]) -> f64 {
        match self {
            Metric::Euclidean => euclidean(target, candidate),
            Metric::JensenShannon => jensen_shannon(target, candidate),
        }
    }
}

/// L2 norm of the element-wise difference.
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "frequency vectors are desynchronized");
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Jensen-Shannon divergence, with each vector renormalized to a
/// probability distribution first (each logical k-group sums to 1, so the
/// vector sum equals the group count).
pub fn jensen_shannon(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "frequency vectors are desynchronized");
    let p = normalize(a);
    let q = normalize(b);
    let m: Vec<f64> = p.iter().zip(&q).map(|(x, y)| 0.5 * (x + y)).collect();
    0.5 * kl_divergence(&p, &m) + 0.5 * kl_divergence(&q, &m)
}

fn normalize(v: &[f64]) -> Vec<f64> {
    let sum: f64 = v.iter().sum();
    if sum > 0.0 {
        v.iter().map(|x| x / sum).collect()
    } else {
        v.to_vec()
    }
}

fn kl_divergence(p: &[f64], q: &[f64]) -> f64 {
    p.iter()
        .zip(q)
        .filter(|(&pi, _)| pi > 0.0)
        .map(|(&pi, &qi)| pi * (pi / qi).log2())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_of_identical_vectors_is_zero() {
        let v = [0.25, 0.25, 0.5];
        assert_eq!(euclidean(&v, &v), 0.0);
    }

    #[test]
    fn euclidean_matches_hand_computation() {
        let a = [1.0, 0.0];
        let b = [0.0, 1.0];
        assert!((euclidean(&a, &b) - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn jensen_shannon_is_symmetric_and_bounded() {
        let a = [0.7, 0.2, 0.1];
        let b = [0.1, 0.3, 0.6];
        let d1 = jensen_shannon(&a, &b);
        let d2 = jensen_shannon(&b, &a);
        assert!((d1 - d2).abs() < 1e-12);
        assert!(d1 > 0.0 && d1 <= 1.0);
        assert_eq!(jensen_shannon(&a, &a), 0.0);
    }

    #[test]
    fn jensen_shannon_of_disjoint_distributions_is_one_bit() {
        let a = [1.0, 0.0];
        let b = [0.0, 1.0];
        assert!((jensen_shannon(&a, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn metric_parses_from_cli_spellings() {
        assert_eq!("euclidean".parse::<Metric>().unwrap(), Metric::Euclidean);
        assert_eq!(
            "jensen-shannon".parse::<Metric>().unwrap(),
            Metric::JensenShannon
        );
        assert_eq!(
            "JensenShannon".parse::<Metric>().unwrap(),
            Metric::JensenShannon
        );
    }
}
