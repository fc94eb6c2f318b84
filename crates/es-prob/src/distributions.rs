//! Sequence-level PMF entry points.
//!
//! One-liner wrappers over the per-distribution modules: each takes a slice of
//! counts (or enzyme loads) and returns a fresh probability vector aligned with it.

use es_core::Result;

use crate::kinetics::KineticParams;

/// Poisson PMF `P(n; mu)` for every `n` in `counts`. Requires `mu > 0`.
pub fn poisson_pmf(counts: &[u64], mu: f64) -> Result<Vec<f64>> {
    crate::poisson::pmf(counts, mu)
}

/// Negative Binomial PMF `P(n; mu, r)` (mean/dispersion form) for every `n` in `counts`.
pub fn negative_binomial_pmf(counts: &[u64], mu: f64, r: f64) -> Result<Vec<f64>> {
    crate::neg_binomial::pmf(counts, mu, r)
}

/// `sum_i weights[i] * P(n; means[i])` for every `n` in `counts`.
///
/// Weights must be non-negative and sum to 1; they are never renormalized.
pub fn poisson_mixture_pmf(counts: &[u64], means: &[f64], weights: &[f64]) -> Result<Vec<f64>> {
    crate::mixture::pmf(counts, means, weights)
}

/// `P(n_p; lambda(n_e_tot))` for every enzyme load in `n_e_tot`, where
/// `lambda = k_cat * n_e_tot * s / (delta_p * (k_m + s))`.
pub fn kinetic_pmf_sweep(
    n_e_tot: &[f64],
    k_cat: f64,
    s: f64,
    delta_p: f64,
    k_m: f64,
    n_p: u64,
) -> Result<Vec<f64>> {
    let params = KineticParams::new(k_cat, s, delta_p, k_m)?;
    crate::kinetics::pmf_sweep(n_e_tot, &params, n_p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn support(n: u64) -> Vec<u64> {
        (0..n).collect()
    }

    fn in_unit_interval(xs: &[f64]) -> bool {
        xs.iter().all(|x| (0.0..=1.0).contains(x))
    }

    #[test]
    fn test_poisson_k0() {
        let p = poisson_pmf(&[0], 2.0).unwrap();
        assert_relative_eq!(p[0], (-2.0f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_all_outputs_in_unit_interval() {
        let n = support(100);
        for mu in [0.5, 2.0, 10.0, 20.0, 40.0, 95.0] {
            assert!(in_unit_interval(&poisson_pmf(&n, mu).unwrap()), "mu={}", mu);
            for r in [0.05, 1.0, 5.0, 20.0, 1000.0] {
                assert!(in_unit_interval(&negative_binomial_pmf(&n, mu, r).unwrap()));
            }
        }
        for p_on in [0.0, 0.2, 0.5, 0.8, 1.0] {
            let w = [1.0 - p_on, p_on];
            assert!(in_unit_interval(&poisson_mixture_pmf(&n, &[2.0, 30.0], &w).unwrap()));
        }
        let sweep = crate::math::linspace(0.0, 0.05, 101).unwrap();
        assert!(in_unit_interval(&kinetic_pmf_sweep(&sweep, 100.0, 1e-4, 0.1, 5e-5, 5).unwrap()));
    }

    #[test]
    fn test_repeated_calls_are_bit_identical() {
        let n = support(100);
        assert_eq!(poisson_pmf(&n, 20.0).unwrap(), poisson_pmf(&n, 20.0).unwrap());
        assert_eq!(
            negative_binomial_pmf(&n, 20.0, 5.0).unwrap(),
            negative_binomial_pmf(&n, 20.0, 5.0).unwrap()
        );
        assert_eq!(
            poisson_mixture_pmf(&n, &[2.0, 30.0], &[0.8, 0.2]).unwrap(),
            poisson_mixture_pmf(&n, &[2.0, 30.0], &[0.8, 0.2]).unwrap()
        );
        let sweep = crate::math::linspace(0.0, 1e-7, 500).unwrap();
        let a = kinetic_pmf_sweep(&sweep, 100.0, 1e-4, 0.1, 5e-5, 5).unwrap();
        let b = kinetic_pmf_sweep(&sweep, 100.0, 1e-4, 0.1, 5e-5, 5).unwrap();
        assert_eq!(
            a.iter().map(|x| x.to_bits()).collect::<Vec<_>>(),
            b.iter().map(|x| x.to_bits()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_kinetic_reference_sweep() {
        // Reference range: lambda stays far below n_p, so P(5) rises monotonically from 0.
        let sweep = crate::math::linspace(0.0, 1e-7, 500).unwrap();
        let p = kinetic_pmf_sweep(&sweep, 100.0, 1e-4, 0.1, 5e-5, 5).unwrap();
        assert_eq!(p[0], 0.0);
        assert!(p.windows(2).all(|w| w[1] >= w[0]));
        assert!(p[499] > 0.0);
    }

    #[test]
    fn test_kinetic_rise_peak_fall() {
        let params = KineticParams::default();
        let peak = params.peak_enzyme(5).unwrap();
        let sweep = crate::math::linspace(0.0, 4.0 * peak, 401).unwrap();
        let p = kinetic_pmf_sweep(&sweep, 100.0, 1e-4, 0.1, 5e-5, 5).unwrap();
        assert_eq!(p[0], 0.0);
        let imax = es_core::PmfResult::new(p.clone()).argmax().unwrap();
        assert_eq!(imax, 100);
        assert!(p[0] < p[imax] && p[400] < p[imax]);
    }

    #[test]
    fn test_errors_surface_instead_of_nan() {
        assert!(poisson_pmf(&[1], f64::NAN).is_err());
        assert!(negative_binomial_pmf(&[1], 20.0, 0.0).is_err());
        assert!(poisson_mixture_pmf(&[1], &[2.0], &[0.5]).is_err());
        assert!(kinetic_pmf_sweep(&[1e-8], 100.0, 1e-4, 0.0, 5e-5, 5).is_err());
    }

    #[test]
    fn test_empty_counts() {
        assert!(poisson_pmf(&[], 3.0).unwrap().is_empty());
        assert!(kinetic_pmf_sweep(&[], 100.0, 1e-4, 0.1, 5e-5, 5).unwrap().is_empty());
    }
}
