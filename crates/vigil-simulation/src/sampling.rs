//! Random variates used by the engine.

use std::f64::consts::PI;

use rand::Rng;

/// Standard normal variate via Box-Muller.
pub fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-10);
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Student-t variate with `dof` degrees of freedom, rescaled to unit variance.
///
/// Built as `Z / sqrt(chi2 / dof)` with the chi-square drawn as a sum of
/// squared normals. `dof` below 3 is raised to 3 so the variance exists.
pub fn unit_student_t<R: Rng>(rng: &mut R, dof: u32) -> f64 {
    let dof = dof.max(3);
    let z = standard_normal(rng);
    let chi2: f64 = (0..dof).map(|_| standard_normal(rng).powi(2)).sum();
    let t = z / (chi2 / dof as f64).max(1e-12).sqrt();
    let nu = dof as f64;
    t * ((nu - 2.0) / nu).sqrt()
}

/// Draw around `center` with relative spread, floored at zero.
pub fn normal_around<R: Rng>(rng: &mut R, center: f64, spread: f64) -> f64 {
    (center + center * spread * standard_normal(rng)).max(0.0)
}

/// Heavy-tailed draw around `center` with relative spread, floored at zero.
pub fn heavy_tail_around<R: Rng>(rng: &mut R, center: f64, spread: f64, dof: u32) -> f64 {
    (center + center * spread * unit_student_t(rng, dof)).max(0.0)
}

/// SplitMix64 finaliser. Mixes a base seed with a chunk index into an
/// independent per-chunk seed.
pub fn splitmix64(seed: u64, stream: u64) -> u64 {
    let mut z = seed.wrapping_add(stream.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn normal_has_unit_moments() {
        let mut rng = StdRng::seed_from_u64(7);
        let draws: Vec<f64> = (0..50_000).map(|_| standard_normal(&mut rng)).collect();
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        let var = draws.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / draws.len() as f64;
        assert!(mean.abs() < 0.03, "mean {mean}");
        assert!((var - 1.0).abs() < 0.05, "variance {var}");
    }

    #[test]
    fn student_t_is_centered() {
        let mut rng = StdRng::seed_from_u64(11);
        let draws: Vec<f64> = (0..50_000).map(|_| unit_student_t(&mut rng, 3)).collect();
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        assert!(mean.abs() < 0.05, "mean {mean}");
    }

    #[test]
    fn zero_center_stays_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(normal_around(&mut rng, 0.0, 0.15), 0.0);
            assert_eq!(heavy_tail_around(&mut rng, 0.0, 0.25, 3), 0.0);
        }
    }

    #[test]
    fn draws_are_never_negative() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10_000 {
            assert!(normal_around(&mut rng, 1.0, 0.9) >= 0.0);
            assert!(heavy_tail_around(&mut rng, 1.0, 0.9, 3) >= 0.0);
        }
    }

    #[test]
    fn splitmix_separates_streams() {
        assert_ne!(splitmix64(42, 0), splitmix64(42, 1));
        assert_ne!(splitmix64(42, 0), splitmix64(43, 0));
        assert_eq!(splitmix64(42, 5), splitmix64(42, 5));
    }
}
