//! # Numerical Routines
//!
//! Adaptive quadrature and scalar root finding used throughout the
//! per-draft pipeline. Both routines degrade gracefully rather than
//! erroring: quadrature accepts its best estimate when the recursion
//! depth limit is hit, and the root finder reports failure through
//! `Option` so callers can fall back to domain boundaries.

/// Default absolute tolerance for quadrature
pub const DEFAULT_QUAD_TOL: f64 = 1e-6;

/// Maximum recursion depth for adaptive Simpson refinement
const MAX_QUAD_DEPTH: u32 = 40;

/// Maximum iterations for Brent's method
pub const MAX_ROOT_ITER: usize = 100;

/// Integrate `f` over `[a, b]` with adaptive Simpson quadrature.
///
/// Tolerant of integrands with discontinuous derivatives (piecewise
/// cubic hull curves): the interval subdivides until the local Richardson
/// error estimate drops below the (distributed) tolerance. Returns 0 for
/// empty or inverted intervals.
pub fn adaptive_simpson<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, tol: f64) -> f64 {
    if !(b > a) {
        return 0.0;
    }
    let m = 0.5 * (a + b);
    let fa = f(a);
    let fm = f(m);
    let fb = f(b);
    let whole = simpson(a, b, fa, fm, fb);
    simpson_step(f, a, b, fa, fm, fb, whole, tol.max(f64::EPSILON), MAX_QUAD_DEPTH)
}

fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

#[allow(clippy::too_many_arguments)]
fn simpson_step<F: Fn(f64) -> f64>(
    f: &F,
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    tol: f64,
    depth: u32,
) -> f64 {
    let m = 0.5 * (a + b);
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);
    let flm = f(lm);
    let frm = f(rm);
    let left = simpson(a, m, fa, flm, fm);
    let right = simpson(m, b, fm, frm, fb);
    let delta = left + right - whole;
    // 15 = Richardson factor for Simpson's rule
    if depth == 0 || delta.abs() <= 15.0 * tol {
        left + right + delta / 15.0
    } else {
        simpson_step(f, a, m, fa, flm, fm, left, 0.5 * tol, depth - 1)
            + simpson_step(f, m, b, fm, frm, fb, right, 0.5 * tol, depth - 1)
    }
}

/// Find a root of `f` in `[a, b]` with Brent's method.
///
/// Requires a sign change over the bracket; returns `None` if the
/// bracket does not straddle a root or the iteration budget runs out.
pub fn brent<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, tol: f64) -> Option<f64> {
    let mut a = a;
    let mut b = b;
    let mut fa = f(a);
    let mut fb = f(b);

    if fa == 0.0 {
        return Some(a);
    }
    if fb == 0.0 {
        return Some(b);
    }
    if fa * fb > 0.0 {
        return None;
    }

    // Arrange |f(b)| <= |f(a)| so b is the best estimate
    if fa.abs() < fb.abs() {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let mut c = a;
    let mut fc = fa;
    let mut d = b - a;
    let mut e = d;

    for _ in 0..MAX_ROOT_ITER {
        if fb * fc > 0.0 {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }
        let tol1 = 2.0 * f64::EPSILON * b.abs() + 0.5 * tol;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol1 || fb == 0.0 {
            return Some(b);
        }
        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            // Inverse quadratic interpolation (secant when a == c)
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (2.0 * xm * s, 1.0 - s)
            } else {
                let q = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * q * (q - r) - (b - a) * (r - 1.0)),
                    (q - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();
            let min1 = 3.0 * xm * q - (tol1 * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }
        a = b;
        fa = fb;
        if d.abs() > tol1 {
            b += d;
        } else {
            b += tol1.copysign(xm);
        }
        fb = f(b);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simpson_polynomial_exact() {
        // Simpson is exact for cubics: integral of x^3 over [0, 2] = 4
        let result = adaptive_simpson(&|x| x * x * x, 0.0, 2.0, 1e-9);
        assert!((result - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_simpson_transcendental() {
        // integral of sin over [0, pi] = 2
        let result = adaptive_simpson(&|x: f64| x.sin(), 0.0, std::f64::consts::PI, 1e-9);
        assert!((result - 2.0).abs() < 1e-8);
    }

    #[test]
    fn test_simpson_kinked_integrand() {
        // |x - 1| over [0, 2] = 1 despite the derivative jump
        let result = adaptive_simpson(&|x: f64| (x - 1.0).abs(), 0.0, 2.0, 1e-8);
        assert!((result - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_simpson_empty_interval() {
        assert_eq!(adaptive_simpson(&|x| x, 1.0, 1.0, 1e-6), 0.0);
        assert_eq!(adaptive_simpson(&|x| x, 2.0, 1.0, 1e-6), 0.0);
    }

    #[test]
    fn test_brent_quadratic() {
        // x^2 - 4 has a root at 2
        let root = brent(&|x| x * x - 4.0, 0.0, 5.0, 1e-12).unwrap();
        assert!((root - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_brent_endpoint_root() {
        let root = brent(&|x| x - 1.0, 1.0, 3.0, 1e-12).unwrap();
        assert_eq!(root, 1.0);
    }

    #[test]
    fn test_brent_no_bracket() {
        assert!(brent(&|x| x * x + 1.0, -1.0, 1.0, 1e-12).is_none());
    }

    #[test]
    fn test_brent_steep_function() {
        let root = brent(&|x: f64| x.powi(7) - 0.001, 0.0, 2.0, 1e-14).unwrap();
        assert!((root - 0.001f64.powf(1.0 / 7.0)).abs() < 1e-7);
    }
}
