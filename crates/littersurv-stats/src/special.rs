//! Special mathematical functions backing the distribution tails.
//!
//! Self-contained implementations of `erf`, `ln_gamma`, the regularized
//! incomplete gamma function (chi-square tail), and the regularized
//! incomplete beta function (Student-t tail).
//!
//! # References
//!
//! - Abramowitz & Stegun 7.1.26 (error function approximation)
//! - Lanczos 1964 (log-gamma)
//! - Numerical Recipes §6.2/§6.4 (incomplete gamma and beta, modified
//!   Lentz continued fractions)

const SERIES_MAX_ITER: u32 = 500;
const SERIES_EPS: f64 = 1e-14;
const LENTZ_TINY: f64 = 1e-300;

/// Error function approximation (Abramowitz & Stegun 7.1.26).
///
/// Maximum absolute error < 1.5e-7 for all real `x`.
#[must_use]
pub fn erf(x: f64) -> f64 {
    let sign = x.signum();
    let x = x.abs();
    let t = 1.0 / 0.327_591_1_f64.mul_add(x, 1.0);
    let poly = 1.061_405_429_f64
        .mul_add(t, -1.453_152_027)
        .mul_add(t, 1.421_413_741)
        .mul_add(t, -0.284_496_736)
        .mul_add(t, 0.254_829_592);
    let y = (poly * t).mul_add(-(-x * x).exp(), 1.0);
    sign * y
}

/// Standard normal CDF: Φ(x) = 0.5 × (1 + erf(x / √2)).
#[must_use]
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

/// Standard normal survival function: 1 − Φ(x).
#[must_use]
pub fn normal_sf(x: f64) -> f64 {
    normal_cdf(-x)
}

/// Lanczos approximation for ln(Γ(x)), g = 5, n = 6 coefficients.
///
/// Returns `f64::INFINITY` for non-positive `x` (poles of the gamma
/// function).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ln_gamma(x: f64) -> f64 {
    const COEFFS: [f64; 6] = [
        76.180_091_729_471_46,
        -86.505_320_329_416_77,
        24.014_098_240_830_91,
        -1.231_739_572_450_155,
        0.001_208_650_973_866_179,
        -5.395_239_384_953_e-6,
    ];

    if x <= 0.0 {
        return f64::INFINITY;
    }

    let g = 5.0;
    let z = x - 1.0;
    let mut sum = 0.999_999_999_999_997_1_f64;
    for (i, &c) in COEFFS.iter().enumerate() {
        sum += c / (z + 1.0 + i as f64);
    }

    let t = z + g + 0.5;
    0.5f64.mul_add((2.0 * std::f64::consts::PI).ln(), (z + 0.5) * t.ln()) - t + sum.ln()
}

/// Regularized lower incomplete gamma function P(a, x) = γ(a, x) / Γ(a).
///
/// Series expansion for x < a + 1, continued fraction for the complement
/// otherwise. Returns 0.0 for non-positive `x`.
#[must_use]
pub fn reg_gamma_lower(a: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x < a + 1.0 {
        gamma_series(a, x)
    } else {
        1.0 - gamma_continued_fraction(a, x)
    }
}

/// Regularized upper incomplete gamma function Q(a, x) = 1 − P(a, x).
///
/// This is the survival function of a Gamma(a, 1) variate and, with
/// `a = k/2`, `x = χ²/2`, the chi-square tail probability.
#[must_use]
pub fn reg_gamma_upper(a: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 1.0;
    }
    if x < a + 1.0 {
        1.0 - gamma_series(a, x)
    } else {
        gamma_continued_fraction(a, x)
    }
}

/// Chi-square survival function with `df` degrees of freedom.
#[must_use]
pub fn chi_square_sf(statistic: f64, df: f64) -> f64 {
    reg_gamma_upper(df / 2.0, statistic / 2.0)
}

/// Two-sided Student-t tail probability: P(|T| ≥ |t|) with `df` degrees of
/// freedom, via the regularized incomplete beta function.
#[must_use]
pub fn student_t_two_sided(t: f64, df: f64) -> f64 {
    if !t.is_finite() {
        return 0.0;
    }
    let x = df / (df + t * t);
    reg_beta_inc(df / 2.0, 0.5, x).clamp(0.0, 1.0)
}

/// Regularized incomplete beta function I_x(a, b).
///
/// Modified Lentz continued fraction, with the symmetry transform
/// I_x(a, b) = 1 − I_{1−x}(b, a) applied when `x` is past the convergence
/// crossover.
#[must_use]
pub fn reg_beta_inc(a: f64, b: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let ln_front = a.mul_add(x.ln(), b * (1.0 - x).ln()) - ln_beta(a, b);
    if x < (a + 1.0) / (a + b + 2.0) {
        (ln_front.exp() * beta_continued_fraction(a, b, x) / a).clamp(0.0, 1.0)
    } else {
        (1.0 - ln_front.exp() * beta_continued_fraction(b, a, 1.0 - x) / b).clamp(0.0, 1.0)
    }
}

/// Log-beta function: ln B(a, b) = ln Γ(a) + ln Γ(b) − ln Γ(a + b).
#[must_use]
pub fn ln_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

fn gamma_series(a: f64, x: f64) -> f64 {
    let mut term = 1.0 / a;
    let mut sum = term;
    let mut denom = a;
    for _ in 0..SERIES_MAX_ITER {
        denom += 1.0;
        term *= x / denom;
        sum += term;
        if term.abs() < sum.abs() * SERIES_EPS {
            break;
        }
    }
    let ln_result = a.mul_add(x.ln(), -x) - ln_gamma(a) + sum.ln();
    ln_result.exp().clamp(0.0, 1.0)
}

fn gamma_continued_fraction(a: f64, x: f64) -> f64 {
    let mut b = x + 1.0 - a;
    let mut c = 1.0 / LENTZ_TINY;
    let mut d = 1.0 / b;
    let mut h = d;
    for i in 1..SERIES_MAX_ITER {
        let an = -f64::from(i) * (f64::from(i) - a);
        b += 2.0;
        d = an.mul_add(d, b);
        if d.abs() < LENTZ_TINY {
            d = LENTZ_TINY;
        }
        c = b + an / c;
        if c.abs() < LENTZ_TINY {
            c = LENTZ_TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() < SERIES_EPS {
            break;
        }
    }
    let ln_result = a.mul_add(x.ln(), -x) - ln_gamma(a) + h.ln();
    ln_result.exp().clamp(0.0, 1.0)
}

fn beta_continued_fraction(a: f64, b: f64, x: f64) -> f64 {
    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;

    let mut c = 1.0;
    let mut d = 1.0 - qab * x / qap;
    if d.abs() < LENTZ_TINY {
        d = LENTZ_TINY;
    }
    d = 1.0 / d;
    let mut h = d;

    for m in 1..SERIES_MAX_ITER {
        let m = f64::from(m);
        let m2 = 2.0 * m;

        let aa = m * (b - m) * x / ((qam + m2) * (a + m2));
        d = aa.mul_add(d, 1.0);
        if d.abs() < LENTZ_TINY {
            d = LENTZ_TINY;
        }
        c = aa.mul_add(1.0 / c, 1.0);
        if c.abs() < LENTZ_TINY {
            c = LENTZ_TINY;
        }
        d = 1.0 / d;
        h *= d * c;

        let aa = -(a + m) * (qab + m) * x / ((a + m2) * (qap + m2));
        d = aa.mul_add(d, 1.0);
        if d.abs() < LENTZ_TINY {
            d = LENTZ_TINY;
        }
        c = aa.mul_add(1.0 / c, 1.0);
        if c.abs() < LENTZ_TINY {
            c = LENTZ_TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;
        if (delta - 1.0).abs() < SERIES_EPS {
            break;
        }
    }
    h
}
