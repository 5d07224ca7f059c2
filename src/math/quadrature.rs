//! Five-point Gauss–Legendre quadrature tables.

/// Nodes on `[-1, 1]`.
pub const GAUSS_LEGENDRE_NODES: [f64; 5] = [0.90618, 0.53847, 0.0, -0.53847, -0.90618];

/// Weights matching [`GAUSS_LEGENDRE_NODES`]. They sum to 2, the length of `[-1, 1]`.
pub const GAUSS_LEGENDRE_WEIGHTS: [f64; 5] = [0.23693, 0.47863, 0.56889, 0.47863, 0.23693];

/// Nodes already mapped onto `[0, 1]`.
pub const UNIT_NODES: [f64; 5] = [0.0469, 0.2308, 0.5, 0.7692, 0.9531];

/// Weights matching [`UNIT_NODES`]. They sum to (approximately) 1.
pub const UNIT_WEIGHTS: [f64; 5] = [0.118, 0.239, 0.284, 0.239, 0.118];

/// Integrates `f` over `[0, 1]` using the `[-1, 1]` tables and the interval Jacobian.
#[must_use]
pub fn integrate_unit<F: Fn(f64) -> f64>(f: F) -> f64 {
    let sum: f64 = GAUSS_LEGENDRE_NODES
        .iter()
        .zip(GAUSS_LEGENDRE_WEIGHTS)
        .map(|(x, w)| w * f((x + 1.0) / 2.0))
        .sum();
    sum / 2.0
}

/// Integrates `f` over `[0, 1]` using the pre-mapped unit tables.
#[must_use]
pub fn integrate_unit_premapped<F: Fn(f64) -> f64>(f: F) -> f64 {
    UNIT_NODES
        .iter()
        .zip(UNIT_WEIGHTS)
        .map(|(t, w)| w * f(*t))
        .sum()
}
