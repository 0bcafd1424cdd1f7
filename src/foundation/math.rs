/// True for finite values strictly greater than zero.
pub(crate) fn is_positive_finite(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Number of whole `interval`s that fit in `length`.
///
/// Non-positive or non-finite inputs yield 0. Quotients past `cap` yield `cap`.
pub(crate) fn whole_steps(length: f64, interval: f64, cap: usize) -> usize {
    if !is_positive_finite(length) || !is_positive_finite(interval) {
        return 0;
    }
    let steps = (length / interval).floor();
    if !(steps < cap as f64) {
        return cap;
    }
    steps as usize
}

/// Wrap `t` into `[0, period)`; `period` must be > 0.
pub(crate) fn wrap_phase(t: f64, period: f64) -> f64 {
    let w = t.rem_euclid(period);
    // rem_euclid may round up to `period` for tiny negative inputs.
    if w >= period { 0.0 } else { w }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
