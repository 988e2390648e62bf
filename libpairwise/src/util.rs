#[cfg(test)]
#[ctor::ctor]
fn init_backtrace() {
    color_backtrace::install();
}

/// Narrow a wide intermediate score into the `i32` score space, saturating at the bounds.
#[inline]
pub fn clamp_score(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Format a fraction in [0, 1] as a percentage with one decimal place.
pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}
