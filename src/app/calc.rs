/// Direction hint for the chart accent color: `1` when the series ends
/// above where it started, otherwise `-1`. Empty and single-sample
/// series are not greater than zero and therefore `-1`.
pub fn direction_hint(series: &[f64]) -> i8 {
    let first = series.first().copied().unwrap_or(0.0);
    let last = series.last().copied().unwrap_or(0.0);

    if last - first > 0.0 { 1 } else { -1 }
}
