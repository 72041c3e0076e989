use pt_core::config::SampleOptions;
use pt_core::grid::DotSet;

/// Échantillonne `y = round(f(x))` pour chaque colonne entière `x ∈ [0, width)`.
///
/// Samples outside `0 ≤ y ≤ height` are skipped — the upper bound is
/// inclusive, so a curve grazing the top edge survives in the returned map
/// and is dropped later by the display's range policy. Non-finite samples
/// (NaN, ±∞) are skipped outright.
///
/// Fill policy: with neither flag, only `(x, y)` is marked; `fill_below`
/// marks `(x, 0..=y)` (baseline up to the sample, for bar/area charts);
/// `fill_above` marks `(x, y..=height)`. When both flags are set,
/// `fill_below` wins.
///
/// The result is a plain dot map in public (bottom-up) coordinates; it
/// does not touch any display.
///
/// # Example
/// ```
/// use pt_braille::sample::sample_curve;
/// use pt_core::config::SampleOptions;
/// let dots = sample_curve(4, 4, |x| f64::from(x), SampleOptions::default());
/// assert_eq!(dots.len(), 4);
/// assert!(dots.contains(2, 2));
/// ```
pub fn sample_curve<F>(width: u32, height: u32, f: F, opts: SampleOptions) -> DotSet
where
    F: Fn(u32) -> f64,
{
    let mut dots = DotSet::new();
    for x in 0..width {
        let y = f(x).round();
        if !(0.0..=f64::from(height)).contains(&y) {
            continue;
        }
        let y = y as u32;
        if opts.fill_below {
            for yy in 0..=y {
                dots.insert(x, yy);
            }
        } else if opts.fill_above {
            for yy in y..=height {
                dots.insert(x, yy);
            }
        } else {
            dots.insert(x, y);
        }
    }
    dots
}

#[cfg(test)]
mod tests {
    use super::*;

    const BELOW: SampleOptions = SampleOptions {
        fill_below: true,
        fill_above: false,
    };
    const ABOVE: SampleOptions = SampleOptions {
        fill_below: false,
        fill_above: true,
    };

    #[test]
    fn point_samples_mark_one_dot_per_column() {
        let dots = sample_curve(8, 8, |x| f64::from(x) / 2.0, SampleOptions::default());
        assert_eq!(dots.len(), 8);
        assert!(dots.contains(0, 0));
        assert!(dots.contains(3, 2)); // 1.5 rounds away from zero
        assert!(dots.contains(7, 4));
    }

    #[test]
    fn fill_below_reaches_the_baseline() {
        let dots = sample_curve(8, 8, f64::from, BELOW);
        for x in 0..8 {
            for y in 0..=8 {
                assert_eq!(dots.contains(x, y), y <= x, "({x}, {y})");
            }
        }
    }

    #[test]
    fn fill_above_reaches_the_top_inclusive() {
        let dots = sample_curve(4, 8, |_| 6.0, ABOVE);
        for x in 0..4 {
            for y in 0..=8 {
                assert_eq!(dots.contains(x, y), (6..=8).contains(&y), "({x}, {y})");
            }
        }
    }

    #[test]
    fn fill_below_wins_when_both_flags_are_set() {
        let both = SampleOptions {
            fill_below: true,
            fill_above: true,
        };
        assert_eq!(sample_curve(4, 8, |_| 3.0, both), sample_curve(4, 8, |_| 3.0, BELOW));
    }

    #[test]
    fn out_of_range_columns_are_skipped_entirely() {
        let dots = sample_curve(4, 8, |x| if x == 0 { -1.0 } else { 9.0 }, BELOW);
        assert!(dots.is_empty());
    }

    #[test]
    fn non_finite_samples_are_skipped() {
        let dots = sample_curve(3, 8, |x| match x {
            0 => f64::NAN,
            1 => f64::INFINITY,
            _ => 2.0,
        }, SampleOptions::default());
        assert_eq!(dots.len(), 1);
        assert!(dots.contains(2, 2));
    }
}
