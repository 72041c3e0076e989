//! Formes d'onde de démonstration.
//!
//! Caller-side curve generation lives here, outside the rendering core:
//! each generator returns a closure `x → y` in dot space, suitable for
//! `DotMatrixDisplay::set_dots_by_callback`.

use std::f64::consts::TAU;

/// Une période de sinus sur la largeur, centrée verticalement.
#[must_use]
pub fn sine(width: u32, height: u32) -> Box<dyn Fn(u32) -> f64> {
    let w = f64::from(width.max(1));
    let mid = f64::from(height.saturating_sub(1)) / 2.0;
    Box::new(move |x| mid + mid * (f64::from(x) / w * TAU).sin())
}

/// Rampe linéaire du coin bas-gauche au bord haut-droit.
#[must_use]
pub fn ramp(width: u32, height: u32) -> Box<dyn Fn(u32) -> f64> {
    let w = f64::from(width.max(1));
    let h = f64::from(height.saturating_sub(1));
    Box::new(move |x| f64::from(x) / w * h)
}

/// Créneau : alterne bas/haut toutes les huit colonnes.
#[must_use]
pub fn pulse(_width: u32, height: u32) -> Box<dyn Fn(u32) -> f64> {
    let high = f64::from(height.saturating_sub(1));
    Box::new(move |x| if (x / 8) % 2 == 0 { 0.0 } else { high })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_stay_inside_dot_space() {
        for wave_fn in [sine(64, 32), ramp(64, 32), pulse(64, 32)] {
            for x in 0..64 {
                let y = wave_fn(x);
                assert!((0.0..=31.0).contains(&y), "y = {y} at x = {x}");
            }
        }
    }

    #[test]
    fn ramp_hits_both_corners() {
        let f = ramp(8, 8);
        assert_eq!(f(0).round(), 0.0);
        assert_eq!(f(7).round(), 6.0);
    }
}
