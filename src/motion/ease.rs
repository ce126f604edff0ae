use std::f64::consts::PI;
use std::str::FromStr;

use super::MotionError;

/// Easing curves addressed by the names the section specs use
/// (`"expo.out"`, `"power2.out"`, `"elastic.out(1, 0.5)"`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    /// `powerN.out`; power1 is quadratic, power2 cubic and so on.
    PowerOut(u8),
    PowerInOut(u8),
    ExpoOut,
    SineOut,
    BackOut(f64),
    ElasticOut { amplitude: f64, period: f64 },
}

impl Ease {
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match *self {
            Ease::Linear => t,
            Ease::PowerOut(n) => 1.0 - (1.0 - t).powi(n as i32 + 1),
            Ease::PowerInOut(n) => {
                let exp = n as i32 + 1;
                if t < 0.5 {
                    (2.0 * t).powi(exp) / 2.0
                } else {
                    1.0 - (2.0 * (1.0 - t)).powi(exp) / 2.0
                }
            }
            Ease::ExpoOut => 1.0 - 2f64.powf(-10.0 * t),
            Ease::SineOut => (t * PI / 2.0).sin(),
            Ease::BackOut(overshoot) => {
                let u = t - 1.0;
                u * u * ((overshoot + 1.0) * u + overshoot) + 1.0
            }
            Ease::ElasticOut { amplitude, period } => {
                let amplitude = amplitude.max(1.0);
                let shift = period / (2.0 * PI) * (1.0 / amplitude).asin();
                amplitude * 2f64.powf(-10.0 * t) * ((t - shift) * 2.0 * PI / period).sin() + 1.0
            }
        }
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::PowerOut(1)
    }
}

fn parse_args(s: &str, args: &str) -> Result<Vec<f64>, MotionError> {
    args.split(',')
        .map(|a| a.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| MotionError::UnknownEase(s.to_string()))
}

impl FromStr for Ease {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, args) = match s.split_once('(') {
            Some((name, rest)) => {
                let Some(args) = rest.strip_suffix(')') else {
                    return Err(MotionError::UnknownEase(s.to_string()));
                };
                (name.trim(), Some(parse_args(s, args)?))
            }
            None => (s.trim(), None),
        };
        let args = args.unwrap_or_default();

        let ease = match name {
            "none" | "linear" => Ease::Linear,
            "expo.out" => Ease::ExpoOut,
            "sine.out" => Ease::SineOut,
            "back.out" => Ease::BackOut(args.first().copied().unwrap_or(1.70158)),
            "elastic.out" => Ease::ElasticOut {
                amplitude: args.first().copied().unwrap_or(1.0),
                period: args.get(1).copied().unwrap_or(0.3),
            },
            x => {
                let Some(rest) = x.strip_prefix("power") else {
                    return Err(MotionError::UnknownEase(s.to_string()));
                };
                let (level, kind) = rest
                    .split_once('.')
                    .ok_or_else(|| MotionError::UnknownEase(s.to_string()))?;
                let level = level
                    .parse::<u8>()
                    .ok()
                    .filter(|l| (1..=4).contains(l))
                    .ok_or_else(|| MotionError::UnknownEase(s.to_string()))?;
                match kind {
                    "out" => Ease::PowerOut(level),
                    "inOut" => Ease::PowerInOut(level),
                    _ => return Err(MotionError::UnknownEase(s.to_string())),
                }
            }
        };
        Ok(ease)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [&str; 7] = [
        "linear",
        "power2.out",
        "power3.inOut",
        "expo.out",
        "sine.out",
        "back.out(1.7)",
        "elastic.out(1, 0.5)",
    ];

    #[test]
    fn test_parse_names() {
        assert_eq!("expo.out".parse::<Ease>().unwrap(), Ease::ExpoOut);
        assert_eq!("power2.out".parse::<Ease>().unwrap(), Ease::PowerOut(2));
        assert_eq!(
            "elastic.out(1, 0.5)".parse::<Ease>().unwrap(),
            Ease::ElasticOut {
                amplitude: 1.0,
                period: 0.5
            }
        );
        assert!("bounce.out".parse::<Ease>().is_err());
        assert!("power9.out".parse::<Ease>().is_err());
        assert!("elastic.out(1, x)".parse::<Ease>().is_err());
        assert!("elastic.out(1".parse::<Ease>().is_err());
    }

    #[test]
    fn test_endpoints() {
        for name in ALL {
            let ease: Ease = name.parse().unwrap();
            assert_eq!(ease.apply(0.0), 0.0, "{name} at 0");
            assert_eq!(ease.apply(1.0), 1.0, "{name} at 1");
            // out-of-range input is clamped
            assert_eq!(ease.apply(-1.0), 0.0, "{name} below 0");
            assert_eq!(ease.apply(2.0), 1.0, "{name} above 1");
        }
    }

    #[test]
    fn test_out_curves_lead_linear() {
        let expo: Ease = "expo.out".parse().unwrap();
        let power: Ease = "power2.out".parse().unwrap();
        assert!(expo.apply(0.25) > 0.25);
        assert!(power.apply(0.25) > 0.25);
        assert!((power.apply(0.5) - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_elastic_overshoots() {
        let elastic: Ease = "elastic.out(1, 0.5)".parse().unwrap();
        let peak = (1..100)
            .map(|i| elastic.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }
}
