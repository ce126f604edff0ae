use rand::{rngs::StdRng, Rng, SeedableRng};

const SEED: u64 = 0x5eed_0f_b10b;
const COLORS: [&str; 3] = ["#1e90ff", "#cbe9ff", "#ffffff"];

/// One floating dot of the hero background.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub size: f64,
    pub left: f64,
    pub top: f64,
    pub delay: f64,
    pub duration: f64,
    pub color: &'static str,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {:.2}%; top: {:.2}%; background-color: {}; animation-delay: {:.2}s; animation-duration: {:.2}s; opacity: 0.6",
            self.left,
            self.top,
            self.color,
            self.delay,
            self.duration,
            size = self.size,
        )
    }
}

/// `count` particles from a fixed seed, so the server render and the
/// hydrated page agree.
pub fn particles(count: usize) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..count)
        .map(|i| Particle {
            size: rng.gen_range(2.0..6.0),
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            delay: rng.gen_range(0.0..5.0),
            duration: rng.gen_range(6.0..10.0),
            color: COLORS[i % COLORS.len()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        assert_eq!(particles(50), particles(50));
    }

    #[test]
    fn test_ranges() {
        for (i, p) in particles(50).iter().enumerate() {
            assert!((2.0..6.0).contains(&p.size));
            assert!((0.0..100.0).contains(&p.left));
            assert!((6.0..10.0).contains(&p.duration));
            assert_eq!(p.color, COLORS[i % 3]);
        }
    }

    #[test]
    fn test_style() {
        let p = Particle {
            size: 3.0,
            left: 10.0,
            top: 20.5,
            delay: 1.0,
            duration: 7.25,
            color: "#ffffff",
        };
        assert_eq!(
            p.style(),
            "width: 3.00px; height: 3.00px; left: 10.00%; top: 20.50%; background-color: #ffffff; animation-delay: 1.00s; animation-duration: 7.25s; opacity: 0.6"
        );
    }
}
