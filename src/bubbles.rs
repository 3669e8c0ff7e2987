//! The drifting golden-bubble field behind the hero section. All movement
//! is plain math over a fixed pool; randomness comes in through a caller
//! supplied source so the recycle behavior stays testable off-browser.

pub const BUBBLE_COUNT: usize = 30;

/// Chance per bubble per frame of painting a tiny white glint.
pub const GLINT_CHANCE: f64 = 0.02;

/// `rgba(...)` prefixes awaiting an alpha value and closing paren.
pub const PALETTE: [&str; 4] = [
    "rgba(212, 175, 55, ",
    "rgba(244, 228, 188, ",
    "rgba(184, 134, 11, ",
    "rgba(201, 176, 55, ",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed_y: f64,
    pub speed_x: f64,
    pub opacity: f64,
    pub color: &'static str,
}

impl Bubble {
    pub fn spawn(width: f64, height: f64, rand: &mut impl FnMut() -> f64) -> Self {
        Bubble {
            x: rand() * width,
            y: rand() * height,
            size: rand() * 25.0 + 5.0,
            speed_y: rand() * 0.8 + 0.3,
            speed_x: (rand() - 0.5) * 0.4,
            opacity: rand() * 0.4 + 0.2,
            color: PALETTE[((rand() * PALETTE.len() as f64) as usize).min(PALETTE.len() - 1)],
        }
    }

    /// One frame of movement: rise, drift, wobble keyed to the new height.
    /// A bubble fully above the top edge is recycled to just below the
    /// bottom edge at a fresh horizontal position; everything else about it
    /// is preserved.
    pub fn advance(&mut self, width: f64, height: f64, rand: &mut impl FnMut() -> f64) {
        self.y -= self.speed_y;
        self.x += self.speed_x;
        self.x += (self.y * 0.01).sin() * 0.3;

        if self.y < -self.size {
            self.y = height + self.size;
            self.x = rand() * width;
        }
    }
}

#[derive(Debug, Clone)]
pub struct BubbleField {
    bubbles: Vec<Bubble>,
}

impl BubbleField {
    pub fn new(width: f64, height: f64, rand: &mut impl FnMut() -> f64) -> Self {
        let bubbles = (0..BUBBLE_COUNT)
            .map(|_| Bubble::spawn(width, height, rand))
            .collect();
        BubbleField { bubbles }
    }

    pub fn advance(&mut self, width: f64, height: f64, rand: &mut impl FnMut() -> f64) {
        for bubble in &mut self.bubbles {
            bubble.advance(width, height, rand);
        }
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn test_field_holds_a_full_pool() {
        let field = BubbleField::new(800.0, 600.0, &mut fixed(0.5));
        assert_eq!(field.bubbles().len(), BUBBLE_COUNT);
    }

    #[test]
    fn test_spawn_ranges() {
        let mut rolls = [0.0, 0.999].into_iter().cycle();
        for _ in 0..64 {
            let bubble = Bubble::spawn(800.0, 600.0, &mut || rolls.next().unwrap());
            assert!((0.0..800.0).contains(&bubble.x));
            assert!((0.0..600.0).contains(&bubble.y));
            assert!((5.0..30.0).contains(&bubble.size));
            assert!((0.3..1.1).contains(&bubble.speed_y));
            assert!((-0.2..0.2).contains(&bubble.speed_x));
            assert!((0.2..0.6).contains(&bubble.opacity));
            assert!(PALETTE.contains(&bubble.color));
        }
    }

    #[test]
    fn test_rising_bubble_wobbles_but_keeps_its_attributes() {
        let mut bubble = Bubble {
            x: 100.0,
            y: 300.0,
            size: 10.0,
            speed_y: 0.5,
            speed_x: 0.1,
            opacity: 0.4,
            color: PALETTE[0],
        };
        let before = bubble.clone();
        bubble.advance(800.0, 600.0, &mut fixed(0.5));

        assert_eq!(bubble.y, 299.5);
        assert_eq!(bubble.x, 100.0 + 0.1 + (299.5f64 * 0.01).sin() * 0.3);
        assert_eq!(bubble.size, before.size);
        assert_eq!(bubble.speed_y, before.speed_y);
        assert_eq!(bubble.speed_x, before.speed_x);
        assert_eq!(bubble.opacity, before.opacity);
        assert_eq!(bubble.color, before.color);
    }

    #[test]
    fn test_bubble_above_top_edge_recycles_to_bottom() {
        let mut bubble = Bubble {
            x: 100.0,
            y: -9.8, // one step of rising puts it past -size
            size: 10.0,
            speed_y: 0.5,
            speed_x: 0.0,
            opacity: 0.4,
            color: PALETTE[2],
        };
        let before = bubble.clone();
        bubble.advance(800.0, 600.0, &mut fixed(0.25));

        assert_eq!(bubble.y, 600.0 + before.size);
        assert_eq!(bubble.x, 0.25 * 800.0);
        // recycling only repositions; nothing else is re-rolled
        assert_eq!(bubble.size, before.size);
        assert_eq!(bubble.speed_y, before.speed_y);
        assert_eq!(bubble.speed_x, before.speed_x);
        assert_eq!(bubble.opacity, before.opacity);
        assert_eq!(bubble.color, before.color);
    }

    #[test]
    fn test_no_bubble_ever_escapes_the_recycle_band() {
        let (width, height) = (400.0, 300.0);
        let mut roll = 0u32;
        let mut rand = move || {
            roll = (roll * 31 + 17) % 1000;
            f64::from(roll) / 1000.0
        };
        let mut field = BubbleField::new(width, height, &mut rand);
        for _ in 0..10_000 {
            field.advance(width, height, &mut rand);
            for bubble in field.bubbles() {
                assert!(
                    bubble.y >= -bubble.size,
                    "bubble drifted past the recycle threshold: y={} size={}",
                    bubble.y,
                    bubble.size
                );
            }
        }
    }
}
