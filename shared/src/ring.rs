//! Radial placement of the landing screen's category links.
//!
//! Items are spread evenly around a circle, index 0 at twelve o'clock and the
//! rest following clockwise (screen coordinates, y grows downward).

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

/// Ring radius on the landing screen, in pixels
pub const RING_RADIUS: f64 = 150.0;

/// Center of the 22rem ring container (352px / 2)
pub const RING_CENTER: RingPoint = RingPoint { x: 176.0, y: 176.0 };

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingPoint {
    pub x: f64,
    pub y: f64,
}

/// A landing screen category link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub label: &'static str,
    pub slug: &'static str,
}

pub const CATEGORIES: [Category; 6] = [
    Category { label: "NEWS", slug: "news" },
    Category { label: "MOVIES", slug: "movie" },
    Category { label: "BILLBOARD", slug: "billboard" },
    Category { label: "FASHION", slug: "fashion" },
    Category { label: "ASTRONOMY", slug: "astronomy" },
    Category { label: "DRAMA", slug: "drama" },
];

/// A category placed on the ring
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRingItem {
    pub label: String,
    pub slug: String,
    pub angle_index: usize,
    pub position: RingPoint,
}

impl CategoryRingItem {
    pub fn href(&self) -> String {
        format!("/{}", self.slug)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub radius: f64,
    pub center: RingPoint,
}

impl Default for RingLayout {
    fn default() -> Self {
        Self {
            radius: RING_RADIUS,
            center: RING_CENTER,
        }
    }
}

impl RingLayout {
    pub fn new(radius: f64, center: RingPoint) -> Self {
        Self { radius, center }
    }

    /// Angle in radians of item `index` out of `count`
    pub fn angle(index: usize, count: usize) -> f64 {
        (index as f64 / count as f64) * TAU - FRAC_PI_2
    }

    pub fn position(&self, index: usize, count: usize) -> RingPoint {
        let angle = Self::angle(index, count);
        RingPoint {
            x: self.center.x + self.radius * angle.cos(),
            y: self.center.y + self.radius * angle.sin(),
        }
    }

    /// Positions for `count` evenly spaced items
    pub fn positions(&self, count: usize) -> Vec<RingPoint> {
        (0..count).map(|index| self.position(index, count)).collect()
    }

    pub fn place(&self, categories: &[Category]) -> Vec<CategoryRingItem> {
        let count = categories.len();
        categories
            .iter()
            .enumerate()
            .map(|(index, category)| CategoryRingItem {
                label: category.label.to_string(),
                slug: category.slug.to_string(),
                angle_index: index,
                position: self.position(index, count),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_first_item_at_top() {
        let layout = RingLayout::new(150.0, RingPoint { x: 176.0, y: 176.0 });
        let positions = layout.positions(6);
        assert!(close(positions[0].x, 176.0));
        assert!(close(positions[0].y, 26.0));
    }

    #[test]
    fn test_second_item_is_clockwise() {
        let positions = RingLayout::default().positions(4);
        // Quarter turn clockwise from the top lands on the right
        assert!(close(positions[1].x, 326.0));
        assert!(close(positions[1].y, 176.0));
        assert!(close(positions[2].y, 326.0));
        assert!(close(positions[3].x, 26.0));
    }

    #[test]
    fn test_even_spacing() {
        let layout = RingLayout::default();
        let step = TAU / 6.0;
        for index in 0..6 {
            let angle = RingLayout::angle(index, 6);
            assert!(close(angle, index as f64 * step - FRAC_PI_2));

            let point = layout.position(index, 6);
            let measured = (point.y - RING_CENTER.y).atan2(point.x - RING_CENTER.x);
            let expected = angle.sin().atan2(angle.cos());
            assert!(close(measured, expected), "item {} is off its slot", index);
        }
        assert!(close(step.to_degrees(), 60.0));
    }

    #[test]
    fn test_positions_on_circle_and_distinct() {
        let positions = RingLayout::default().positions(6);
        assert_eq!(positions.len(), 6);

        for point in &positions {
            let distance = (point.x - 176.0).hypot(point.y - 176.0);
            assert!(close(distance, 150.0));
        }

        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                let gap = (positions[i].x - positions[j].x).hypot(positions[i].y - positions[j].y);
                assert!(gap > 1.0, "items {} and {} overlap", i, j);
            }
        }
    }

    #[test]
    fn test_no_items() {
        assert!(RingLayout::default().positions(0).is_empty());
        assert!(RingLayout::default().place(&[]).is_empty());
    }

    #[test]
    fn test_place_categories() {
        let items = RingLayout::default().place(&CATEGORIES);
        assert_eq!(items.len(), 6);
        assert_eq!(items[0].label, "NEWS");
        assert_eq!(items[1].slug, "movie");
        assert_eq!(items[5].angle_index, 5);
        assert!(close(items[0].position.y, 26.0));
        assert_eq!(items[2].href(), "/billboard");
    }

    #[test]
    fn test_layout_is_deterministic() {
        let layout = RingLayout::default();
        assert_eq!(layout.positions(6), layout.positions(6));
    }
}
