//! Hit-testing and coordinate normalization.

use crate::element::{Element, ElementKind, Endpoints};
use kurbo::Point;

/// Slack allowed by the line hit test, in canvas units.
pub const LINE_HIT_TOLERANCE: f64 = 1.0;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Check whether `(x, y)` hits an element.
///
/// Rectangles hit anywhere inside their bounding box, border included.
/// Lines hit when the detour through the point is shorter than
/// [`LINE_HIT_TOLERANCE`], which makes the test independent of endpoint order.
pub fn is_within_element<D>(x: f64, y: f64, element: &Element<D>) -> bool {
    match element.kind {
        ElementKind::Rectangle => {
            let min_x = element.x1.min(element.x2);
            let max_x = element.x1.max(element.x2);
            let min_y = element.y1.min(element.y2);
            let max_y = element.y1.max(element.y2);
            x >= min_x && x <= max_x && y >= min_y && y <= max_y
        }
        ElementKind::Line => {
            let a = element.start();
            let b = element.end();
            let c = Point::new(x, y);
            let offset = distance(a, b) - (distance(a, c) + distance(b, c));
            offset.abs() < LINE_HIT_TOLERANCE
        }
    }
}

/// First element in store order that contains the point.
///
/// Store order is creation order, so overlapping shapes resolve to the
/// earliest drawn one.
pub fn element_at_position<D>(x: f64, y: f64, elements: &[Element<D>]) -> Option<&Element<D>> {
    elements.iter().find(|element| is_within_element(x, y, element))
}

/// Canonical endpoint order for an element, applied once a gesture ends.
///
/// Rectangles become top-left/bottom-right. Lines start at the
/// lexicographically smaller point (x first, then y).
pub fn adjust_element_coordinates<D>(element: &Element<D>) -> Endpoints {
    normalize(element.kind, element.endpoints())
}

/// [`adjust_element_coordinates`] on bare endpoints.
pub fn normalize(kind: ElementKind, endpoints: Endpoints) -> Endpoints {
    let Endpoints { x1, y1, x2, y2 } = endpoints;
    match kind {
        ElementKind::Rectangle => Endpoints::new(x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2)),
        ElementKind::Line => {
            if x1 < x2 || (x1 == x2 && y1 < y2) {
                endpoints
            } else {
                Endpoints::new(x2, y2, x1, y1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::create_element;
    use crate::element::tests::PrimitiveGenerator;

    fn element(kind: ElementKind, x1: f64, y1: f64, x2: f64, y2: f64) -> Element<crate::element::tests::Primitive> {
        create_element(&PrimitiveGenerator, 0, Endpoints::new(x1, y1, x2, y2), kind)
    }

    #[test]
    fn test_distance() {
        assert!((distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)) - 5.0).abs() < f64::EPSILON);
        assert_eq!(distance(Point::new(2.0, 2.0), Point::new(2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_rectangle_hit_any_corner_order() {
        let orders = [
            (10.0, 10.0, 60.0, 60.0),
            (60.0, 60.0, 10.0, 10.0),
            (60.0, 10.0, 10.0, 60.0),
            (10.0, 60.0, 60.0, 10.0),
        ];
        for (x1, y1, x2, y2) in orders {
            let rect = element(ElementKind::Rectangle, x1, y1, x2, y2);
            assert!(is_within_element(30.0, 30.0, &rect));
            assert!(is_within_element(10.0, 10.0, &rect));
            assert!(is_within_element(60.0, 35.0, &rect));
            assert!(!is_within_element(9.9, 30.0, &rect));
            assert!(!is_within_element(30.0, 60.1, &rect));
            assert!(!is_within_element(500.0, 500.0, &rect));
        }
    }

    #[test]
    fn test_points_on_line_hit() {
        let line = element(ElementKind::Line, 10.0, 20.0, 110.0, 70.0);
        for step in 0..=20 {
            let t = step as f64 / 20.0;
            let x = 10.0 + t * 100.0;
            let y = 20.0 + t * 50.0;
            assert!(is_within_element(x, y, &line), "t = {t}");
        }
    }

    #[test]
    fn test_perpendicular_offset_misses() {
        // Horizontal segment: perpendicular is the y axis.
        let line = element(ElementKind::Line, 0.0, 0.0, 100.0, 0.0);
        assert!(!is_within_element(50.0, 10.0, &line));
        assert!(!is_within_element(50.0, -10.0, &line));
        assert!(!is_within_element(150.0, 0.0, &line));
        assert!(is_within_element(50.0, 0.0, &line));
    }

    #[test]
    fn test_line_hit_is_order_independent() {
        let forward = element(ElementKind::Line, 0.0, 0.0, 40.0, 30.0);
        let backward = element(ElementKind::Line, 40.0, 30.0, 0.0, 0.0);
        for (x, y) in [(20.0, 15.0), (20.0, 25.0), (0.0, 0.0)] {
            assert_eq!(is_within_element(x, y, &forward), is_within_element(x, y, &backward));
        }
    }

    #[test]
    fn test_element_at_position_first_match_wins() {
        let elements = vec![
            create_element(&PrimitiveGenerator, 0, Endpoints::new(0.0, 0.0, 100.0, 100.0), ElementKind::Rectangle),
            create_element(&PrimitiveGenerator, 1, Endpoints::new(20.0, 20.0, 80.0, 80.0), ElementKind::Rectangle),
        ];
        assert_eq!(element_at_position(50.0, 50.0, &elements).map(|e| e.id), Some(0));
        assert!(element_at_position(500.0, 500.0, &elements).is_none());
    }

    #[test]
    fn test_adjust_rectangle() {
        let rect = element(ElementKind::Rectangle, 60.0, 10.0, 10.0, 60.0);
        assert_eq!(adjust_element_coordinates(&rect), Endpoints::new(10.0, 10.0, 60.0, 60.0));
    }

    #[test]
    fn test_adjust_line() {
        let line = element(ElementKind::Line, 60.0, 60.0, 10.0, 10.0);
        assert_eq!(adjust_element_coordinates(&line), Endpoints::new(10.0, 10.0, 60.0, 60.0));

        // Vertical line: tie on x falls back to y.
        let line = element(ElementKind::Line, 5.0, 50.0, 5.0, 10.0);
        assert_eq!(adjust_element_coordinates(&line), Endpoints::new(5.0, 10.0, 5.0, 50.0));

        // Already ordered, untouched.
        let line = element(ElementKind::Line, 0.0, 90.0, 10.0, 10.0);
        assert_eq!(adjust_element_coordinates(&line), Endpoints::new(0.0, 90.0, 10.0, 10.0));
    }

    #[test]
    fn test_adjust_is_idempotent() {
        let samples = [
            (60.0, 60.0, 10.0, 10.0),
            (10.0, 60.0, 60.0, 10.0),
            (5.0, 5.0, 5.0, 5.0),
            (5.0, 50.0, 5.0, 10.0),
            (-3.0, 7.0, 12.0, -40.0),
        ];
        for kind in [ElementKind::Line, ElementKind::Rectangle] {
            for (x1, y1, x2, y2) in samples {
                let once = normalize(kind, Endpoints::new(x1, y1, x2, y2));
                assert_eq!(normalize(kind, once), once);
            }
        }
    }
}
