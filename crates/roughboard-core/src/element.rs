//! Element definitions and the element factory.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Shape kinds an element can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Line,
    Rectangle,
}

/// The two defining points of an element.
///
/// For rectangles these are opposite corners, for lines the endpoints. The
/// order is whatever the gesture produced until it is normalized with
/// [`crate::geometry::adjust_element_coordinates`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Endpoints {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Endpoints {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Zero-length endpoints collapsed onto a single point.
    pub fn at(point: Point) -> Self {
        Self::from_points(point, point)
    }

    pub fn from_points(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Signed horizontal extent (`x2 - x1`).
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Signed vertical extent (`y2 - y1`).
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Same extent, with the first point moved to `origin`.
    pub fn with_origin(&self, origin: Point) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x + self.width(),
            origin.y + self.height(),
        )
    }
}

/// The rendering collaborator that turns abstract primitives into drawables.
///
/// The core never looks inside a drawable; it only stores it on the element
/// and hands it back to a [`crate::render::Surface`].
pub trait Generator {
    /// Opaque renderable artifact.
    type Drawable;

    /// Straight line between two points.
    fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Self::Drawable;

    /// Rectangle from its first corner and a signed width and height.
    fn rectangle(&self, x: f64, y: f64, width: f64, height: f64) -> Self::Drawable;
}

/// A drawn shape.
///
/// Elements are immutable values: any coordinate change builds a new element
/// through [`create_element`], so `renderable` always matches the endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = ""))]
pub struct Element<D> {
    /// Index in the element store at creation time.
    pub id: usize,
    pub kind: ElementKind,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    #[serde(skip)]
    pub renderable: D,
}

impl<D> Element<D> {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.x1, self.y1, self.x2, self.y2)
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }
}

/// Build an element, computing its renderable with `generator`.
///
/// Coordinates are not validated: equal points, zero-area rectangles and NaN
/// all produce degenerate drawables.
pub fn create_element<G>(generator: &G, id: usize, endpoints: Endpoints, kind: ElementKind) -> Element<G::Drawable>
where
    G: Generator + ?Sized,
{
    let Endpoints { x1, y1, x2, y2 } = endpoints;
    let renderable = match kind {
        ElementKind::Line => generator.line(x1, y1, x2, y2),
        ElementKind::Rectangle => generator.rectangle(x1, y1, x2 - x1, y2 - y1),
    };
    Element {
        id,
        kind,
        x1,
        y1,
        x2,
        y2,
        renderable,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Records which primitive was requested, with its exact arguments.
    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Primitive {
        Line(f64, f64, f64, f64),
        Rectangle(f64, f64, f64, f64),
    }

    pub(crate) struct PrimitiveGenerator;

    impl Generator for PrimitiveGenerator {
        type Drawable = Primitive;

        fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Primitive {
            Primitive::Line(x1, y1, x2, y2)
        }

        fn rectangle(&self, x: f64, y: f64, width: f64, height: f64) -> Primitive {
            Primitive::Rectangle(x, y, width, height)
        }
    }

    #[test]
    fn test_line_uses_line_primitive() {
        let element = create_element(
            &PrimitiveGenerator,
            3,
            Endpoints::new(1.0, 2.0, 3.0, 4.0),
            ElementKind::Line,
        );
        assert_eq!(element.id, 3);
        assert_eq!(element.kind, ElementKind::Line);
        assert_eq!(element.renderable, Primitive::Line(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_rectangle_uses_signed_size() {
        let element = create_element(
            &PrimitiveGenerator,
            0,
            Endpoints::new(60.0, 60.0, 10.0, 20.0),
            ElementKind::Rectangle,
        );
        assert_eq!(element.renderable, Primitive::Rectangle(60.0, 60.0, -50.0, -40.0));
        assert_eq!(element.endpoints(), Endpoints::new(60.0, 60.0, 10.0, 20.0));
    }

    #[test]
    fn test_degenerate_geometry_accepted() {
        let element = create_element(
            &PrimitiveGenerator,
            0,
            Endpoints::at(Point::new(5.0, 5.0)),
            ElementKind::Rectangle,
        );
        assert_eq!(element.renderable, Primitive::Rectangle(5.0, 5.0, 0.0, 0.0));

        let element = create_element(
            &PrimitiveGenerator,
            1,
            Endpoints::new(f64::NAN, 0.0, 1.0, 1.0),
            ElementKind::Line,
        );
        assert!(element.x1.is_nan());
    }

    #[test]
    fn test_recreate_with_same_arguments_is_equal() {
        let endpoints = Endpoints::new(10.0, 20.0, 30.0, 40.0);
        let first = create_element(&PrimitiveGenerator, 0, endpoints, ElementKind::Rectangle);
        let second = create_element(&PrimitiveGenerator, 0, endpoints, ElementKind::Rectangle);
        assert_eq!(first, second);
    }

    #[test]
    fn test_with_origin_keeps_extent() {
        let endpoints = Endpoints::new(10.0, 10.0, 60.0, 40.0);
        let moved = endpoints.with_origin(Point::new(20.0, 25.0));
        assert_eq!(moved, Endpoints::new(20.0, 25.0, 70.0, 55.0));
    }

    #[test]
    fn test_serialize_skips_renderable() {
        let element = create_element(
            &PrimitiveGenerator,
            0,
            Endpoints::new(10.0, 10.0, 60.0, 60.0),
            ElementKind::Line,
        );
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["kind"], "line");
        assert_eq!(json["x2"], 60.0);
        assert!(json.get("renderable").is_none());
    }
}
