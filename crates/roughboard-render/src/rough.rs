//! Hand-drawn sketch generator.

use kurbo::{BezPath, Line, Point, Vec2};
use roughboard_core::config::{SerializableColor, SketchStyle};
use roughboard_core::element::Generator;

/// Large prime used to decorrelate the two strokes of a sketch.
const STROKE_SEED_STRIDE: u32 = 99991;

/// Deterministic xorshift32 jitter source.
struct Jitter(u32);

impl Jitter {
    fn new(seed: u32) -> Self {
        Self(seed.max(1))
    }

    /// Next value in [-1, 1].
    fn unit(&mut self) -> f64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        f64::from(x) / f64::from(u32::MAX) * 2.0 - 1.0
    }

    fn nudge(&mut self, point: Point, amount: f64) -> Point {
        Point::new(point.x + self.unit() * amount, point.y + self.unit() * amount)
    }
}

/// splitmix32-style finalizer.
fn mix(mut x: u32) -> u32 {
    x = x.wrapping_mul(0x9E3779B9);
    x ^= x >> 16;
    x = x.wrapping_mul(0x85EBCA6B);
    x ^= x >> 13;
    x = x.wrapping_mul(0xC2B2AE35);
    x ^= x >> 16;
    x
}

/// Seed derived from the base seed and the primitive's coordinates, so the
/// same primitive always wobbles the same way.
fn geometry_seed(base: u32, coords: [f64; 4]) -> u32 {
    coords.iter().fold(mix(base), |acc, value| {
        let bits = value.to_bits();
        mix(acc ^ (bits as u32) ^ ((bits >> 32) as u32))
    })
}

/// Abstract primitive a sketch was generated from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Line(Line),
    /// First corner plus signed width and height.
    Rectangle { origin: Point, size: Vec2 },
}

impl Primitive {
    /// Clean (un-roughened) outline.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        match *self {
            Primitive::Line(line) => {
                path.move_to(line.p0);
                path.line_to(line.p1);
            }
            Primitive::Rectangle { origin, size } => {
                path.move_to(origin);
                path.line_to(Point::new(origin.x + size.x, origin.y));
                path.line_to(origin + size);
                path.line_to(Point::new(origin.x, origin.y + size.y));
                path.close_path();
            }
        }
        path
    }

    /// Outline vertices and whether the outline closes on itself.
    fn outline(&self) -> (Vec<Point>, bool) {
        match *self {
            Primitive::Line(line) => (vec![line.p0, line.p1], false),
            Primitive::Rectangle { origin, size } => (
                vec![
                    origin,
                    Point::new(origin.x + size.x, origin.y),
                    origin + size,
                    Point::new(origin.x, origin.y + size.y),
                ],
                true,
            ),
        }
    }

    fn coords(&self) -> [f64; 4] {
        match *self {
            Primitive::Line(line) => [line.p0.x, line.p0.y, line.p1.x, line.p1.y],
            Primitive::Rectangle { origin, size } => [origin.x, origin.y, size.x, size.y],
        }
    }
}

/// Sketch-style drawable: the strokes to paint for one primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sketch {
    pub primitive: Primitive,
    /// One clean stroke, or two offset hand-drawn strokes.
    pub strokes: Vec<BezPath>,
    pub stroke_width: f64,
    pub stroke_color: SerializableColor,
}

/// Quadratic from the current point to `end`, bowed sideways off the clean
/// `from`-`to` segment in proportion to its length.
fn bowed_segment(path: &mut BezPath, jitter: &mut Jitter, from: Point, to: Point, end: Point, roughness: f64) {
    let segment = to - from;
    let len = segment.hypot();
    let normal = if len > 1e-3 {
        Vec2::new(-segment.y, segment.x) / len
    } else {
        Vec2::ZERO
    };
    let bow = jitter.unit() * roughness * roughness * len / 200.0;
    path.quad_to(from.midpoint(to) + normal * bow, end);
}

/// One hand-drawn pass over a polyline.
///
/// Every vertex is nudged by up to `2 * roughness`. A closed outline ends on
/// its own nudged start point.
fn sketch_outline(vertices: &[Point], closed: bool, roughness: f64, seed: u32) -> BezPath {
    let mut path = BezPath::new();
    let Some((&first, rest)) = vertices.split_first() else {
        return path;
    };
    let max_offset = roughness * 2.0;
    let mut jitter = Jitter::new(seed);

    let start = jitter.nudge(first, max_offset);
    path.move_to(start);

    let mut from = first;
    for &to in rest {
        let end = jitter.nudge(to, max_offset);
        bowed_segment(&mut path, &mut jitter, from, to, end, roughness);
        from = to;
    }
    if closed {
        bowed_segment(&mut path, &mut jitter, from, first, start, roughness);
    }
    path
}

/// Generator producing rough.js-like sketches from a [`SketchStyle`].
#[derive(Debug, Clone, Default)]
pub struct RoughGenerator {
    style: SketchStyle,
}

impl RoughGenerator {
    pub fn new(style: SketchStyle) -> Self {
        Self { style }
    }

    /// Build the sketch for a primitive.
    pub fn sketch(&self, primitive: Primitive) -> Sketch {
        let roughness = self.style.roughness;

        let strokes = if roughness > 0.0 {
            let seed = geometry_seed(self.style.seed, primitive.coords());
            let (vertices, closed) = primitive.outline();
            // Two strokes with different seeds give the sketchy double line
            (0..2u32)
                .map(|stroke_index| {
                    let stroke_seed = seed.wrapping_add(stroke_index.wrapping_mul(STROKE_SEED_STRIDE));
                    sketch_outline(&vertices, closed, roughness, stroke_seed)
                })
                .collect()
        } else {
            vec![primitive.to_path()]
        };

        Sketch {
            primitive,
            strokes,
            stroke_width: self.style.stroke_width,
            stroke_color: self.style.stroke_color,
        }
    }
}

impl Generator for RoughGenerator {
    type Drawable = Sketch;

    fn line(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Sketch {
        self.sketch(Primitive::Line(Line::new((x1, y1), (x2, y2))))
    }

    fn rectangle(&self, x: f64, y: f64, width: f64, height: f64) -> Sketch {
        self.sketch(Primitive::Rectangle {
            origin: Point::new(x, y),
            size: Vec2::new(width, height),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Shape as _};
    use roughboard_core::element::{ElementKind, Endpoints, create_element};

    fn rough(roughness: f64) -> RoughGenerator {
        RoughGenerator::new(SketchStyle {
            roughness,
            ..SketchStyle::default()
        })
    }

    #[test]
    fn test_clean_line_single_stroke() {
        let sketch = rough(0.0).line(0.0, 0.0, 100.0, 0.0);
        assert_eq!(sketch.strokes.len(), 1);
        assert_eq!(sketch.strokes[0], sketch.primitive.to_path());
    }

    #[test]
    fn test_rough_line_two_strokes() {
        let sketch = rough(1.0).line(0.0, 0.0, 100.0, 0.0);
        assert_eq!(sketch.strokes.len(), 2);
        assert_ne!(sketch.strokes[0], sketch.strokes[1]);
    }

    #[test]
    fn test_same_arguments_same_sketch() {
        let generator = rough(2.0);
        assert_eq!(
            generator.rectangle(10.0, 10.0, 50.0, -20.0),
            generator.rectangle(10.0, 10.0, 50.0, -20.0)
        );
        assert_ne!(
            generator.rectangle(10.0, 10.0, 50.0, -20.0),
            generator.rectangle(10.0, 10.0, 50.0, -21.0)
        );
    }

    #[test]
    fn test_wobble_stays_near_primitive() {
        let sketch = rough(1.0).rectangle(10.0, 10.0, 100.0, 50.0);
        let clean = sketch.primitive.to_path().bounding_box();
        for stroke in &sketch.strokes {
            let bounds = stroke.bounding_box();
            assert!((bounds.x0 - clean.x0).abs() < 5.0);
            assert!((bounds.y1 - clean.y1).abs() < 5.0);
        }
    }

    #[test]
    fn test_rectangle_signed_size() {
        let sketch = rough(0.0).rectangle(60.0, 60.0, -50.0, -50.0);
        let bounds = sketch.strokes[0].bounding_box();
        assert_eq!((bounds.x0, bounds.y0, bounds.x1, bounds.y1), (10.0, 10.0, 60.0, 60.0));
    }

    #[test]
    fn test_degenerate_primitives() {
        let sketch = rough(1.0).line(5.0, 5.0, 5.0, 5.0);
        assert_eq!(sketch.strokes.len(), 2);
        let sketch = rough(1.0).rectangle(5.0, 5.0, 0.0, 0.0);
        assert_eq!(sketch.strokes.len(), 2);
    }

    #[test]
    fn test_element_round_trip_with_rough_generator() {
        let generator = rough(1.0);
        let endpoints = Endpoints::new(10.0, 10.0, 60.0, 60.0);
        let first = create_element(&generator, 0, endpoints, ElementKind::Line);
        let second = create_element(&generator, 0, endpoints, ElementKind::Line);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rectangle_outline_closes_on_its_start() {
        let sketch = rough(1.5).rectangle(10.0, 10.0, 100.0, 50.0);
        for stroke in &sketch.strokes {
            let elements = stroke.elements();
            assert_eq!(elements.len(), 5);
            let PathEl::MoveTo(start) = elements[0] else {
                panic!("stroke should start with move_to");
            };
            let PathEl::QuadTo(_, end) = elements[4] else {
                panic!("edges should be quadratics");
            };
            assert_eq!(start, end);
        }
    }

    #[test]
    fn test_rough_line_is_one_bowed_segment() {
        let sketch = rough(1.0).line(0.0, 0.0, 100.0, 0.0);
        for stroke in &sketch.strokes {
            assert_eq!(stroke.elements().len(), 2);
            assert!(matches!(stroke.elements()[1], PathEl::QuadTo(..)));
        }
    }

    #[test]
    fn test_style_applied() {
        let generator = RoughGenerator::new(SketchStyle {
            stroke_width: 4.0,
            ..SketchStyle::default()
        });
        let sketch = generator.line(0.0, 0.0, 1.0, 1.0);
        assert_eq!(sketch.stroke_width, 4.0);
        assert_eq!(sketch.stroke_color, SerializableColor::black());
    }
}
