// chat-panel — A chat panel component with a terminal host
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Speech-bubble outline.
//!
//! The outline is described for a left bubble: a small tail curling out of
//! the top left corner, a body starting at `TAIL_WIDTH`, rounded corners of
//! `CORNER_RADIUS`. Right bubbles are the horizontal mirror image.

use super::message::Side;

pub const TAIL_WIDTH: f64 = 5.0;
pub const CORNER_RADIUS: f64 = 10.0;
pub const MIN_BUBBLE_SIZE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bezier: two control points, then the end point.
    CurveTo(Point, Point, Point),
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleGeometry {
    side: Side,
    width: f64,
    height: f64,
}

impl BubbleGeometry {
    /// Sizes below [`MIN_BUBBLE_SIZE`] are raised to it.
    pub fn new(side: Side, width: f64, height: f64) -> Self {
        Self { side, width: width.max(MIN_BUBBLE_SIZE), height: height.max(MIN_BUBBLE_SIZE) }
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn outline(&self) -> Vec<PathSegment> {
        let (w, h) = (self.width, self.height);
        let p = Point::new;
        let left = [
            PathSegment::MoveTo(p(5.0, 10.0)),
            PathSegment::CurveTo(p(5.0, 10.0), p(7.0, 5.0), p(0.0, 0.0)),
            PathSegment::CurveTo(p(0.0, 0.0), p(12.0, 0.0), p(12.0, 5.0)),
            PathSegment::CurveTo(p(12.0, 5.0), p(12.0, 0.0), p(20.0, 0.0)),
            PathSegment::LineTo(p(w - 10.0, 0.0)),
            PathSegment::CurveTo(p(w - 10.0, 0.0), p(w, 0.0), p(w, 10.0)),
            PathSegment::LineTo(p(w, h - 10.0)),
            PathSegment::CurveTo(p(w, h - 10.0), p(w, h), p(w - 10.0, h)),
            PathSegment::LineTo(p(15.0, h)),
            PathSegment::CurveTo(p(15.0, h), p(5.0, h), p(5.0, h - 10.0)),
            PathSegment::LineTo(p(5.0, 15.0)),
            PathSegment::Close,
        ];
        match self.side {
            Side::Left => left.to_vec(),
            Side::Right => left.iter().map(|seg| self.mirror(*seg)).collect(),
        }
    }

    /// Where the tail points.
    #[must_use]
    pub fn tail_tip(&self) -> Point {
        match self.side {
            Side::Left => Point::new(0.0, 0.0),
            Side::Right => Point::new(self.width, 0.0),
        }
    }

    /// Horizontal extent of the rounded body, excluding the tail.
    #[must_use]
    pub fn body_span(&self) -> (f64, f64) {
        match self.side {
            Side::Left => (TAIL_WIDTH, self.width),
            Side::Right => (0.0, self.width - TAIL_WIDTH),
        }
    }

    /// Outline as a polyline, each curve split into `steps` segments.
    #[must_use]
    pub fn flatten(&self, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        let mut points: Vec<Point> = Vec::new();
        let mut first = None;
        for seg in self.outline() {
            match seg {
                PathSegment::MoveTo(pt) => {
                    first = Some(pt);
                    points.push(pt);
                }
                PathSegment::LineTo(pt) => points.push(pt),
                PathSegment::CurveTo(c1, c2, end) => {
                    let start = points.last().copied().unwrap_or(c1);
                    #[allow(clippy::cast_precision_loss)]
                    for i in 1..=steps {
                        points.push(cubic(start, c1, c2, end, i as f64 / steps as f64));
                    }
                }
                PathSegment::Close => {
                    if let Some(pt) = first {
                        points.push(pt);
                    }
                }
            }
        }
        points
    }

    fn mirror(&self, seg: PathSegment) -> PathSegment {
        let m = |pt: Point| Point::new(self.width - pt.x, pt.y);
        match seg {
            PathSegment::MoveTo(pt) => PathSegment::MoveTo(m(pt)),
            PathSegment::LineTo(pt) => PathSegment::LineTo(m(pt)),
            PathSegment::CurveTo(a, b, c) => PathSegment::CurveTo(m(a), m(b), m(c)),
            PathSegment::Close => PathSegment::Close,
        }
    }
}

fn cubic(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}
