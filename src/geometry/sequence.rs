use super::point::Point;

/// How the centroid accumulator is divided.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CentroidDivisor {
    /// Total slot count, separators included. Matches the historical `out.poly` outputs.
    #[default]
    Slots,
    /// Number of real points only.
    Points,
}

/// Ordered list of points where a `None` slot separates two polygon rings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSequence {
    slots: Vec<Option<Point>>,
}

impl PointSequence {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn push_point(&mut self, point: Point) {
        self.slots.push(Some(point));
    }

    pub fn push_separator(&mut self) {
        self.slots.push(None);
    }

    /// Number of slots, separators included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.points().count()
    }

    pub fn separator_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Option<Point>> {
        self.slots.iter()
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.slots.iter().flatten()
    }

    pub fn scale(&mut self, factor: f64) {
        for p in self.slots.iter_mut().flatten() {
            *p = p.scaled(factor);
        }
    }

    /// Mean of all points across every ring.
    ///
    /// Each point contributes `p / n` to the running sum rather than dividing
    /// once at the end, so results stay bit-identical with files produced by
    /// the earlier tooling. An empty sequence yields the origin.
    pub fn centroid(&self, divisor: CentroidDivisor) -> Point {
        let n = match divisor {
            CentroidDivisor::Slots => self.len(),
            CentroidDivisor::Points => self.point_count(),
        };

        if n == 0 {
            return Point::default();
        }

        let n = n as f64;
        self.points().fold(Point::default(), |acc, p| {
            Point::new(acc.x + p.x / n, acc.y + p.y / n)
        })
    }

    /// Moves every point so the centroid lands on the origin. Returns the centroid used.
    pub fn center(&mut self, divisor: CentroidDivisor) -> Point {
        let mid = self.centroid(divisor);
        log::debug!("Centroid {:?} ({:?} divisor)", mid, divisor);

        for p in self.slots.iter_mut().flatten() {
            *p = *p - mid;
        }

        mid
    }

    /// Points grouped by ring. Empty rings (consecutive separators) are skipped.
    pub fn rings(&self) -> Vec<&[Option<Point>]> {
        self.slots
            .split(|s| s.is_none())
            .filter(|ring| !ring.is_empty())
            .collect()
    }
}

impl From<Vec<Option<Point>>> for PointSequence {
    fn from(slots: Vec<Option<Point>>) -> Self {
        Self { slots }
    }
}
