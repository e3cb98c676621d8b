/// A detected face: center position plus approximate diameter.
///
/// Regions carry no identity beyond their geometry. `score` is the
/// classifier's confidence and only matters for clustering order.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceRegion {
    pub row: i32,
    pub col: i32,
    pub scale: i32,
    pub score: f64,
}

impl FaceRegion {
    pub fn new(row: i32, col: i32, scale: i32) -> Self {
        Self {
            row,
            col,
            scale,
            score: 0.0,
        }
    }

    pub fn with_score(self, score: f64) -> Self {
        Self { score, ..self }
    }

    /// Top-left `(x, y)` of the square centered on this face.
    ///
    /// Uses truncating integer division of the scale, so odd scales
    /// place the square half a pixel up and to the left.
    pub fn top_left(&self) -> (i32, i32) {
        let half = self.scale / 2;
        (self.col - half, self.row - half)
    }

    /// Intersection over union of the two square face windows.
    pub fn overlap(&self, other: &FaceRegion) -> f64 {
        let (r1, c1, s1) = (self.row as f64, self.col as f64, self.scale as f64);
        let (r2, c2, s2) = (other.row as f64, other.col as f64, other.scale as f64);

        let over_row = ((r1 + s1 / 2.0).min(r2 + s2 / 2.0) - (r1 - s1 / 2.0).max(r2 - s2 / 2.0)).max(0.0);
        let over_col = ((c1 + s1 / 2.0).min(c2 + s2 / 2.0) - (c1 - s1 / 2.0).max(c2 - s2 / 2.0)).max(0.0);

        let inter = over_row * over_col;
        if inter == 0.0 {
            return 0.0;
        }
        inter / (s1 * s1 + s2 * s2 - inter)
    }
}
