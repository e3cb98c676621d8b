use std::cmp::Ordering;

use crate::shared::face_region::FaceRegion;

/// Collapses duplicate raw detections of the same face.
///
/// Detections are visited strongest first. Each unassigned detection seeds
/// a cluster that absorbs every later unassigned detection whose overlap
/// with the seed exceeds `overlap_threshold`; the cluster is emitted as the
/// average position and scale of its members with their summed score.
pub fn cluster_detections(detections: &[FaceRegion], overlap_threshold: f64) -> Vec<FaceRegion> {
    let mut sorted = detections.to_vec();
    sorted.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let mut assigned = vec![false; sorted.len()];
    let mut clusters = Vec::new();

    for i in 0..sorted.len() {
        if assigned[i] {
            continue;
        }
        let seed = &sorted[i];
        let (mut row, mut col, mut scale, mut score) = (0i64, 0i64, 0i64, 0.0);
        let mut n = 0i64;

        for j in i..sorted.len() {
            if assigned[j] {
                continue;
            }
            let other = &sorted[j];
            if j == i || seed.overlap(other) > overlap_threshold {
                assigned[j] = true;
                row += other.row as i64;
                col += other.col as i64;
                scale += other.scale as i64;
                score += other.score;
                n += 1;
            }
        }

        clusters.push(FaceRegion {
            row: (row / n) as i32,
            col: (col / n) as i32,
            scale: (scale / n) as i32,
            score,
        });
    }

    clusters
}
