use std::f64::consts::PI;

/// A 4-connected region of set mask pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Blob {
    pub area: usize,
    pub centroid: (f64, f64), // (col, row)
    pub min: (usize, usize),
    pub max: (usize, usize),
}

impl Blob {
    /// Half the larger bounding-box side.
    pub fn radius(&self) -> f64 {
        let w = self.max.0 - self.min.0 + 1;
        let h = self.max.1 - self.min.1 + 1;
        w.max(h) as f64 / 2.0
    }

    /// Area relative to the disk spanned by [`Self::radius`], capped at 1.
    pub fn circularity(&self) -> f64 {
        let r = self.radius();
        (self.area as f64 / (PI * r * r)).min(1.0)
    }
}

/// Label 4-connected blobs in a row-major `width * height` mask.
pub fn find_blobs(mask: &[bool], width: usize, height: usize) -> Vec<Blob> {
    debug_assert_eq!(mask.len(), width * height);
    let mut seen = vec![false; mask.len()];
    let mut stack = Vec::new();
    let mut out = Vec::new();

    for start in 0..mask.len() {
        if !mask[start] || seen[start] {
            continue;
        }
        seen[start] = true;
        stack.push(start);

        let mut area = 0usize;
        let (mut sx, mut sy) = (0.0f64, 0.0f64);
        let (mut min_x, mut min_y) = (usize::MAX, usize::MAX);
        let (mut max_x, mut max_y) = (0usize, 0usize);

        while let Some(idx) = stack.pop() {
            let (x, y) = (idx % width, idx / width);
            area += 1;
            sx += x as f64;
            sy += y as f64;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);

            let mut visit = |n: usize| {
                if mask[n] && !seen[n] {
                    seen[n] = true;
                    stack.push(n);
                }
            };
            if x > 0 {
                visit(idx - 1);
            }
            if x + 1 < width {
                visit(idx + 1);
            }
            if y > 0 {
                visit(idx - width);
            }
            if y + 1 < height {
                visit(idx + width);
            }
        }

        out.push(Blob {
            area,
            centroid: (sx / area as f64, sy / area as f64),
            min: (min_x, min_y),
            max: (max_x, max_y),
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from(rows: &[&str]) -> (Vec<bool>, usize, usize) {
        let w = rows[0].len();
        let data = rows
            .iter()
            .flat_map(|r| r.chars().map(|c| c == '#'))
            .collect();
        (data, w, rows.len())
    }

    #[test]
    fn separates_components() {
        let (mask, w, h) = mask_from(&[
            "##...", //
            "##..#", //
            "....#", //
        ]);
        let blobs = find_blobs(&mask, w, h);
        assert_eq!(blobs.len(), 2);
        assert_eq!(blobs[0].area, 4);
        assert_eq!(blobs[0].centroid, (0.5, 0.5));
        assert_eq!(blobs[1].area, 2);
        assert_eq!(blobs[1].min, (4, 1));
    }

    #[test]
    fn diagonal_pixels_are_not_connected() {
        let (mask, w, h) = mask_from(&[
            "#.", //
            ".#", //
        ]);
        assert_eq!(find_blobs(&mask, w, h).len(), 2);
    }

    #[test]
    fn line_is_less_circular_than_square() {
        let (line, w, h) = mask_from(&["#######"]);
        let line = find_blobs(&line, w, h)[0];
        let (sq, w, h) = mask_from(&["###", "###", "###"]);
        let square = find_blobs(&sq, w, h)[0];
        assert!(line.circularity() < 0.3);
        assert!(square.circularity() > line.circularity());
        assert_eq!(square.radius(), 1.5);
    }
}
