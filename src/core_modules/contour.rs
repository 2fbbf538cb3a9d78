// THEORY:
// The `contour` module is the engine of the pixel path's spatial layer. It
// implements classic binary connected-component analysis over a skin mask:
// every skin pixel belongs to exactly one 8-connected region, and the region
// with the largest area is taken to be the hand.
//
// Key architectural principles & algorithm steps:
// 1.  **Seeding**: The mask is scanned in raster order. Every skin pixel that
//     has not yet been claimed by a region seeds a new flood fill. Raster
//     order makes the scan deterministic, which is what makes the tie-break
//     below well-defined.
// 2.  **Flood Fill**: From each seed the fill expands over all 8 neighbors,
//     using an explicit stack rather than recursion so worst-case memory is
//     bounded by the pixel count on large frames. A visited buffer keyed by
//     flattened pixel index guarantees every pixel is processed at most once.
// 3.  **Data Aggregation**: While a region grows it accumulates its member
//     coordinates, its area in pixels, and its axis-aligned bounding box.
// 4.  **Selection**: Only the largest-area region survives extraction. Ties
//     keep the region found first, i.e. earliest in raster order. An empty
//     mask yields no region at all, which is a normal outcome, not an error.
// 5.  **Stateless Utility**: The extractor takes one frame's mask and returns
//     that frame's winning region. It has no memory of previous frames, and
//     it feeds no state back into the landmark path.

use crate::core_modules::skin_mask::SkinMask;

pub mod contour_extractor {
    use super::*;
    use tracing::trace;

    /// Axis-aligned summary of a region, in pixel coordinates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BoundingBox {
        pub x: u32,
        pub y: u32,
        pub width: u32,
        pub height: u32,
    }

    /// One 8-connected region of skin pixels.
    #[derive(Debug, Clone)]
    pub struct Contour {
        /// Every member coordinate, in the order the fill claimed them.
        pub pixels: Vec<(u32, u32)>,
        /// Member count; the selection criterion.
        pub area: usize,
        pub bounding_box: BoundingBox,
    }

    /// The main function of the spatial layer: the bounding box of the largest
    /// skin region, or `None` when the mask holds no skin pixel at all.
    pub fn extract_largest_region(mask: &SkinMask) -> Option<BoundingBox> {
        largest_contour(mask).map(|contour| contour.bounding_box)
    }

    /// Finds all regions and keeps the one with the largest area. Ties keep
    /// the earliest region in raster order.
    pub fn largest_contour(mask: &SkinMask) -> Option<Contour> {
        let width = mask.width();
        let height = mask.height();
        let mut visited = vec![false; (width * height) as usize];
        let mut best: Option<Contour> = None;
        let mut region_count = 0usize;

        for y in 0..height {
            for x in 0..width {
                if !mask.is_skin(x, y) || visited[mask.index(x, y)] {
                    continue;
                }

                let contour = fill_region(mask, &mut visited, x, y);
                region_count += 1;
                // Strict comparison keeps the first region on equal area.
                if best.as_ref().is_none_or(|b| contour.area > b.area) {
                    best = Some(contour);
                }
            }
        }

        trace!(
            regions = region_count,
            winner_area = best.as_ref().map(|b| b.area).unwrap_or(0),
            "segmentation complete"
        );
        best
    }

    /// Claims the full 8-connected region containing the seed, using an
    /// explicit stack and aggregating area and bounding box as it grows.
    fn fill_region(mask: &SkinMask, visited: &mut [bool], seed_x: u32, seed_y: u32) -> Contour {
        let width = mask.width() as i64;
        let height = mask.height() as i64;

        let mut pixels: Vec<(u32, u32)> = Vec::new();
        let mut stack: Vec<(u32, u32)> = vec![(seed_x, seed_y)];
        visited[mask.index(seed_x, seed_y)] = true;

        let mut min_x = seed_x;
        let mut min_y = seed_y;
        let mut max_x = seed_x;
        let mut max_y = seed_y;

        while let Some((x, y)) = stack.pop() {
            pixels.push((x, y));
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);

            // All 8 neighbors, diagonals included.
            for dy in -1i64..=1 {
                for dx in -1i64..=1 {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let nx = x as i64 + dx;
                    let ny = y as i64 + dy;
                    if nx < 0 || nx >= width || ny < 0 || ny >= height {
                        continue;
                    }
                    let (nx, ny) = (nx as u32, ny as u32);
                    let index = mask.index(nx, ny);
                    if !visited[index] && mask.is_skin(nx, ny) {
                        visited[index] = true;
                        stack.push((nx, ny));
                    }
                }
            }
        }

        let area = pixels.len();
        Contour {
            pixels,
            area,
            bounding_box: BoundingBox {
                x: min_x,
                y: min_y,
                width: max_x - min_x + 1,
                height: max_y - min_y + 1,
            },
        }
    }
}
