//! Flood fills, multi-source BFS and reachability over grids and graphs.

use std::collections::VecDeque;

use crate::grid::Grid;
use crate::traits::DynTemplate;

mod connected_components;
mod distance_field;
mod element_spelling;
mod elevator;
mod flag_recolouring;
mod laboratory;
mod lonely_freshman;
mod picture;
mod prerequisites;
mod region_areas;
mod safe_zones;

pub use connected_components::ConnectedComponents;
pub use distance_field::DistanceField;
pub use element_spelling::ElementSpelling;
pub use elevator::Elevator;
pub use flag_recolouring::FlagRecolouring;
pub use laboratory::Laboratory;
pub use lonely_freshman::LonelyFreshman;
pub use picture::Picture;
pub use prerequisites::Prerequisites;
pub use region_areas::RegionAreas;
pub use safe_zones::SafeZones;

/// Mark the 4-connected region around `start` whose cells satisfy `inside`,
/// returning its size. Cells already marked in `seen` are never entered.
pub(crate) fn flood<T>(
    grid: &Grid<T>,
    start: (usize, usize),
    seen: &mut Grid<bool>,
    mut inside: impl FnMut((usize, usize), (usize, usize)) -> bool,
) -> usize {
    seen[start] = true;
    let mut queue = VecDeque::from([start]);
    let mut size = 0;
    while let Some(p) = queue.pop_front() {
        size += 1;
        for q in grid.neighbours4(p.0, p.1) {
            if !seen[q] && inside(p, q) {
                seen[q] = true;
                queue.push_back(q);
            }
        }
    }
    size
}

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![
        Box::new(DistanceField),
        Box::new(ConnectedComponents),
        Box::new(FlagRecolouring),
        Box::new(Laboratory),
        Box::new(Picture),
        Box::new(LonelyFreshman),
        Box::new(Prerequisites),
        Box::new(SafeZones),
        Box::new(RegionAreas),
        Box::new(ElementSpelling),
        Box::new(Elevator),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flood_respects_predicate_and_seen() {
        let g = Grid::from_rows(vec![vec![1, 1, 0], vec![0, 1, 1]]).unwrap();
        let mut seen = Grid::new(2, 3, false);
        let size = flood(&g, (0, 0), &mut seen, |_, q| g[q] == 1);
        assert_eq!(size, 4);
        assert!(!seen[(0, 2)]);
        assert_eq!(flood(&g, (0, 2), &mut seen, |_, q| g[q] == 0), 1);
    }
}
