//! Basic graph search: visit orders, grid BFS, Dijkstra, reachability.

mod dfs_bfs;
mod maze_path;
mod min_cost;
mod virus;

pub use dfs_bfs::DfsBfs;
pub use maze_path::MazePath;
pub use min_cost::MinCost;
pub use virus::Virus;

use crate::traits::DynTemplate;

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![
        Box::new(DfsBfs),
        Box::new(MazePath),
        Box::new(MinCost),
        Box::new(Virus),
    ]
}
