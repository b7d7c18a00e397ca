mod error;
mod graph;
mod load;
mod parse;

pub use graph::{Category, PlaylistGraph};
pub use load::{DanglingEdgePolicy, load_graph};

#[cfg(test)]
pub use load::graph_from_str;
