#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Track,
    Artist,
    Genre,
    Other,
}

impl Category {
    /// Maps the document's `type` string onto a category. Anything
    /// unrecognized lands in [`Category::Other`].
    pub fn from_type(kind: &str) -> Self {
        match kind {
            "track" => Self::Track,
            "artist" => Self::Artist,
            "genre" => Self::Genre,
            _ => Self::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::Artist => "artist",
            Self::Genre => "genre",
            Self::Other => "other",
        }
    }
}

#[derive(Clone, Debug)]
pub struct NodeRecord {
    pub id: String,
    pub label: String,
    pub category: Category,
}

/// An undirected link between two node indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeRecord {
    pub source: usize,
    pub target: usize,
    pub relation: String,
}

#[derive(Clone, Debug, Default)]
pub struct PlaylistGraph {
    pub nodes: Vec<NodeRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl PlaylistGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_pairs(&self) -> Vec<(usize, usize)> {
        self.edges
            .iter()
            .map(|edge| (edge.source, edge.target))
            .collect()
    }

    /// Number of edge endpoints at `index` and the distinct relations involved.
    pub fn links_of(&self, index: usize) -> (usize, Vec<&str>) {
        let mut degree = 0usize;
        let mut relations = Vec::new();
        for edge in &self.edges {
            if edge.source != index && edge.target != index {
                continue;
            }
            degree += 1;
            if !edge.relation.is_empty() {
                relations.push(edge.relation.as_str());
            }
        }
        relations.sort_unstable();
        relations.dedup();
        (degree, relations)
    }

    pub fn count_by_category(&self, category: Category) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.category == category)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_types_map_to_categories() {
        assert_eq!(Category::from_type("track"), Category::Track);
        assert_eq!(Category::from_type("artist"), Category::Artist);
        assert_eq!(Category::from_type("genre"), Category::Genre);
    }

    #[test]
    fn unknown_types_fall_back_to_other() {
        assert_eq!(Category::from_type("podcast"), Category::Other);
        assert_eq!(Category::from_type(""), Category::Other);
        assert_eq!(Category::from_type("Track"), Category::Other);
    }
}
