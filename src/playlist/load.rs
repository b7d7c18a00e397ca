use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use super::error::LoadError;
use super::graph::{Category, EdgeRecord, NodeRecord, PlaylistGraph};
use super::parse::{RawDocument, parse_document};

/// What to do with an edge whose endpoint is not in the node set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DanglingEdgePolicy {
    #[default]
    Reject,
    Skip,
}

pub fn load_graph(path: &Path, policy: DanglingEdgePolicy) -> Result<PlaylistGraph, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = graph_from_str(&raw, policy)?;
    info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph document"
    );
    Ok(graph)
}

pub fn graph_from_str(raw: &str, policy: DanglingEdgePolicy) -> Result<PlaylistGraph, LoadError> {
    let document = parse_document(raw)?;
    build_graph(document, policy)
}

fn build_graph(document: RawDocument, policy: DanglingEdgePolicy) -> Result<PlaylistGraph, LoadError> {
    let mut nodes = Vec::with_capacity(document.nodes.len());
    let mut index_by_id = HashMap::with_capacity(document.nodes.len());

    for raw_node in document.nodes {
        if raw_node.id.is_empty() {
            return Err(LoadError::malformed("node with an empty id"));
        }
        if index_by_id.contains_key(&raw_node.id) {
            return Err(LoadError::malformed(format!(
                "duplicate node id {:?}",
                raw_node.id
            )));
        }

        index_by_id.insert(raw_node.id.clone(), nodes.len());
        nodes.push(NodeRecord {
            id: raw_node.id,
            label: raw_node.label,
            category: Category::from_type(&raw_node.kind),
        });
    }

    let mut edges = Vec::with_capacity(document.edges.len());
    let mut skipped = 0usize;
    for raw_edge in document.edges {
        let endpoints = (
            index_by_id.get(&raw_edge.source).copied(),
            index_by_id.get(&raw_edge.target).copied(),
        );
        let (Some(source), Some(target)) = endpoints else {
            let missing = if endpoints.0.is_none() {
                &raw_edge.source
            } else {
                &raw_edge.target
            };

            match policy {
                DanglingEdgePolicy::Reject => {
                    return Err(LoadError::malformed(format!(
                        "edge {:?} -> {:?} references unknown node {:?}",
                        raw_edge.source, raw_edge.target, missing
                    )));
                }
                DanglingEdgePolicy::Skip => {
                    warn!(
                        source = %raw_edge.source,
                        target = %raw_edge.target,
                        missing = %missing,
                        "skipping edge with unknown endpoint"
                    );
                    skipped += 1;
                    continue;
                }
            }
        };

        edges.push(EdgeRecord {
            source,
            target,
            relation: raw_edge.relation,
        });
    }

    if skipped > 0 {
        warn!(skipped, "dropped edges referencing unknown nodes");
    }

    Ok(PlaylistGraph { nodes, edges })
}
