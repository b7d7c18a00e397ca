use serde::Deserialize;

use super::error::LoadError;

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawNode {
    pub(super) id: String,
    pub(super) label: String,
    #[serde(rename = "type")]
    pub(super) kind: String,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawEdge {
    pub(super) source: String,
    pub(super) target: String,
    #[serde(default)]
    pub(super) relation: String,
}

#[derive(Clone, Debug, Deserialize)]
pub(super) struct RawDocument {
    pub(super) nodes: Vec<RawNode>,
    pub(super) edges: Vec<RawEdge>,
}

pub(super) fn parse_document(raw: &str) -> Result<RawDocument, LoadError> {
    serde_json::from_str(raw).map_err(|error| LoadError::malformed(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_document_with_type_field() {
        let document = parse_document(
            r#"{
                "nodes": [{"id": "t1", "label": "Song", "type": "track"}],
                "edges": [{"source": "t1", "target": "t1", "relation": "created_by"}]
            }"#,
        )
        .expect("document should parse");

        assert_eq!(document.nodes.len(), 1);
        assert_eq!(document.nodes[0].kind, "track");
        assert_eq!(document.edges[0].relation, "created_by");
    }

    #[test]
    fn relation_is_optional() {
        let document = parse_document(
            r#"{"nodes": [], "edges": [{"source": "a", "target": "b"}]}"#,
        )
        .expect("relation should default");
        assert!(document.edges[0].relation.is_empty());
    }

    #[test]
    fn missing_node_label_is_malformed() {
        let error = parse_document(r#"{"nodes": [{"id": "a", "type": "genre"}], "edges": []}"#)
            .expect_err("label is required");
        assert!(matches!(error, LoadError::MalformedInput { .. }));
    }

    #[test]
    fn missing_edges_array_is_malformed() {
        let error = parse_document(r#"{"nodes": []}"#).expect_err("edges are required");
        assert!(error.to_string().contains("edges"), "got: {error}");
    }
}
