use std::collections::BTreeMap;
use std::sync::Arc;

use algoviz_frames::{
    Color, Edge, Frame, Frontier, Graph, GraphEvent, GraphFrame, Node, NodeShape, SearchEvent,
    SearchFrame, SnapshotNode, TreeEvent, TreeFrame, TreeSnapshot,
};
use serde_json::json;

#[test]
fn search_frame_uses_camel_case_fields() {
    let frame = SearchFrame::new(&[1.0, 2.0], Some(1), None, SearchEvent::Compare, "cmp");
    let value = serde_json::to_value(&frame).unwrap();
    assert_eq!(
        value,
        json!({
            "array": [1.0, 2.0],
            "currentIndex": 1,
            "foundIndex": null,
            "description": "cmp",
            "event": "compare"
        })
    );
}

#[test]
fn tree_frame_omits_absent_optionals_and_tags_shapes() {
    let tree = TreeSnapshot {
        root: Some(0),
        nodes: vec![SnapshotNode {
            key: 7,
            parent: None,
            left: None,
            right: None,
            shape: NodeShape::RedBlack { color: Color::Black },
        }],
    };
    let frame = TreeFrame::new(tree, TreeEvent::Insert, "root").changed([7]);
    let value = serde_json::to_value(&frame).unwrap();
    assert!(value.get("rotationEdge").is_none());
    assert!(value.get("balanceFactor").is_none());
    assert_eq!(value["changedNodes"], json!([7]));
    assert_eq!(
        value["tree"]["nodes"][0]["shape"],
        json!({"kind": "redBlack", "color": "black"})
    );
}

#[test]
fn tree_events_serialize_in_camel_case() {
    assert_eq!(serde_json::to_value(TreeEvent::SearchStart).unwrap(), json!("searchStart"));
    assert_eq!(serde_json::to_value(TreeEvent::InsertStart).unwrap(), json!("insertStart"));
}

#[test]
fn graph_frame_survives_json_including_integer_keyed_maps() {
    let graph = Arc::new(Graph::new(
        vec![Node::new(0, 10.0, 10.0), Node::new(1, 20.0, 10.0)],
        vec![Edge { source: 0, target: 1, weight: 3 }],
    ));
    let mut distances = BTreeMap::new();
    distances.insert(0, Some(0));
    distances.insert(1, None);
    let mut previous = BTreeMap::new();
    previous.insert(0, None);
    previous.insert(1, None);
    let frame = GraphFrame {
        graph,
        current_node: Some(0),
        visited_nodes: vec![0],
        frontier: Frontier::Distances { distances, previous },
        path: vec![0],
        description: "Visiting node 0 with current distance 0".into(),
        event: GraphEvent::Visit,
    };

    let text = serde_json::to_string(&Frame::Graph(frame.clone())).unwrap();
    let back: Frame = serde_json::from_str(&text).unwrap();
    assert_eq!(back, Frame::Graph(frame));
    assert_eq!(back.description(), "Visiting node 0 with current distance 0");
}
