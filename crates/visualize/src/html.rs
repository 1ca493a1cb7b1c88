use serde_json::{Value, json};

use crate::cooccurrence::CooccurrenceGraph;
use crate::graph_export::{GraphData, NodeRole, NodeStyle};

const VIS_NETWORK_JS: &str = "https://unpkg.com/vis-network/standalone/umd/vis-network.min.js";

/// Interactive relation graph: directed, labelled edges, node size by degree.
pub fn render_relation_html(graph: &GraphData, style: &NodeStyle<'_>, title: &str) -> String {
    let nodes: Vec<Value> = graph
        .entities
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let role = style.role(name);
            let base = if role == NodeRole::Focus { 30 } else { 15 };
            json!({
                "id": idx,
                "label": name,
                "color": role.color(),
                "size": base + 3 * graph.degree(idx),
                "group": role,
            })
        })
        .collect();

    let edges: Vec<Value> = graph
        .edges
        .iter()
        .map(|(source, target, predicate)| {
            json!({
                "from": source,
                "to": target,
                "label": predicate,
                "arrows": "to",
            })
        })
        .collect();

    render_network(title, &nodes, &edges)
}

/// Interactive co-occurrence graph: undirected, edge width by weight.
pub fn render_cooccurrence_html(
    graph: &CooccurrenceGraph,
    style: &NodeStyle<'_>,
    title: &str,
) -> String {
    let nodes: Vec<Value> = graph
        .nodes
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            json!({
                "id": idx,
                "label": name,
                "color": style.role(name).color(),
                "size": 10 + 3 * graph.strength(idx),
            })
        })
        .collect();

    let edges: Vec<Value> = graph
        .edges
        .iter()
        .map(|(a, b, weight)| {
            json!({
                "from": a,
                "to": b,
                "value": weight,
                "title": format!("共现 {} 次", weight),
            })
        })
        .collect();

    render_network(title, &nodes, &edges)
}

fn render_network(title: &str, nodes: &[Value], edges: &[Value]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{script}"></script>
<style>
  body {{ margin: 0; font-family: sans-serif; }}
  h1 {{ font-size: 18px; margin: 8px 12px; }}
  #network {{ width: 100%; height: 750px; border-top: 1px solid #ddd; }}
</style>
</head>
<body>
<h1>{title}</h1>
<div id="network"></div>
<script>
  var nodes = new vis.DataSet({nodes});
  var edges = new vis.DataSet({edges});
  var options = {{
    physics: {{ solver: "forceAtlas2Based" }},
    edges: {{ font: {{ align: "middle" }}, smooth: {{ type: "dynamic" }} }},
    interaction: {{ hover: true }}
  }};
  new vis.Network(document.getElementById("network"), {{ nodes: nodes, edges: edges }}, options);
</script>
</body>
</html>
"#,
        title = escape_html(title),
        script = VIS_NETWORK_JS,
        nodes = script_json(nodes),
        edges = script_json(edges),
    )
}

/// JSON safe to inline inside a <script> element.
fn script_json(values: &[Value]) -> String {
    Value::Array(values.to_vec()).to_string().replace("</", "<\\/")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
