//! Agent text output.
//!
//! The agent runs the plugin as a command and reads stdout. Two shapes exist:
//!
//! - metric lines, `<graph>.<metric>\t<value>\t<unix-seconds>`
//! - graph metadata, a marker line followed by one JSON document, printed
//!   when the agent sets `MACKEREL_AGENT_PLUGIN_META`

use memocountlib::{GraphDefinition, MetricMap};
use serde::Serialize;
use tracing::warn;

/// Environment variable the agent sets to request graph metadata.
pub const META_ENV: &str = "MACKEREL_AGENT_PLUGIN_META";

/// First line of the metadata output.
const META_HEADER: &str = "# mackerel-agent-plugin";

/// Metadata document wrapping the graph definitions
#[derive(Debug, Serialize)]
struct PluginMeta<'a> {
    graphs: &'a GraphDefinition,
}

/// Whether the agent asked for metadata instead of values.
pub fn meta_requested() -> bool {
    std::env::var_os(META_ENV).is_some_and(|v| !v.is_empty())
}

/// Render the graph metadata.
pub fn render_meta(graphs: &GraphDefinition) -> serde_json::Result<String> {
    let json = serde_json::to_string(&PluginMeta { graphs })?;
    Ok(format!("{}\n{}\n", META_HEADER, json))
}

/// Render fetched values as metric lines.
///
/// Lines follow graph-definition order. Values are printed with six
/// decimals (`3.000000`). Metrics missing from `metrics`, and values that are
/// NaN or infinite, are skipped.
pub fn render_metrics(graphs: &GraphDefinition, metrics: &MetricMap, timestamp: i64) -> String {
    let mut output = String::new();

    for (graph_name, graph) in graphs {
        for metric in &graph.metrics {
            let Some(value) = metrics.get(&metric.name) else {
                continue;
            };
            if !value.is_finite() {
                warn!(graph = %graph_name, metric = %metric.name, "skipping non-finite value");
                continue;
            }
            output.push_str(&format!(
                "{}.{}\t{:.6}\t{}\n",
                graph_name, metric.name, value, timestamp
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use memocountlib::{MemoCountPlugin, Plugin, PluginOptions};

    fn graphs(prefix: &str) -> GraphDefinition {
        MemoCountPlugin::new(PluginOptions::new("/memo").prefix(prefix)).graph_definition()
    }

    #[test]
    fn test_render_metrics() {
        let metrics = MetricMap::from([
            ("line_count".to_string(), 42.0),
            ("file_count".to_string(), 3.0),
        ]);

        let output = render_metrics(&graphs("Memo"), &metrics, 1_700_000_000);

        assert_eq!(
            output,
            "memo_count.file_count\t3.000000\t1700000000\n\
             memo_count.line_count\t42.000000\t1700000000\n"
        );
    }

    #[test]
    fn test_render_metrics_skips_missing_values() {
        let metrics = MetricMap::from([("line_count".to_string(), 0.0)]);

        let output = render_metrics(&graphs("Memo"), &metrics, 1);

        assert_eq!(output, "memo_count.line_count\t0.000000\t1\n");
    }

    #[test]
    fn test_render_metrics_skips_non_finite_values() {
        let metrics = MetricMap::from([
            ("file_count".to_string(), f64::NAN),
            ("line_count".to_string(), 7.0),
        ]);

        let output = render_metrics(&graphs("Memo"), &metrics, 1);

        assert_eq!(output, "memo_count.line_count\t7.000000\t1\n");
    }

    #[test]
    fn test_render_meta() {
        let output = render_meta(&graphs("Diary")).unwrap();

        let (header, json) = output.split_once('\n').unwrap();
        assert_eq!(header, "# mackerel-agent-plugin");

        let parsed: serde_json::Value = serde_json::from_str(json.trim_end()).unwrap();
        let graph = &parsed["graphs"]["memo_count"];
        assert_eq!(graph["label"], "Diary Count");
        assert_eq!(graph["unit"], "integer");
        assert_eq!(graph["metrics"][0]["name"], "file_count");
        assert_eq!(graph["metrics"][0]["label"], "File Count");
        assert_eq!(graph["metrics"][0]["stacked"], false);
        assert_eq!(graph["metrics"][1]["name"], "line_count");
        assert_eq!(graph["metrics"][1]["label"], "Line Count");
    }
}
