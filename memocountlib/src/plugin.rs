//! The two-method plugin contract and the memo-count plugin.
//!
//! A monitoring agent drives a plugin through exactly two calls: one that
//! describes the graphs the plugin reports, and one that fetches the current
//! values. The agent owns scheduling and the wire format.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::{count_directory, MemoStats};
use crate::options::PluginOptions;
use crate::Result;

/// Graph name the memo metrics are grouped under.
pub const GRAPH_NAME: &str = "memo_count";
/// Metric name for the number of memos.
pub const METRIC_FILE_COUNT: &str = "file_count";
/// Metric name for the total number of memo lines.
pub const METRIC_LINE_COUNT: &str = "line_count";

/// Flat metric name → value map produced by one fetch.
pub type MetricMap = BTreeMap<String, f64>;

/// Graph name → graph metadata.
pub type GraphDefinition = BTreeMap<String, Graph>;

/// Display metadata for one metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// Key of the metric in the fetched map
    pub name: String,
    /// Human-readable label
    pub label: String,
    /// Whether the agent should stack this metric on the graph
    pub stacked: bool,
}

impl Metric {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            stacked: false,
        }
    }
}

/// Display metadata for a group of metrics sharing one graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Graph title
    pub label: String,
    /// Unit tag understood by the agent (e.g. "integer")
    pub unit: String,
    /// Metrics drawn on this graph, in display order
    pub metrics: Vec<Metric>,
}

/// Contract between a monitoring agent and a metrics plugin.
pub trait Plugin {
    /// Describe the graphs this plugin reports.
    ///
    /// Must not touch the filesystem or depend on fetched values.
    fn graph_definition(&self) -> GraphDefinition;

    /// Fetch the current metric values.
    fn fetch_metrics(&self) -> Result<MetricMap>;
}

/// Reports the number of Markdown memos in a directory and their lines.
#[derive(Debug, Clone)]
pub struct MemoCountPlugin {
    options: PluginOptions,
}

impl MemoCountPlugin {
    /// Create a plugin for the given options.
    pub fn new(options: PluginOptions) -> Self {
        Self { options }
    }

    /// Directory the memos are read from.
    pub fn directory(&self) -> &Path {
        &self.options.directory
    }

    /// Count memos and lines, keeping the per-file breakdown.
    ///
    /// Fails only if the memo directory cannot be read.
    pub fn collect(&self) -> Result<MemoStats> {
        count_directory(&self.options.directory)
    }
}

impl Plugin for MemoCountPlugin {
    fn graph_definition(&self) -> GraphDefinition {
        let graph = Graph {
            label: format!("{} Count", self.options.prefix),
            unit: "integer".to_string(),
            metrics: vec![
                Metric::new(METRIC_FILE_COUNT, "File Count"),
                Metric::new(METRIC_LINE_COUNT, "Line Count"),
            ],
        };

        BTreeMap::from([(GRAPH_NAME.to_string(), graph)])
    }

    fn fetch_metrics(&self) -> Result<MetricMap> {
        let stats = self.collect()?;

        Ok(BTreeMap::from([
            (METRIC_FILE_COUNT.to_string(), stats.file_count as f64),
            (METRIC_LINE_COUNT.to_string(), stats.line_count as f64),
        ]))
    }
}
