//! Fixed-column, optionally colored table output for normalized reports.

use crossterm::style::{Color, Stylize, style};
use pkg_report::builder::NormalizedReports;
use pkg_report::normalize::{NormalizedObservation, NormalizedWorkloadReport};
use pkg_report::{NormalizedNodeReport, NormalizedQuotaReport};
use std::io::Write;

/// Spaces between columns.
const COLUMN_GAP: usize = 3;

/// Printed in owner columns when no pod holds a maximum.
const NO_OWNER: &str = "-";

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let styled = style(text).with(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

/// One table: a header row and body rows, each with its own color.
struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    header_color: Color,
    row_color: Color,
}

impl Table {
    fn new(header: &[&str], header_color: Color, row_color: Color) -> Self {
        Self {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            header_color,
            row_color,
        }
    }

    fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }
        widths
    }

    fn write(&self, out: &mut impl Write, palette: Palette) -> std::io::Result<()> {
        let widths = self.widths();
        let line = |cells: &[String]| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{:<width$}", cell, width = w + COLUMN_GAP))
                .collect::<String>()
                .trim_end()
                .to_string()
        };

        writeln!(out, "{}", palette.paint(&line(self.header.as_slice()), self.header_color, true))?;
        for row in &self.rows {
            writeln!(out, "{}", palette.paint(&line(row.as_slice()), self.row_color, false))?;
        }
        writeln!(out)
    }
}

fn owner_cells(obs: &NormalizedObservation) -> [String; 2] {
    if obs.has_owner() {
        [obs.namespace.clone(), obs.pod_name.clone()]
    } else {
        [NO_OWNER.to_string(), NO_OWNER.to_string()]
    }
}

fn maxima_table(report: &NormalizedWorkloadReport) -> Table {
    let mut table = Table::new(
        &["MAXIMUM", "VALUE", "NAMESPACE", "POD"],
        Color::Blue,
        Color::Magenta,
    );
    for row in report.rows() {
        let [namespace, pod] = owner_cells(row.max);
        table.push(vec![
            format!("Max {}", row.dimension),
            row.max.value.to_string(),
            namespace,
            pod,
        ]);
    }
    table
}

pub fn write_node_report(
    out: &mut impl Write,
    report: &NormalizedNodeReport,
    palette: Palette,
) -> std::io::Result<()> {
    let workloads = &report.workloads;
    writeln!(
        out,
        "{}",
        palette.paint(&format!("Node name: {}", report.node_name), Color::Green, true)
    )?;
    writeln!(
        out,
        "Pods: {}   Containers: {}\n",
        workloads.pods, workloads.containers
    )?;

    maxima_table(workloads).write(out, palette)?;

    let mut totals = Table::new(&["TOTAL", "VALUE"], Color::Red, Color::Yellow);
    for row in workloads.rows() {
        totals.push(vec![format!("All {}s", row.dimension), row.sum.to_string()]);
    }
    totals.write(out, palette)?;

    let mut ratios = Table::new(
        &["LIMIT/REQUEST RATIO", "VALUE", "NAMESPACE", "POD"],
        Color::Red,
        Color::Yellow,
    );
    for (resource, obs) in workloads.ratio_rows() {
        let [namespace, pod] = owner_cells(obs);
        ratios.push(vec![
            format!("Max {} ratio", resource.label()),
            obs.value.to_string(),
            namespace,
            pod,
        ]);
    }
    ratios.write(out, palette)
}

pub fn write_cluster_report(
    out: &mut impl Write,
    report: &NormalizedQuotaReport,
    palette: Palette,
) -> std::io::Result<()> {
    writeln!(
        out,
        "{}",
        palette.paint(
            &format!("Cluster quotas: {}", report.quotas),
            Color::Green,
            true
        )
    )?;
    writeln!(out)?;

    let mut quotas = Table::new(&["QUOTA", "ALLOCATED", "USED"], Color::Red, Color::Magenta);
    for row in report.rows() {
        quotas.push(vec![
            format!("{}s", row.dimension),
            row.allocated.to_string(),
            row.used.to_string(),
        ]);
    }
    quotas.write(out, palette)?;

    maxima_table(&report.top_consumers).write(out, palette)
}

/// Write every report present, node first.
pub fn write_reports(
    out: &mut impl Write,
    reports: &NormalizedReports,
    palette: Palette,
) -> std::io::Result<()> {
    if let Some(node) = &reports.node {
        write_node_report(out, node, palette)?;
    }
    if let Some(cluster) = &reports.cluster {
        write_cluster_report(out, cluster, palette)?;
    }
    Ok(())
}
