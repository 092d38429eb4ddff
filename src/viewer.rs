//! Selection state and document preparation for a report viewer
//!
//! A viewer showing resolved reports keeps three things: the report set,
//! which report is selected, and whether resolution succeeded at all.
//! [`ViewerState`] owns exactly that and nothing about rendering; hosts
//! embed the selected document however they like, optionally running it
//! through [`embed_script`] first.

use serde::{Deserialize, Serialize};

use crate::types::{ReportCollectionResult, ReportDocument};

/// Viewer-side state over a resolved report set
///
/// Starts empty with nothing selected and no success recorded. Applying a
/// new [`ReportCollectionResult`] replaces the whole state; selection always
/// points at the first report after an apply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerState {
    reports: Vec<ReportDocument>,
    selected: usize,
    load_success: bool,
}

impl ViewerState {
    /// Create an empty state with no reports and no recorded success
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the state with a freshly resolved outcome
    ///
    /// The selection resets to the first report. The success flag is taken
    /// from the outcome, so a run that resolved nothing leaves the viewer
    /// in its failure presentation.
    pub fn apply(&mut self, outcome: ReportCollectionResult) {
        self.reports = outcome.reports;
        self.selected = 0;
        self.load_success = outcome.succeeded;
    }

    /// Move the selection to the report at `index`
    ///
    /// Out-of-range indices leave the selection untouched; returns whether
    /// the selection moved.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.reports.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// The currently selected report, if any report is loaded
    pub fn selected_report(&self) -> Option<&ReportDocument> {
        self.reports.get(self.selected)
    }

    /// Index of the current selection
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Whether the last applied outcome resolved at least one report
    pub fn load_success(&self) -> bool {
        self.load_success
    }

    /// All loaded reports in resolution order
    pub fn reports(&self) -> &[ReportDocument] {
        &self.reports
    }
}

/// Insert a script block into a report document before its own scripts run
///
/// The block is placed immediately ahead of the document's first
/// `<script` occurrence so it executes first; a document without any
/// script tag gets the block prepended. The transformation is purely
/// textual, the document is not parsed as HTML.
///
/// # Examples
///
/// ```
/// use azdo_mutation_reports::viewer::embed_script;
///
/// let html = "<html><body><script>render();</script></body></html>";
/// let embedded = embed_script(html, "notifyHost();");
/// assert!(embedded.starts_with("<html><body><script>notifyHost();</script><script>render();"));
/// ```
#[must_use]
pub fn embed_script(report_html: &str, script_body: &str) -> String {
    let block = format!("<script>{script_body}</script>");
    match report_html.find("<script") {
        Some(position) => {
            let mut embedded = String::with_capacity(report_html.len() + block.len());
            embedded.push_str(&report_html[..position]);
            embedded.push_str(&block);
            embedded.push_str(&report_html[position..]);
            embedded
        }
        None => format!("{block}{report_html}"),
    }
}
