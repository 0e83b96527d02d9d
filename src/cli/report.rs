//! Progress report rendering.
//!
//! Builds the text report (or its JSON equivalent) from an [`Analysis`] and
//! the advisor's [`NextSteps`]. Rendering is pure: callers decide where the
//! output goes.

use std::fmt::Write as _;

use crossterm::style::{style, Color, Stylize};
use serde::Serialize;

use crate::analysis::{percent, Analysis, NextSteps, StatusCounts};
use crate::constants;
use crate::theme;
use crate::tracking::Status;

// ── Options ─────────────────────────────────────────────────────────────────

/// Presentation switches for the text report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI color codes.
    pub color: bool,
}

// ── Percentages and bar ─────────────────────────────────────────────────────

/// Whole-number percentages for the overall counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Percentages {
    pub complete: usize,
    pub in_progress: usize,
    pub not_started: usize,
}

impl Percentages {
    /// `None` when there are no rows.
    #[must_use]
    pub fn of(counts: &StatusCounts, total: usize) -> Option<Self> {
        Some(Self {
            complete: percent(counts.complete, total)?,
            in_progress: percent(counts.in_progress, total)?,
            not_started: percent(counts.not_started, total)?,
        })
    }

    /// Percentage for a single status.
    #[must_use]
    pub const fn get(&self, status: Status) -> usize {
        match status {
            Status::Complete => self.complete,
            Status::InProgress => self.in_progress,
            Status::NotStarted => self.not_started,
        }
    }

    /// Value shown after the bar: complete plus in-progress.
    #[must_use]
    pub const fn overall(&self) -> usize {
        self.complete + self.in_progress
    }
}

/// Cell counts for the three bar segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarCells {
    pub complete: usize,
    pub in_progress: usize,
    pub not_started: usize,
}

impl BarCells {
    /// One cell per [`constants::BAR_STEP_PERCENT`] points, rounded down.
    ///
    /// The complete and in-progress segments are sized from the rounded
    /// percentages; the not-started segment from the exact share.
    #[must_use]
    pub fn of(counts: &StatusCounts, total: usize) -> Option<Self> {
        let pct = Percentages::of(counts, total)?;
        Some(Self {
            complete: pct.complete / constants::BAR_STEP_PERCENT,
            in_progress: pct.in_progress / constants::BAR_STEP_PERCENT,
            not_started: counts.not_started * 100 / (total * constants::BAR_STEP_PERCENT),
        })
    }
}

const fn status_label(status: Status) -> &'static str {
    match status {
        Status::Complete => constants::LABEL_COMPLETE,
        Status::InProgress => constants::LABEL_IN_PROGRESS,
        Status::NotStarted => constants::LABEL_NOT_STARTED,
    }
}

fn paint(text: &str, color: Color, opts: RenderOptions) -> String {
    if opts.color {
        style(text).with(color).to_string()
    } else {
        text.to_string()
    }
}

fn segment(glyph: char, cells: usize, color: Color, opts: RenderOptions) -> String {
    paint(&glyph.to_string().repeat(cells), color, opts)
}

// ── Text report ─────────────────────────────────────────────────────────────

/// Render the complete text report.
///
/// An analysis with no rows renders a "no data" notice in place of the
/// progress and next-steps sections.
#[must_use]
pub fn render_text(
    analysis: &Analysis,
    steps: &NextSteps,
    todo_display: &str,
    opts: RenderOptions,
) -> String {
    let mut out = String::with_capacity(2048);

    write_title(&mut out, opts);

    if analysis.is_empty() {
        let _ = writeln!(out, "\n{}", constants::MSG_NO_DATA);
    } else {
        write_overall(&mut out, analysis, opts);
        write_modules(&mut out, analysis, opts);
        write_next_steps(&mut out, steps, opts);
    }

    write_todo_pointer(&mut out, todo_display);
    out
}

fn write_title(out: &mut String, opts: RenderOptions) {
    let _ = writeln!(out, "{}\n", paint(constants::MSG_TITLE, theme::ACCENT_PRIMARY, opts));
    let _ = writeln!(
        out,
        "{}",
        constants::GLYPH_RULE.to_string().repeat(constants::RULE_WIDTH)
    );
}

fn write_overall(out: &mut String, analysis: &Analysis, opts: RenderOptions) {
    let counts = &analysis.status_count;
    let total = analysis.total;
    let (Some(pct), Some(cells)) = (
        Percentages::of(counts, total),
        BarCells::of(counts, total),
    ) else {
        return;
    };

    let _ = writeln!(
        out,
        "\n{}",
        paint(constants::MSG_OVERALL_HEADER, theme::ACCENT_PRIMARY, opts)
    );
    for status in Status::ALL {
        let _ = writeln!(
            out,
            "{}: {}/{total} ({}%)",
            status_label(status),
            counts.get(status),
            pct.get(status)
        );
    }

    let bar = format!(
        "{}{}{}",
        segment(constants::GLYPH_COMPLETE, cells.complete, theme::SUCCESS, opts),
        segment(constants::GLYPH_IN_PROGRESS, cells.in_progress, theme::WARNING, opts),
        segment(constants::GLYPH_NOT_STARTED, cells.not_started, theme::INACTIVE, opts),
    );
    let _ = writeln!(out, "\n[{bar}] {}% overall", pct.overall());
}

fn write_modules(out: &mut String, analysis: &Analysis, opts: RenderOptions) {
    let _ = writeln!(
        out,
        "\n{}",
        paint(constants::MSG_MODULES_HEADER, theme::ACCENT_PRIMARY, opts)
    );

    for module in &analysis.by_module {
        let total = module.total();
        let complete_pct = percent(module.counts.complete, total).unwrap_or_default();
        let _ = writeln!(out, "\n{}:", module.name.to_uppercase());
        let _ = writeln!(
            out,
            "  ✅ {}/{total} complete ({complete_pct}%)",
            module.counts.complete
        );
        let _ = writeln!(out, "  🔄 {} in progress", module.counts.in_progress);
        let _ = writeln!(out, "  ⛔ {} not started", module.counts.not_started);
    }
}

fn write_next_steps(out: &mut String, steps: &NextSteps, opts: RenderOptions) {
    let _ = writeln!(
        out,
        "\n{}\n",
        paint(constants::MSG_NEXT_STEPS_HEADER, theme::ACCENT_PRIMARY, opts)
    );

    if steps.is_empty() {
        let _ = writeln!(out, "{}", constants::MSG_ALL_COMPLETE);
        return;
    }

    if !steps.finish.is_empty() {
        let _ = writeln!(out, "{}", constants::MSG_FINISH_HEADER);
        for s in &steps.finish {
            let _ = writeln!(out, "   - {}: {} files to finish", s.module, s.files);
        }
    }

    if !steps.start.is_empty() {
        let _ = writeln!(out, "\n{}", constants::MSG_START_HEADER);
        for s in &steps.start {
            let _ = writeln!(out, "   - {}: {} files", s.module, s.files);
        }
    }
}

fn write_todo_pointer(out: &mut String, todo_display: &str) {
    let _ = writeln!(out, "\n{}", constants::MSG_TODO_POINTER);
    let _ = writeln!(out, "   {todo_display}");
}

// ── JSON report ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct JsonModule<'a> {
    module: &'a str,
    complete: usize,
    in_progress: usize,
    not_started: usize,
    total: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    total: usize,
    status_count: &'a StatusCounts,
    percentages: Option<Percentages>,
    by_module: Vec<JsonModule<'a>>,
    next_steps: &'a NextSteps,
    todo_path: &'a str,
}

/// Render the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(
    analysis: &Analysis,
    steps: &NextSteps,
    todo_display: &str,
) -> serde_json::Result<String> {
    let report = JsonReport {
        total: analysis.total,
        status_count: &analysis.status_count,
        percentages: Percentages::of(&analysis.status_count, analysis.total),
        by_module: analysis
            .by_module
            .iter()
            .map(|m| JsonModule {
                module: &m.name,
                complete: m.counts.complete,
                in_progress: m.counts.in_progress,
                not_started: m.counts.not_started,
                total: m.total(),
            })
            .collect(),
        next_steps: steps,
        todo_path: todo_display,
    };
    serde_json::to_string_pretty(&report)
}
