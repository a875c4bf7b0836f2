//! Console rendering of the mapping tables and per-status totals

use colored::*;
use tabled::{Table, Tabled, settings::Style};

use crate::sync::report::{JobCodeMapping, StatusCounts, SyncReport, UserMapping};

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "tsheets_user_id")]
    source_user_id: String,
    #[tabled(rename = "tsheets_user_email")]
    source_user_email: String,
    #[tabled(rename = "timeero_user_id")]
    destination_user_id: String,
    #[tabled(rename = "sync_status")]
    sync_status: String,
    #[tabled(rename = "message")]
    message: String,
    #[tabled(rename = "tsheets_payroll_id")]
    source_payroll_id: String,
}

#[derive(Tabled)]
struct JobCodeRow {
    #[tabled(rename = "tsheets_job_id")]
    source_job_id: String,
    #[tabled(rename = "tsheets_job_name")]
    source_job_name: String,
    #[tabled(rename = "timeero_job_id")]
    destination_job_id: String,
    #[tabled(rename = "sync_status")]
    sync_status: String,
    #[tabled(rename = "message")]
    message: String,
}

impl From<&UserMapping> for UserRow {
    fn from(m: &UserMapping) -> Self {
        Self {
            source_user_id: m.source_user_id.clone(),
            source_user_email: m.source_user_email.clone(),
            destination_user_id: m.destination_user_id.clone(),
            sync_status: m.sync_status.to_string(),
            message: m.message.clone(),
            source_payroll_id: m.source_payroll_id.clone(),
        }
    }
}

impl From<&JobCodeMapping> for JobCodeRow {
    fn from(m: &JobCodeMapping) -> Self {
        Self {
            source_job_id: m.source_job_id.clone(),
            source_job_name: m.source_job_name.clone(),
            destination_job_id: m.destination_job_id.clone(),
            sync_status: m.sync_status.to_string(),
            message: m.message.clone(),
        }
    }
}

fn counts_line(label: &str, counts: &StatusCounts) -> String {
    let attention = if counts.needs_attention() > 0 {
        format!("{} need attention", counts.needs_attention()).red().bold().to_string()
    } else {
        "none need attention".green().to_string()
    };

    format!(
        "{}: {} total, {} success, {} skipped, {} failed, {} error ({})",
        label.bold(),
        counts.total(),
        counts.success,
        counts.skipped,
        counts.failed,
        counts.error,
        attention
    )
}

fn section<T: Tabled>(title: &str, rows: Vec<T>) -> String {
    let mut out = format!("\n--- {} ---\n", title.cyan().bold());
    if rows.is_empty() {
        out.push_str(&"(none)".dimmed().to_string());
        out.push('\n');
    } else {
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        out.push_str(&table.to_string());
        out.push('\n');
    }
    out
}

/// Render the final report: banner, user mappings, job code mappings, totals.
pub fn render_report(report: &SyncReport) -> String {
    let separator = "=".repeat(55);
    let mut out = String::new();

    out.push_str(&format!("\n{}\n", separator));
    out.push_str(&format!("{:^55}\n", "SYNC EXECUTION COMPLETE").bold().to_string());
    out.push_str(&format!("{}\n", separator));

    out.push_str(&section(
        "Final User Mappings",
        report.users.iter().map(UserRow::from).collect(),
    ));
    out.push_str(&section(
        "Final Jobcode Mappings",
        report.jobcodes.iter().map(JobCodeRow::from).collect(),
    ));

    let summary = report.summary();
    out.push('\n');
    out.push_str(&counts_line("Users", &summary.users));
    out.push('\n');
    out.push_str(&counts_line("Job codes", &summary.jobcodes));
    out.push('\n');
    out
}
