//! Per-record mapping rows produced by a sync run

use serde::Serialize;

use crate::api::constants::MISSING_PAYROLL_ID;
use crate::api::destination::{CreationOutcome, SyncStatus};
use crate::api::models::{DestinationJobCodePayload, DestinationUserPayload, SourceUser};

/// One TSheets job code and what happened to it in Timeero
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobCodeMapping {
    pub source_job_id: String,
    pub source_job_name: String,
    /// Timeero id, or the status label when none was returned
    pub destination_job_id: String,
    pub sync_status: SyncStatus,
    pub message: String,
}

/// One TSheets user and what happened to it in Timeero
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserMapping {
    pub source_user_id: String,
    pub source_user_email: String,
    /// Timeero id, or the status label when none was returned
    pub destination_user_id: String,
    pub sync_status: SyncStatus,
    pub message: String,
    pub source_payroll_id: String,
}

impl JobCodeMapping {
    pub fn from_outcome(outcome: &CreationOutcome<DestinationJobCodePayload>) -> Self {
        Self {
            source_job_id: outcome.payload.job_code.clone(),
            source_job_name: outcome.payload.name.clone(),
            destination_job_id: destination_label(outcome),
            sync_status: outcome.status,
            message: outcome.message.clone().unwrap_or_default(),
        }
    }
}

impl UserMapping {
    pub fn from_outcome(source: &SourceUser, outcome: &CreationOutcome<DestinationUserPayload>) -> Self {
        Self {
            source_user_id: outcome.payload.company_employee_id.clone(),
            source_user_email: outcome.payload.email.clone().unwrap_or_default(),
            destination_user_id: destination_label(outcome),
            sync_status: outcome.status,
            message: outcome.message.clone().unwrap_or_default(),
            source_payroll_id: source
                .payroll_id
                .clone()
                .unwrap_or_else(|| MISSING_PAYROLL_ID.to_string()),
        }
    }
}

fn destination_label<P>(outcome: &CreationOutcome<P>) -> String {
    outcome
        .destination_id
        .clone()
        .unwrap_or_else(|| outcome.status.to_string())
}

/// Status counts for one mapping collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub success: usize,
    pub skipped: usize,
    pub failed: usize,
    pub error: usize,
}

impl StatusCounts {
    fn tally<'a>(statuses: impl Iterator<Item = &'a SyncStatus>) -> Self {
        let mut counts = Self::default();
        for status in statuses {
            match status {
                SyncStatus::Success => counts.success += 1,
                SyncStatus::Skipped => counts.skipped += 1,
                SyncStatus::Failed => counts.failed += 1,
                SyncStatus::Error => counts.error += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed + self.error
    }

    /// Records an operator should look at
    pub fn needs_attention(&self) -> usize {
        self.failed + self.error
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncSummary {
    pub jobcodes: StatusCounts,
    pub users: StatusCounts,
}

/// Final output of a sync run
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    pub jobcodes: Vec<JobCodeMapping>,
    pub users: Vec<UserMapping>,
}

impl SyncReport {
    pub fn summary(&self) -> SyncSummary {
        SyncSummary {
            jobcodes: StatusCounts::tally(self.jobcodes.iter().map(|m| &m.sync_status)),
            users: StatusCounts::tally(self.users.iter().map(|m| &m.sync_status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_outcome(status: SyncStatus, id: Option<&str>, message: Option<&str>) -> CreationOutcome<DestinationJobCodePayload> {
        CreationOutcome {
            status,
            destination_id: id.map(str::to_string),
            message: message.map(str::to_string),
            payload: DestinationJobCodePayload {
                name: "Roofing".into(),
                job_code: "314".into(),
                active: true,
                track_mileage: false,
                track_location: false,
            },
        }
    }

    #[test]
    fn test_jobcode_mapping_success() {
        let mapping = JobCodeMapping::from_outcome(&job_outcome(SyncStatus::Success, Some("9001"), Some("Created")));

        assert_eq!(mapping.source_job_id, "314");
        assert_eq!(mapping.source_job_name, "Roofing");
        assert_eq!(mapping.destination_job_id, "9001");
        assert_eq!(mapping.sync_status, SyncStatus::Success);
        assert_eq!(mapping.message, "Created");
    }

    #[test]
    fn test_missing_id_falls_back_to_status() {
        let mapping = JobCodeMapping::from_outcome(&job_outcome(SyncStatus::Failed, None, None));
        assert_eq!(mapping.destination_job_id, "FAILED");
        assert_eq!(mapping.message, "");
    }

    #[test]
    fn test_user_mapping_payroll_id() {
        let source = SourceUser {
            id: 8,
            first_name: None,
            last_name: None,
            email: Some("eight@example.com".into()),
            mobile_number: None,
            permissions: None,
            payroll_id: None,
        };
        let outcome = CreationOutcome {
            status: SyncStatus::Skipped,
            destination_id: None,
            message: Some("The email has already been taken.".into()),
            payload: DestinationUserPayload {
                first_name: "N/A".into(),
                last_name: "N/A".into(),
                email: source.email.clone(),
                phone: "1000000000".into(),
                password: "Aa1!aaaaaa".into(),
                company_employee_id: "8".into(),
                role_id: 3,
                track_location: false,
                track_mileage: false,
            },
        };

        let mapping = UserMapping::from_outcome(&source, &outcome);
        assert_eq!(mapping.source_user_id, "8");
        assert_eq!(mapping.source_user_email, "eight@example.com");
        assert_eq!(mapping.destination_user_id, "SKIPPED");
        assert_eq!(mapping.source_payroll_id, "N/A");

        let with_payroll = SourceUser {
            payroll_id: Some("P-8".into()),
            ..source
        };
        assert_eq!(UserMapping::from_outcome(&with_payroll, &outcome).source_payroll_id, "P-8");
    }

    #[test]
    fn test_summary_counts() {
        let report = SyncReport {
            jobcodes: vec![
                JobCodeMapping::from_outcome(&job_outcome(SyncStatus::Success, Some("1"), None)),
                JobCodeMapping::from_outcome(&job_outcome(SyncStatus::Error, None, Some("HTTP Status 500: null"))),
                JobCodeMapping::from_outcome(&job_outcome(SyncStatus::Failed, None, None)),
            ],
            users: Vec::new(),
        };

        let summary = report.summary();
        assert_eq!(summary.jobcodes.success, 1);
        assert_eq!(summary.jobcodes.error, 1);
        assert_eq!(summary.jobcodes.failed, 1);
        assert_eq!(summary.jobcodes.total(), 3);
        assert_eq!(summary.jobcodes.needs_attention(), 2);
        assert_eq!(summary.users, StatusCounts::default());
    }
}
