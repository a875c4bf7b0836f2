use log::{info, warn};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::fanout::fan_out;
use super::report::{JobCodeMapping, SyncReport, UserMapping};
use super::transform::{jobcode_payload, user_payload};
use crate::api::client::build_http_client;
use crate::api::destination::EntityCreator;
use crate::api::models::{DestinationJobCodePayload, SourceJobCode, SourceUser};
use crate::api::source::SourceReader;
use crate::config::SyncConfig;
use crate::error::SyncError;

const CREATE_JOBCODE: &str = "create_jobcode";
const CREATE_USER: &str = "create_user";

/// Drives a full TSheets -> Timeero run
pub struct Synchronizer {
    source: SourceReader,
    creator: EntityCreator,
    config: SyncConfig,
}

impl Synchronizer {
    pub fn new(config: SyncConfig) -> Result<Self, SyncError> {
        let http_client = build_http_client()?;
        Ok(Self::with_client(http_client, config))
    }

    /// Use an existing HTTP client for both services
    pub fn with_client(http_client: reqwest::Client, config: SyncConfig) -> Self {
        Self {
            source: SourceReader::new(http_client.clone(), config.source.clone()),
            creator: EntityCreator::new(http_client, config.destination.token.clone()),
            config,
        }
    }

    pub async fn run(&self) -> Result<SyncReport, SyncError> {
        let mut rng = StdRng::from_os_rng();
        self.run_with_rng(&mut rng).await
    }

    /// Run the sync, drawing generated passwords and phone numbers from `rng`.
    ///
    /// Only a failed source read returns an error, and it does so before any
    /// destination write. Job codes are fully created before the first user
    /// request goes out.
    pub async fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SyncReport, SyncError> {
        info!("Starting TSheets to Timeero synchronization");

        let data = self.source.fetch_all().await?;

        let jobcodes = self.sync_jobcodes(&data.jobcodes).await;
        let users = self.sync_users(&data.users, rng).await;

        let report = SyncReport { jobcodes, users };
        let summary = report.summary();
        info!(
            "Synchronization complete: job codes {:?}, users {:?}",
            summary.jobcodes, summary.users
        );
        Ok(report)
    }

    async fn sync_jobcodes(&self, jobcodes: &[SourceJobCode]) -> Vec<JobCodeMapping> {
        info!("Starting job code creation ({} job codes)", jobcodes.len());

        let payloads: Vec<DestinationJobCodePayload> = jobcodes.iter().map(jobcode_payload).collect();
        let url = self.config.destination.jobcodes_url.as_str();
        let creator = &self.creator;

        let outcomes = fan_out(payloads, move |payload| creator.create(CREATE_JOBCODE, url, payload)).await;

        outcomes
            .iter()
            .map(|outcome| {
                if outcome.is_success() {
                    info!(
                        "Created job code: {} (Timeero ID: {})",
                        outcome.payload.name,
                        outcome.destination_id.as_deref().unwrap_or("unknown")
                    );
                } else {
                    warn!(
                        "Job code {} not created: {} {}",
                        outcome.payload.job_code,
                        outcome.status,
                        outcome.message.as_deref().unwrap_or("")
                    );
                }
                JobCodeMapping::from_outcome(outcome)
            })
            .collect()
    }

    async fn sync_users<R: Rng + ?Sized>(&self, users: &[SourceUser], rng: &mut R) -> Vec<UserMapping> {
        info!("Starting user creation ({} users)", users.len());

        let payloads: Vec<_> = users
            .iter()
            .map(|user| user_payload(user, &self.config.mapping, rng))
            .collect();
        let url = self.config.destination.users_url.as_str();
        let creator = &self.creator;

        let outcomes = fan_out(payloads, move |payload| creator.create(CREATE_USER, url, payload)).await;

        users
            .iter()
            .zip(outcomes.iter())
            .map(|(user, outcome)| {
                if outcome.is_success() {
                    info!(
                        "Created user: {} (Role ID: {})",
                        outcome.payload.email.as_deref().unwrap_or("<no email>"),
                        outcome.payload.role_id
                    );
                } else {
                    warn!(
                        "User {} not created: {} {}",
                        user.id,
                        outcome.status,
                        outcome.message.as_deref().unwrap_or("")
                    );
                }
                UserMapping::from_outcome(user, outcome)
            })
            .collect()
    }
}
