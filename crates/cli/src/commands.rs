//! Subcommands mapped onto repository operations

use clap::Subcommand;
use colored::Colorize;
use jobboard_core::domain::{
    CreateJobListingInput, DeleteJobResponse, JobListing, UpdateJobListingInput,
};
use jobboard_core::port::JobListingRepository;
use jobboard_core::Result;
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show one job listing
    Get {
        /// Listing ID
        id: String,
    },

    /// List all job listings
    List,

    /// Create a job listing
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        url: String,

        #[arg(long)]
        company: String,
    },

    /// Update title, description or url of a listing
    Update {
        /// Listing ID
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        url: Option<String>,
    },

    /// Delete a job listing
    Delete {
        /// Listing ID
        id: String,
    },

    /// Check that the store answers
    Ping,
}

/// Result of one repository call
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Output {
    Listing(JobListing),
    Listings(Vec<JobListing>),
    Deleted(DeleteJobResponse),
    Status { status: String },
}

/// Run one command against the repository
pub async fn execute(repo: &dyn JobListingRepository, command: Commands) -> Result<Output> {
    let output = match command {
        Commands::Get { id } => Output::Listing(repo.get_job(&id).await?),
        Commands::List => Output::Listings(repo.get_jobs().await?),
        Commands::Create {
            title,
            description,
            url,
            company,
        } => {
            let input = CreateJobListingInput {
                title,
                description,
                url,
                company,
            };
            Output::Listing(repo.create_job_listing(input).await?)
        }
        Commands::Update {
            id,
            title,
            description,
            url,
        } => {
            let input = UpdateJobListingInput {
                title,
                description,
                url,
            };
            Output::Listing(repo.update_job_listing(&id, input).await?)
        }
        Commands::Delete { id } => Output::Deleted(repo.delete_job_listing(&id).await?),
        Commands::Ping => {
            repo.ping().await?;
            Output::Status {
                status: "ok".to_string(),
            }
        }
    };

    Ok(output)
}

#[derive(Tabled)]
struct ListingRow {
    id: String,
    title: String,
    company: String,
    url: String,
    description: String,
}

impl From<&JobListing> for ListingRow {
    fn from(listing: &JobListing) -> Self {
        Self {
            id: listing.id.clone(),
            title: listing.title.clone(),
            company: listing.company.clone(),
            url: listing.url.clone(),
            description: listing.description.clone(),
        }
    }
}

/// Render for humans (table) or machines (pretty JSON)
pub fn render(output: &Output, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(output)?);
    }

    let rendered = match output {
        Output::Listing(listing) => Table::new([ListingRow::from(listing)]).to_string(),
        Output::Listings(listings) if listings.is_empty() => {
            "No job listings".yellow().to_string()
        }
        Output::Listings(listings) => {
            Table::new(listings.iter().map(ListingRow::from)).to_string()
        }
        Output::Deleted(response) => format!("✓ Job listing {} deleted", response.deleted_job_id)
            .green()
            .bold()
            .to_string(),
        Output::Status { status } => format!("✓ Store reachable ({})", status)
            .green()
            .bold()
            .to_string(),
    };

    Ok(rendered)
}
