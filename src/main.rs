use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use uuid::Uuid;

use folders_service::config;
use folders_service::model::{FetchFolderRequest, FolderPaginationRequest};
use folders_service::service;
use folders_service::store::SampleSource;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to YAML config file (built-in defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Organization to query (defaults to the configured sample org)
    #[arg(long)]
    org: Option<Uuid>,

    /// Page size; switches to the paginated operation
    #[arg(long)]
    per_page: Option<i64>,

    /// Continuation token from a previous page (implies pagination)
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let cfg = config::load(args.config.as_deref())?;

    let source = SampleSource::with_size(cfg.sample.dataset_size);
    let org_id = args.org.unwrap_or(cfg.sample.default_org_id);

    if args.per_page.is_some() || args.token.is_some() {
        let req = FolderPaginationRequest {
            org_id,
            per_page: args.per_page.unwrap_or(cfg.service.default_per_page),
            token: args.token,
        };
        let resp = service::get_paginated_folders(&source, &req).await?;
        info!(
            count = resp.folders.len(),
            has_next = resp.next_token.is_some(),
            "fetched one page"
        );
        println!("{}", serde_json::to_string_pretty(&resp)?);
    } else {
        let req = FetchFolderRequest { org_id };
        let resp = service::get_all_folders(&source, &req).await?;
        info!(count = resp.folders.len(), "fetched all folders");
        println!("{}", serde_json::to_string_pretty(&resp)?);
    }

    Ok(())
}
