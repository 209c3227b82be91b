use anyhow::{Context, Result, bail};
use log::warn;
use std::io::Write;

use crate::freesound::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, SearchParams, SoundApi, TextSearch};

/// Everything the `search` subcommand accepts.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub query: String,
    pub filter: Option<String>,
    pub sort: Option<String>,
    pub page: u32,
    pub page_size: u32,
    pub group_by_pack: bool,
    pub weights: Option<String>,
    /// Use the plain text search (query and paging only)
    pub simple: bool,
    /// Re-indent the JSON before printing
    pub pretty: bool,
}

impl SearchOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filter: None,
            sort: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            group_by_pack: false,
            weights: None,
            simple: false,
            pretty: false,
        }
    }

    fn uses_advanced_options(&self) -> bool {
        self.filter.is_some() || self.sort.is_some() || self.weights.is_some() || self.group_by_pack
    }

    fn to_params(&self) -> SearchParams {
        SearchParams {
            query: self.query.clone(),
            filter: self.filter.clone(),
            sort: self.sort.clone(),
            page: self.page,
            page_size: self.page_size,
            group_by_pack: self.group_by_pack,
            weights: self.weights.clone(),
        }
    }
}

/// Runs a search and prints the JSON response to `out`.
#[tracing::instrument(skip(api, out))]
pub async fn search<A: SoundApi, W: Write>(
    api: &A,
    options: &SearchOptions,
    out: &mut W,
) -> Result<()> {
    let result = if options.simple {
        if options.uses_advanced_options() {
            bail!("--simple cannot be combined with --filter, --sort, --weights or --group-by-pack");
        }
        let search = TextSearch::new(options.query.as_str())
            .page(options.page)
            .page_size(options.page_size);
        api.search_text(&search).await
    } else {
        api.search(&options.to_params()).await
    };
    let body = result.with_context(|| format!("Search for {:?} failed", options.query))?;

    let output = if options.pretty {
        prettify(&body)
    } else {
        body
    };

    writeln!(out, "{}", output).context("Failed to write search results")?;
    Ok(())
}

fn prettify(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(e) => {
            warn!("Response is not valid JSON ({}), printing it unchanged", e);
            body.to_string()
        }
    }
}
