use anyhow::{Result, anyhow, bail};

use crate::core::entry::{self, Entry};
use crate::core::logging::resolve_metric;
use crate::models::config::Config;
use crate::models::metric::{Domain, Metric};
use crate::repo::{OperationResult, Repos};

/// What a `show` request selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    All,
    Domain(Domain),
    Metric(Metric),
}

impl Target {
    pub fn label(&self) -> String {
        match self {
            Self::All => "all".to_string(),
            Self::Domain(d) => d.name().to_string(),
            Self::Metric(m) => m.name().to_string(),
        }
    }
}

pub struct ShowResult {
    pub target: Target,
    pub entries: Vec<Entry>,
}

/// A domain name, a metric name, or an alias of either.
pub fn resolve_target(config: &Config, input: Option<&str>) -> Result<Target> {
    let Some(input) = input else {
        return Ok(Target::All);
    };
    let resolved = config.resolve_alias(input);
    if let Some(domain) = Domain::ALL.into_iter().find(|d| d.name() == resolved) {
        if domain == Domain::MedicalProfile {
            bail!("use `profile show` for the medical profile");
        }
        return Ok(Target::Domain(domain));
    }
    resolved
        .parse::<Metric>()
        .map(Target::Metric)
        .map_err(|_| anyhow!("unknown domain or metric: {input}"))
}

/// List records for a target, oldest first, optionally only the last `last`.
///
/// With no target every granted domain is listed; domains this client may
/// not read are skipped rather than failing the whole listing.
pub fn show(
    repos: &Repos,
    config: &Config,
    target: Option<&str>,
    id: Option<i64>,
    last: Option<usize>,
) -> Result<ShowResult> {
    let target = resolve_target(config, target)?;

    let mut entries = match (target, id) {
        (Target::Metric(metric), Some(id)) => entry::find(repos, metric, id)?.into_iter().collect(),
        (_, Some(_)) => bail!("--id needs a metric, not a domain"),
        (Target::Metric(metric), None) => entry::by_metric(repos, metric)?,
        (Target::Domain(domain), None) => entry::by_domain(repos, domain)?,
        (Target::All, None) => {
            let mut all = Vec::new();
            for domain in Domain::ALL {
                if domain == Domain::MedicalProfile || !config.is_granted(domain.capability()) {
                    continue;
                }
                all.extend(entry::by_domain(repos, domain)?);
            }
            all
        }
    };
    entries.sort_by_key(Entry::time);

    if let Some(n) = last {
        let skip = entries.len().saturating_sub(n);
        entries.drain(..skip);
    }

    Ok(ShowResult { target, entries })
}

/// Delete one record. Errors if no record of `metric` has that id.
pub fn delete(repos: &Repos, config: &Config, metric: &str, id: i64) -> Result<OperationResult> {
    let metric = resolve_metric(config, metric)?;
    let Some(found) = entry::find(repos, metric, id)? else {
        bail!("no {metric} record with id {id}");
    };
    Ok(found.delete(repos))
}
