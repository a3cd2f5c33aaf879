use std::fmt;
use std::str::FromStr;

use crate::models::metric::{Domain, Metric};

use super::StoreError;

const SCHEME: &str = "content://";
const AUTHORITY_BASE: &str = "healthstore";

/// Address of a domain endpoint, one metric within it, or one row.
///
/// Rendered as `content://healthstore.<domain>[/{metric}[/{id}]]`. An id is
/// only ever present together with a metric, except on the medical profile,
/// whose single row is addressed as `content://healthstore.profile/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HealthStoreUri {
    domain: Domain,
    metric: Option<i32>,
    id: Option<i64>,
}

impl HealthStoreUri {
    /// Base address of a domain.
    pub fn base(domain: Domain) -> Self {
        Self {
            domain,
            metric: None,
            id: None,
        }
    }

    /// `/{metric}`: every row of one metric.
    pub fn metric(domain: Domain, metric: i32) -> Self {
        Self {
            domain,
            metric: Some(metric),
            id: None,
        }
    }

    /// `/{metric}/{id}`: one specific row.
    pub fn record(domain: Domain, metric: i32, id: i64) -> Self {
        Self {
            domain,
            metric: Some(metric),
            id: Some(id),
        }
    }

    pub fn for_metric(metric: Metric) -> Self {
        Self::metric(metric.domain(), metric.code())
    }

    /// Append an id to a `/{metric}` address, or to the profile base.
    pub fn with_id(self, id: i64) -> Result<Self, StoreError> {
        match self.metric {
            Some(metric) => Ok(Self::record(self.domain, metric, id)),
            None if self.domain == Domain::MedicalProfile => Ok(Self {
                id: Some(id),
                ..self
            }),
            None => Err(StoreError::InvalidUri(format!(
                "{self}: an id needs a metric segment"
            ))),
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn metric_code(&self) -> Option<i32> {
        self.metric
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn authority(&self) -> String {
        format!("{}.{}", AUTHORITY_BASE, self.domain.authority())
    }
}

impl fmt::Display for HealthStoreUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SCHEME, self.authority())?;
        if let Some(metric) = self.metric {
            write!(f, "/{metric}")?;
        }
        if let Some(id) = self.id {
            write!(f, "/{id}")?;
        }
        Ok(())
    }
}

impl FromStr for HealthStoreUri {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StoreError::InvalidUri(s.to_string());

        let rest = s.strip_prefix(SCHEME).ok_or_else(invalid)?;
        let mut segments = rest.trim_end_matches('/').split('/');
        let authority = segments.next().ok_or_else(invalid)?;
        let domain = authority
            .strip_prefix(AUTHORITY_BASE)
            .and_then(|a| a.strip_prefix('.'))
            .and_then(Domain::from_authority)
            .ok_or_else(invalid)?;

        if domain == Domain::MedicalProfile {
            let id = match segments.next() {
                Some(i) => Some(i.parse::<i64>().map_err(|_| invalid())?),
                None => None,
            };
            if segments.next().is_some() {
                return Err(invalid());
            }
            return Ok(Self {
                domain,
                metric: None,
                id,
            });
        }

        let metric = match segments.next() {
            Some(m) => Some(m.parse::<i32>().map_err(|_| invalid())?),
            None => None,
        };
        let id = match segments.next() {
            Some(i) => Some(i.parse::<i64>().map_err(|_| invalid())?),
            None => None,
        };
        if segments.next().is_some() {
            return Err(invalid());
        }

        Ok(Self { domain, metric, id })
    }
}
