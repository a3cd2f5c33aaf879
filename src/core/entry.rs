use anyhow::Result;
use serde::Serialize;

use crate::models::metric::{Domain, Metric};
use crate::models::records::{
    ActivityRecord, BodyRecord, BreathingRecord, DomainRecord, HeartBloodRecord,
    MindfulnessRecord,
};
use crate::repo::{OperationResult, Repos};

/// A record of any domain, for commands that cut across domains.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Entry {
    Activity(ActivityRecord),
    Body(BodyRecord),
    Breathing(BreathingRecord),
    HeartBlood(HeartBloodRecord),
    Mindfulness(MindfulnessRecord),
}

macro_rules! with_record {
    ($entry:expr, $r:ident => $body:expr) => {
        match $entry {
            Entry::Activity($r) => $body,
            Entry::Body($r) => $body,
            Entry::Breathing($r) => $body,
            Entry::HeartBlood($r) => $body,
            Entry::Mindfulness($r) => $body,
        }
    };
}

impl Entry {
    pub fn domain(&self) -> Domain {
        match self {
            Self::Activity(_) => Domain::Activity,
            Self::Body(_) => Domain::Body,
            Self::Breathing(_) => Domain::Breathing,
            Self::HeartBlood(_) => Domain::HeartBlood,
            Self::Mindfulness(_) => Domain::Mindfulness,
        }
    }

    pub fn id(&self) -> i64 {
        with_record!(self, r => r.id())
    }

    pub fn metric_code(&self) -> i32 {
        with_record!(self, r => r.metric())
    }

    /// `None` for rows of a metric this build does not know.
    pub fn metric(&self) -> Option<Metric> {
        Metric::from_code(self.metric_code())
    }

    pub fn time(&self) -> i64 {
        with_record!(self, r => r.time())
    }

    pub fn notes(&self) -> &str {
        with_record!(self, r => r.notes())
    }

    pub fn insert(&self, repos: &Repos) -> OperationResult {
        match self {
            Self::Activity(r) => repos.activity.records().insert(r),
            Self::Body(r) => repos.body.records().insert(r),
            Self::Breathing(r) => repos.breathing.records().insert(r),
            Self::HeartBlood(r) => repos.heart_blood.records().insert(r),
            Self::Mindfulness(r) => repos.mindfulness.records().insert(r),
        }
    }

    pub fn delete(&self, repos: &Repos) -> OperationResult {
        match self {
            Self::Activity(r) => repos.activity.records().delete(r),
            Self::Body(r) => repos.body.records().delete(r),
            Self::Breathing(r) => repos.breathing.records().delete(r),
            Self::HeartBlood(r) => repos.heart_blood.records().delete(r),
            Self::Mindfulness(r) => repos.mindfulness.records().delete(r),
        }
    }
}

impl From<ActivityRecord> for Entry {
    fn from(r: ActivityRecord) -> Self {
        Self::Activity(r)
    }
}

impl From<BodyRecord> for Entry {
    fn from(r: BodyRecord) -> Self {
        Self::Body(r)
    }
}

impl From<BreathingRecord> for Entry {
    fn from(r: BreathingRecord) -> Self {
        Self::Breathing(r)
    }
}

impl From<HeartBloodRecord> for Entry {
    fn from(r: HeartBloodRecord) -> Self {
        Self::HeartBlood(r)
    }
}

impl From<MindfulnessRecord> for Entry {
    fn from(r: MindfulnessRecord) -> Self {
        Self::Mindfulness(r)
    }
}

fn wrap<R: Into<Entry>>(records: Vec<R>) -> Vec<Entry> {
    records.into_iter().map(Into::into).collect()
}

/// Every known-metric record of `domain`, sorted by time.
pub fn by_domain(repos: &Repos, domain: Domain) -> Result<Vec<Entry>> {
    Ok(match domain {
        Domain::Activity => wrap(repos.activity.get_all()?),
        Domain::Body => wrap(repos.body.get_all()?),
        Domain::Breathing => wrap(repos.breathing.get_all()?),
        Domain::HeartBlood => wrap(repos.heart_blood.get_all()?),
        Domain::Mindfulness => wrap(repos.mindfulness.get_all()?),
        Domain::MedicalProfile => anyhow::bail!("the medical profile holds no records"),
    })
}

pub fn by_metric(repos: &Repos, metric: Metric) -> Result<Vec<Entry>> {
    Ok(match metric.domain() {
        Domain::Activity => wrap(repos.activity.records().get_by_metric(metric)?),
        Domain::Body => wrap(repos.body.records().get_by_metric(metric)?),
        Domain::Breathing => wrap(repos.breathing.records().get_by_metric(metric)?),
        Domain::HeartBlood => wrap(repos.heart_blood.records().get_by_metric(metric)?),
        Domain::Mindfulness => wrap(repos.mindfulness.records().get_by_metric(metric)?),
        Domain::MedicalProfile => Vec::new(),
    })
}

pub fn find(repos: &Repos, metric: Metric, id: i64) -> Result<Option<Entry>> {
    Ok(match metric.domain() {
        Domain::Activity => repos.activity.records().get_by_id(metric, id)?.map(Into::into),
        Domain::Body => repos.body.records().get_by_id(metric, id)?.map(Into::into),
        Domain::Breathing => repos.breathing.records().get_by_id(metric, id)?.map(Into::into),
        Domain::HeartBlood => repos.heart_blood.records().get_by_id(metric, id)?.map(Into::into),
        Domain::Mindfulness => repos.mindfulness.records().get_by_id(metric, id)?.map(Into::into),
        Domain::MedicalProfile => None,
    })
}
