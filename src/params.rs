use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::QueryDefaults;
use crate::types::category::Gender;
use crate::types::eligibility_bundle::Query;
use crate::types::identifiers::StateId;

pub const CATEGORY: &str = "category";
pub const GENDER: &str = "gender";
pub const STATE: &str = "state";
pub const ADVANCED_RANK: &str = "adv_rank";
pub const MAIN_RANK: &str = "main_rank";
pub const TOLERANCE: &str = "tolerance";
pub const COUNT: &str = "count";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("Parameter `{field}` is not numeric: {value}")]
    NotNumeric { field: &'static str, value: String },
    #[error("Parameter `{field}` is not a non-negative integer: {value}")]
    NotUnsigned { field: &'static str, value: String },
    #[error("Unknown gender: {0}")]
    UnknownGender(String),
}

/// Raw string parameters as decoded from a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams {
    inner: BTreeMap<String, String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.inner.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Trimmed value; empty values count as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Build a [`Query`], falling back to `defaults` for absent parameters.
    ///
    /// The reservation code is passed through unvalidated; the engine owns
    /// that check.
    pub fn to_query(&self, defaults: &QueryDefaults) -> Result<Query, ParamError> {
        let mut query = defaults.query();

        if let Some(code) = self.get(CATEGORY) {
            query.reservation = code.to_string();
        }
        if let Some(raw) = self.get(GENDER) {
            query.gender = parse_gender(raw)?;
        }
        if let Some(state) = self.unsigned::<u32>(STATE)? {
            query.home_state = StateId::new(state);
        }
        query.advanced_rank = self.unsigned(ADVANCED_RANK)?;
        query.main_rank = self.unsigned(MAIN_RANK)?;
        if let Some(tolerance) = self.parsed::<f64>(TOLERANCE, not_numeric)? {
            query.tolerance_pct = tolerance;
        }
        if let Some(cap) = self.unsigned::<usize>(COUNT)? {
            query.cap = cap;
        }

        Ok(query)
    }

    fn unsigned<T: FromStr>(&self, field: &'static str) -> Result<Option<T>, ParamError> {
        self.parsed(field, not_unsigned)
    }

    fn parsed<T: FromStr>(
        &self,
        field: &'static str,
        error: fn(&'static str, &str) -> ParamError,
    ) -> Result<Option<T>, ParamError> {
        self.get(field)
            .map(|raw| raw.parse::<T>().map_err(|_| error(field, raw)))
            .transpose()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

fn not_numeric(field: &'static str, value: &str) -> ParamError {
    ParamError::NotNumeric {
        field,
        value: value.to_string(),
    }
}

fn not_unsigned(field: &'static str, value: &str) -> ParamError {
    ParamError::NotUnsigned {
        field,
        value: value.to_string(),
    }
}

fn parse_gender(raw: &str) -> Result<Gender, ParamError> {
    match raw.to_ascii_lowercase().as_str() {
        "m" | "male" => Ok(Gender::Male),
        "f" | "female" => Ok(Gender::Female),
        _ => Err(ParamError::UnknownGender(raw.to_string())),
    }
}
