//! Customer report lines.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const NAME_LABEL: &str = "name";
pub const LOCATION_LABEL: &str = "location";

/// Billing customer. Missing or `null` attributes deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

impl Customer {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
        }
    }
}

/// Label/value pair, serialized as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
}

impl ReportLine {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

impl Serialize for ReportLine {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.label, self.value.as_str()).serialize(serializer)
    }
}

pub fn report_lines(customer: &Customer) -> Vec<ReportLine> {
    let mut lines = Vec::with_capacity(2);
    gather_customer_data(&mut lines, customer);
    lines
}

/// Appends the name line followed by the location line.
pub fn gather_customer_data(lines: &mut Vec<ReportLine>, customer: &Customer) {
    lines.push(ReportLine::new(NAME_LABEL, customer.name.clone()));
    lines.push(ReportLine::new(LOCATION_LABEL, customer.location.clone()));
}
