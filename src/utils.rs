// This file is part of the terraform-provider-cirrus project
//
// Copyright (C) ANEO, 2025-2026. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::borrow::Cow;
use std::time::Duration;

use anyhow::{bail, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use tf_provider::schema::{Attribute, AttributeConstraint, AttributeType, Block, NestedBlock};
use tf_provider::value::{Value, ValueList, ValueString};
use tf_provider::schema::{Description, Schema};
use tf_provider::{map, AttributePath, Diagnostics};

pub(crate) trait WithSchema {
    fn schema() -> Schema;
}

#[async_trait]
pub(crate) trait WithValidate {
    async fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath);
}

pub(crate) trait WithNormalize {
    fn normalize(&mut self, diags: &mut Diagnostics);
}

#[async_trait]
impl<T: WithValidate + Send + Sync> WithValidate for Value<T> {
    async fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        if let Value::Value(inner) = self {
            inner.validate(diags, attr_path).await;
        }
    }
}

/// Read a required string attribute, recording a diagnostic when absent.
pub(crate) fn required_string(
    value: &ValueString,
    diags: &mut Diagnostics,
    attr_path: AttributePath,
    what: &str,
) -> Option<String> {
    match value.as_deref_option() {
        Some(text) if !text.is_empty() => Some(text.to_owned()),
        _ => {
            diags.error_short(format!("`{what}` is required"), attr_path);
            None
        }
    }
}

/// Translate an API string into state, keeping null when the remote field is
/// unset and the prior state did not carry a value.
pub fn string_value<'a>(text: String, prior: &ValueString) -> ValueString<'a> {
    if text.is_empty() && !matches!(prior, Value::Value(_)) {
        Value::Null
    } else {
        Value::Value(Cow::Owned(text))
    }
}

pub(crate) fn expand_string_list(list: &ValueList<ValueString>) -> Vec<String> {
    list.iter()
        .flatten()
        .filter_map(|item| Some(item.as_deref_option()?.to_owned()))
        .collect()
}

/// Per-resource operation deadlines, as written in the `timeouts` block.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeoutsState<'a> {
    #[serde(borrow)]
    pub create: ValueString<'a>,
    #[serde(borrow)]
    pub update: ValueString<'a>,
    #[serde(borrow)]
    pub delete: ValueString<'a>,
}

pub(crate) trait WithTimeouts {
    fn create_timeout(&self, default: Duration) -> Duration;
    fn update_timeout(&self, default: Duration) -> Duration;
    fn delete_timeout(&self, default: Duration) -> Duration;
}

impl WithTimeouts for TimeoutsState<'_> {
    fn create_timeout(&self, default: Duration) -> Duration {
        timeout_or(&self.create, default)
    }
    fn update_timeout(&self, default: Duration) -> Duration {
        timeout_or(&self.update, default)
    }
    fn delete_timeout(&self, default: Duration) -> Duration {
        timeout_or(&self.delete, default)
    }
}

impl<T: WithTimeouts> WithTimeouts for Value<T> {
    fn create_timeout(&self, default: Duration) -> Duration {
        self.as_ref().map_or(default, |t| t.create_timeout(default))
    }
    fn update_timeout(&self, default: Duration) -> Duration {
        self.as_ref().map_or(default, |t| t.update_timeout(default))
    }
    fn delete_timeout(&self, default: Duration) -> Duration {
        self.as_ref().map_or(default, |t| t.delete_timeout(default))
    }
}

// Malformed values are rejected by validate; by apply time they can only
// fall back to the default.
fn timeout_or(value: &ValueString, default: Duration) -> Duration {
    match value.as_deref_option() {
        Some(text) => parse_duration(text).unwrap_or(default),
        None => default,
    }
}

#[async_trait]
impl WithValidate for TimeoutsState<'_> {
    async fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        for (name, value) in [
            ("create", &self.create),
            ("update", &self.update),
            ("delete", &self.delete),
        ] {
            if let Some(text) = value.as_deref_option() {
                if let Err(err) = parse_duration(text) {
                    diags.error(
                        "Invalid timeout",
                        err.to_string(),
                        attr_path.clone().attribute(name),
                    );
                }
            }
        }
    }
}

pub(crate) fn timeouts_block() -> NestedBlock {
    NestedBlock::Optional(Block {
        attributes: map! {
            "create" => Attribute {
                attr_type: AttributeType::String,
                description: Description::plain("Deadline for resource creation (e.g. `30m`, `1h30m`)"),
                constraint: AttributeConstraint::Optional,
                ..Default::default()
            },
            "update" => Attribute {
                attr_type: AttributeType::String,
                description: Description::plain("Deadline for resource update"),
                constraint: AttributeConstraint::Optional,
                ..Default::default()
            },
            "delete" => Attribute {
                attr_type: AttributeType::String,
                description: Description::plain("Deadline for resource deletion"),
                constraint: AttributeConstraint::Optional,
                ..Default::default()
            },
        },
        description: Description::plain("Operation deadlines"),
        ..Default::default()
    })
}

/// Parse a duration written as a sequence of `<integer><unit>` terms, with
/// units `ms`, `s`, `m` and `h` (`90s`, `1h30m`).
pub fn parse_duration(text: &str) -> Result<Duration> {
    let text = text.trim();
    if text.is_empty() {
        bail!("duration is empty");
    }

    let mut total = Duration::ZERO;
    let mut rest = text;
    while !rest.is_empty() {
        let Some(digits_end) = rest.find(|c: char| !c.is_ascii_digit()) else {
            bail!("missing unit in duration {text:?}");
        };
        if digits_end == 0 {
            bail!("invalid duration {text:?}");
        }
        let (digits, tail) = rest.split_at(digits_end);
        let Ok(value) = digits.parse::<u64>() else {
            bail!("invalid duration {text:?}");
        };

        let (span, tail) = if let Some(tail) = tail.strip_prefix("ms") {
            (Duration::from_millis(value), tail)
        } else if let Some(tail) = tail.strip_prefix('s') {
            (Duration::from_secs(value), tail)
        } else if let Some(tail) = tail.strip_prefix('m') {
            (Duration::from_secs(value * 60), tail)
        } else if let Some(tail) = tail.strip_prefix('h') {
            (Duration::from_secs(value * 3600), tail)
        } else {
            bail!("unknown unit in duration {text:?}");
        };
        total += span;
        rest = tail;
    }
    Ok(total)
}

pub fn format_timestamp(ts: &prost_types::Timestamp) -> Option<String> {
    let nanos = (ts.seconds as i128) * 1_000_000_000 + ts.nanos as i128;
    let odt = OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()?;
    odt.format(&Rfc3339).ok()
}

/// Render an API timestamp as an RFC 3339 state string.
pub fn timestamp_value(ts: &Option<prost_types::Timestamp>) -> ValueString<'static> {
    match ts.as_ref().and_then(format_timestamp) {
        Some(text) => Value::Value(Cow::Owned(text)),
        None => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_unit_durations() {
        assert_eq!(parse_duration("300ms").unwrap(), Duration::from_millis(300));
        assert_eq!(parse_duration("90s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("3m").unwrap(), Duration::from_secs(180));
        assert_eq!(parse_duration("2h").unwrap(), Duration::from_secs(7200));
    }

    #[test]
    fn parses_compound_durations() {
        assert_eq!(parse_duration("1h30m").unwrap(), Duration::from_secs(5400));
        assert_eq!(
            parse_duration("1m30s500ms").unwrap(),
            Duration::from_millis(90_500)
        );
    }

    #[test]
    fn rejects_malformed_durations() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("10").is_err());
        assert!(parse_duration("m10").is_err());
        assert!(parse_duration("10x").is_err());
        assert!(parse_duration("10s5").is_err());
    }

    #[test]
    fn timeouts_fall_back_to_defaults() {
        let timeouts = TimeoutsState {
            create: Value::Value("10m".into()),
            update: Value::Null,
            delete: Value::Unknown,
        };
        let default = Duration::from_secs(300);
        assert_eq!(timeouts.create_timeout(default), Duration::from_secs(600));
        assert_eq!(timeouts.update_timeout(default), default);
        assert_eq!(timeouts.delete_timeout(default), default);

        let wrapped = Value::Value(timeouts);
        assert_eq!(wrapped.create_timeout(default), Duration::from_secs(600));
        assert_eq!(Value::<TimeoutsState>::Null.create_timeout(default), default);
    }

    #[test]
    fn formats_timestamps_as_rfc3339() {
        let ts = prost_types::Timestamp {
            seconds: 1_700_000_000,
            nanos: 0,
        };
        assert_eq!(format_timestamp(&ts).unwrap(), "2023-11-14T22:13:20Z");
        assert_eq!(
            timestamp_value(&Some(ts)),
            Value::Value(std::borrow::Cow::Borrowed("2023-11-14T22:13:20Z"))
        );
        assert!(timestamp_value(&None).is_null());
    }
}
