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

use tf_provider::value::{Value, ValueList, ValueString};
use tf_provider::{AttributePath, Diagnostics};

use crate::proto::cirrus::cloud::query::v1 as query;
use crate::proto::cirrus::cloud::query::v1::{Compression, Format};

mod binding;
mod connection;
mod data_streams;
mod monitoring;
mod object_storage;
mod state;
mod strategy;
mod ydb;

pub use binding::QueryBindingResource;
pub use connection::{QueryConnectionDataSource, QueryConnectionResource};
pub use data_streams::{BindingDataStreams, ConnectionDataStreams};
pub use monitoring::ConnectionMonitoring;
pub use object_storage::{BindingObjectStorage, ConnectionObjectStorage};
pub use state::ColumnState;
pub use strategy::{BindingStrategy, ConnectionStrategy};
pub use ydb::ConnectionYdb;

// Formats and compressions are written lower-snake in the configuration
// ("csv_with_names", "gzip") and map onto the protobuf enum names.

pub(crate) fn expand_format(
    value: &ValueString,
    diags: &mut Diagnostics,
    attr_path: AttributePath,
) -> Option<i32> {
    match value.as_deref_option() {
        None => Some(Format::Unspecified as i32),
        Some(text) => match Format::from_str_name(&text.to_ascii_uppercase()) {
            Some(format) if format != Format::Unspecified => Some(format as i32),
            _ => {
                diags.error(
                    "Unsupported format",
                    format!("{text:?} is not a supported binding format"),
                    attr_path,
                );
                None
            }
        },
    }
}

pub(crate) fn pack_format(format: i32) -> ValueString<'static> {
    match Format::try_from(format) {
        Ok(Format::Unspecified) | Err(_) => Value::Null,
        Ok(format) => Value::Value(Cow::Owned(format.as_str_name().to_ascii_lowercase())),
    }
}

pub(crate) fn expand_compression(
    value: &ValueString,
    diags: &mut Diagnostics,
    attr_path: AttributePath,
) -> Option<i32> {
    match value.as_deref_option() {
        None => Some(Compression::Unspecified as i32),
        Some(text) => match Compression::from_str_name(&text.to_ascii_uppercase()) {
            Some(compression) if compression != Compression::Unspecified => {
                Some(compression as i32)
            }
            _ => {
                diags.error(
                    "Unsupported compression",
                    format!("{text:?} is not a supported compression method"),
                    attr_path,
                );
                None
            }
        },
    }
}

pub(crate) fn pack_compression(compression: i32) -> ValueString<'static> {
    match Compression::try_from(compression) {
        Ok(Compression::Unspecified) | Err(_) => Value::Null,
        Ok(compression) => Value::Value(Cow::Owned(compression.as_str_name().to_ascii_lowercase())),
    }
}

pub(crate) fn expand_columns(
    columns: &ValueList<Value<ColumnState<'_>>>,
    diags: &mut Diagnostics,
    attr_path: &AttributePath,
) -> Option<Option<query::Schema>> {
    let Some(columns) = columns.as_ref() else {
        return Some(None);
    };
    if columns.is_empty() {
        return Some(None);
    }

    let mut expanded = Vec::with_capacity(columns.len());
    for (i, column) in columns.iter().enumerate() {
        let path = attr_path.clone().index(i as i64);
        let Some(column) = column.as_ref() else {
            diags.error_short("Column must not be null", path);
            return None;
        };
        let name = column.name.as_str();
        if name.is_empty() {
            diags.error_short("Column name is required", path.attribute("name"));
            return None;
        }
        let column_type = column.r#type.as_str();
        if column_type.is_empty() {
            diags.error_short("Column type is required", path.attribute("type"));
            return None;
        }
        expanded.push(query::Column {
            name: name.to_owned(),
            r#type: column_type.to_owned(),
            not_null: column.not_null.as_ref().map_or(false, |not_null| *not_null),
        });
    }
    Some(Some(query::Schema { columns: expanded }))
}

pub(crate) fn pack_columns(
    schema: &Option<query::Schema>,
) -> ValueList<Value<ColumnState<'static>>> {
    let Some(schema) = schema else {
        return Value::Null;
    };
    if schema.columns.is_empty() {
        return Value::Null;
    }
    Value::Value(
        schema
            .columns
            .iter()
            .map(|column| {
                Value::Value(ColumnState {
                    name: Value::Value(Cow::Owned(column.name.clone())),
                    r#type: Value::Value(Cow::Owned(column.r#type.clone())),
                    not_null: Value::Value(column.not_null),
                })
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_round_trip() {
        for format in [
            Format::CsvWithNames,
            Format::TsvWithNames,
            Format::JsonEachRow,
            Format::JsonList,
            Format::Parquet,
            Format::Raw,
        ] {
            let mut diags = Diagnostics::default();
            let name = pack_format(format as i32);
            let expanded =
                expand_format(&name, &mut diags, AttributePath::new("format")).unwrap();
            assert_eq!(expanded, format as i32);
            assert!(diags.errors.is_empty());
        }
    }

    #[test]
    fn compression_names_round_trip() {
        for compression in [
            Compression::None,
            Compression::Gzip,
            Compression::Zstd,
            Compression::Lz4,
            Compression::Brotli,
            Compression::Bzip2,
        ] {
            let mut diags = Diagnostics::default();
            let name = pack_compression(compression as i32);
            let expanded =
                expand_compression(&name, &mut diags, AttributePath::new("compression")).unwrap();
            assert_eq!(expanded, compression as i32);
            assert!(diags.errors.is_empty());
        }
    }

    #[test]
    fn null_format_expands_to_unspecified() {
        let mut diags = Diagnostics::default();
        let expanded =
            expand_format(&Value::Null, &mut diags, AttributePath::new("format")).unwrap();
        assert_eq!(expanded, Format::Unspecified as i32);
        assert!(pack_format(expanded).is_null());
    }

    #[test]
    fn unknown_format_is_rejected() {
        let mut diags = Diagnostics::default();
        let result = expand_format(
            &Value::Value("avro".into()),
            &mut diags,
            AttributePath::new("format"),
        );
        assert!(result.is_none());
        assert!(!diags.errors.is_empty());
    }
}
