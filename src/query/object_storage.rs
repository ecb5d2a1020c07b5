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

use serde::{Deserialize, Serialize};

use tf_provider::schema::{Attribute, AttributeConstraint, AttributeType, Block};
use tf_provider::value::{Value, ValueList, ValueString};
use tf_provider::{map, AttributePath, Description, Diagnostics};

use crate::proto::cirrus::cloud::query::v1 as query;
use crate::proto::cirrus::cloud::query::v1::{binding_setting, connection_setting};
use crate::utils::{required_string, string_value};

use super::state::{columns_block, ColumnState};
use super::strategy::{BindingStrategy, ConnectionStrategy};
use super::{
    expand_columns, expand_compression, expand_format, pack_columns, pack_compression, pack_format,
};

#[derive(Debug, Default, Clone)]
pub struct ConnectionObjectStorage {}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectStorageConnectionSettings<'a> {
    #[serde(borrow)]
    pub bucket: ValueString<'a>,
    #[serde(borrow)]
    pub service_account_id: ValueString<'a>,
}

impl ConnectionStrategy for ConnectionObjectStorage {
    const NAME: &'static str = "object storage";

    type Settings<'a> = ObjectStorageConnectionSettings<'a>;

    fn settings_block() -> Block {
        Block {
            attributes: map! {
                "bucket" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Object storage bucket to expose"),
                    constraint: AttributeConstraint::Required,
                    ..Default::default()
                },
                "service_account_id" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Service account used to reach the bucket"),
                    constraint: AttributeConstraint::Optional,
                    ..Default::default()
                },
            },
            description: Description::plain("Object storage connection settings"),
            ..Default::default()
        }
    }

    fn expand_setting(
        settings: &Self::Settings<'_>,
        diags: &mut Diagnostics,
        attr_path: AttributePath,
    ) -> Option<connection_setting::Connection> {
        let bucket = required_string(
            &settings.bucket,
            diags,
            attr_path.attribute("bucket"),
            "bucket",
        )?;
        Some(connection_setting::Connection::ObjectStorage(
            query::ObjectStorageConnection {
                bucket,
                service_account_id: settings.service_account_id.as_str().to_owned(),
            },
        ))
    }

    fn pack_to_state<'a>(
        setting: &connection_setting::Connection,
        diags: &mut Diagnostics,
    ) -> Option<Self::Settings<'a>> {
        let connection_setting::Connection::ObjectStorage(setting) = setting else {
            diags.root_error(
                "Unexpected connection payload",
                "The remote connection is not an object storage connection.",
            );
            return None;
        };
        Some(ObjectStorageConnectionSettings {
            bucket: Value::Value(setting.bucket.clone().into()),
            service_account_id: string_value(setting.service_account_id.clone(), &Value::Null),
        })
    }

    fn matches(setting: &connection_setting::Connection) -> bool {
        matches!(setting, connection_setting::Connection::ObjectStorage(_))
    }
}

#[derive(Debug, Default, Clone)]
pub struct BindingObjectStorage {}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectStorageBindingSettings<'a> {
    #[serde(borrow)]
    pub path_pattern: ValueString<'a>,
    #[serde(borrow)]
    pub format: ValueString<'a>,
    #[serde(borrow)]
    pub compression: ValueString<'a>,
    #[serde(borrow)]
    pub column: ValueList<Value<ColumnState<'a>>>,
}

impl BindingStrategy for BindingObjectStorage {
    const NAME: &'static str = "object storage";

    type Settings<'a> = ObjectStorageBindingSettings<'a>;

    fn settings_block() -> Block {
        Block {
            attributes: map! {
                "path_pattern" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Object key pattern selecting the bound data"),
                    constraint: AttributeConstraint::Required,
                    ..Default::default()
                },
                "format" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Data format (e.g. `csv_with_names`, `parquet`)"),
                    constraint: AttributeConstraint::Optional,
                    ..Default::default()
                },
                "compression" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Compression method (e.g. `gzip`)"),
                    constraint: AttributeConstraint::Optional,
                    ..Default::default()
                },
            },
            blocks: map! {
                "column" => columns_block(),
            },
            description: Description::plain("Object storage binding settings"),
            ..Default::default()
        }
    }

    fn expand_setting(
        settings: &Self::Settings<'_>,
        diags: &mut Diagnostics,
        attr_path: AttributePath,
    ) -> Option<binding_setting::Binding> {
        let path_pattern = required_string(
            &settings.path_pattern,
            diags,
            attr_path.clone().attribute("path_pattern"),
            "path_pattern",
        )?;
        let format = expand_format(
            &settings.format,
            diags,
            attr_path.clone().attribute("format"),
        )?;
        let compression = expand_compression(
            &settings.compression,
            diags,
            attr_path.clone().attribute("compression"),
        )?;
        let schema = expand_columns(&settings.column, diags, &attr_path.attribute("column"))?;
        Some(binding_setting::Binding::ObjectStorage(
            query::ObjectStorageBinding {
                path_pattern,
                format,
                compression,
                schema,
            },
        ))
    }

    fn pack_to_state<'a>(
        setting: &binding_setting::Binding,
        diags: &mut Diagnostics,
    ) -> Option<Self::Settings<'a>> {
        let binding_setting::Binding::ObjectStorage(setting) = setting else {
            diags.root_error(
                "Unexpected binding payload",
                "The remote binding is not an object storage binding.",
            );
            return None;
        };
        Some(ObjectStorageBindingSettings {
            path_pattern: Value::Value(setting.path_pattern.clone().into()),
            format: pack_format(setting.format),
            compression: pack_compression(setting.compression),
            column: pack_columns(&setting.schema),
        })
    }

    fn validate_settings(
        settings: &Self::Settings<'_>,
        diags: &mut Diagnostics,
        attr_path: AttributePath,
    ) {
        _ = expand_format(
            &settings.format,
            diags,
            attr_path.clone().attribute("format"),
        );
        _ = expand_compression(
            &settings.compression,
            diags,
            attr_path.attribute("compression"),
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::proto::cirrus::cloud::query::v1::{Compression, Format};

    use super::*;

    #[test]
    fn connection_settings_round_trip() {
        let mut diags = Diagnostics::default();
        let settings = ObjectStorageConnectionSettings {
            bucket: Value::Value("telemetry".into()),
            service_account_id: Value::Value("sa-17".into()),
        };
        let setting = ConnectionObjectStorage::expand_setting(
            &settings,
            &mut diags,
            AttributePath::new("settings"),
        )
        .unwrap();
        assert!(ConnectionObjectStorage::matches(&setting));

        let packed = ConnectionObjectStorage::pack_to_state(&setting, &mut diags).unwrap();
        assert_eq!(packed, settings);
        assert!(diags.errors.is_empty());
    }

    #[test]
    fn connection_requires_bucket() {
        let mut diags = Diagnostics::default();
        let settings = ObjectStorageConnectionSettings::default();
        let setting = ConnectionObjectStorage::expand_setting(
            &settings,
            &mut diags,
            AttributePath::new("settings"),
        );
        assert!(setting.is_none());
        assert!(!diags.errors.is_empty());
    }

    #[test]
    fn binding_settings_round_trip_for_every_format_and_compression() {
        let formats = [
            Format::CsvWithNames,
            Format::TsvWithNames,
            Format::JsonEachRow,
            Format::JsonList,
            Format::Parquet,
            Format::Raw,
        ];
        let compressions = [
            Compression::None,
            Compression::Gzip,
            Compression::Zstd,
            Compression::Lz4,
            Compression::Brotli,
            Compression::Bzip2,
        ];

        for format in formats {
            for compression in compressions {
                let mut diags = Diagnostics::default();
                let settings = ObjectStorageBindingSettings {
                    path_pattern: Value::Value("logs/*.dat".into()),
                    format: Value::Value(format.as_str_name().to_ascii_lowercase().into()),
                    compression: Value::Value(
                        compression.as_str_name().to_ascii_lowercase().into(),
                    ),
                    column: Value::Value(vec![
                        Value::Value(ColumnState {
                            name: Value::Value("ts".into()),
                            r#type: Value::Value("Timestamp".into()),
                            not_null: Value::Value(true),
                        }),
                        Value::Value(ColumnState {
                            name: Value::Value("payload".into()),
                            r#type: Value::Value("String".into()),
                            not_null: Value::Value(false),
                        }),
                    ]),
                };

                let setting = BindingObjectStorage::expand_setting(
                    &settings,
                    &mut diags,
                    AttributePath::new("settings"),
                )
                .unwrap();
                let packed = BindingObjectStorage::pack_to_state(&setting, &mut diags).unwrap();
                assert_eq!(packed, settings);
                assert!(diags.errors.is_empty());
            }
        }
    }

    #[test]
    fn binding_without_schema_keeps_columns_null() {
        let mut diags = Diagnostics::default();
        let settings = ObjectStorageBindingSettings {
            path_pattern: Value::Value("raw/*".into()),
            format: Value::Null,
            compression: Value::Null,
            column: Value::Null,
        };
        let setting = BindingObjectStorage::expand_setting(
            &settings,
            &mut diags,
            AttributePath::new("settings"),
        )
        .unwrap();
        let packed = BindingObjectStorage::pack_to_state(&setting, &mut diags).unwrap();
        assert_eq!(packed, settings);
        assert!(diags.errors.is_empty());
    }

    #[test]
    fn binding_rejects_unknown_format() {
        let mut diags = Diagnostics::default();
        let settings = ObjectStorageBindingSettings {
            path_pattern: Value::Value("raw/*".into()),
            format: Value::Value("avro".into()),
            compression: Value::Null,
            column: Value::Null,
        };
        assert!(BindingObjectStorage::expand_setting(
            &settings,
            &mut diags,
            AttributePath::new("settings"),
        )
        .is_none());
        assert!(!diags.errors.is_empty());
    }
}
