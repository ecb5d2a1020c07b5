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
use tf_provider::schema::Description;
use tf_provider::{map, AttributePath, Diagnostics};

use crate::proto::cirrus::cloud::query::v1 as query;
use crate::proto::cirrus::cloud::query::v1::{binding_setting, connection_setting};
use crate::utils::{required_string, string_value};

use super::state::{columns_block, ColumnState};
use super::strategy::{BindingStrategy, ConnectionStrategy};
use super::{
    expand_columns, expand_compression, expand_format, pack_columns, pack_compression, pack_format,
};

#[derive(Debug, Default, Clone)]
pub struct ConnectionDataStreams {}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataStreamsConnectionSettings<'a> {
    #[serde(borrow)]
    pub database_id: ValueString<'a>,
    #[serde(borrow)]
    pub service_account_id: ValueString<'a>,
}

impl ConnectionStrategy for ConnectionDataStreams {
    const NAME: &'static str = "data streams";

    type Settings<'a> = DataStreamsConnectionSettings<'a>;

    fn settings_block() -> Block {
        Block {
            attributes: map! {
                "database_id" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Database backing the streams"),
                    constraint: AttributeConstraint::Required,
                    ..Default::default()
                },
                "service_account_id" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Service account used to read the streams"),
                    constraint: AttributeConstraint::Optional,
                    ..Default::default()
                },
            },
            description: Description::plain("Data streams connection settings"),
            ..Default::default()
        }
    }

    fn expand_setting(
        settings: &Self::Settings<'_>,
        diags: &mut Diagnostics,
        attr_path: AttributePath,
    ) -> Option<connection_setting::Connection> {
        let database_id = required_string(
            &settings.database_id,
            diags,
            attr_path.attribute("database_id"),
            "database_id",
        )?;
        Some(connection_setting::Connection::DataStreams(
            query::DataStreamsConnection {
                database_id,
                service_account_id: settings.service_account_id.as_str().to_owned(),
            },
        ))
    }

    fn pack_to_state<'a>(
        setting: &connection_setting::Connection,
        diags: &mut Diagnostics,
    ) -> Option<Self::Settings<'a>> {
        let connection_setting::Connection::DataStreams(setting) = setting else {
            diags.root_error(
                "Unexpected connection payload",
                "The remote connection is not a data streams connection.",
            );
            return None;
        };
        Some(DataStreamsConnectionSettings {
            database_id: Value::Value(setting.database_id.clone().into()),
            service_account_id: string_value(setting.service_account_id.clone(), &Value::Null),
        })
    }

    fn matches(setting: &connection_setting::Connection) -> bool {
        matches!(setting, connection_setting::Connection::DataStreams(_))
    }
}

#[derive(Debug, Default, Clone)]
pub struct BindingDataStreams {}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataStreamsBindingSettings<'a> {
    #[serde(borrow)]
    pub stream_name: ValueString<'a>,
    #[serde(borrow)]
    pub format: ValueString<'a>,
    #[serde(borrow)]
    pub compression: ValueString<'a>,
    #[serde(borrow)]
    pub column: ValueList<Value<ColumnState<'a>>>,
}

impl BindingStrategy for BindingDataStreams {
    const NAME: &'static str = "data streams";

    type Settings<'a> = DataStreamsBindingSettings<'a>;

    fn settings_block() -> Block {
        Block {
            attributes: map! {
                "stream_name" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Stream to bind"),
                    constraint: AttributeConstraint::Required,
                    ..Default::default()
                },
                "format" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Data format (e.g. `json_each_row`)"),
                    constraint: AttributeConstraint::Optional,
                    ..Default::default()
                },
                "compression" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Compression method"),
                    constraint: AttributeConstraint::Optional,
                    ..Default::default()
                },
            },
            blocks: map! {
                "column" => columns_block(),
            },
            description: Description::plain("Data streams binding settings"),
            ..Default::default()
        }
    }

    fn expand_setting(
        settings: &Self::Settings<'_>,
        diags: &mut Diagnostics,
        attr_path: AttributePath,
    ) -> Option<binding_setting::Binding> {
        let stream_name = required_string(
            &settings.stream_name,
            diags,
            attr_path.clone().attribute("stream_name"),
            "stream_name",
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
        Some(binding_setting::Binding::DataStreams(
            query::DataStreamsBinding {
                stream_name,
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
        let binding_setting::Binding::DataStreams(setting) = setting else {
            diags.root_error(
                "Unexpected binding payload",
                "The remote binding is not a data streams binding.",
            );
            return None;
        };
        Some(DataStreamsBindingSettings {
            stream_name: Value::Value(setting.stream_name.clone().into()),
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
    use super::*;

    #[test]
    fn connection_settings_round_trip() {
        let mut diags = Diagnostics::default();
        let settings = DataStreamsConnectionSettings {
            database_id: Value::Value("db-9".into()),
            service_account_id: Value::Null,
        };
        let setting = ConnectionDataStreams::expand_setting(
            &settings,
            &mut diags,
            AttributePath::new("settings"),
        )
        .unwrap();
        assert!(ConnectionDataStreams::matches(&setting));
        assert!(!super::super::ConnectionObjectStorage::matches(&setting));

        let packed = ConnectionDataStreams::pack_to_state(&setting, &mut diags).unwrap();
        assert_eq!(packed, settings);
        assert!(diags.errors.is_empty());
    }

    #[test]
    fn pack_rejects_other_flavors() {
        let mut diags = Diagnostics::default();
        let setting = connection_setting::Connection::Ydb(query::YdbConnection {
            database_id: "db".into(),
            service_account_id: String::new(),
        });
        assert!(ConnectionDataStreams::pack_to_state(&setting, &mut diags).is_none());
        assert!(!diags.errors.is_empty());
    }

    #[test]
    fn binding_settings_round_trip() {
        let mut diags = Diagnostics::default();
        let settings = DataStreamsBindingSettings {
            stream_name: Value::Value("events".into()),
            format: Value::Value("json_each_row".into()),
            compression: Value::Value("zstd".into()),
            column: Value::Value(vec![Value::Value(ColumnState {
                name: Value::Value("event_id".into()),
                r#type: Value::Value("String".into()),
                not_null: Value::Value(true),
            })]),
        };
        let setting = BindingDataStreams::expand_setting(
            &settings,
            &mut diags,
            AttributePath::new("settings"),
        )
        .unwrap();
        let packed = BindingDataStreams::pack_to_state(&setting, &mut diags).unwrap();
        assert_eq!(packed, settings);
        assert!(diags.errors.is_empty());
    }
}
