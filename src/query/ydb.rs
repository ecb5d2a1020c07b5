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
use tf_provider::value::{Value, ValueString};
use tf_provider::{map, AttributePath, Description, Diagnostics};

use crate::proto::cirrus::cloud::query::v1 as query;
use crate::proto::cirrus::cloud::query::v1::connection_setting;
use crate::utils::{required_string, string_value};

use super::strategy::ConnectionStrategy;

#[derive(Debug, Default, Clone)]
pub struct ConnectionYdb {}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct YdbConnectionSettings<'a> {
    #[serde(borrow)]
    pub database_id: ValueString<'a>,
    #[serde(borrow)]
    pub service_account_id: ValueString<'a>,
}

impl ConnectionStrategy for ConnectionYdb {
    const NAME: &'static str = "YDB";

    type Settings<'a> = YdbConnectionSettings<'a>;

    fn settings_block() -> Block {
        Block {
            attributes: map! {
                "database_id" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("YDB database to expose"),
                    constraint: AttributeConstraint::Required,
                    ..Default::default()
                },
                "service_account_id" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Service account used to reach the database"),
                    constraint: AttributeConstraint::Optional,
                    ..Default::default()
                },
            },
            description: Description::plain("YDB connection settings"),
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
        Some(connection_setting::Connection::Ydb(query::YdbConnection {
            database_id,
            service_account_id: settings.service_account_id.as_str().to_owned(),
        }))
    }

    fn pack_to_state<'a>(
        setting: &connection_setting::Connection,
        diags: &mut Diagnostics,
    ) -> Option<Self::Settings<'a>> {
        let connection_setting::Connection::Ydb(setting) = setting else {
            diags.root_error(
                "Unexpected connection payload",
                "The remote connection is not a YDB connection.",
            );
            return None;
        };
        Some(YdbConnectionSettings {
            database_id: Value::Value(setting.database_id.clone().into()),
            service_account_id: string_value(setting.service_account_id.clone(), &Value::Null),
        })
    }

    fn matches(setting: &connection_setting::Connection) -> bool {
        matches!(setting, connection_setting::Connection::Ydb(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip() {
        let mut diags = Diagnostics::default();
        let settings = YdbConnectionSettings {
            database_id: Value::Value("ydb-1".into()),
            service_account_id: Value::Value("sa-3".into()),
        };
        let setting =
            ConnectionYdb::expand_setting(&settings, &mut diags, AttributePath::new("settings"))
                .unwrap();
        let packed = ConnectionYdb::pack_to_state(&setting, &mut diags).unwrap();
        assert_eq!(packed, settings);
        assert!(diags.errors.is_empty());
    }
}
