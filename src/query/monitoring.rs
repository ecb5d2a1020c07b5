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
use crate::utils::string_value;

use super::strategy::ConnectionStrategy;

#[derive(Debug, Default, Clone)]
pub struct ConnectionMonitoring {}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringConnectionSettings<'a> {
    /// Folder whose metrics are queried; the connection folder when omitted.
    #[serde(borrow)]
    pub folder_id: ValueString<'a>,
    #[serde(borrow)]
    pub service_account_id: ValueString<'a>,
}

impl ConnectionStrategy for ConnectionMonitoring {
    const NAME: &'static str = "monitoring";

    type Settings<'a> = MonitoringConnectionSettings<'a>;

    fn settings_block() -> Block {
        Block {
            attributes: map! {
                "folder_id" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Folder whose metrics are queried"),
                    constraint: AttributeConstraint::Optional,
                    ..Default::default()
                },
                "service_account_id" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Service account used to read metrics"),
                    constraint: AttributeConstraint::Optional,
                    ..Default::default()
                },
            },
            description: Description::plain("Monitoring connection settings"),
            ..Default::default()
        }
    }

    fn expand_setting(
        settings: &Self::Settings<'_>,
        _diags: &mut Diagnostics,
        _attr_path: AttributePath,
    ) -> Option<connection_setting::Connection> {
        Some(connection_setting::Connection::Monitoring(
            query::MonitoringConnection {
                folder_id: settings.folder_id.as_str().to_owned(),
                service_account_id: settings.service_account_id.as_str().to_owned(),
            },
        ))
    }

    fn pack_to_state<'a>(
        setting: &connection_setting::Connection,
        diags: &mut Diagnostics,
    ) -> Option<Self::Settings<'a>> {
        let connection_setting::Connection::Monitoring(setting) = setting else {
            diags.root_error(
                "Unexpected connection payload",
                "The remote connection is not a monitoring connection.",
            );
            return None;
        };
        Some(MonitoringConnectionSettings {
            folder_id: string_value(setting.folder_id.clone(), &Value::Null),
            service_account_id: string_value(setting.service_account_id.clone(), &Value::Null),
        })
    }

    fn matches(setting: &connection_setting::Connection) -> bool {
        matches!(setting, connection_setting::Connection::Monitoring(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip() {
        let mut diags = Diagnostics::default();
        let settings = MonitoringConnectionSettings {
            folder_id: Value::Null,
            service_account_id: Value::Value("sa-5".into()),
        };
        let setting = ConnectionMonitoring::expand_setting(
            &settings,
            &mut diags,
            AttributePath::new("settings"),
        )
        .unwrap();
        let packed = ConnectionMonitoring::pack_to_state(&setting, &mut diags).unwrap();
        assert_eq!(packed, settings);
        assert!(diags.errors.is_empty());
    }
}
