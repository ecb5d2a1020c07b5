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

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use tf_provider::schema::{Attribute, AttributeConstraint, AttributeType, Block};
use tf_provider::value::{Value, ValueBool, ValueEmpty, ValueString};
use tf_provider::schema::{Description, Schema};
use tf_provider::{map, Provider};

use crate::api::{Auth, Cloud, CloudHandle, DEFAULT_ENDPOINT};
use crate::query::{
    BindingDataStreams, BindingObjectStorage, ConnectionDataStreams, ConnectionMonitoring,
    ConnectionObjectStorage, ConnectionYdb, QueryBindingResource, QueryConnectionDataSource,
    QueryConnectionResource,
};
use crate::spark::{SparkClusterDataSource, SparkClusterResource};
use crate::vpc::SecurityGroupRuleResource;

#[derive(Debug, Default, Clone)]
pub struct CirrusProvider {
    cloud: Arc<CloudHandle>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig<'a> {
    #[serde(borrow)]
    pub token: ValueString<'a>,
    #[serde(borrow)]
    pub iam_token: ValueString<'a>,
    #[serde(borrow)]
    pub endpoint: ValueString<'a>,
    #[serde(borrow)]
    pub folder_id: ValueString<'a>,
    pub insecure: ValueBool,
}

#[async_trait]
impl Provider for CirrusProvider {
    type Config<'a> = Value<ProviderConfig<'a>>;
    type MetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut tf_provider::Diagnostics) -> Option<Schema> {
        Some(Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "token" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("OAuth token, exchanged for an IAM token on configure"),
                        constraint: AttributeConstraint::Optional,
                        sensitive: true,
                        ..Default::default()
                    },
                    "iam_token" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("IAM token used as-is (takes precedence over `token`)"),
                        constraint: AttributeConstraint::Optional,
                        sensitive: true,
                        ..Default::default()
                    },
                    "endpoint" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Control-plane endpoint"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "folder_id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Default folder for resources that do not set one"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "insecure" => Attribute {
                        attr_type: AttributeType::Bool,
                        description: Description::plain("Connect without TLS"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                },
                description: Description::plain("Cirrus cloud provider"),
                ..Default::default()
            },
        })
    }

    async fn validate<'a>(
        &self,
        diags: &mut tf_provider::Diagnostics,
        config: Self::Config<'a>,
    ) -> Option<()> {
        if let Value::Value(config) = &config {
            if let Some(endpoint) = config.endpoint.as_deref_option() {
                if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                    diags.error_short(
                        "`endpoint` must be an http(s) URL",
                        tf_provider::AttributePath::new("endpoint"),
                    );
                }
            }
        }
        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn configure<'a>(
        &self,
        diags: &mut tf_provider::Diagnostics,
        _terraform_version: String,
        config: Self::Config<'a>,
    ) -> Option<()> {
        let empty = ProviderConfig::default();
        let config = config.as_ref().unwrap_or(&empty);

        let endpoint = config
            .endpoint
            .as_deref_option()
            .unwrap_or(DEFAULT_ENDPOINT);
        let insecure = config.insecure.as_ref().map_or(false, |insecure| *insecure);
        let folder_id = config
            .folder_id
            .as_deref_option()
            .filter(|folder| !folder.is_empty())
            .map(str::to_owned);

        let auth = if let Some(token) = config.iam_token.as_deref_option() {
            Auth::IamToken(token)
        } else if let Some(token) = config.token.as_deref_option() {
            Auth::OauthToken(token)
        } else {
            diags.root_error(
                "Missing credentials",
                "Either `token` or `iam_token` must be set in the provider block.",
            );
            return None;
        };

        match Cloud::connect(endpoint, auth, folder_id, insecure).await {
            Ok(cloud) => {
                self.cloud.set(cloud);
                Some(())
            }
            Err(err) => {
                diags.root_error("Failed to configure the Cirrus provider", format!("{err:#}"));
                None
            }
        }
    }

    fn get_resources(
        &self,
        _diags: &mut tf_provider::Diagnostics,
    ) -> Option<std::collections::HashMap<String, Box<dyn tf_provider::DynamicResource>>>
    {
        Some(map! {
            "spark_cluster" => SparkClusterResource::new(self.cloud.clone()),
            "vpc_security_group_rule" => SecurityGroupRuleResource::new(self.cloud.clone()),
            "query_object_storage_connection" =>
                QueryConnectionResource::<ConnectionObjectStorage>::new(self.cloud.clone()),
            "query_data_streams_connection" =>
                QueryConnectionResource::<ConnectionDataStreams>::new(self.cloud.clone()),
            "query_ydb_connection" =>
                QueryConnectionResource::<ConnectionYdb>::new(self.cloud.clone()),
            "query_monitoring_connection" =>
                QueryConnectionResource::<ConnectionMonitoring>::new(self.cloud.clone()),
            "query_object_storage_binding" =>
                QueryBindingResource::<BindingObjectStorage>::new(self.cloud.clone()),
            "query_data_streams_binding" =>
                QueryBindingResource::<BindingDataStreams>::new(self.cloud.clone()),
        })
    }

    fn get_data_sources(
        &self,
        _diags: &mut tf_provider::Diagnostics,
    ) -> Option<
        std::collections::HashMap<String, Box<dyn tf_provider::DynamicDataSource>>,
    > {
        Some(map! {
            "spark_cluster" => SparkClusterDataSource::new(self.cloud.clone()),
            "query_object_storage_connection" =>
                QueryConnectionDataSource::<ConnectionObjectStorage>::new(self.cloud.clone()),
            "query_data_streams_connection" =>
                QueryConnectionDataSource::<ConnectionDataStreams>::new(self.cloud.clone()),
            "query_ydb_connection" =>
                QueryConnectionDataSource::<ConnectionYdb>::new(self.cloud.clone()),
            "query_monitoring_connection" =>
                QueryConnectionDataSource::<ConnectionMonitoring>::new(self.cloud.clone()),
        })
    }
}
