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
use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;

use tf_provider::value::{Value, ValueEmpty};
use tf_provider::{AttributePath, DataSource, Diagnostics, Schema};

use crate::api::{Cloud, CloudHandle};
use crate::proto::cirrus::cloud::spark::v1::ListClustersRequest;
use crate::resolver;
use crate::utils::{required_string, string_value, timestamp_value};

use super::convert::flatten_status;
use super::resource::read_cluster;
use super::state::{data_source_schema, ClusterDataState};

#[derive(Debug)]
pub struct SparkClusterDataSource {
    cloud: Arc<CloudHandle>,
}

impl SparkClusterDataSource {
    pub fn new(cloud: Arc<CloudHandle>) -> Self {
        Self { cloud }
    }
}

#[async_trait]
impl DataSource for SparkClusterDataSource {
    type State<'a> = Value<ClusterDataState<'a>>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(data_source_schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        if let Value::Value(state) = &config {
            if state.id.is_null() && state.name.is_null() {
                diags.root_error(
                    "Missing lookup key",
                    "Either `id` or `name` must be set to look up a cluster.",
                );
            }
        }
        if diags.errors.is_empty() {
            Some(())
        } else {
            None
        }
    }

    async fn read<'a>(
        &self,
        diags: &mut Diagnostics,
        config: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::State<'a>> {
        let Value::Value(state) = config else {
            diags.root_error("Failed to read cluster", "The configuration is empty.");
            return None;
        };
        let cloud = self.cloud.configured(diags)?;

        let id = match state.id.as_deref_option() {
            Some(id) if !id.is_empty() => id.to_owned(),
            _ => {
                let name = required_string(&state.name, diags, AttributePath::new("name"), "name")?;
                let folder_id = cloud.folder_for(&state.folder_id, diags)?;
                match lookup_cluster(cloud, &folder_id, &name).await {
                    Ok(id) => id,
                    Err(err) => {
                        diags.root_error("Failed to resolve cluster", err.to_string());
                        return None;
                    }
                }
            }
        };

        match read_cluster(cloud, &id).await {
            Ok(cluster) => {
                let labels = if cluster.labels.is_empty() {
                    Value::Null
                } else {
                    Value::Value(
                        cluster
                            .labels
                            .iter()
                            .map(|(key, value)| {
                                (
                                    Cow::Owned(key.clone()),
                                    Value::Value(Cow::Owned(value.clone())),
                                )
                            })
                            .collect(),
                    )
                };
                Some(Value::Value(ClusterDataState {
                    id: Value::Value(cluster.id.clone().into()),
                    folder_id: Value::Value(cluster.folder_id.clone().into()),
                    name: Value::Value(cluster.name.clone().into()),
                    description: string_value(cluster.description.clone(), &state.description),
                    labels,
                    status: flatten_status(cluster.status),
                    created_at: timestamp_value(&cluster.created_at),
                }))
            }
            Err(err) => {
                diags.root_error("Failed to read cluster", err.to_string());
                None
            }
        }
    }
}

async fn lookup_cluster(cloud: &Cloud, folder_id: &str, name: &str) -> anyhow::Result<String> {
    let response = cloud
        .clusters()
        .list(ListClustersRequest {
            folder_id: folder_id.to_owned(),
            page_size: 1000,
            page_token: String::new(),
            filter: resolver::name_filter(name),
        })
        .await
        .context("list call failed")?
        .into_inner();
    resolver::pick_by_name(
        "cluster",
        name,
        response
            .clusters
            .into_iter()
            .map(|cluster| resolver::NamedObject {
                id: cluster.id,
                name: cluster.name,
            }),
    )
}
