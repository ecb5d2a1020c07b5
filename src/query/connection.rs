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

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use tracing::info;

use tf_provider::schema::{Attribute, AttributeConstraint, AttributeType, Block};
use tf_provider::value::{Value, ValueEmpty};
use tf_provider::schema::{Description, Schema};
use tf_provider::{map, AttributePath, DataSource, Diagnostics, Resource};

use crate::api::{is_not_found, unpack_metadata, Cloud, CloudHandle};
use crate::proto::cirrus::cloud::query::v1 as query;
use crate::proto::cirrus::cloud::query::v1::{
    CreateConnectionMetadata, CreateConnectionRequest, DeleteConnectionRequest,
    GetConnectionRequest, ListConnectionsRequest, UpdateConnectionRequest,
};
use crate::resolver;
use crate::updatemask::UpdateMask;
use crate::utils::{
    required_string, string_value, timestamp_value, WithSchema, WithTimeouts, WithValidate,
};

use super::state::{ConnectionDataState, ConnectionState};
use super::strategy::ConnectionStrategy;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// CRUD implementation shared by every connection flavor.
#[derive(Debug)]
pub struct QueryConnectionResource<T: ConnectionStrategy> {
    cloud: Arc<CloudHandle>,
    strategy: PhantomData<T>,
}

impl<T: ConnectionStrategy> QueryConnectionResource<T> {
    pub fn new(cloud: Arc<CloudHandle>) -> Self {
        Self {
            cloud,
            strategy: PhantomData,
        }
    }
}

#[async_trait]
impl<T: ConnectionStrategy> Resource for QueryConnectionResource<T> {
    type State<'a> = Value<ConnectionState<'a, T>>;
    type PrivateState<'a> = ValueEmpty;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(ConnectionState::<T>::schema())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        if let Value::Value(state) = &config {
            state.validate(diags, Default::default()).await;
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
        state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let Value::Value(state) = state else {
            return Some((Value::Null, private_state));
        };
        let cloud = self.cloud.configured(diags)?;

        let id = state.id.as_str();
        if id.is_empty() {
            diags.root_error(
                "Cannot read connection",
                "The connection ID is missing from the state.",
            );
            return None;
        }

        match read_connection(cloud, id).await {
            Ok(connection) => {
                let new_state = flatten_connection::<T>(diags, &connection, &state)?;
                Some((Value::Value(new_state), private_state))
            }
            Err(err) if is_not_found(&err) => {
                diags.root_warning(
                    "Connection has vanished",
                    "The connection no longer exists remotely and will be removed from the state.",
                );
                Some((Value::Null, private_state))
            }
            Err(err) => {
                diags.root_error("Failed to read connection", err.to_string());
                None
            }
        }
    }

    async fn plan_create<'a>(
        &self,
        _diags: &mut Diagnostics,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let Value::Value(mut state) = proposed_state else {
            return Some((Value::Null, Default::default()));
        };
        state.id = Value::Unknown;
        state.created_at = Value::Unknown;
        if state.folder_id.is_null() {
            state.folder_id = Value::Unknown;
        }
        Some((Value::Value(state), Default::default()))
    }

    async fn plan_update<'a>(
        &self,
        _diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        proposed_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(
        Self::State<'a>,
        Self::PrivateState<'a>,
        Vec<tf_provider::AttributePath>,
    )> {
        let Value::Value(mut state) = proposed_state else {
            return Some((Value::Null, prior_private_state, vec![]));
        };
        let mut trigger_replace = Vec::new();
        if let Value::Value(prior) = &prior_state {
            state.id = prior.id.clone();
            state.created_at = prior.created_at.clone();
            if state.folder_id.is_null() {
                state.folder_id = prior.folder_id.clone();
            } else if !prior.folder_id.is_null() && state.folder_id != prior.folder_id {
                // Connections cannot move between folders.
                trigger_replace.push(AttributePath::new("folder_id"));
            }
        }
        Some((Value::Value(state), prior_private_state, trigger_replace))
    }

    async fn plan_destroy<'a>(
        &self,
        _diags: &mut Diagnostics,
        _prior_state: Self::State<'a>,
        prior_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<Self::PrivateState<'a>> {
        Some(prior_private_state)
    }

    async fn create<'a>(
        &self,
        diags: &mut Diagnostics,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let Value::Value(state) = planned_state else {
            diags.root_error("Failed to create connection", "The planned state is empty.");
            return None;
        };
        let cloud = self.cloud.configured(diags)?;

        let folder_id = cloud.folder_for(&state.folder_id, diags)?;
        let name = required_string(&state.name, diags, AttributePath::new("name"), "name")?;
        let Some(settings) = state.settings.as_ref() else {
            diags.error_short("`settings` block is required", AttributePath::new("settings"));
            return None;
        };
        let setting = T::expand_setting(settings, diags, AttributePath::new("settings"))?;
        let timeout = state.timeouts.create_timeout(DEFAULT_TIMEOUT);

        let request = CreateConnectionRequest {
            folder_id,
            name,
            description: state.description.as_str().to_owned(),
            setting: Some(query::ConnectionSetting {
                connection: Some(setting),
            }),
        };

        match create_connection(cloud, request, timeout).await {
            Ok(connection) => {
                info!(id = %connection.id, kind = T::NAME, "created query connection");
                let new_state = flatten_connection::<T>(diags, &connection, &state)?;
                Some((Value::Value(new_state), private_state))
            }
            Err(err) => {
                diags.root_error("Failed to create connection", err.to_string());
                None
            }
        }
    }

    async fn update<'a>(
        &self,
        diags: &mut Diagnostics,
        prior_state: Self::State<'a>,
        planned_state: Self::State<'a>,
        _config_state: Self::State<'a>,
        private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        let Value::Value(state) = planned_state else {
            diags.root_error("Failed to update connection", "The planned state is empty.");
            return None;
        };
        let Value::Value(prior) = prior_state else {
            diags.root_error("Failed to update connection", "The prior state is empty.");
            return None;
        };
        let cloud = self.cloud.configured(diags)?;

        let mut mask = UpdateMask::new();
        mask.field("name", &state.name, &prior.name);
        mask.field("description", &state.description, &prior.description);
        mask.field("setting", &state.settings, &prior.settings);

        if mask.is_empty() {
            return Some((Value::Value(state), private_state));
        }

        let Some(settings) = state.settings.as_ref() else {
            diags.error_short("`settings` block is required", AttributePath::new("settings"));
            return None;
        };
        let setting = T::expand_setting(settings, diags, AttributePath::new("settings"))?;
        let timeout = state.timeouts.update_timeout(DEFAULT_TIMEOUT);

        let request = UpdateConnectionRequest {
            connection_id: prior.id.as_str().to_owned(),
            update_mask: Some(mask.into_field_mask()),
            name: state.name.as_str().to_owned(),
            description: state.description.as_str().to_owned(),
            setting: Some(query::ConnectionSetting {
                connection: Some(setting),
            }),
        };

        match update_connection(cloud, request, timeout).await {
            Ok(connection) => {
                info!(id = %connection.id, kind = T::NAME, "updated query connection");
                let new_state = flatten_connection::<T>(diags, &connection, &state)?;
                Some((Value::Value(new_state), private_state))
            }
            Err(err) => {
                diags.root_error("Failed to update connection", err.to_string());
                None
            }
        }
    }

    async fn destroy<'a>(
        &self,
        diags: &mut Diagnostics,
        state: Self::State<'a>,
        _planned_private_state: Self::PrivateState<'a>,
        _provider_meta_state: Self::ProviderMetaState<'a>,
    ) -> Option<()> {
        let Value::Value(state) = state else {
            return Some(());
        };
        let cloud = self.cloud.configured(diags)?;

        let id = state.id.as_str();
        if id.is_empty() {
            return Some(());
        }
        let timeout = state.timeouts.delete_timeout(DEFAULT_TIMEOUT);

        match delete_connection(cloud, id, timeout).await {
            Ok(()) => {
                info!(id, kind = T::NAME, "deleted query connection");
                Some(())
            }
            Err(err) if is_not_found(&err) => {
                diags.root_warning(
                    "Connection already deleted",
                    "The connection no longer exists remotely.",
                );
                Some(())
            }
            Err(err) => {
                diags.root_error("Failed to delete connection", err.to_string());
                None
            }
        }
    }

    async fn import<'a>(
        &self,
        diags: &mut Diagnostics,
        id: String,
    ) -> Option<(Self::State<'a>, Self::PrivateState<'a>)> {
        if id.is_empty() {
            diags.root_error("Invalid import ID", "Import expects the connection ID.");
            return None;
        }
        let state = ConnectionState::<T> {
            id: Value::Value(id.into()),
            ..Default::default()
        };
        Some((Value::Value(state), Value::Null))
    }
}

async fn read_connection(cloud: &Cloud, id: &str) -> anyhow::Result<query::Connection> {
    let connection = cloud
        .query_connections()
        .get(GetConnectionRequest {
            connection_id: id.to_owned(),
        })
        .await?
        .into_inner();
    Ok(connection)
}

async fn create_connection(
    cloud: &Cloud,
    request: CreateConnectionRequest,
    timeout: Duration,
) -> anyhow::Result<query::Connection> {
    let op = cloud
        .query_connections()
        .create(request)
        .await
        .context("create call failed")?
        .into_inner();
    let op = cloud
        .wait_operation(op, timeout)
        .await
        .context("connection creation did not complete")?;
    let metadata: CreateConnectionMetadata = unpack_metadata(&op)?;
    read_connection(cloud, &metadata.connection_id)
        .await
        .context("failed to read the connection back")
}

async fn update_connection(
    cloud: &Cloud,
    request: UpdateConnectionRequest,
    timeout: Duration,
) -> anyhow::Result<query::Connection> {
    let id = request.connection_id.clone();
    let op = cloud
        .query_connections()
        .update(request)
        .await
        .context("update call failed")?
        .into_inner();
    cloud
        .wait_operation(op, timeout)
        .await
        .context("connection update did not complete")?;
    read_connection(cloud, &id)
        .await
        .context("failed to read the connection back")
}

async fn delete_connection(cloud: &Cloud, id: &str, timeout: Duration) -> anyhow::Result<()> {
    let op = cloud
        .query_connections()
        .delete(DeleteConnectionRequest {
            connection_id: id.to_owned(),
        })
        .await
        .context("delete call failed")?
        .into_inner();
    cloud
        .wait_operation(op, timeout)
        .await
        .context("connection deletion did not complete")?;
    Ok(())
}

fn flatten_connection<'a, T: ConnectionStrategy>(
    diags: &mut Diagnostics,
    connection: &query::Connection,
    prior: &ConnectionState<'a, T>,
) -> Option<ConnectionState<'a, T>> {
    let Some(setting) = connection
        .setting
        .as_ref()
        .and_then(|setting| setting.connection.as_ref())
    else {
        diags.root_error(
            "Invalid connection payload",
            format!("Connection {} carries no settings.", connection.id),
        );
        return None;
    };
    let settings = T::pack_to_state(setting, diags)?;
    Some(ConnectionState {
        id: Value::Value(connection.id.clone().into()),
        folder_id: Value::Value(connection.folder_id.clone().into()),
        name: Value::Value(connection.name.clone().into()),
        description: string_value(connection.description.clone(), &prior.description),
        created_at: timestamp_value(&connection.created_at),
        settings: Value::Value(settings),
        timeouts: prior.timeouts.clone(),
    })
}

/// Lookup-by-ID-or-name data source shared by every connection flavor.
#[derive(Debug)]
pub struct QueryConnectionDataSource<T: ConnectionStrategy> {
    cloud: Arc<CloudHandle>,
    strategy: PhantomData<T>,
}

impl<T: ConnectionStrategy> QueryConnectionDataSource<T> {
    pub fn new(cloud: Arc<CloudHandle>) -> Self {
        Self {
            cloud,
            strategy: PhantomData,
        }
    }
}

fn data_source_schema<T: ConnectionStrategy>() -> Schema {
    Schema {
        version: 1,
        block: Block {
            attributes: map! {
                "id" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Connection ID"),
                    constraint: AttributeConstraint::OptionalComputed,
                    ..Default::default()
                },
                "folder_id" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Folder to search when looking up by name"),
                    constraint: AttributeConstraint::OptionalComputed,
                    ..Default::default()
                },
                "name" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Connection name"),
                    constraint: AttributeConstraint::OptionalComputed,
                    ..Default::default()
                },
                "description" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Connection description"),
                    constraint: AttributeConstraint::Computed,
                    ..Default::default()
                },
                "created_at" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Creation timestamp"),
                    constraint: AttributeConstraint::Computed,
                    ..Default::default()
                },
            },
            description: Description::plain(format!(
                "Looks up a {} connection by ID or name",
                T::NAME
            )),
            ..Default::default()
        },
    }
}

#[async_trait]
impl<T: ConnectionStrategy> DataSource for QueryConnectionDataSource<T> {
    type State<'a> = Value<ConnectionDataState<'a>>;
    type ProviderMetaState<'a> = ValueEmpty;

    fn schema(&self, _diags: &mut Diagnostics) -> Option<Schema> {
        Some(data_source_schema::<T>())
    }

    async fn validate<'a>(&self, diags: &mut Diagnostics, config: Self::State<'a>) -> Option<()> {
        if let Value::Value(state) = &config {
            if state.id.is_null() && state.name.is_null() {
                diags.root_error(
                    "Missing lookup key",
                    "Either `id` or `name` must be set to look up a connection.",
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
            diags.root_error("Failed to read connection", "The configuration is empty.");
            return None;
        };
        let cloud = self.cloud.configured(diags)?;

        let id = match state.id.as_deref_option() {
            Some(id) if !id.is_empty() => id.to_owned(),
            _ => {
                let name = required_string(&state.name, diags, AttributePath::new("name"), "name")?;
                let folder_id = cloud.folder_for(&state.folder_id, diags)?;
                match lookup_connection(cloud, &folder_id, &name).await {
                    Ok(id) => id,
                    Err(err) => {
                        diags.root_error("Failed to resolve connection", err.to_string());
                        return None;
                    }
                }
            }
        };

        let connection = match read_connection(cloud, &id).await {
            Ok(connection) => connection,
            Err(err) => {
                diags.root_error("Failed to read connection", err.to_string());
                return None;
            }
        };

        let Some(setting) = connection
            .setting
            .as_ref()
            .and_then(|setting| setting.connection.as_ref())
        else {
            diags.root_error(
                "Invalid connection payload",
                format!("Connection {} carries no settings.", connection.id),
            );
            return None;
        };
        if !T::matches(setting) {
            diags.root_error(
                "Connection flavor mismatch",
                format!(
                    "Connection {} is not a {} connection.",
                    connection.id,
                    T::NAME
                ),
            );
            return None;
        }

        Some(Value::Value(ConnectionDataState {
            id: Value::Value(connection.id.clone().into()),
            folder_id: Value::Value(connection.folder_id.clone().into()),
            name: Value::Value(connection.name.clone().into()),
            description: string_value(connection.description.clone(), &state.description),
            created_at: timestamp_value(&connection.created_at),
        }))
    }
}

async fn lookup_connection(cloud: &Cloud, folder_id: &str, name: &str) -> anyhow::Result<String> {
    let response = cloud
        .query_connections()
        .list(ListConnectionsRequest {
            folder_id: folder_id.to_owned(),
            page_size: 1000,
            page_token: String::new(),
            filter: resolver::name_filter(name),
        })
        .await
        .context("list call failed")?
        .into_inner();
    resolver::pick_by_name(
        "connection",
        name,
        response.connections.into_iter().map(|connection| {
            resolver::NamedObject {
                id: connection.id,
                name: connection.name,
            }
        }),
    )
}
