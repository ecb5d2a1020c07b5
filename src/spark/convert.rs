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

//! Model/API translation for the Spark cluster resource.

use std::borrow::Cow;
use std::collections::HashMap;

use tf_provider::value::{Value, ValueList, ValueMap, ValueString};
use tf_provider::{AttributePath, Diagnostics};

use crate::proto::cirrus::cloud::spark::v1 as spark;
use crate::proto::cirrus::cloud::spark::v1::weekly_maintenance_window::WeekDay;
use crate::proto::cirrus::cloud::spark::v1::{cluster, maintenance_window};
use crate::updatemask::{preserve_empty, NestedMask, UpdateMask};
use crate::utils::{expand_string_list, required_string, string_value, timestamp_value};

use super::state::{
    ClusterConfigState, ClusterState, LoggingState, MaintenanceWindowState, ResourcePoolState,
};

pub(super) fn expand_labels(labels: &ValueMap<ValueString>) -> HashMap<String, String> {
    labels
        .iter()
        .flatten()
        .filter_map(|(key, value)| Some((key.to_string(), value.as_deref_option()?.to_owned())))
        .collect()
}

pub(super) fn expand_cluster_config(
    config: &Value<ClusterConfigState>,
    diags: &mut Diagnostics,
    attr_path: AttributePath,
) -> Option<spark::ClusterConfig> {
    let empty = ClusterConfigState::default();
    let config = config.as_ref().unwrap_or(&empty);

    let mut resource_pools = Vec::new();
    for (i, pool) in config.resource_pool.iter().flatten().enumerate() {
        let path = attr_path.clone().attribute("resource_pool").index(i as i64);
        let Some(pool) = pool.as_ref() else {
            diags.error_short("Resource pool must not be null", path);
            return None;
        };
        resource_pools.push(spark::ResourcePool {
            name: required_string(&pool.name, diags, path.clone().attribute("name"), "name")?,
            resource_preset_id: required_string(
                &pool.resource_preset_id,
                diags,
                path.clone().attribute("resource_preset_id"),
                "resource_preset_id",
            )?,
            size: pool.size.as_ref().map_or(1, |size| *size),
        });
    }

    let logging = config.logging.as_ref().map(|logging| spark::LoggingConfig {
        enabled: logging.enabled.as_ref().map_or(false, |enabled| *enabled),
        folder_id: logging.folder_id.as_str().to_owned(),
        log_group_id: logging.log_group_id.as_str().to_owned(),
    });

    let maintenance_window = expand_maintenance_window(
        &config.maintenance_window,
        diags,
        attr_path.attribute("maintenance_window"),
    )?;

    Some(spark::ClusterConfig {
        resource_pools,
        logging,
        maintenance_window,
    })
}

fn expand_maintenance_window(
    window: &Value<MaintenanceWindowState>,
    diags: &mut Diagnostics,
    attr_path: AttributePath,
) -> Option<Option<spark::MaintenanceWindow>> {
    let Some(window) = window.as_ref() else {
        return Some(None);
    };
    let policy = match window.r#type.as_str() {
        "" | "anytime" => maintenance_window::Policy::Anytime(spark::AnytimeMaintenanceWindow {}),
        "weekly" => {
            let day = window.day.as_str();
            let Some(day) = WeekDay::from_str_name(&day.to_ascii_uppercase()) else {
                diags.error(
                    "Invalid maintenance window day",
                    format!("{day:?} is not a day of week (`mon` .. `sun`)"),
                    attr_path.attribute("day"),
                );
                return None;
            };
            maintenance_window::Policy::Weekly(spark::WeeklyMaintenanceWindow {
                day: day as i32,
                hour: window.hour.as_ref().map_or(0, |hour| *hour),
            })
        }
        other => {
            diags.error(
                "Invalid maintenance window type",
                format!("{other:?} is neither `anytime` nor `weekly`"),
                attr_path.attribute("type"),
            );
            return None;
        }
    };
    Some(Some(spark::MaintenanceWindow {
        policy: Some(policy),
    }))
}

pub(super) fn flatten_cluster<'a>(
    cluster: &spark::Cluster,
    prior: &ClusterState<'a>,
) -> ClusterState<'a> {
    let empty = ClusterConfigState::default();
    let prior_config = prior.config.as_ref().unwrap_or(&empty);

    ClusterState {
        id: Value::Value(cluster.id.clone().into()),
        folder_id: Value::Value(cluster.folder_id.clone().into()),
        name: Value::Value(cluster.name.clone().into()),
        description: string_value(cluster.description.clone(), &prior.description),
        labels: preserve_empty(flatten_labels(&cluster.labels), &prior.labels),
        config: Value::Value(flatten_cluster_config(cluster.config.as_ref(), prior_config)),
        service_account_id: string_value(cluster.service_account_id.clone(), &prior.service_account_id),
        security_group_ids: preserve_empty(
            flatten_string_list(&cluster.security_group_ids),
            &prior.security_group_ids,
        ),
        deletion_protection: Value::Value(cluster.deletion_protection),
        status: flatten_status(cluster.status),
        created_at: timestamp_value(&cluster.created_at),
        timeouts: prior.timeouts.clone(),
    }
}

fn flatten_labels<'a>(labels: &HashMap<String, String>) -> ValueMap<'a, ValueString<'a>> {
    Value::Value(
        labels
            .iter()
            .map(|(key, value)| {
                (
                    Cow::Owned(key.clone()),
                    Value::Value(Cow::Owned(value.clone())),
                )
            })
            .collect(),
    )
}

fn flatten_string_list<'a>(list: &[String]) -> ValueList<ValueString<'a>> {
    Value::Value(
        list.iter()
            .map(|item| Value::Value(Cow::Owned(item.clone())))
            .collect(),
    )
}

pub(super) fn flatten_status<'a>(status: i32) -> ValueString<'a> {
    match cluster::Status::try_from(status) {
        Ok(cluster::Status::Unspecified) | Err(_) => Value::Null,
        Ok(status) => Value::Value(Cow::Owned(status.as_str_name().to_ascii_lowercase())),
    }
}

fn flatten_cluster_config<'a>(
    config: Option<&spark::ClusterConfig>,
    prior: &ClusterConfigState<'a>,
) -> ClusterConfigState<'a> {
    let Some(config) = config else {
        return ClusterConfigState::default();
    };

    let resource_pool = if config.resource_pools.is_empty() {
        Value::Null
    } else {
        Value::Value(
            config
                .resource_pools
                .iter()
                .map(|pool| {
                    Value::Value(ResourcePoolState {
                        name: Value::Value(Cow::Owned(pool.name.clone())),
                        resource_preset_id: Value::Value(Cow::Owned(
                            pool.resource_preset_id.clone(),
                        )),
                        size: Value::Value(pool.size),
                    })
                })
                .collect(),
        )
    };

    let logging = match &config.logging {
        None => Value::Null,
        Some(logging) => {
            let prior_logging = prior.logging.as_ref();
            Value::Value(LoggingState {
                enabled: Value::Value(logging.enabled),
                folder_id: string_value(
                    logging.folder_id.clone(),
                    prior_logging.map_or(&Value::Null, |prior| &prior.folder_id),
                ),
                log_group_id: string_value(
                    logging.log_group_id.clone(),
                    prior_logging.map_or(&Value::Null, |prior| &prior.log_group_id),
                ),
            })
        }
    };

    let maintenance_window = match config
        .maintenance_window
        .as_ref()
        .and_then(|window| window.policy.as_ref())
    {
        None => Value::Null,
        Some(maintenance_window::Policy::Anytime(_)) => Value::Value(MaintenanceWindowState {
            r#type: Value::Value("anytime".into()),
            day: Value::Null,
            hour: Value::Null,
        }),
        Some(maintenance_window::Policy::Weekly(weekly)) => {
            let day = match WeekDay::try_from(weekly.day) {
                Ok(WeekDay::Unspecified) | Err(_) => Value::Null,
                Ok(day) => Value::Value(Cow::Owned(day.as_str_name().to_ascii_lowercase())),
            };
            Value::Value(MaintenanceWindowState {
                r#type: Value::Value("weekly".into()),
                day,
                hour: Value::Value(weekly.hour),
            })
        }
    };

    ClusterConfigState {
        resource_pool,
        logging,
        maintenance_window,
    }
}

/// Field-mask paths for a partial cluster update (spec'd API field names,
/// not Terraform attribute names).
pub(super) fn cluster_update_mask(plan: &ClusterState, state: &ClusterState) -> UpdateMask {
    let mut mask = UpdateMask::new();
    mask.field("name", &plan.name, &state.name);
    mask.field("description", &plan.description, &state.description);
    mask.collection("labels", &plan.labels, &state.labels);
    mask.field(
        "service_account_id",
        &plan.service_account_id,
        &state.service_account_id,
    );
    mask.collection(
        "security_group_ids",
        &plan.security_group_ids,
        &state.security_group_ids,
    );
    mask.field(
        "deletion_protection",
        &plan.deletion_protection,
        &state.deletion_protection,
    );

    let empty = ClusterConfigState::default();
    let plan_config = plan.config.as_ref().unwrap_or(&empty);
    let state_config = state.config.as_ref().unwrap_or(&empty);
    let mut config = NestedMask::new();
    config.collection(
        "resource_pools",
        &plan_config.resource_pool,
        &state_config.resource_pool,
    );
    config.field("logging", &plan_config.logging, &state_config.logging);
    config.field(
        "maintenance_window",
        &plan_config.maintenance_window,
        &state_config.maintenance_window,
    );
    mask.nested("config", config);

    mask
}

#[cfg(test)]
mod tests {
    use prost_types::Timestamp;

    use super::*;

    fn sample_cluster() -> spark::Cluster {
        spark::Cluster {
            id: "c1".into(),
            folder_id: "f1".into(),
            created_at: Some(Timestamp {
                seconds: 1_700_000_000,
                nanos: 0,
            }),
            name: "analytics".into(),
            description: String::new(),
            labels: HashMap::new(),
            config: Some(spark::ClusterConfig {
                resource_pools: vec![spark::ResourcePool {
                    name: "drivers".into(),
                    resource_preset_id: "s2.small".into(),
                    size: 3,
                }],
                logging: Some(spark::LoggingConfig {
                    enabled: true,
                    folder_id: "f1".into(),
                    log_group_id: String::new(),
                }),
                maintenance_window: Some(spark::MaintenanceWindow {
                    policy: Some(maintenance_window::Policy::Weekly(
                        spark::WeeklyMaintenanceWindow {
                            day: WeekDay::Tue as i32,
                            hour: 4,
                        },
                    )),
                }),
            }),
            status: cluster::Status::Running as i32,
            service_account_id: "sa-1".into(),
            security_group_ids: vec![],
            deletion_protection: false,
        }
    }

    #[test]
    fn read_back_state_plans_an_empty_update() {
        let flattened = flatten_cluster(&sample_cluster(), &ClusterState::default());
        let mask = cluster_update_mask(&flattened, &flattened);
        assert!(mask.is_empty(), "unexpected paths: {:?}", mask.paths());
    }

    #[test]
    fn flatten_preserves_null_collections() {
        let state = flatten_cluster(&sample_cluster(), &ClusterState::default());
        assert!(state.labels.is_null());
        assert!(state.security_group_ids.is_null());
        assert!(state.description.is_null());
    }

    #[test]
    fn flatten_round_trips_through_expand() {
        let cluster = sample_cluster();
        let state = flatten_cluster(&cluster, &ClusterState::default());

        let mut diags = Diagnostics::default();
        let config =
            expand_cluster_config(&state.config, &mut diags, AttributePath::new("config"))
                .unwrap();
        assert!(diags.errors.is_empty());
        assert_eq!(Some(config), cluster.config);
        assert_eq!(expand_labels(&state.labels), cluster.labels);
        assert_eq!(
            expand_string_list(&state.security_group_ids),
            cluster.security_group_ids
        );
    }

    #[test]
    fn scalar_change_is_masked_alone() {
        let state = flatten_cluster(&sample_cluster(), &ClusterState::default());
        let mut plan = state.clone();
        plan.description = Value::Value("batch jobs".into());

        let mask = cluster_update_mask(&plan, &state);
        assert_eq!(mask.paths(), ["description"]);
    }

    #[test]
    fn partial_config_change_is_masked_per_field() {
        let state = flatten_cluster(&sample_cluster(), &ClusterState::default());
        let mut plan = state.clone();
        if let Value::Value(config) = &mut plan.config {
            config.logging = Value::Value(LoggingState {
                enabled: Value::Value(false),
                folder_id: Value::Value("f1".into()),
                log_group_id: Value::Null,
            });
        }

        let mask = cluster_update_mask(&plan, &state);
        assert_eq!(mask.paths(), ["config.logging"]);
    }

    #[test]
    fn full_config_change_is_masked_as_parent() {
        let state = flatten_cluster(&sample_cluster(), &ClusterState::default());
        let mut plan = state.clone();
        plan.config = Value::Value(ClusterConfigState {
            resource_pool: Value::Value(vec![Value::Value(ResourcePoolState {
                name: Value::Value("executors".into()),
                resource_preset_id: Value::Value("s2.large".into()),
                size: Value::Value(10),
            })]),
            logging: Value::Null,
            maintenance_window: Value::Null,
        });

        let mask = cluster_update_mask(&plan, &state);
        assert_eq!(mask.paths(), ["config"]);
    }

    #[test]
    fn null_and_empty_labels_compare_equal() {
        let state = flatten_cluster(&sample_cluster(), &ClusterState::default());
        let mut plan = state.clone();
        plan.labels = Value::Value(Default::default());
        plan.security_group_ids = Value::Value(Default::default());

        let mask = cluster_update_mask(&plan, &state);
        assert!(mask.is_empty(), "unexpected paths: {:?}", mask.paths());
    }

    #[test]
    fn weekly_window_requires_a_valid_day() {
        let mut diags = Diagnostics::default();
        let config = Value::Value(ClusterConfigState {
            resource_pool: Value::Null,
            logging: Value::Null,
            maintenance_window: Value::Value(MaintenanceWindowState {
                r#type: Value::Value("weekly".into()),
                day: Value::Value("someday".into()),
                hour: Value::Value(4),
            }),
        });
        assert!(
            expand_cluster_config(&config, &mut diags, AttributePath::new("config")).is_none()
        );
        assert!(!diags.errors.is_empty());
    }
}
