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

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use tf_provider::schema::{Attribute, AttributeConstraint, AttributeType, Block, NestedBlock};
use tf_provider::value::{Value, ValueBool, ValueList, ValueMap, ValueNumber, ValueString};
use tf_provider::{map, AttributePath, Description, Diagnostics, Schema};

use crate::proto::cirrus::cloud::spark::v1::weekly_maintenance_window::WeekDay;
use crate::utils::{timeouts_block, TimeoutsState, WithNormalize, WithSchema, WithValidate};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterState<'a> {
    #[serde(borrow)]
    pub id: ValueString<'a>,
    #[serde(borrow)]
    pub folder_id: ValueString<'a>,
    #[serde(borrow)]
    pub name: ValueString<'a>,
    #[serde(borrow)]
    pub description: ValueString<'a>,
    #[serde(borrow)]
    pub labels: ValueMap<'a, ValueString<'a>>,
    pub config: Value<ClusterConfigState<'a>>,
    #[serde(borrow)]
    pub service_account_id: ValueString<'a>,
    #[serde(borrow)]
    pub security_group_ids: ValueList<ValueString<'a>>,
    pub deletion_protection: ValueBool,
    #[serde(borrow)]
    pub status: ValueString<'a>,
    #[serde(borrow)]
    pub created_at: ValueString<'a>,
    pub timeouts: Value<TimeoutsState<'a>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfigState<'a> {
    #[serde(borrow)]
    pub resource_pool: ValueList<Value<ResourcePoolState<'a>>>,
    pub logging: Value<LoggingState<'a>>,
    pub maintenance_window: Value<MaintenanceWindowState<'a>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcePoolState<'a> {
    #[serde(borrow)]
    pub name: ValueString<'a>,
    #[serde(borrow)]
    pub resource_preset_id: ValueString<'a>,
    pub size: ValueNumber,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingState<'a> {
    pub enabled: ValueBool,
    #[serde(borrow)]
    pub folder_id: ValueString<'a>,
    #[serde(borrow)]
    pub log_group_id: ValueString<'a>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceWindowState<'a> {
    #[serde(borrow)]
    pub r#type: ValueString<'a>,
    #[serde(borrow)]
    pub day: ValueString<'a>,
    pub hour: ValueNumber,
}

fn config_block() -> Block {
    Block {
        blocks: map! {
            "resource_pool" => NestedBlock::List(Block {
                attributes: map! {
                    "name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Pool name"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "resource_preset_id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Hardware preset of the pool nodes"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "size" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain("Node count"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                },
                description: Description::plain("Worker pools of the cluster"),
                ..Default::default()
            }),
            "logging" => NestedBlock::Optional(Block {
                attributes: map! {
                    "enabled" => Attribute {
                        attr_type: AttributeType::Bool,
                        description: Description::plain("Whether cluster logs are shipped"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "folder_id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Folder whose default log group receives the logs"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "log_group_id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Log group receiving the logs"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                },
                description: Description::plain("Log shipping configuration"),
                ..Default::default()
            }),
            "maintenance_window" => NestedBlock::Optional(Block {
                attributes: map! {
                    "type" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("`anytime` or `weekly`"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "day" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Day of week (`mon` .. `sun`), for `weekly`"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "hour" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain("Hour of day (0-23), for `weekly`"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                },
                description: Description::plain("When the vendor may run maintenance"),
                ..Default::default()
            }),
        },
        description: Description::plain("Cluster configuration"),
        ..Default::default()
    }
}

impl WithSchema for ClusterState<'_> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Cluster ID"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "folder_id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Folder holding the cluster (provider default when omitted)"),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Cluster name"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "description" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Cluster description"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "labels" => Attribute {
                        attr_type: AttributeType::Map(AttributeType::String.into()),
                        description: Description::plain("Resource labels as key/value pairs"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "service_account_id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Service account the cluster acts as"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "security_group_ids" => Attribute {
                        attr_type: AttributeType::List(AttributeType::String.into()),
                        description: Description::plain("Security groups attached to the cluster"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "deletion_protection" => Attribute {
                        attr_type: AttributeType::Bool,
                        description: Description::plain("Refuse deletion while set"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "status" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Cluster status"),
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
                blocks: map! {
                    "config" => NestedBlock::Single(config_block()),
                    "timeouts" => timeouts_block(),
                },
                description: Description::plain("Managed Spark cluster"),
                ..Default::default()
            },
        }
    }
}

impl WithNormalize for ClusterState<'_> {
    fn normalize(&mut self, _diags: &mut Diagnostics) {
        if self.id.is_null() {
            self.id = Value::Unknown;
        }
        if self.config.is_null() {
            self.config = Value::Value(Default::default());
        }
    }
}

pub(super) const MAINTENANCE_TYPES: [&str; 2] = ["anytime", "weekly"];

#[async_trait]
impl WithValidate for ClusterState<'_> {
    async fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        if let Value::Value(name) = &self.name {
            if name.is_empty() {
                diags.error_short(
                    "`name` must not be empty",
                    attr_path.clone().attribute("name"),
                );
            }
        }
        if let Value::Value(config) = &self.config {
            config
                .validate(diags, attr_path.clone().attribute("config"))
                .await;
        }
        self.timeouts
            .validate(diags, attr_path.attribute("timeouts"))
            .await;
    }
}

#[async_trait]
impl WithValidate for ClusterConfigState<'_> {
    async fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        for (i, pool) in self.resource_pool.iter().flatten().enumerate() {
            let path = attr_path.clone().attribute("resource_pool").index(i as i64);
            if let Value::Value(pool) = pool {
                if let Value::Value(size) = &pool.size {
                    if *size < 1 {
                        diags.error_short(
                            "`size` must be at least 1",
                            path.attribute("size"),
                        );
                    }
                }
            }
        }

        if let Value::Value(window) = &self.maintenance_window {
            let path = attr_path.attribute("maintenance_window");
            let window_type = window.r#type.as_str();
            if !window_type.is_empty() && !MAINTENANCE_TYPES.contains(&window_type) {
                diags.error(
                    "Invalid maintenance window type",
                    format!("{window_type:?} is neither `anytime` nor `weekly`"),
                    path.clone().attribute("type"),
                );
            }
            if let Value::Value(day) = &window.day {
                if WeekDay::from_str_name(&day.to_ascii_uppercase()).is_none() {
                    diags.error(
                        "Invalid maintenance window day",
                        format!("{day:?} is not a day of week (`mon` .. `sun`)"),
                        path.clone().attribute("day"),
                    );
                }
            }
            if let Value::Value(hour) = &window.hour {
                if !(0..24).contains(hour) {
                    diags.error_short(
                        "`hour` must be between 0 and 23",
                        path.attribute("hour"),
                    );
                }
            }
        }
    }
}

/// Configuration model of the cluster data source.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterDataState<'a> {
    #[serde(borrow)]
    pub id: ValueString<'a>,
    #[serde(borrow)]
    pub folder_id: ValueString<'a>,
    #[serde(borrow)]
    pub name: ValueString<'a>,
    #[serde(borrow)]
    pub description: ValueString<'a>,
    #[serde(borrow)]
    pub labels: ValueMap<'a, ValueString<'a>>,
    #[serde(borrow)]
    pub status: ValueString<'a>,
    #[serde(borrow)]
    pub created_at: ValueString<'a>,
}

pub(super) fn data_source_schema() -> Schema {
    Schema {
        version: 1,
        block: Block {
            attributes: map! {
                "id" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Cluster ID"),
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
                    description: Description::plain("Cluster name"),
                    constraint: AttributeConstraint::OptionalComputed,
                    ..Default::default()
                },
                "description" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Cluster description"),
                    constraint: AttributeConstraint::Computed,
                    ..Default::default()
                },
                "labels" => Attribute {
                    attr_type: AttributeType::Map(AttributeType::String.into()),
                    description: Description::plain("Resource labels"),
                    constraint: AttributeConstraint::Computed,
                    ..Default::default()
                },
                "status" => Attribute {
                    attr_type: AttributeType::String,
                    description: Description::plain("Cluster status"),
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
            description: Description::plain("Looks up a managed Spark cluster by ID or name"),
            ..Default::default()
        },
    }
}
