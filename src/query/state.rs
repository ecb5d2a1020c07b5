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
use tf_provider::value::{Value, ValueBool, ValueString};
use tf_provider::{map, AttributePath, Description, Diagnostics, Schema};

use crate::utils::{timeouts_block, TimeoutsState, WithSchema, WithValidate};

use super::strategy::{BindingStrategy, ConnectionStrategy};

/// One column of a binding schema.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnState<'a> {
    #[serde(borrow)]
    pub name: ValueString<'a>,
    #[serde(borrow)]
    pub r#type: ValueString<'a>,
    pub not_null: ValueBool,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T::Settings<'a>: Serialize",
    deserialize = "T::Settings<'a>: Deserialize<'de>"
))]
pub struct ConnectionState<'a, T: ConnectionStrategy> {
    #[serde(borrow)]
    pub id: ValueString<'a>,
    #[serde(borrow)]
    pub folder_id: ValueString<'a>,
    #[serde(borrow)]
    pub name: ValueString<'a>,
    #[serde(borrow)]
    pub description: ValueString<'a>,
    #[serde(borrow)]
    pub created_at: ValueString<'a>,
    pub settings: Value<T::Settings<'a>>,
    pub timeouts: Value<TimeoutsState<'a>>,
}

impl<'a, T: ConnectionStrategy> WithSchema for ConnectionState<'a, T> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Connection ID"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "folder_id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Folder holding the connection (provider default when omitted)"),
                        constraint: AttributeConstraint::OptionalComputed,
                        ..Default::default()
                    },
                    "name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Connection name"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "description" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Connection description"),
                        constraint: AttributeConstraint::Optional,
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
                    "settings" => NestedBlock::Single(T::settings_block()),
                    "timeouts" => timeouts_block(),
                },
                description: Description::plain(format!(
                    "{} connection for the federated query engine",
                    T::NAME
                )),
                ..Default::default()
            },
        }
    }
}

#[async_trait]
impl<'a, T: ConnectionStrategy> WithValidate for ConnectionState<'a, T> {
    async fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        if let Value::Value(name) = &self.name {
            if name.is_empty() {
                diags.error_short(
                    "`name` must not be empty",
                    attr_path.clone().attribute("name"),
                );
            }
        }
        match &self.settings {
            Value::Value(settings) => {
                T::validate_settings(settings, diags, attr_path.clone().attribute("settings"));
            }
            Value::Null => diags.error_short(
                "`settings` block is required",
                attr_path.clone().attribute("settings"),
            ),
            Value::Unknown => {}
        }
        self.timeouts
            .validate(diags, attr_path.attribute("timeouts"))
            .await;
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T::Settings<'a>: Serialize",
    deserialize = "T::Settings<'a>: Deserialize<'de>"
))]
pub struct BindingState<'a, T: BindingStrategy> {
    #[serde(borrow)]
    pub id: ValueString<'a>,
    #[serde(borrow)]
    pub connection_id: ValueString<'a>,
    #[serde(borrow)]
    pub name: ValueString<'a>,
    #[serde(borrow)]
    pub description: ValueString<'a>,
    #[serde(borrow)]
    pub created_at: ValueString<'a>,
    pub settings: Value<T::Settings<'a>>,
    pub timeouts: Value<TimeoutsState<'a>>,
}

impl<'a, T: BindingStrategy> WithSchema for BindingState<'a, T> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Binding ID"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "connection_id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Connection the binding is attached to"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "name" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Binding name"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "description" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Binding description"),
                        constraint: AttributeConstraint::Optional,
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
                    "settings" => NestedBlock::Single(T::settings_block()),
                    "timeouts" => timeouts_block(),
                },
                description: Description::plain(format!(
                    "{} binding for the federated query engine",
                    T::NAME
                )),
                ..Default::default()
            },
        }
    }
}

#[async_trait]
impl<'a, T: BindingStrategy> WithValidate for BindingState<'a, T> {
    async fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        if let Value::Value(name) = &self.name {
            if name.is_empty() {
                diags.error_short(
                    "`name` must not be empty",
                    attr_path.clone().attribute("name"),
                );
            }
        }
        match &self.settings {
            Value::Value(settings) => {
                T::validate_settings(settings, diags, attr_path.clone().attribute("settings"));
            }
            Value::Null => diags.error_short(
                "`settings` block is required",
                attr_path.clone().attribute("settings"),
            ),
            Value::Unknown => {}
        }
        self.timeouts
            .validate(diags, attr_path.attribute("timeouts"))
            .await;
    }
}

/// Schema block for binding columns, shared by the binding strategies.
pub(crate) fn columns_block() -> NestedBlock {
    NestedBlock::List(Block {
        attributes: map! {
            "name" => Attribute {
                attr_type: AttributeType::String,
                description: Description::plain("Column name"),
                constraint: AttributeConstraint::Required,
                ..Default::default()
            },
            "type" => Attribute {
                attr_type: AttributeType::String,
                description: Description::plain("Column type"),
                constraint: AttributeConstraint::Required,
                ..Default::default()
            },
            "not_null" => Attribute {
                attr_type: AttributeType::Bool,
                description: Description::plain("Whether the column rejects nulls"),
                constraint: AttributeConstraint::Optional,
                ..Default::default()
            },
        },
        description: Description::plain("Table schema of the bound data"),
        ..Default::default()
    })
}

/// Configuration model of the connection data sources.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionDataState<'a> {
    #[serde(borrow)]
    pub id: ValueString<'a>,
    #[serde(borrow)]
    pub folder_id: ValueString<'a>,
    #[serde(borrow)]
    pub name: ValueString<'a>,
    #[serde(borrow)]
    pub description: ValueString<'a>,
    #[serde(borrow)]
    pub created_at: ValueString<'a>,
}
