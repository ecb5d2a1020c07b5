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

use tf_provider::schema::{Attribute, AttributeConstraint, AttributeType, Block};
use tf_provider::value::{Value, ValueList, ValueNumber, ValueString};
use tf_provider::{map, AttributePath, Description, Diagnostics, Schema};

use crate::utils::{timeouts_block, TimeoutsState, WithSchema, WithValidate};

pub(super) const DIRECTIONS: [&str; 2] = ["ingress", "egress"];

/// One rule of a security group. The remote API only adds and removes whole
/// rules, so every attribute change replaces the rule.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityGroupRuleState<'a> {
    #[serde(borrow)]
    pub id: ValueString<'a>,
    #[serde(borrow)]
    pub security_group_id: ValueString<'a>,
    #[serde(borrow)]
    pub direction: ValueString<'a>,
    #[serde(borrow)]
    pub description: ValueString<'a>,
    #[serde(borrow)]
    pub protocol: ValueString<'a>,
    pub from_port: ValueNumber,
    pub to_port: ValueNumber,
    #[serde(borrow)]
    pub v4_cidr_blocks: ValueList<ValueString<'a>>,
    #[serde(borrow)]
    pub v6_cidr_blocks: ValueList<ValueString<'a>>,
    pub timeouts: Value<TimeoutsState<'a>>,
}

impl WithSchema for SecurityGroupRuleState<'_> {
    fn schema() -> Schema {
        Schema {
            version: 1,
            block: Block {
                attributes: map! {
                    "id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Rule ID"),
                        constraint: AttributeConstraint::Computed,
                        ..Default::default()
                    },
                    "security_group_id" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Security group the rule belongs to"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "direction" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("`ingress` or `egress`"),
                        constraint: AttributeConstraint::Required,
                        ..Default::default()
                    },
                    "description" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Rule description"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "protocol" => Attribute {
                        attr_type: AttributeType::String,
                        description: Description::plain("Protocol name (`tcp`, `udp`, `icmp`, `any`)"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "from_port" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain("First port of the range"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "to_port" => Attribute {
                        attr_type: AttributeType::Number,
                        description: Description::plain("Last port of the range (defaults to `from_port`)"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "v4_cidr_blocks" => Attribute {
                        attr_type: AttributeType::List(AttributeType::String.into()),
                        description: Description::plain("IPv4 CIDR blocks the rule applies to"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                    "v6_cidr_blocks" => Attribute {
                        attr_type: AttributeType::List(AttributeType::String.into()),
                        description: Description::plain("IPv6 CIDR blocks the rule applies to"),
                        constraint: AttributeConstraint::Optional,
                        ..Default::default()
                    },
                },
                blocks: map! {
                    "timeouts" => timeouts_block(),
                },
                description: Description::plain("Single rule of a VPC security group"),
                ..Default::default()
            },
        }
    }
}

#[async_trait]
impl WithValidate for SecurityGroupRuleState<'_> {
    async fn validate(&self, diags: &mut Diagnostics, attr_path: AttributePath) {
        if let Value::Value(direction) = &self.direction {
            if !DIRECTIONS.contains(&direction.as_ref()) {
                diags.error(
                    "Invalid direction",
                    format!("{direction:?} is neither `ingress` nor `egress`"),
                    attr_path.clone().attribute("direction"),
                );
            }
        }
        for (name, port) in [("from_port", &self.from_port), ("to_port", &self.to_port)] {
            if let Value::Value(port) = port {
                if !(0..=65535).contains(port) {
                    diags.error_short(
                        format!("`{name}` must be between 0 and 65535"),
                        attr_path.clone().attribute(name),
                    );
                }
            }
        }
        if let (Value::Value(from), Value::Value(to)) = (&self.from_port, &self.to_port) {
            if from > to {
                diags.error_short(
                    "`from_port` must not exceed `to_port`",
                    attr_path.clone().attribute("from_port"),
                );
            }
        }
        self.timeouts
            .validate(diags, attr_path.attribute("timeouts"))
            .await;
    }
}
