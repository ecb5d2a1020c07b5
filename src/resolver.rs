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

//! Look up a vendor object's ID from its human-readable name within a
//! folder. List responses are filtered server-side by name, but the match is
//! re-checked here so a lax filter cannot resolve to the wrong object.

use anyhow::{bail, Result};

pub struct NamedObject {
    pub id: String,
    pub name: String,
}

pub fn pick_by_name(
    kind: &str,
    name: &str,
    objects: impl IntoIterator<Item = NamedObject>,
) -> Result<String> {
    let mut matches = objects.into_iter().filter(|object| object.name == name);
    let Some(found) = matches.next() else {
        bail!("{kind} named {name:?} was not found");
    };
    if matches.next().is_some() {
        bail!("more than one {kind} is named {name:?}; use the ID to disambiguate");
    }
    Ok(found.id)
}

/// Server-side filter expression for a name lookup.
pub fn name_filter(name: &str) -> String {
    format!("name=\"{}\"", name.replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(id: &str, name: &str) -> NamedObject {
        NamedObject {
            id: id.into(),
            name: name.into(),
        }
    }

    #[test]
    fn resolves_single_match() {
        let objects = vec![object("c1", "prod"), object("c2", "staging")];
        assert_eq!(pick_by_name("cluster", "prod", objects).unwrap(), "c1");
    }

    #[test]
    fn fails_when_absent() {
        let err = pick_by_name("cluster", "prod", vec![object("c2", "staging")]).unwrap_err();
        assert!(err.to_string().contains("was not found"));
    }

    #[test]
    fn fails_when_ambiguous() {
        let objects = vec![object("c1", "prod"), object("c2", "prod")];
        let err = pick_by_name("cluster", "prod", objects).unwrap_err();
        assert!(err.to_string().contains("more than one"));
    }

    #[test]
    fn filter_escapes_quotes() {
        assert_eq!(name_filter("a\"b"), "name=\"a\\\"b\"");
    }
}
