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

//! Composite local IDs for resources whose remote identity spans several
//! vendor IDs, joined with `,` and parsed back on import.

use anyhow::{bail, Result};

const SEPARATOR: char = ',';

pub fn construct(parts: &[&str]) -> Result<String> {
    for part in parts {
        if part.is_empty() {
            bail!("composite ID part is empty");
        }
        if part.contains(SEPARATOR) {
            bail!("composite ID part {part:?} contains {SEPARATOR:?}");
        }
    }
    Ok(parts.join(","))
}

pub fn deconstruct(id: &str, arity: usize) -> Result<Vec<&str>> {
    let parts: Vec<&str> = id.split(SEPARATOR).collect();
    if parts.len() != arity {
        bail!(
            "expected {arity} comma-separated parts in {id:?}, got {}",
            parts.len()
        );
    }
    if parts.iter().any(|part| part.is_empty()) {
        bail!("composite ID {id:?} has an empty part");
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn joins_and_splits() {
        let id = construct(&["rule-7", "sg-42"]).unwrap();
        assert_eq!(id, "rule-7,sg-42");
        assert_eq!(deconstruct(&id, 2).unwrap(), vec!["rule-7", "sg-42"]);
    }

    #[test]
    fn rejects_separator_in_parts() {
        assert!(construct(&["a,b", "c"]).is_err());
    }

    #[test]
    fn rejects_empty_parts() {
        assert!(construct(&["", "c"]).is_err());
        assert!(deconstruct("a,,c", 3).is_err());
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(deconstruct("a,b", 3).is_err());
        assert!(deconstruct("a,b,c", 2).is_err());
    }

    proptest! {
        #[test]
        fn round_trips_delimiter_free_parts(
            parts in prop::collection::vec("[a-z0-9][a-z0-9.-]{0,20}", 1..5)
        ) {
            let refs: Vec<&str> = parts.iter().map(String::as_str).collect();
            let id = construct(&refs).unwrap();
            prop_assert_eq!(deconstruct(&id, refs.len()).unwrap(), refs);
        }
    }
}
