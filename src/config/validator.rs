//! Registry validation: identifier syntax and route uniqueness.

use crate::config::EntityConfig;
use crate::error::ConfigError;
use regex::Regex;
use std::collections::HashSet;

/// Table and column names are interpolated into SQL, so they must be plain identifiers.
const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

pub fn validate(entities: &[EntityConfig]) -> Result<(), ConfigError> {
    let re = Regex::new(IDENTIFIER_PATTERN).map_err(|e| ConfigError::Invalid {
        var: "identifier pattern",
        reason: e.to_string(),
    })?;

    let mut path_segments = HashSet::new();
    for entity in entities {
        for ident in [entity.name, entity.id_column] {
            if !re.is_match(ident) {
                return Err(ConfigError::InvalidIdentifier(ident.to_string()));
            }
        }
        let segment = entity.path_segment();
        // taken by the report routes
        if segment == "reports" {
            return Err(ConfigError::DuplicatePathSegment(segment));
        }
        if !path_segments.insert(segment.clone()) {
            return Err(ConfigError::DuplicatePathSegment(segment));
        }
    }
    Ok(())
}
