use super::CatalogDocument;
use crate::error::{PlannerError, Result};
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;
use std::collections::HashSet;

const MAX_SCHEMA_ERRORS: usize = 3;

/// JSON Schema of the catalog document, as generated from its Rust type
pub(crate) fn catalog_schema() -> Result<Value> {
    let root = schemars::schema_for!(CatalogDocument);
    serde_json::to_value(root).map_err(PlannerError::from)
}

/// Validate a raw catalog document against the generated schema
pub(crate) fn validate_document_schema(document: &Value) -> Result<()> {
    let schema = catalog_schema()?;
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(&schema)
        .map_err(|err| {
            PlannerError::Catalog(format!(
                "Failed to prepare catalog schema for validation: {}",
                err
            ))
        })?;

    if let Err(errors) = validator.validate(document) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let mut path = error.instance_path.to_string();
                if path.is_empty() {
                    path = "<root>".to_string();
                }
                details.push(format!("{}: {}", path, error));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail_str = if details.is_empty() {
            "catalog document failed schema validation".to_string()
        } else {
            details.join("; ")
        };

        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(PlannerError::Catalog(format!(
            "Catalog document does not match schema: {}",
            detail_str
        )));
    }

    Ok(())
}

/// Structural checks the schema cannot express.
///
/// Template day numbers must be >= 1 and unique within each city/interest
/// list, keys must be non-blank, and the default activity set must not be
/// empty.
pub(crate) fn validate_structure(document: &CatalogDocument) -> Result<()> {
    if document.default_activities.is_empty() {
        return Err(PlannerError::Catalog(
            "default activity set must not be empty".to_string(),
        ));
    }

    for (city, interests) in &document.cities {
        if city.trim().is_empty() {
            return Err(PlannerError::Catalog("city name must not be blank".to_string()));
        }

        for (interest, templates) in interests {
            if interest.trim().is_empty() {
                return Err(PlannerError::Catalog(format!(
                    "{}: interest tag must not be blank",
                    city
                )));
            }

            let mut seen = HashSet::new();
            for template in templates {
                if template.day == 0 {
                    return Err(PlannerError::Catalog(format!(
                        "{}/{}: template day numbers start at 1",
                        city, interest
                    )));
                }
                if !seen.insert(template.day) {
                    return Err(PlannerError::Catalog(format!(
                        "{}/{}: duplicate template day {}",
                        city, interest, template.day
                    )));
                }
            }
        }
    }

    Ok(())
}
