//! Catalog invariants checked at load time

use std::collections::HashSet;

use casekit_domain::error::{Error, Result};
use casekit_domain::ports::FixtureCatalog;
use casekit_domain::value_objects::{ComponentType, FieldDescriptor};

use super::registry::FixtureRegistry;

/// Reject tables that break what the endpoints promise
pub(super) fn validate_registry(registry: &FixtureRegistry) -> Result<()> {
    validate_case_library_options(registry)?;
    validate_history_cases(registry)?;
    validate_component_palette(registry)?;
    validate_default_params(registry)?;
    validate_param_schemas(registry)?;
    Ok(())
}

fn validate_case_library_options(registry: &FixtureRegistry) -> Result<()> {
    let mut seen = HashSet::new();
    for option in registry.case_library_options() {
        if option.value.is_empty() {
            return Err(Error::fixture("case library option with empty value"));
        }
        if !seen.insert(option.value.as_str()) {
            return Err(Error::fixture(format!(
                "duplicate case library option: {}",
                option.value
            )));
        }
    }
    Ok(())
}

fn validate_history_cases(registry: &FixtureRegistry) -> Result<()> {
    let mut seen = HashSet::new();
    for case in registry.history_cases() {
        if !seen.insert(case.id.as_str()) {
            return Err(Error::fixture(format!("duplicate test case id: {}", case.id)));
        }
    }
    Ok(())
}

fn validate_component_palette(registry: &FixtureRegistry) -> Result<()> {
    let mut seen = HashSet::new();
    for descriptor in &registry.preset_data().components {
        if !seen.insert(descriptor.component_type) {
            return Err(Error::fixture(format!(
                "component type listed twice in palette: {}",
                descriptor.component_type
            )));
        }
    }
    match ComponentType::ALL.into_iter().find(|t| !seen.contains(t)) {
        Some(missing) => Err(Error::fixture(format!(
            "component palette has no entry for {missing}"
        ))),
        None => Ok(()),
    }
}

fn validate_default_params(registry: &FixtureRegistry) -> Result<()> {
    let defaults = &registry.preset_data().component_default_params;
    match ComponentType::ALL
        .into_iter()
        .find(|t| !defaults.contains_key(t))
    {
        Some(missing) => Err(Error::fixture(format!(
            "no default params for component type {missing}"
        ))),
        None => Ok(()),
    }
}

fn validate_param_schemas(registry: &FixtureRegistry) -> Result<()> {
    for (component_type, fields) in registry.param_schemas() {
        if fields.is_empty() {
            return Err(Error::fixture(format!(
                "param schema for {component_type} has no fields"
            )));
        }
        validate_field_names(component_type, fields)?;
    }
    Ok(())
}

fn validate_field_names(component_type: &ComponentType, fields: &[FieldDescriptor]) -> Result<()> {
    let mut seen = HashSet::new();
    for field in fields {
        if field.name.is_empty() {
            return Err(Error::fixture(format!(
                "param schema for {component_type} has a field without a name"
            )));
        }
        if !seen.insert(field.name.as_str()) {
            return Err(Error::fixture(format!(
                "param schema for {component_type} repeats field {}",
                field.name
            )));
        }
    }
    Ok(())
}
