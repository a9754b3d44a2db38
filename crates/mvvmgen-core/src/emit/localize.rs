use crate::{
    ThisError,
    attribute::localize_resource,
    emit::{
        literal::{doc_escape, string_literal},
        unit::TypeUnit,
    },
    names::localized_property_name,
};
use indexmap::{IndexMap, IndexSet};
use mvvmgen_host::prelude::*;
use tracing::warn;

///
/// LocalizationError
///

#[remain::sorted]
#[derive(Debug, ThisError)]
pub enum LocalizationError {
    #[error("localization resource '{resource}' is not among the additional texts")]
    MissingResource { resource: String },

    #[error("type has no Localize resource name")]
    NoResourceName,

    #[error("localization resource '{resource}' is not a flat string map: {source}")]
    Parse {
        resource: String,
        source: serde_json::Error,
    },
}

///
/// LocalizeDecision
///
/// A decoded resource: entries in document order.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LocalizeDecision {
    pub resource_name: String,
    pub entries: IndexMap<String, String>,
}

impl LocalizeDecision {
    /// Resolve the type's `[Localize]` resource through the host and decode it.
    pub fn load<H>(host: &H, attributes: &[AttributeData]) -> Result<Self, LocalizationError>
    where
        H: Host + ?Sized,
    {
        let resource = localize_resource(attributes).ok_or(LocalizationError::NoResourceName)?;

        let text = host
            .additional_text(&resource)
            .ok_or_else(|| LocalizationError::MissingResource {
                resource: resource.clone(),
            })?;

        Self::from_json(&resource, &text.text)
    }

    pub fn from_json(resource: &str, json: &str) -> Result<Self, LocalizationError> {
        let entries = serde_json::from_str::<IndexMap<String, String>>(json).map_err(|source| {
            LocalizationError::Parse {
                resource: resource.to_string(),
                source,
            }
        })?;

        Ok(Self {
            resource_name: resource.to_string(),
            entries,
        })
    }
}

/// One static string property per entry. Entries with an empty key, or
/// whose derived name repeats an earlier one, are skipped. Returns the
/// number of properties written.
pub fn emit_localized(unit: &mut TypeUnit, decision: &LocalizeDecision) -> usize {
    let mut seen = IndexSet::new();

    for (key, value) in &decision.entries {
        let Some(name) = localized_property_name(key) else {
            warn!(resource = %decision.resource_name, "empty localization key skipped");
            continue;
        };

        if !seen.insert(name.clone()) {
            warn!(
                resource = %decision.resource_name,
                key = %key,
                property = %name,
                "localization key maps onto an existing property, skipped"
            );
            continue;
        }

        let w = unit.begin_member();
        w.write_line("/// <summary>");
        w.write_line(&format!(
            "/// Looks up a localized string similar to {}.",
            doc_escape(value)
        ));
        w.write_line("/// </summary>");
        w.write_line(&format!(
            "public static string {name} {{ get; set; }} = {};",
            string_literal(value)
        ));
    }

    seen.len()
}
