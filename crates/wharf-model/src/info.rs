//! Adapter capability descriptors reported to the host platform.

use serde::{Deserialize, Serialize};

/// Resource type tag for container images.
pub const RESOURCE_TYPE_IMAGE: &str = "image";

/// Filter type tag for repository-name filters.
pub const FILTER_TYPE_NAME: &str = "name";

/// Filter type tag for tag filters.
pub const FILTER_TYPE_TAG: &str = "tag";

/// Filter style for free-text substring input.
pub const FILTER_STYLE_TEXT: &str = "text";

/// Trigger type for manually started replications.
pub const TRIGGER_MANUAL: &str = "manual";

/// Trigger type for scheduled replications.
pub const TRIGGER_SCHEDULED: &str = "scheduled";

/// Capabilities an adapter reports to the host platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryInfo {
    /// Adapter type tag the factory was registered under.
    pub registry_type: String,

    /// Human-readable adapter description.
    pub description: String,

    /// Resource types the adapter can replicate.
    pub supported_resource_types: Vec<String>,

    /// Filters the adapter honors when listing resources.
    pub supported_resource_filters: Vec<FilterStyle>,

    /// Replication trigger types the adapter supports.
    pub supported_triggers: Vec<String>,
}

/// A supported filter and the input style the host should render for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterStyle {
    /// Filter type tag (see [`FILTER_TYPE_NAME`], [`FILTER_TYPE_TAG`]).
    pub filter_type: String,

    /// Input style tag (see [`FILTER_STYLE_TEXT`]).
    pub style: String,
}

impl FilterStyle {
    /// Creates a free-text filter descriptor for the given filter type.
    ///
    /// # Examples
    ///
    /// ```
    /// use wharf_model::{FilterStyle, FILTER_STYLE_TEXT, FILTER_TYPE_NAME};
    ///
    /// let style = FilterStyle::text(FILTER_TYPE_NAME);
    /// assert_eq!(style.style, FILTER_STYLE_TEXT);
    /// ```
    #[must_use]
    pub fn text(filter_type: impl Into<String>) -> Self {
        Self {
            filter_type: filter_type.into(),
            style: FILTER_STYLE_TEXT.to_string(),
        }
    }
}
