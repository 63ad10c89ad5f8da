// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor-wide configuration consumed read-only by the interaction core.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// Default distance kept between a resized box and each edge of its parent.
pub const DEFAULT_BOUND_VALUE: f64 = 15.0;

/// Default grid spacing in layout units.
pub const DEFAULT_GRID_SPACING: f64 = 12.0;

/// Custom property key selecting detour crossings instead of gaps.
///
/// Only the exact value `"true"` enables detours. Mixing detoured and gapped
/// connections in one diagram is not supported.
pub const SHOW_DETOURS_KEY: &str = "default-connection-skin-show-detours";

/// Read-only editor configuration.
///
/// The four bounds are margins measured from the parent's edges: a north bound of
/// `15` keeps a box's top edge at `y >= 15`, a south bound of `15` keeps its bottom
/// edge at least 15 units above the parent's bottom.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorProperties {
    /// Whether resizing snaps borders onto grid lines.
    pub snap_to_grid: bool,
    /// Grid spacing used when snapping.
    pub grid_spacing: f64,
    /// Minimum top position.
    pub north_bound: f64,
    /// Margin kept below the bottom edge.
    pub south_bound: f64,
    /// Margin kept right of the right edge.
    pub east_bound: f64,
    /// Minimum left position.
    pub west_bound: f64,
    /// Free-form string properties for skins and extensions.
    pub custom: BTreeMap<String, String>,
}

impl Default for EditorProperties {
    fn default() -> Self {
        Self {
            snap_to_grid: false,
            grid_spacing: DEFAULT_GRID_SPACING,
            north_bound: DEFAULT_BOUND_VALUE,
            south_bound: DEFAULT_BOUND_VALUE,
            east_bound: DEFAULT_BOUND_VALUE,
            west_bound: DEFAULT_BOUND_VALUE,
            custom: BTreeMap::new(),
        }
    }
}

impl EditorProperties {
    /// Creates properties with every value at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns these properties with snap-to-grid set.
    #[must_use]
    pub fn with_snap_to_grid(mut self, on: bool, spacing: f64) -> Self {
        self.snap_to_grid = on;
        self.grid_spacing = spacing;
        self
    }

    /// Returns these properties with all four bounds set to `value`.
    #[must_use]
    pub fn with_bounds(mut self, value: f64) -> Self {
        self.north_bound = value;
        self.south_bound = value;
        self.east_bound = value;
        self.west_bound = value;
        self
    }

    /// Sets a custom property, returning the previous value.
    pub fn set_custom(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.custom.insert(key.into(), value.into())
    }

    /// Returns a custom property.
    #[must_use]
    pub fn custom(&self, key: &str) -> Option<&str> {
        self.custom.get(key).map(String::as_str)
    }

    /// Returns `true` when connections should draw detours at crossings instead of gaps.
    #[must_use]
    pub fn show_detours(&self) -> bool {
        self.custom(SHOW_DETOURS_KEY) == Some("true")
    }

    /// Checks that every numeric value can drive the resize arithmetic.
    ///
    /// Grid spacing must be finite and positive; bounds must be finite. Hosts call
    /// this when loading user settings, before handing the properties to the
    /// resize engine.
    ///
    /// ```rust
    /// use trellis_geometry::{EditorProperties, PropertiesError};
    ///
    /// let loaded = EditorProperties::new().with_snap_to_grid(true, 0.0);
    /// let props = match loaded.validate() {
    ///     Ok(()) => loaded,
    ///     Err(PropertiesError::InvalidGridSpacing(_)) => EditorProperties::new(),
    ///     Err(err) => panic!("unexpected: {err}"),
    /// };
    /// assert_eq!(props.grid_spacing, 12.0);
    /// ```
    pub fn validate(&self) -> Result<(), PropertiesError> {
        if !(self.grid_spacing.is_finite() && self.grid_spacing > 0.0) {
            return Err(PropertiesError::InvalidGridSpacing(self.grid_spacing));
        }
        for (name, value) in [
            ("north", self.north_bound),
            ("south", self.south_bound),
            ("east", self.east_bound),
            ("west", self.west_bound),
        ] {
            if !value.is_finite() {
                return Err(PropertiesError::NonFiniteBound { bound: name, value });
            }
        }
        Ok(())
    }
}

/// Why a set of [`EditorProperties`] was rejected.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum PropertiesError {
    /// Grid spacing is zero, negative, or not finite.
    #[error("grid spacing must be finite and positive, got {0}")]
    InvalidGridSpacing(f64),
    /// One of the directional bounds is not finite.
    #[error("{bound} bound must be finite, got {value}")]
    NonFiniteBound {
        /// Which bound.
        bound: &'static str,
        /// The rejected value.
        value: f64,
    },
}
