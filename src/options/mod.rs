//! Book configuration with TOML preset support.
//!
//! Every tunable constant of the page-turn engine (dimensions, curvature
//! strengths, hinge angles, step timing, damping responsiveness) lives
//! here. Options serialize to/from TOML so a book's feel can be stored as
//! a preset. They are fixed for the lifetime of a [`BookEngine`].
//!
//! [`BookEngine`]: crate::engine::BookEngine

mod angles;
mod bend;
mod damping;
mod geometry;
mod timing;

use std::path::Path;

pub use angles::AngleOptions;
pub use bend::BendOptions;
pub use damping::DampingOptions;
pub use geometry::GeometryOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use timing::TimingOptions;

use crate::error::FolioError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[timing]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct BookOptions {
    /// Leaf and cover dimensions.
    pub geometry: GeometryOptions,
    /// Leaf curvature profile.
    pub bend: BendOptions,
    /// Hinge angles.
    #[schemars(skip)]
    pub angles: AngleOptions,
    /// Step scheduling and turn timing.
    pub timing: TimingOptions,
    /// Damping responsiveness.
    pub damping: DampingOptions,
}

impl BookOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(BookOptions)
    }

    /// The schema as pretty-printed JSON, for settings panels built
    /// outside Rust.
    pub fn json_schema_string() -> Result<String, FolioError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| FolioError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FolioError> {
        let content = std::fs::read_to_string(path).map_err(FolioError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| FolioError::OptionsParse(e.to_string()))?;
        options.validate()?;
        log::info!("loaded book options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FolioError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FolioError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FolioError::Io)?;
        }
        std::fs::write(path, content).map_err(FolioError::Io)?;
        log::info!("saved book options to {}", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Reject shapes the per-frame solvers cannot animate.
    pub fn validate(&self) -> Result<(), FolioError> {
        let g = &self.geometry;
        if g.page_segments == 0 {
            return Err(FolioError::InvalidOptions(
                "page_segments must be at least 1".to_owned(),
            ));
        }
        if self.bend.curve_split_bone as usize > g.page_bone_count() {
            return Err(FolioError::InvalidOptions(format!(
                "curve_split_bone {} exceeds the {}-bone chain",
                self.bend.curve_split_bone,
                g.page_bone_count()
            )));
        }

        let positive = [
            ("page_width", g.page_width),
            ("page_height", g.page_height),
            ("page_depth", g.page_depth),
            ("cover_depth", g.cover_depth),
            ("damping.page_turn", self.damping.page_turn),
            ("damping.page_fold", self.damping.page_fold),
            ("damping.cover_rotation", self.damping.cover_rotation),
            ("damping.cover_translation", self.damping.cover_translation),
            ("damping.highlight", self.damping.highlight),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(FolioError::InvalidOptions(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }

        let finite = [
            ("cover_scale", g.cover_scale),
            ("inside_curve_strength", self.bend.inside_curve_strength),
            ("outside_curve_strength", self.bend.outside_curve_strength),
            ("turning_curve_strength", self.bend.turning_curve_strength),
            ("fold_angle_deg", self.bend.fold_angle_deg),
            ("stacking_angle_deg", self.bend.stacking_angle_deg),
            ("page_open_deg", self.angles.page_open_deg),
            ("page_closed_deg", self.angles.page_closed_deg),
            ("cover_open_deg", self.angles.cover_open_deg),
            ("cover_closed_deg", self.angles.cover_closed_deg),
            ("back_cover_flat_deg", self.angles.back_cover_flat_deg),
            ("highlight_intensity", self.damping.highlight_intensity),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(FolioError::InvalidOptions(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        if self.timing.turn_duration_ms == 0 {
            return Err(FolioError::InvalidOptions(
                "turn_duration_ms must be at least 1".to_owned(),
            ));
        }
        if self.timing.max_frame_delta_ms == 0 {
            return Err(FolioError::InvalidOptions(
                "max_frame_delta_ms must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = BookOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: BookOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[timing]
cover_step_ms = 600
skip_ahead_step_ms = 50
";
        let opts: BookOptions = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.timing.cover_step_ms, 600);
        assert_eq!(opts.timing.skip_ahead_step_ms, Some(50));
        // Everything else should be default
        assert_eq!(opts.timing.page_step_ms, 150);
        assert_eq!(opts.geometry.page_segments, 30);
        assert_eq!(opts.bend.turn_curve, EasingFunction::SineArc);
    }

    #[test]
    fn turn_curve_parses_from_snake_case() {
        let toml_str = r#"
[bend]
turn_curve = "quadratic_out"
"#;
        let opts: BookOptions = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.bend.turn_curve, EasingFunction::QuadraticOut);
    }

    #[test]
    fn defaults_validate() {
        assert!(BookOptions::default().validate().is_ok());
    }

    #[test]
    fn zero_segments_rejected() {
        let mut opts = BookOptions::default();
        opts.geometry.page_segments = 0;
        assert!(matches!(
            opts.validate(),
            Err(FolioError::InvalidOptions(_))
        ));
    }

    #[test]
    fn non_finite_constant_rejected() {
        let mut opts = BookOptions::default();
        opts.bend.turning_curve_strength = f32::NAN;
        assert!(opts.validate().is_err());

        let mut opts = BookOptions::default();
        opts.damping.cover_rotation = 0.0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn zero_frame_delta_rejected() {
        let mut opts = BookOptions::default();
        opts.timing.max_frame_delta_ms = 0;
        assert!(matches!(
            opts.validate(),
            Err(FolioError::InvalidOptions(_))
        ));
        opts.timing.max_frame_delta_ms = 1;
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn save_then_load_preset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets").join("snappy.toml");
        let mut opts = BookOptions::default();
        opts.damping.page_turn = 9.0;
        opts.save(&path).unwrap();

        let loaded = BookOptions::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(
            BookOptions::list_presets(&dir.path().join("presets")),
            vec!["snappy".to_owned()]
        );
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[timing\npage_step_ms = ").unwrap();
        assert!(matches!(
            BookOptions::load(&path),
            Err(FolioError::OptionsParse(_))
        ));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(BookOptions::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("geometry"));
        assert!(props.contains_key("bend"));
        assert!(props.contains_key("timing"));
        assert!(props.contains_key("damping"));
        assert!(!props.contains_key("angles"));

        let timing = &props["timing"]["properties"];
        assert!(timing.get("cover_step_ms").is_some());
        assert!(timing.get("skip_ahead_step_ms").is_none());

        let text = BookOptions::json_schema_string().unwrap();
        assert!(text.contains("\"geometry\""));
    }
}
