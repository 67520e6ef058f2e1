//! Engine configuration.
//!
//! Each engine receives a `GameConfig` at construction time and keeps its own
//! copy. Nothing here is read from process-wide state, and the rules never
//! look at the theme or piece scale: those are carried for the rendering
//! collaborator, which reads them back through `config()`.

use serde::{Deserialize, Serialize};

/// Default rendering scale for pieces.
pub const DEFAULT_PIECE_SCALE: f32 = 0.9;

/// Styling for an overlay (selection highlight or legal-move marker).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlayStyle {
    pub base: String,
    pub stroke: String,
    pub shadow: String,
}

impl OverlayStyle {
    fn new(base: &str, stroke: &str, shadow: &str) -> Self {
        Self {
            base: base.to_string(),
            stroke: stroke.to_string(),
            shadow: shadow.to_string(),
        }
    }
}

/// Piece fill colors and shadows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PiecePalette {
    pub white: String,
    pub black: String,
    pub white_shadow: String,
    pub black_shadow: String,
}

/// A named color theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Display name, e.g. "Classic Brown".
    pub name: String,
    /// Light square color.
    pub light: String,
    /// Dark square color.
    pub dark: String,
    pub highlight: OverlayStyle,
    pub valid_move: OverlayStyle,
    pub pieces: PiecePalette,
}

const VALID_MOVE_BASE: &str = "rgba(255, 215, 0, 0.5)";
const VALID_MOVE_STROKE: &str = "#FFD700";
const VALID_MOVE_SHADOW: &str = "drop-shadow(0 0 4px #FFD700) drop-shadow(0 0 8px #DAA520)";

impl Theme {
    fn build(name: &str, light: &str, dark: &str, highlight: OverlayStyle, shadow_alpha: &str) -> Self {
        Self {
            name: name.to_string(),
            light: light.to_string(),
            dark: dark.to_string(),
            highlight,
            valid_move: OverlayStyle::new(VALID_MOVE_BASE, VALID_MOVE_STROKE, VALID_MOVE_SHADOW),
            pieces: PiecePalette {
                white: "#FFFFFF".to_string(),
                black: "#000000".to_string(),
                white_shadow: format!("0 0 5px rgba(0, 0, 0, {shadow_alpha})"),
                black_shadow: format!("0 0 5px rgba(255, 255, 255, {shadow_alpha})"),
            },
        }
    }

    #[must_use]
    pub fn forest_green() -> Self {
        Self::build(
            "Forest Green",
            "#E8F3E8",
            "#769656",
            OverlayStyle::new("rgba(255, 255, 0, 0.15)", "#FFFFFF", "0 0 10px rgba(255, 255, 255, 0.5)"),
            "0.3",
        )
    }

    #[must_use]
    pub fn classic_brown() -> Self {
        Self::build(
            "Classic Brown",
            "#f0d9b5",
            "#b58863",
            OverlayStyle::new("rgba(255, 255, 0, 0.15)", "#000000", "0 0 10px rgba(0, 0, 0, 0.5)"),
            "0.3",
        )
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self::build(
            "High Contrast",
            "#FFFFFF",
            "#000000",
            OverlayStyle::new("rgba(255, 255, 0, 0.3)", "#FFD700", "0 0 10px rgba(255, 215, 0, 0.8)"),
            "0.5",
        )
    }

    #[must_use]
    pub fn ocean_blue() -> Self {
        Self::build(
            "Ocean Blue",
            "#E8F3FF",
            "#4682B4",
            OverlayStyle::new("rgba(255, 255, 255, 0.2)", "#FFFFFF", "0 0 10px rgba(255, 255, 255, 0.6)"),
            "0.3",
        )
    }

    #[must_use]
    pub fn twilight() -> Self {
        Self::build(
            "Twilight",
            "#E8E8E8",
            "#4A4A4A",
            OverlayStyle::new("rgba(147, 112, 219, 0.2)", "#9370DB", "0 0 10px rgba(147, 112, 219, 0.6)"),
            "0.3",
        )
    }

    /// All built-in themes.
    #[must_use]
    pub fn builtin() -> Vec<Theme> {
        vec![
            Self::forest_green(),
            Self::classic_brown(),
            Self::high_contrast(),
            Self::ocean_blue(),
            Self::twilight(),
        ]
    }

    /// Look up a built-in theme by display name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Theme> {
        Self::builtin().into_iter().find(|t| t.name == name)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic_brown()
    }
}

/// Configuration handed to each engine constructor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    /// Color theme for the renderer.
    pub theme: Theme,

    /// Piece rendering scale in `(0, 1]`.
    pub piece_scale: f32,

    /// Dice seed. `None` draws a seed from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            piece_scale: DEFAULT_PIECE_SCALE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the given theme.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Set the piece scale, clamped into `(0, 1]`.
    #[must_use]
    pub fn with_piece_scale(mut self, scale: f32) -> Self {
        self.piece_scale = scale;
        self.normalized()
    }

    /// Fix the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Clamp out-of-range values. Engines call this on construction.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if !self.piece_scale.is_finite() || self.piece_scale <= 0.0 {
            self.piece_scale = DEFAULT_PIECE_SCALE;
        } else if self.piece_scale > 1.0 {
            self.piece_scale = 1.0;
        }
        self
    }
}
