//! Colors and shape styles.
//!
//! Endpoint appearance is a lookup from [`EndpointState`] to an immutable
//! [`ShapeStyle`]; connections and the live drag line share a
//! [`ConnectionStyle`].

use crate::endpoint::EndpointState;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0], written as `#RRGGBB[AA]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const DARK_GRAY: Color = Color::rgba(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 1.0);
    pub const LIGHT_GRAY: Color = Color::rgba(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();
        let channel = |i: usize| -> Option<f32> {
            let v = hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?;
            Some(v as f32 / 255.0)
        };

        match bytes.len() {
            6 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, 1.0)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not opaque.
    pub fn to_hex(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (byte(self.r), byte(self.g), byte(self.b), byte(self.a));
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).ok_or_else(|| D::Error::custom(format!("invalid color `{s}`")))
    }
}

// ─── Stroke / Shadow ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeJoin {
    Miter,
    Round,
    Bevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    pub join: StrokeJoin,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub color: Color,
    /// Blur radius.
    pub radius: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Style descriptor handed to the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub stroke: Option<StrokeStyle>,
    pub fill: Option<Color>,
    pub shadow: Option<Shadow>,
}

// ─── Endpoint theme ──────────────────────────────────────────────────────

const ENDPOINT_LINE_WIDTH: f64 = 3.0;

const fn endpoint_style(stroke: Color, fill: Color) -> ShapeStyle {
    ShapeStyle {
        stroke: Some(StrokeStyle {
            color: stroke,
            width: ENDPOINT_LINE_WIDTH,
            join: StrokeJoin::Round,
        }),
        fill: Some(fill),
        shadow: None,
    }
}

/// One immutable style per endpoint state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointTheme {
    pub idle: ShapeStyle,
    pub source: ShapeStyle,
    pub target: ShapeStyle,
}

impl EndpointTheme {
    pub const DEFAULT: EndpointTheme = EndpointTheme {
        idle: endpoint_style(Color::DARK_GRAY, Color::LIGHT_GRAY),
        source: endpoint_style(
            Color::rgba(0.341, 0.624, 0.169, 1.0),
            Color::rgba(0.722, 0.886, 0.592, 1.0),
        ),
        target: endpoint_style(
            Color::rgba(0.0, 0.388, 0.882, 1.0),
            Color::rgba(0.702, 0.843, 1.0, 1.0),
        ),
    };

    pub fn style(&self, state: EndpointState) -> &ShapeStyle {
        match state {
            EndpointState::Idle => &self.idle,
            EndpointState::Source => &self.source,
            EndpointState::Target => &self.target,
        }
    }
}

impl Default for EndpointTheme {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ─── Connection style ────────────────────────────────────────────────────

/// Appearance of a barbell connection (committed or in flight).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionStyle {
    pub bar_thickness: f64,
    pub bell_radius: f64,
    pub shape: ShapeStyle,
}

impl ConnectionStyle {
    /// Half the stroke width, by which the shadow silhouette is inflated.
    pub fn shadow_inflation(&self) -> f64 {
        self.shape.stroke.map_or(0.0, |s| s.width / 2.0)
    }
}

impl Default for ConnectionStyle {
    fn default() -> Self {
        Self {
            bar_thickness: 2.0,
            bell_radius: 3.0,
            shape: ShapeStyle {
                stroke: Some(StrokeStyle {
                    color: Color::WHITE,
                    width: 0.75,
                    join: StrokeJoin::Miter,
                }),
                // hsb(209°, 83%, 100%)
                fill: Some(Color::rgba(0.17, 0.599, 1.0, 1.0)),
                shadow: Some(Shadow {
                    color: Color::rgba(0.562, 0.674, 0.8, 0.85),
                    radius: 3.0,
                    offset_x: 0.0,
                    offset_y: 0.0,
                }),
            },
        }
    }
}
