use std::env;

use eyre::{eyre, Result, WrapErr};
use glam::Vec4;

/// Window and drawing settings.
/// Defaults can be overridden with `FILL_WIDTH`, `FILL_HEIGHT` and `FILL_COLOR`.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub clear_color: Vec4,
    pub fill_color: Vec4,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Fill shader".to_string(),
            width: 1280,
            height: 720,
            vsync: true,
            clear_color: Vec4::new(0.1, 0.1, 0.1, 1.0),
            fill_color: Vec4::new(0.2, 0.55, 0.85, 1.0),
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(w) = var("FILL_WIDTH") {
            settings.width = parse_dim(&w).wrap_err("Invalid FILL_WIDTH")?;
        }
        if let Some(h) = var("FILL_HEIGHT") {
            settings.height = parse_dim(&h).wrap_err("Invalid FILL_HEIGHT")?;
        }
        if let Some(c) = var("FILL_COLOR") {
            settings.fill_color = parse_color(&c).wrap_err("Invalid FILL_COLOR")?;
        }

        Ok(settings)
    }
}

fn parse_dim(s: &str) -> Result<u32> {
    let v: u32 = s.trim().parse()?;
    if v == 0 {
        return Err(eyre!("Dimension must be positive"));
    }
    Ok(v)
}

/// Parses `r,g,b,a` with every channel in [0, 1]
fn parse_color(s: &str) -> Result<Vec4> {
    let channels = s
        .split(',')
        .map(|c| c.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()?;

    let channels: [f32; 4] = channels
        .try_into()
        .map_err(|c: Vec<f32>| eyre!("Expected 4 channels, got '{}'", c.len()))?;

    if let Some(c) = channels.iter().find(|c| !(0.0..=1.0).contains(*c)) {
        return Err(eyre!("Channel '{c}' is out of range"));
    }

    Ok(Vec4::from(channels))
}
