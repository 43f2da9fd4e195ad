use super::constants::*;

/// How the particle field is seeded and animated.
#[derive(Clone, Debug, PartialEq)]
pub enum Strategy {
    /// Free-floating network bouncing inside the domain box.
    Uniform,
    /// Cloud that assembles into `text` while the pointer hovers.
    Text { text: String },
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Uniform => "uniform",
            Strategy::Text { .. } => "text",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundConfig {
    pub strategy: Strategy,
    /// Uniform: exact point count. Text: minimum point count (the mask may add more).
    pub particle_count: usize,
    pub connection_distance: f32,
    pub pointer_gain: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self::uniform()
    }
}

impl BackgroundConfig {
    pub fn uniform() -> Self {
        Self {
            strategy: Strategy::Uniform,
            particle_count: UNIFORM_PARTICLE_COUNT,
            connection_distance: UNIFORM_CONNECTION_DISTANCE,
            pointer_gain: UNIFORM_POINTER_GAIN,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::Text { text: text.into() },
            particle_count: TEXT_MIN_PARTICLES,
            connection_distance: TEXT_CONNECTION_DISTANCE,
            pointer_gain: TEXT_POINTER_GAIN,
        }
    }

    /// Build a config from the mount element's `data-*` attributes.
    ///
    /// Unknown or malformed values fall back to the defaults and are reported
    /// in the returned warnings so the caller can log them.
    pub fn from_attrs(
        variant: Option<&str>,
        text: Option<&str>,
        particles: Option<&str>,
    ) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        let mut cfg = match variant.map(str::trim) {
            None | Some("") | Some("uniform") => Self::uniform(),
            Some("text") => {
                let t = text.map(str::trim).filter(|t| !t.is_empty());
                Self::text(t.unwrap_or(DEFAULT_TEXT))
            }
            Some(other) => {
                warnings.push(format!("unknown variant {:?}, using uniform", other));
                Self::uniform()
            }
        };
        if let Some(raw) = particles {
            match parse_particle_count(raw) {
                Some(n) => cfg.particle_count = n,
                None => warnings.push(format!(
                    "invalid particle count {:?} (expected {}..={})",
                    raw, MIN_PARTICLES, MAX_PARTICLES
                )),
            }
        }
        (cfg, warnings)
    }
}

#[inline]
pub fn parse_particle_count(raw: &str) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (MIN_PARTICLES..=MAX_PARTICLES).contains(n))
}
