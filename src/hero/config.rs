use crate::constants::*;

/// Per-frame spring/damper parameters shared by every point in the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsParams {
    pub spring_k: f32,
    pub damping: f32,
    pub interaction_radius: f32,
    pub velocity_threshold: f32,
    pub impulse_scale: f32,
    pub active_decay: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            spring_k: SPRING_K,
            damping: DAMPING,
            interaction_radius: INTERACTION_RADIUS,
            velocity_threshold: POINTER_VELOCITY_THRESHOLD,
            impulse_scale: IMPULSE_SCALE,
            active_decay: ACTIVE_DECAY,
        }
    }
}

/// Stroke endpoints; a string at excitation `a` is drawn at `lerp(rest, accent, a)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub rest_color: [f32; 3],
    pub accent_color: [f32; 3],
    pub rest_width: f32,
    pub accent_width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            rest_color: REST_COLOR,
            accent_color: ACCENT_COLOR,
            rest_width: REST_LINE_WIDTH,
            accent_width: ACCENT_LINE_WIDTH,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldConfig {
    pub string_count: usize,
    pub segments: usize,
    pub physics: PhysicsParams,
    pub style: StrokeStyle,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            string_count: STRING_COUNT,
            segments: STRING_SEGMENTS,
            physics: PhysicsParams::default(),
            style: StrokeStyle::default(),
        }
    }
}

impl FieldConfig {
    /// Apply `data-strings` / `data-segments` style overrides.
    ///
    /// Values that are missing, unparsable or zero leave the default in place.
    pub fn with_overrides(mut self, strings: Option<&str>, segments: Option<&str>) -> Self {
        if let Some(n) = parse_count("data-strings", strings) {
            self.string_count = n;
        }
        if let Some(n) = parse_count("data-segments", segments) {
            self.segments = n;
        }
        self
    }
}

fn parse_count(name: &str, raw: Option<&str>) -> Option<usize> {
    let raw = raw?.trim();
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Some(n),
        _ => {
            log::warn!("[config] ignoring {}={:?}", name, raw);
            None
        }
    }
}
