use super::config::FieldConfig;
use super::pointer::PointerTracker;
use super::strand::GuitarString;
use super::surface::Surface;

/// The full set of strings laid out across the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct StringField {
    pub config: FieldConfig,
    pub width: f32,
    pub height: f32,
    pub dpr: f32,
    pub strings: Vec<GuitarString>,
}

impl StringField {
    pub fn new(config: FieldConfig, width: f32, height: f32, dpr: f32) -> Self {
        let strings = layout(&config, width, height);
        Self {
            config,
            width,
            height,
            dpr,
            strings,
        }
    }

    /// Rebuild every string for a new logical size. Existing motion is discarded.
    pub fn resize(&mut self, width: f32, height: f32, dpr: f32) {
        *self = Self::new(self.config, width, height, dpr);
    }

    #[inline]
    pub fn spacing(&self) -> f32 {
        spacing(self.width, self.config.string_count)
    }

    /// Canvas backing-store size in physical pixels (never zero).
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width * self.dpr).round().max(1.0) as u32;
        let h = (self.height * self.dpr).round().max(1.0) as u32;
        (w, h)
    }

    /// Update every string; returns how many are still moving.
    pub fn update(&mut self, pointer: &PointerTracker) -> usize {
        let params = self.config.physics;
        self.strings
            .iter_mut()
            .map(|s| s.update(pointer, &params))
            .filter(|moving| *moving)
            .count()
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for s in &self.strings {
            s.draw(surface, &self.config.style);
        }
    }

    /// One render-loop frame: clear, tick the pointer, then update and draw
    /// each string in order. Returns the number of strings still moving.
    pub fn frame<S: Surface + ?Sized>(
        &mut self,
        pointer: &mut PointerTracker,
        surface: &mut S,
    ) -> usize {
        surface.clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        pointer.tick();
        let params = self.config.physics;
        let style = self.config.style;
        let mut moving = 0;
        for s in self.strings.iter_mut() {
            if s.update(pointer, &params) {
                moving += 1;
            }
            s.draw(surface, &style);
        }
        moving
    }
}

#[inline]
pub fn spacing(width: f32, count: usize) -> f32 {
    width / (count as f32 + 1.0)
}

fn layout(config: &FieldConfig, width: f32, height: f32) -> Vec<GuitarString> {
    let spacing = spacing(width, config.string_count);
    (1..=config.string_count)
        .map(|i| GuitarString::new(spacing * i as f32, height, config.segments))
        .collect()
}
