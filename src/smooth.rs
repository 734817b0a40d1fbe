use crate::constants::SMOOTH_SCROLL_DURATION_SEC;
use crate::dom;
use crate::scroll::ease_out_expo;
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Handle to a page-level Lenis instance, when the library is present.
#[derive(Clone)]
pub struct SmoothScroll {
    lenis: Object,
}

impl SmoothScroll {
    /// Construct `new Lenis({...})` from the global constructor.
    pub fn init() -> anyhow::Result<Self> {
        let global = js_sys::global();
        let ctor = Reflect::get(&global, &JsValue::from_str("Lenis"))
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok())
            .ok_or_else(|| anyhow::anyhow!("Lenis not loaded"))?;

        let options = Object::new();
        set(&options, "duration", &JsValue::from_f64(SMOOTH_SCROLL_DURATION_SEC))?;
        set(&options, "orientation", &JsValue::from_str("vertical"))?;
        set(&options, "gestureOrientation", &JsValue::from_str("vertical"))?;
        set(&options, "smoothWheel", &JsValue::TRUE)?;
        let easing = Closure::wrap(Box::new(ease_out_expo) as Box<dyn Fn(f64) -> f64>);
        set(&options, "easing", easing.as_ref())?;
        easing.forget();

        let args = js_sys::Array::of1(&options);
        let lenis = Reflect::construct(&ctor, &args)
            .map_err(|e| anyhow::anyhow!("new Lenis failed: {:?}", e))?
            .dyn_into::<Object>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { lenis })
    }

    /// Advance the scroll animation; `time_ms` is the rAF timestamp.
    pub fn raf(&self, time_ms: f64) {
        _ = self.call1("raf", &JsValue::from_f64(time_ms));
    }

    pub fn stop(&self) {
        _ = self.call0("stop");
    }

    pub fn start(&self) {
        _ = self.call0("start");
    }

    /// Current scroll offset as tracked by Lenis.
    pub fn scroll(&self) -> Option<f64> {
        Reflect::get(&self.lenis, &JsValue::from_str("scroll"))
            .ok()
            .and_then(|v| v.as_f64())
    }

    pub fn scroll_to_immediate(&self, y: f64) {
        let opts = Object::new();
        if set(&opts, "immediate", &JsValue::TRUE).is_ok() {
            if let Ok(f) = self.method("scrollTo") {
                _ = f.call2(&self.lenis, &JsValue::from_f64(y), &opts);
            }
        }
    }

    fn method(&self, name: &str) -> anyhow::Result<Function> {
        Reflect::get(&self.lenis, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok())
            .ok_or_else(|| anyhow::anyhow!("Lenis has no method {}", name))
    }

    fn call0(&self, name: &str) -> anyhow::Result<()> {
        self.method(name)?
            .call0(&self.lenis)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(())
    }

    fn call1(&self, name: &str, arg: &JsValue) -> anyhow::Result<()> {
        self.method(name)?
            .call1(&self.lenis, arg)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(())
    }
}

fn set(target: &Object, key: &str, value: &JsValue) -> anyhow::Result<()> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

/// Freezes page scrolling while an overlay (menu, modal) is open.
#[derive(Clone, Default)]
pub struct ScrollLock {
    smooth: Option<SmoothScroll>,
}

impl ScrollLock {
    pub fn new(smooth: Option<SmoothScroll>) -> Self {
        Self { smooth }
    }

    /// Pause smooth scrolling, optionally hiding body overflow as well.
    pub fn lock(&self, hide_overflow: bool) {
        if hide_overflow {
            dom::set_body_scroll_locked(true);
        }
        if let Some(s) = &self.smooth {
            s.stop();
        }
    }

    pub fn unlock(&self) {
        dom::set_body_scroll_locked(false);
        if let Some(s) = &self.smooth {
            s.start();
        }
    }

    pub fn smooth(&self) -> Option<&SmoothScroll> {
        self.smooth.as_ref()
    }
}
