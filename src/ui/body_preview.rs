//! Rotating body preview on a 2D canvas.
//!
//! The model is rebuilt whenever the measurements, garment or skin tone
//! change; an animation-frame loop spins and redraws it until the component
//! unmounts.

use leptos::prelude::*;

use crate::core::body_mesh::{
    DEFAULT_GARMENT_COLOR, DEFAULT_SKIN_TONE, GarmentStyle, Material, Measurements, SHOE_COLOR,
};

/// Fill colors per material
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub skin: String,
    pub garment: String,
}

impl Palette {
    pub fn new(skin_tone: &str, garment: &GarmentStyle) -> Self {
        Self {
            skin: css_color_or(skin_tone, DEFAULT_SKIN_TONE),
            garment: css_color_or(&garment.color, DEFAULT_GARMENT_COLOR),
        }
    }

    pub fn color(&self, material: Material) -> &str {
        match material {
            Material::Skin => &self.skin,
            Material::Shoe => SHOE_COLOR,
            Material::Garment => &self.garment,
        }
    }
}

/// Accept `#rgb` / `#rrggbb`, anything else uses the fallback
fn css_color_or(value: &str, fallback: &str) -> String {
    let value = value.trim();
    let hex = value.strip_prefix('#').unwrap_or("");
    let valid = matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        value.to_string()
    } else {
        fallback.to_string()
    }
}

#[component]
pub fn BodyPreview(
    #[prop(into)] measurements: Signal<Measurements>,
    #[prop(into)] garment: Signal<GarmentStyle>,
    /// Detected skin tone as a CSS hex color
    #[prop(into)]
    skin_tone: Signal<String>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(not(feature = "ssr"))]
    animation::start(canvas_ref, measurements, garment, skin_tone);
    #[cfg(feature = "ssr")]
    let _ = (measurements, garment, skin_tone);

    view! {
        <div class="body-preview">
            <canvas node_ref=canvas_ref class="body-canvas" width="360" height="520"></canvas>
            <p class="muted body-preview-caption">"Live 3D preview"</p>
        </div>
    }
}

#[cfg(not(feature = "ssr"))]
mod animation {
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::{Rc, Weak};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use super::Palette;
    use crate::core::body_mesh::{
        BodyModel, GarmentStyle, Measurements, SPIN_PER_FRAME, ShapeKind, Viewport, build_body,
    };

    type FrameSlot = RefCell<Option<Closure<dyn FnMut()>>>;

    struct Scene {
        model: BodyModel,
        palette: Palette,
    }

    impl Scene {
        fn new(measurements: &Measurements, garment: &GarmentStyle, skin_tone: &str) -> Self {
            Self {
                model: build_body(measurements, garment),
                palette: Palette::new(skin_tone, garment),
            }
        }
    }

    pub fn start(
        canvas_ref: NodeRef<leptos::html::Canvas>,
        measurements: Signal<Measurements>,
        garment: Signal<GarmentStyle>,
        skin_tone: Signal<String>,
    ) {
        let scene = Rc::new(RefCell::new(Scene::new(
            &measurements.get_untracked(),
            &garment.get_untracked(),
            &skin_tone.get_untracked(),
        )));

        {
            let scene = scene.clone();
            Effect::new(move |_| {
                let next = Scene::new(&measurements.get(), &garment.get(), &skin_tone.get());
                *scene.borrow_mut() = next;
            });
        }

        let stopped = Arc::new(AtomicBool::new(false));
        let pending = Arc::new(AtomicI32::new(0));
        let slot: Rc<FrameSlot> = Rc::new(RefCell::new(None));

        let frame = {
            let stopped = stopped.clone();
            let pending = pending.clone();
            let weak = Rc::downgrade(&slot);
            let mut angle = 0.0_f64;
            move || {
                if stopped.load(Ordering::Relaxed) {
                    return;
                }
                if let Some(canvas) = canvas_ref.get_untracked() {
                    draw(&canvas, &scene.borrow(), angle);
                }
                angle = (angle + SPIN_PER_FRAME) % TAU;
                request_frame(&weak, &pending);
            }
        };
        *slot.borrow_mut() = Some(Closure::new(frame));
        request_frame(&Rc::downgrade(&slot), &pending);

        // The owner keeps the only strong reference; unmounting drops the closure.
        let _frame_closure = StoredValue::new_local(slot);

        on_cleanup(move || {
            stopped.store(true, Ordering::Relaxed);
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(pending.load(Ordering::Relaxed));
            }
        });
    }

    fn request_frame(slot: &Weak<FrameSlot>, pending: &AtomicI32) {
        let Some(slot) = slot.upgrade() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(closure) = slot.borrow().as_ref()
            && let Ok(id) = window.request_animation_frame(closure.as_ref().unchecked_ref())
        {
            pending.store(id, Ordering::Relaxed);
        }
    }

    fn draw(canvas: &HtmlCanvasElement, scene: &Scene, angle: f64) {
        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            return;
        };

        let viewport = Viewport {
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
        };
        ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);

        for shape in scene.model.project(angle, viewport) {
            ctx.set_fill_style_str(scene.palette.color(shape.material));
            ctx.begin_path();
            match &shape.kind {
                ShapeKind::Circle { cx, cy, r } => {
                    let _ = ctx.arc(*cx, *cy, *r, 0.0, TAU);
                }
                ShapeKind::Polygon(points) => {
                    let mut points = points.iter();
                    if let Some((x, y)) = points.next() {
                        ctx.move_to(*x, *y);
                    }
                    for (x, y) in points {
                        ctx.line_to(*x, *y);
                    }
                    ctx.close_path();
                }
            }
            ctx.fill();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::body_mesh::GarmentCategory;

    #[test]
    fn test_palette_maps_materials() {
        let garment = GarmentStyle {
            category: GarmentCategory::Shirt,
            color: "#123456".to_string(),
        };
        let palette = Palette::new("#abc", &garment);
        assert_eq!(palette.color(Material::Skin), "#abc");
        assert_eq!(palette.color(Material::Garment), "#123456");
        assert_eq!(palette.color(Material::Shoe), SHOE_COLOR);
    }

    #[test]
    fn test_palette_rejects_invalid_colors() {
        let garment = GarmentStyle {
            category: GarmentCategory::Dress,
            color: "red; background: url(x)".to_string(),
        };
        let palette = Palette::new("", &garment);
        assert_eq!(palette.skin, DEFAULT_SKIN_TONE);
        assert_eq!(palette.garment, DEFAULT_GARMENT_COLOR);
    }
}
