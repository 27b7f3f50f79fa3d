use std::rc::Rc;

use leptos::prelude::*;
use variant_track_core::{
    FrequencyDisplayConfig, GenomicInterval, PointerKind, RedrawOutcome, TrackCallbacks,
    TrackController, TrackProps, TrackStyle, VariantCallback, VariantSource,
};
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::canvas::surface;

type Controller = TrackController<Rc<dyn VariantSource>, MouseEvent>;

/// Canvas track of variant glyphs with hover and click hooks.
///
/// Redraws when the source reports new data or when `range`, `width`,
/// `height` or `display` change. Hooks receive the variants under the pointer
/// and the raw mouse event; without a click or move hook the hit is logged.
#[component]
pub fn VariantTrack(
    source: Rc<dyn VariantSource>,
    #[prop(into)] range: Signal<GenomicInterval>,
    #[prop(into)] width: Signal<f64>,
    #[prop(into)] height: Signal<f64>,
    #[prop(into, default = Signal::stored(FrequencyDisplayConfig::default()))]
    display: Signal<FrequencyDisplayConfig>,
    #[prop(optional)] style: Option<TrackStyle>,
    #[prop(optional)] on_variant_mouse_move: Option<VariantCallback<MouseEvent>>,
    #[prop(optional)] on_variant_mouse_leave: Option<VariantCallback<MouseEvent>>,
    #[prop(optional)] on_variant_clicked: Option<VariantCallback<MouseEvent>>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let controller = StoredValue::new_local(None::<Controller>);

    let callbacks = TrackCallbacks {
        on_variant_mouse_move,
        on_variant_mouse_leave,
        on_variant_clicked,
    };
    let style = style.unwrap_or_default();

    // The source can outlive this component; a late notification finds the
    // node ref and controller disposed and does nothing.
    let subscription = source.on_new_data(Box::new(move || {
        let Some(canvas_el) = canvas_ref.try_get_untracked().flatten() else { return };
        let canvas: &HtmlCanvasElement = canvas_el.as_ref();
        controller.try_update_value(|ctrl| {
            let Some(ctrl) = ctrl else { return };
            let (w, h) = (ctrl.props().width, ctrl.props().height);
            if let Err(e) = surface::paint(canvas, w, h, |s, _| ctrl.data_arrived(s)) {
                log::error!("Variant track redraw failed: {e}");
            }
        });
    }));
    let subscribed = StoredValue::new_local(source.clone());
    on_cleanup(move || {
        subscribed.try_with_value(|s| s.remove_listener(subscription));
    });

    // Mount on the first run with a canvas, then diff props on every change.
    Effect::new(move || {
        let props = TrackProps::new(range.get(), width.get(), height.get())
            .with_display(display.get())
            .with_callbacks(callbacks.clone());

        let Some(canvas_el) = canvas_ref.get() else { return };
        let canvas: &HtmlCanvasElement = canvas_el.as_ref();
        let (w, h) = (props.width, props.height);

        controller.update_value(|ctrl| {
            let result = if let Some(existing) = ctrl.as_mut() {
                surface::paint(canvas, w, h, |s, wiped| {
                    if wiped {
                        existing.update_after_reset(props, s)
                    } else {
                        existing.update(props, s)
                    }
                })
            } else {
                let mut fresh = TrackController::new(source.clone(), style.clone(), props);
                let result = surface::paint(canvas, w, h, |s, _| fresh.mount(s));
                *ctrl = Some(fresh);
                result
            };
            match result {
                Ok(RedrawOutcome::Drawn(stats)) => {
                    log::debug!("Variant track drew {} glyphs", stats.glyphs)
                }
                Ok(_) => {}
                Err(e) => log::error!("Variant track redraw failed: {e}"),
            }
        });
    });

    let pointer = move |kind: PointerKind, ev: &MouseEvent| {
        let (x, y) = (ev.offset_x() as f64, ev.offset_y() as f64);
        controller.with_value(|ctrl| {
            if let Some(ctrl) = ctrl {
                ctrl.handle_pointer(kind, x, y, ev);
            }
        });
    };

    view! {
        <canvas
            class="variant-track"
            node_ref=canvas_ref
            on:mousemove=move |ev: MouseEvent| pointer(PointerKind::Move, &ev)
            on:mouseleave=move |ev: MouseEvent| pointer(PointerKind::Leave, &ev)
            on:click=move |ev: MouseEvent| pointer(PointerKind::Click, &ev)
        />
    }
}
