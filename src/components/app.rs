use std::rc::Rc;

use leptos::prelude::*;
use variant_track_core::{
    AlleleFrequencyStrategy, FrequencyDisplayConfig, GenomicInterval, MemoryVariantSource,
    VariantCallback, VariantInfo, VariantRecord, VariantSource,
};
use web_sys::MouseEvent;

use crate::components::variant_track::VariantTrack;

const TRACK_WIDTH: f64 = 800.0;
const TRACK_HEIGHT: f64 = 40.0;

/// Demo page: one variant track over synthetic data with the display options
/// exposed as controls.
#[component]
pub fn App() -> impl IntoView {
    let source = MemoryVariantSource::with_variants(demo_variants(0));
    let batches = StoredValue::new(1u32);

    let range = RwSignal::new(initial_range());
    let by_frequency = RwSignal::new(true);
    let strategy = RwSignal::new(Some(AlleleFrequencyStrategy::Major));
    let display = Signal::derive(move || FrequencyDisplayConfig {
        variant_height_by_frequency: by_frequency.get(),
        allele_frequency_strategy: strategy.get(),
    });

    let hovered = RwSignal::new(String::new());
    let clicked = RwSignal::new(String::new());
    let on_move = VariantCallback::new(move |vs: &[VariantInfo], _ev: &MouseEvent| {
        hovered.set(describe(vs));
    });
    let on_leave = VariantCallback::new(move |_vs: &[VariantInfo], _ev: &MouseEvent| {
        hovered.set(String::new());
    });
    let on_click = VariantCallback::new(move |vs: &[VariantInfo], _ev: &MouseEvent| {
        clicked.set(describe(vs));
    });

    let on_region = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        match text.parse::<GenomicInterval>() {
            Ok(iv) => range.set(iv),
            Err(e) => log::warn!("Ignoring region {text:?}: {e}"),
        }
    };
    let on_strategy = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        strategy.set(if value.is_empty() {
            None
        } else {
            Some(AlleleFrequencyStrategy::from(value))
        });
    };
    let loader = source.clone();
    let on_load_more = move |_ev: MouseEvent| {
        let batch = batches.get_value();
        batches.set_value(batch + 1);
        loader.add_variants(demo_variants(batch));
    };

    let track_source: Rc<dyn VariantSource> = Rc::new(source);

    view! {
        <div class="app">
            <div class="toolbar">
                <input type="text" value=initial_range().to_string() on:change=on_region />
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || by_frequency.get()
                        on:change=move |ev| by_frequency.set(event_target_checked(&ev))
                    />
                    "Height by frequency"
                </label>
                <select on:change=on_strategy>
                    <option value="Major" selected=true>"Major"</option>
                    <option value="Minor">"Minor"</option>
                    <option value="">"Default"</option>
                    <option value="Bogus">"Bogus"</option>
                </select>
                <button on:click=on_load_more>"Load more variants"</button>
            </div>
            <VariantTrack
                source=track_source
                range=range
                width=TRACK_WIDTH
                height=TRACK_HEIGHT
                display=display
                on_variant_mouse_move=on_move
                on_variant_mouse_leave=on_leave
                on_variant_clicked=on_click
            />
            <div class="status">
                <span>"Hover: " {move || hovered.get()}</span>
                <span>"Clicked: " {move || clicked.get()}</span>
            </div>
        </div>
    }
}

fn initial_range() -> GenomicInterval {
    GenomicInterval::new("chr17", 7_512_400, 7_512_600).expect("static demo range is valid")
}

fn describe(variants: &[VariantInfo]) -> String {
    variants
        .iter()
        .map(|v| format!("{} {}>{} @{}", v.id, v.ref_allele, v.alt, v.position))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Deterministic pseudo-random variants spread over the demo range.
fn demo_variants(batch: u32) -> Vec<VariantRecord> {
    const BASES: [&str; 4] = ["A", "C", "G", "T"];
    let start = initial_range().start();
    (0..20u32)
        .map(|i| {
            let seed = (batch * 20 + i).wrapping_mul(2_654_435_761);
            let position = start + (seed % 200) as i64;
            let major = f64::from(seed % 1000) / 1000.0;
            let reference = BASES[(seed % 4) as usize];
            let alt = BASES[((seed / 4) % 4) as usize];
            let id = format!("demo{batch}_{i}");
            VariantRecord {
                vcf_line: format!("chr17\t{position}\t{id}\t{reference}\t{alt}\t.\tPASS\tAF={major:.3}"),
                id,
                contig: "chr17".to_string(),
                position,
                ref_allele: reference.to_string(),
                alt: alt.to_string(),
                major_frequency: Some(major),
                minor_frequency: Some(1.0 - major),
            }
        })
        .collect()
}
