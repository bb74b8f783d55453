use std::f64::consts::PI;

use shared::RewardTable;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const CANVAS_SIZE: f64 = 400.0;

/// Arc of segment `index`, in degrees clockwise from the top of the wheel face.
///
/// Segments are laid out counter-clockwise so that rotating the face clockwise
/// by `index * arc + arc / 2` brings segment `index` under the fixed pointer.
pub fn segment_arc(index: usize, count: usize) -> (f64, f64) {
    let arc = 360.0 / count.max(1) as f64;
    let end = 360.0 - index as f64 * arc;
    (end - arc, end)
}

// Canvas angles start at 3 o'clock, the wheel's start at 12
fn to_canvas_radians(degrees_from_top: f64) -> f64 {
    (degrees_from_top - 90.0) * PI / 180.0
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub table: RewardTable,
    pub rotation: f64,
    pub is_spinning: bool,
    pub duration_ms: u32,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    // The face only depends on the table; spinning is a CSS transform on top.
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.table.clone(), move |table| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let context = canvas
                    .get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
                match context {
                    Some(context) => draw_face(&context, table),
                    None => log::warn!("Canvas 2d context unavailable, wheel face not drawn"),
                }
            }
            || ()
        });
    }

    let face_style = if props.is_spinning {
        format!(
            "transform: rotate({}deg); transition: transform {}ms cubic-bezier(0.17, 0.67, 0.12, 0.99);",
            props.rotation, props.duration_ms
        )
    } else {
        format!("transform: rotate({}deg);", props.rotation)
    };

    html! {
        <div class="relative mx-auto w-full max-w-[400px]">
            // Fixed pointer
            <div class="absolute left-1/2 -top-2 z-10 -translate-x-1/2 w-0 h-0 border-l-[16px] border-r-[16px] border-t-[28px] border-l-transparent border-r-transparent border-t-amber-500 drop-shadow"></div>
            <div
                class={classes!("wheel", "rounded-full", props.is_spinning.then_some("spinning"))}
                style={face_style}
            >
                <canvas
                    ref={canvas_ref}
                    width={CANVAS_SIZE.to_string()}
                    height={CANVAS_SIZE.to_string()}
                    class="w-full h-auto rounded-full shadow-lg"
                    style={if props.is_spinning {
                        "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                    } else {
                        "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                    }}
                />
            </div>
        </div>
    }
}

fn draw_face(context: &CanvasRenderingContext2d, table: &RewardTable) {
    let center = CANVAS_SIZE / 2.0;
    let radius = center - 10.0;
    let count = table.len();

    context.clear_rect(0.0, 0.0, CANVAS_SIZE, CANVAS_SIZE);

    for (index, reward) in table.iter().enumerate() {
        let (start, end) = segment_arc(index, count);

        context.begin_path();
        context.set_fill_style_str(&reward.color);
        context.move_to(center, center);
        let _ = context.arc(center, center, radius, to_canvas_radians(start), to_canvas_radians(end));
        context.close_path();
        context.fill();

        context.set_stroke_style_str("rgba(255, 255, 255, 0.9)");
        context.set_line_width(2.5);
        context.stroke();

        // Label: icon on the outside, name towards the hub
        let middle = to_canvas_radians((start + end) / 2.0);
        context.save();
        let _ = context.translate(center, center);
        let _ = context.rotate(middle);
        context.set_text_align("center");
        context.set_text_baseline("middle");
        context.set_fill_style_str("#ffffff");
        context.set_shadow_color("rgba(0, 0, 0, 0.5)");
        context.set_shadow_blur(3.0);

        context.set_font("28px 'Segoe UI Emoji', system-ui, sans-serif");
        let _ = context.fill_text(&reward.icon, radius * 0.78, 0.0);
        context.set_font("bold 15px 'Segoe UI', Roboto, system-ui, sans-serif");
        let _ = context.fill_text(&reward.name, radius * 0.52, 0.0);
        context.restore();
    }

    // Hub
    context.begin_path();
    context.set_fill_style_str("#ffffff");
    let _ = context.arc(center, center, radius * 0.12, 0.0, 2.0 * PI);
    context.fill();
    context.set_stroke_style_str("#8b5cf6");
    context.set_line_width(4.0);
    context.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_arcs_tile_the_circle() {
        assert_eq!(segment_arc(0, 5), (288.0, 360.0));
        assert_eq!(segment_arc(4, 5), (0.0, 72.0));

        let total: f64 = (0..5).map(|i| {
            let (start, end) = segment_arc(i, 5);
            end - start
        }).sum();
        assert_eq!(total, 360.0);
    }

    #[test]
    fn test_pointer_lands_in_planned_segment() {
        // Rotating the face clockwise by `r` puts wheel angle `360 - r` under the pointer.
        for index in 0..5 {
            for planned in [16.0, 36.0, 55.9] {
                let rotation = index as f64 * 72.0 + planned;
                let under_pointer = 360.0 - rotation;
                let (start, end) = segment_arc(index, 5);
                assert!(under_pointer > start && under_pointer < end);
            }
        }
    }
}
