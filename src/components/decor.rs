use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::ambient::{self, OrnamentField};
use crate::components::entry_overlay::EntryContext;
use crate::config;
use crate::motion::{apply_pose, run_frames, AnimationHandle, FrameControl};

/// Seed for per-mount random layouts. Different every page load.
pub fn page_seed(salt: u64) -> u64 {
    (js_sys::Date::now() * 1000.0) as u64 ^ salt.rotate_left(32)
}

#[derive(Properties, PartialEq)]
pub struct SparklesProps {
    #[prop_or(20)]
    pub count: usize,
}

#[function_component(Sparkles)]
pub fn sparkles(props: &SparklesProps) -> Html {
    let count = props.count;
    let sparkles = use_memo(|count| ambient::sparkles(*count, page_seed(*count as u64), &config::sparkle_ranges()), count);

    html! {
        <div class="sparkles">
            { for sparkles.iter().map(|s| html! { <div class="sparkle" style={s.style()}></div> }) }
        </div>
    }
}

/// Hearts and stars drifting behind the content.
#[function_component(FloatingIcons)]
pub fn floating_icons() -> Html {
    let container_ref = use_node_ref();
    let entered = use_context::<EntryContext>().map(|c| c.entered).unwrap_or(true);
    let field = use_memo(
        |_| OrnamentField::new(config::FLOATING_ICONS, page_seed(0x1c05), &config::ornament_ranges()),
        (),
    );
    let (_, height) = use_window_size();
    let viewport = use_mut_ref(|| height);
    *viewport.borrow_mut() = height;

    {
        let container_ref = container_ref.clone();
        let field = Rc::clone(&field);
        let viewport = viewport.clone();
        use_effect_with_deps(
            move |entered| {
                let mut animation: Option<AnimationHandle> = None;
                if *entered {
                    if let Some(container) = container_ref.cast::<HtmlElement>() {
                        let children = container.children();
                        let icons: Vec<HtmlElement> = (0..children.length())
                            .filter_map(|i| children.item(i))
                            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
                            .collect();
                        animation = Some(run_frames(move |elapsed| {
                            let height = *viewport.borrow();
                            for (icon, pose) in icons.iter().zip(field.poses_at(elapsed, height)) {
                                if let Err(err) = apply_pose(icon, &pose) {
                                    warn!("floating icon pose not applied: {}", err);
                                }
                            }
                            FrameControl::Continue
                        }));
                    }
                }
                move || drop(animation)
            },
            entered,
        );
    }

    html! {
        <div ref={container_ref} class="floating-icons">
            { for field.ornaments.iter().map(|o| {
                let style = format!(
                    "left: {:.2}%; top: {:.2}%; font-size: {:.1}px;",
                    o.left_percent, o.top_percent, o.size_px
                );
                let (fill, stroke_width) = if o.glyph.is_outline() { ("none", "1.5") } else { ("currentColor", "0") };
                html! {
                    <div class="floating-icon" style={style}>
                        <svg width="1em" height="1em" viewBox="0 0 24 24" fill={fill} stroke="currentColor" stroke-width={stroke_width}>
                            <path d={o.glyph.path()} />
                        </svg>
                    </div>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MandalaProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(MandalaPattern)]
pub fn mandala_pattern(props: &MandalaProps) -> Html {
    html! {
        <svg class={classes!("mandala", props.class.clone())} viewBox="0 0 100 100" fill="none" stroke="currentColor">
            <circle cx="50" cy="50" r="40" stroke-width="0.5" />
            <path d="M50 10 Q60 10 60 20 T70 30 T80 40 T90 50 T80 60 T70 70 T60 80 T50 90 T40 80 T30 70 T20 60 T10 50 T20 40 T30 30 T40 20 T50 10 Z" stroke-width="0.5" />
            <circle cx="50" cy="50" r="20" stroke-width="0.5" />
            <path d="M50 30 L55 45 L70 50 L55 55 L50 70 L45 55 L30 50 L45 45 Z" fill="currentColor" opacity="0.5" />
            <circle cx="50" cy="50" r="5" fill="currentColor" opacity="0.8" />
        </svg>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [Corner::TopLeft, Corner::TopRight, Corner::BottomRight, Corner::BottomLeft];

    fn class(self) -> &'static str {
        match self {
            Corner::TopLeft => "corner-tl",
            Corner::TopRight => "corner-tr",
            Corner::BottomRight => "corner-br",
            Corner::BottomLeft => "corner-bl",
        }
    }

    fn rotation(self) -> u32 {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 90,
            Corner::BottomRight => 180,
            Corner::BottomLeft => 270,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CornerProps {
    pub corner: Corner,
}

#[function_component(DecorativeCorner)]
pub fn decorative_corner(props: &CornerProps) -> Html {
    let style = format!("transform: rotate({}deg);", props.corner.rotation());
    html! {
        <div class={classes!("decorative-corner", props.corner.class())}>
            <svg viewBox="0 0 100 100" fill="none" stroke="#d4af37" style={style}>
                <path d="M5 5 L95 5 L95 20 L20 20 L20 95 L5 95 Z" stroke-width="1" fill="none" />
                <path d="M10 10 L80 10 L80 15 L15 15 L15 80 L10 80 Z" stroke-width="0.5" fill="none" />
                <path d="M25 25 Q 50 5 75 25 T 100 50" stroke-width="0.2" fill="none" opacity="0.5" />
                <circle cx="10" cy="10" r="2" fill="#d4af37" />
                <circle cx="90" cy="10" r="1.5" fill="#d4af37" />
                <circle cx="10" cy="90" r="1.5" fill="#d4af37" />
            </svg>
        </div>
    }
}

#[function_component(FloatingMandalas)]
pub fn floating_mandalas() -> Html {
    html! {
        <div class="floating-mandalas">
            { for (0..config::FLOATING_MANDALAS).map(|i| {
                let style = format!(
                    "top: {}%; left: {}; animation: spin-slow {}s linear infinite;",
                    i * 30,
                    if i % 2 == 0 { "-15%" } else { "85%" },
                    40 + i * 10
                );
                html! {
                    <div class="floating-mandala" style={style}>
                        <svg viewBox="0 0 100 100" fill="none" stroke-width="0.2">
                            <circle cx="50" cy="50" r="45" stroke-dasharray="2 1" />
                            <path d="M50 5 L60 40 L95 50 L60 60 L50 95 L40 60 L5 50 L40 40 Z" />
                            <circle cx="50" cy="50" r="25" />
                            <path d="M50 25 A 25 25 0 0 1 75 50 A 25 25 0 0 1 50 75 A 25 25 0 0 1 25 50 A 25 25 0 0 1 50 25 Z" stroke-width="0.1" />
                        </svg>
                    </div>
                }
            }) }
        </div>
    }
}
