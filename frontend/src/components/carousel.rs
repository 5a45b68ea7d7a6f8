use std::rc::Rc;

use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config::ScreenshotItem;

/// Distance moved per arrow click. Deliberately not a card multiple; snap
/// alignment does the final positioning.
pub const SCROLL_STEP: f64 = 280.0;
pub const CARD_WIDTH: f64 = 256.0;
pub const CARD_GAP: f64 = 16.0;
pub const STRIP_PADDING: f64 = 32.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Where a single arrow click should send the strip, or `None` when the
/// strip already sits at that boundary.
pub fn scroll_target(current: f64, direction: Direction, max_offset: f64) -> Option<f64> {
    let target = (current + direction.sign() * SCROLL_STEP).clamp(0.0, max_offset.max(0.0));
    if (target - current).abs() < 0.5 {
        None
    } else {
        Some(target)
    }
}

/// Layout of the track as the browser sees it: padded row of fixed-width
/// cards, centre-snapped inside a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StripGeometry {
    pub items: usize,
    pub viewport: f64,
}

impl StripGeometry {
    pub fn new(items: usize, viewport: f64) -> Self {
        Self { items, viewport }
    }

    pub fn content_width(&self) -> f64 {
        let n = self.items as f64;
        let gaps = self.items.saturating_sub(1) as f64;
        2.0 * STRIP_PADDING + n * CARD_WIDTH + gaps * CARD_GAP
    }

    pub fn max_offset(&self) -> f64 {
        (self.content_width() - self.viewport).max(0.0)
    }

    /// Offset at which card `index` sits centred, clamped to the scrollable
    /// range.
    pub fn snap_point(&self, index: usize) -> f64 {
        let left = STRIP_PADDING + index as f64 * (CARD_WIDTH + CARD_GAP);
        let centred = left + CARD_WIDTH / 2.0 - self.viewport / 2.0;
        centred.clamp(0.0, self.max_offset())
    }

    /// Index of the card closest to the viewport centre at `offset`.
    pub fn centred_card(&self, offset: f64) -> usize {
        (0..self.items)
            .min_by(|&a, &b| {
                let da = (self.snap_point(a) - offset).abs();
                let db = (self.snap_point(b) - offset).abs();
                da.total_cmp(&db)
            })
            .unwrap_or(0)
    }
}

/// Smoothly scrolls the track one step in `direction`. The live scroll
/// offset is read back from the element on every call, so overlapping
/// clicks just retarget the running animation.
pub fn scroll_track(track: &NodeRef, direction: Direction) {
    let Some(el) = track.cast::<Element>() else {
        return;
    };
    let current = el.scroll_left() as f64;
    let max_offset = (el.scroll_width() - el.client_width()) as f64;

    if let Some(target) = scroll_target(current, direction, max_offset) {
        let options = ScrollToOptions::new();
        options.set_left(target);
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn scroll_left(track: &NodeRef) {
    scroll_track(track, Direction::Left);
}

pub fn scroll_right(track: &NodeRef) {
    scroll_track(track, Direction::Right);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageStatus {
    Loaded,
    Failed,
}

pub enum ImageEvent {
    Error,
}

impl Reducible for ImageStatus {
    type Action = ImageEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match (*self, action) {
            (ImageStatus::Loaded, ImageEvent::Error) => Rc::new(ImageStatus::Failed),
            (ImageStatus::Failed, _) => self,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ScreenshotCardProps {
    pub item: ScreenshotItem,
}

/// Card body for the given load state. A failed card never renders an
/// `<img>`, so no broken-image icon can show.
pub fn card_screen(item: &ScreenshotItem, status: ImageStatus, onerror: Callback<Event>) -> Html {
    match status {
        ImageStatus::Loaded => html! {
            <img
                class="screen-image"
                src={item.src.clone()}
                alt={item.label.clone()}
                loading="lazy"
                {onerror}
            />
        },
        ImageStatus::Failed => html! {
            <div class="screen-placeholder" role="img" aria-label={item.label.clone()}>
                <div class="placeholder-icon">{"📱"}</div>
                <div class="placeholder-label">{&item.label}</div>
            </div>
        },
    }
}

#[function_component(ScreenshotCard)]
pub fn screenshot_card(props: &ScreenshotCardProps) -> Html {
    let status = use_reducer_eq(|| ImageStatus::Loaded);

    let onerror = {
        let status = status.clone();
        let label = props.item.label.clone();
        Callback::from(move |_: Event| {
            if *status == ImageStatus::Loaded {
                log::info!("Screenshot '{}' failed to load, showing placeholder", label);
            }
            status.dispatch(ImageEvent::Error);
        })
    };

    html! {
        <div class="screenshot-slide">
            <div class="phone-frame">
                {card_screen(&props.item, *status, onerror)}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScreenshotCarouselProps {
    pub items: Vec<ScreenshotItem>,
}

#[function_component(ScreenshotCarousel)]
pub fn screenshot_carousel(props: &ScreenshotCarouselProps) -> Html {
    let track = use_node_ref();
    let active = use_state_eq(|| 0usize);
    let count = props.items.len();

    let on_scroll = {
        let track = track.clone();
        let active = active.clone();
        Callback::from(move |_: Event| {
            if let Some(el) = track.cast::<Element>() {
                let strip = StripGeometry::new(count, el.client_width() as f64);
                active.set(strip.centred_card(el.scroll_left() as f64));
            }
        })
    };

    let on_left = {
        let track = track.clone();
        Callback::from(move |_: MouseEvent| scroll_left(&track))
    };
    let on_right = {
        let track = track.clone();
        Callback::from(move |_: MouseEvent| scroll_right(&track))
    };

    let carousel_css = r#"
        .carousel {
            position: relative;
            max-width: 64rem;
            margin: 0 auto;
        }
        .carousel-track {
            display: flex;
            gap: 16px;
            overflow-x: auto;
            padding: 0 32px;
            scroll-snap-type: x mandatory;
            scrollbar-width: none;
            -ms-overflow-style: none;
        }
        .carousel-track::-webkit-scrollbar {
            display: none;
        }
        .screenshot-slide {
            flex-shrink: 0;
            scroll-snap-align: center;
        }
        .phone-frame {
            width: 256px;
            height: 500px;
            box-sizing: border-box;
            background: #111827;
            border-radius: 1rem;
            padding: 0.5rem;
            box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        }
        .screen-image {
            width: 100%;
            height: 100%;
            object-fit: cover;
            border-radius: 0.75rem;
        }
        .screen-placeholder {
            width: 100%;
            height: 100%;
            border-radius: 0.75rem;
            background: linear-gradient(135deg, #a78bfa, #60a5fa);
            color: white;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
        }
        .placeholder-icon {
            font-size: 3rem;
            margin-bottom: 0.75rem;
        }
        .placeholder-label {
            font-weight: 600;
        }
        .carousel-nav {
            position: absolute;
            top: 250px;
            transform: translateY(-50%);
            z-index: 10;
            background: white;
            border: none;
            border-radius: 9999px;
            padding: 0.5rem 0.75rem;
            box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
            cursor: pointer;
            font-size: 1.25rem;
        }
        .carousel-nav:hover {
            background: #f9fafb;
        }
        .carousel-nav.left {
            left: 0;
        }
        .carousel-nav.right {
            right: 0;
        }
        .carousel-dots {
            display: flex;
            justify-content: center;
            gap: 0.5rem;
            margin-top: 1.5rem;
        }
        .dot {
            width: 0.5rem;
            height: 0.5rem;
            border-radius: 9999px;
            background: #d1d5db;
            transition: background 0.2s;
        }
        .dot.active {
            background: #9333ea;
        }
    "#;

    html! {
        <div class="carousel">
            <style>{carousel_css}</style>
            <button class="carousel-nav left" aria-label="Scroll screenshots left" onclick={on_left}>
                {"‹"}
            </button>
            <div class="carousel-track" ref={track} onscroll={on_scroll}>
                {
                    props.items.iter().map(|item| html! {
                        <ScreenshotCard key={item.id} item={item.clone()} />
                    }).collect::<Html>()
                }
            </div>
            <button class="carousel-nav right" aria-label="Scroll screenshots right" onclick={on_right}>
                {"›"}
            </button>
            <div class="carousel-dots">
                {
                    (0..count).map(|i| html! {
                        <span class={classes!("dot", (i == *active).then_some("active"))}></span>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_support::Outline;

    // Stand-in for the browser: clamp, then snap to the closest card centre.
    impl StripGeometry {
        fn snap(&self, offset: f64) -> f64 {
            (0..self.items)
                .map(|i| self.snap_point(i))
                .min_by(|a, b| (a - offset).abs().total_cmp(&(b - offset).abs()))
                .unwrap_or(0.0)
        }

        fn settle(&self, current: f64, direction: Direction) -> f64 {
            match scroll_target(current, direction, self.max_offset()) {
                Some(target) => self.snap(target),
                None => current,
            }
        }
    }

    // One card visible at a time, as on a phone.
    fn five_cards() -> StripGeometry {
        StripGeometry::new(5, 320.0)
    }

    #[test]
    fn four_clicks_right_reach_the_last_card() {
        let strip = five_cards();
        let mut offset = 0.0;
        for _ in 0..4 {
            offset = strip.settle(offset, Direction::Right);
        }
        assert_eq!(offset, strip.max_offset());
        assert_eq!(strip.centred_card(offset), 4);
        assert_eq!(offset, strip.snap_point(4));

        assert_eq!(strip.settle(offset, Direction::Right), offset);
        assert_eq!(scroll_target(offset, Direction::Right, strip.max_offset()), None);
    }

    #[test]
    fn each_click_advances_one_card() {
        let strip = five_cards();
        let mut offset = 0.0;
        for expected in 1..5 {
            offset = strip.settle(offset, Direction::Right);
            assert_eq!(strip.centred_card(offset), expected);
        }
    }

    #[test]
    fn left_then_right_round_trips_within_one_step() {
        let strip = five_cards();
        for start in [0.0, 150.0, 544.0, strip.max_offset()] {
            let max = strip.max_offset();
            let after_left = scroll_target(start, Direction::Left, max).unwrap_or(start);
            let back = scroll_target(after_left, Direction::Right, max).unwrap_or(after_left);
            assert!((back - start).abs() <= SCROLL_STEP, "start {start} ended at {back}");

            let settled = strip.settle(strip.settle(start, Direction::Right), Direction::Left);
            assert!((settled - start).abs() <= SCROLL_STEP);
        }
    }

    #[test]
    fn left_boundary_is_a_no_op() {
        assert_eq!(scroll_target(0.0, Direction::Left, 1088.0), None);
        assert_eq!(five_cards().settle(0.0, Direction::Left), 0.0);
    }

    #[test]
    fn partial_steps_clamp_to_the_boundary() {
        assert_eq!(scroll_target(100.0, Direction::Left, 1088.0), Some(0.0));
        assert_eq!(scroll_target(1000.0, Direction::Right, 1088.0), Some(1088.0));
    }

    #[test]
    fn overlapping_clicks_follow_the_live_offset() {
        // Second click lands mid-animation; the target derives from where
        // the strip actually is, not from a click counter.
        let mid_animation = 130.0;
        assert_eq!(
            scroll_target(mid_animation, Direction::Right, 1088.0),
            Some(mid_animation + SCROLL_STEP)
        );
    }

    #[test]
    fn strip_narrower_than_viewport_never_scrolls() {
        let strip = StripGeometry::new(1, 1200.0);
        assert_eq!(strip.max_offset(), 0.0);
        assert_eq!(scroll_target(0.0, Direction::Right, strip.max_offset()), None);
        assert_eq!(scroll_target(0.0, Direction::Left, strip.max_offset()), None);
    }

    #[test]
    fn image_failure_is_one_way() {
        let status = Rc::new(ImageStatus::Loaded);
        let failed = status.reduce(ImageEvent::Error);
        assert_eq!(*failed, ImageStatus::Failed);

        let again = failed.clone().reduce(ImageEvent::Error);
        assert!(Rc::ptr_eq(&failed, &again));
    }

    #[test]
    fn image_failure_stays_local_to_its_card() {
        let mut cards: Vec<Rc<ImageStatus>> = (0..5).map(|_| Rc::new(ImageStatus::Loaded)).collect();
        cards[2] = cards[2].clone().reduce(ImageEvent::Error);

        let failed: Vec<usize> = cards
            .iter()
            .enumerate()
            .filter(|(_, s)| ***s == ImageStatus::Failed)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(failed, vec![2]);
    }

    fn analytics_item() -> ScreenshotItem {
        ScreenshotItem::new(3, "/assets/screenshots/analytics.png", "Analytics")
    }

    #[test]
    fn failed_card_shows_labelled_placeholder_without_image() {
        let outline = Outline::of(&card_screen(&analytics_item(), ImageStatus::Failed, Callback::noop()));

        assert!(!outline.has_tag("img"));
        assert!(outline.has_class("screen-placeholder"));
        assert!(outline.has_class("placeholder-label"));
        assert!(outline.text.contains("Analytics"));
        assert_eq!(outline.attr("aria-label"), Some("Analytics"));
    }

    #[test]
    fn loaded_card_shows_the_configured_image() {
        let outline = Outline::of(&card_screen(&analytics_item(), ImageStatus::Loaded, Callback::noop()));

        assert!(outline.has_tag("img"));
        assert_eq!(outline.attr("src"), Some("/assets/screenshots/analytics.png"));
        assert_eq!(outline.attr("alt"), Some("Analytics"));
        assert!(!outline.has_class("screen-placeholder"));
    }

    #[test]
    fn failing_one_card_leaves_siblings_rendering_images() {
        let items: Vec<ScreenshotItem> = (1..=5)
            .map(|id| ScreenshotItem::new(id, &format!("/s/{id}.png"), &format!("Shot {id}")))
            .collect();
        let mut states: Vec<Rc<ImageStatus>> = items.iter().map(|_| Rc::new(ImageStatus::Loaded)).collect();
        states[1] = states[1].clone().reduce(ImageEvent::Error);

        let outlines: Vec<Outline> = items
            .iter()
            .zip(&states)
            .map(|(item, state)| Outline::of(&card_screen(item, **state, Callback::noop())))
            .collect();

        for (i, outline) in outlines.iter().enumerate() {
            assert_eq!(outline.has_tag("img"), i != 1, "card {i}");
        }
        assert!(outlines[1].text.contains("Shot 2"));
    }
}
