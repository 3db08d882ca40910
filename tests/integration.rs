// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced_folio::config::{self, Config};
use iced_folio::content;
use iced_folio::i18n::fluent::I18n;
use iced_folio::nav::{
    compute, locate, HighlightSource, IndicatorSettings, LayoutGeometry, MeasuredLayout,
    NavIndicator, NavItem, Rect, UnderlineState,
};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tempfile::tempdir;

/// Geometry held in plain maps, independent of any widget tree.
#[derive(Default)]
struct StaticPage {
    tops: HashMap<&'static str, f32>,
    buttons: HashMap<&'static str, Rect>,
    container: Option<Rect>,
    scroll: f32,
}

impl LayoutGeometry for StaticPage {
    fn section_top(&self, id: &str) -> Option<f32> {
        self.tops.get(id).copied()
    }

    fn section_rect(&self, id: &str) -> Option<Rect> {
        self.tops
            .get(id)
            .map(|top| Rect::new(0.0, top - self.scroll, 800.0, 1000.0))
    }

    fn button_rect(&self, id: &str) -> Option<Rect> {
        self.buttons.get(id).copied()
    }

    fn container_rect(&self) -> Option<Rect> {
        self.container
    }

    fn scroll_offset(&self) -> f32 {
        self.scroll
    }
}

fn items() -> Vec<NavItem> {
    vec![NavItem::new("a", "A"), NavItem::new("b", "B")]
}

/// Section `a` at 0 and `b` at 1000; button A = {0, 40}, B = {100, 60}.
fn two_section_page(scroll: f32) -> StaticPage {
    StaticPage {
        tops: HashMap::from([("a", 0.0), ("b", 1000.0)]),
        buttons: HashMap::from([
            ("a", Rect::new(0.0, 0.0, 40.0, 30.0)),
            ("b", Rect::new(100.0, 0.0, 60.0, 30.0)),
        ]),
        container: Some(Rect::new(0.0, 0.0, 400.0, 30.0)),
        scroll,
    }
}

fn measured_layout() -> MeasuredLayout {
    let mut layout = MeasuredLayout::new();
    layout.record_content(Rect::new(0.0, 0.0, 800.0, 2000.0));
    layout.record_section("a", Rect::new(0.0, 0.0, 800.0, 1000.0));
    layout.record_section("b", Rect::new(0.0, 1000.0, 800.0, 1000.0));
    layout.record_button("a", Rect::new(500.0, 20.0, 40.0, 30.0));
    layout.record_button("b", Rect::new(600.0, 20.0, 60.0, 30.0));
    layout.record_container(Rect::new(500.0, 20.0, 200.0, 30.0));
    layout.set_scroll(0.0, 800.0, 2000.0);
    layout
}

#[test]
fn scroll_before_first_section_stays_on_it() {
    let mut page = two_section_page(0.0);
    page.tops.insert("a", 500.0);
    page.tops.insert("b", 1500.0);

    let measurement = compute(&items(), &page, 100.0, UnderlineState::HIDDEN);
    assert_eq!(measurement.progress.current, 0);
    assert_eq!(measurement.progress.t, 0.0);
    assert_eq!(measurement.underline, UnderlineState::visible(0.0, 40.0));
}

#[test]
fn scroll_past_last_section_sits_on_last_item() {
    let page = two_section_page(5000.0);

    let measurement = compute(&items(), &page, 100.0, UnderlineState::HIDDEN);
    assert_eq!(measurement.progress.current, 1);
    assert_eq!(measurement.progress.next, 1);
    assert!((0.0..=1.0).contains(&measurement.progress.t));
    assert_eq!(measurement.underline, UnderlineState::visible(100.0, 60.0));
}

#[test]
fn fraction_stays_in_unit_range_across_the_page() {
    let tops = [0.0, 600.0, 600.0, 1800.0, 1800.0];
    let mut view_y = -500.0;
    while view_y < 3000.0 {
        let progress = locate(view_y, &tops);
        assert!(
            (0.0..=1.0).contains(&progress.t),
            "t = {} at {view_y}",
            progress.t
        );
        assert!(progress.next >= progress.current);
        view_y += 37.5;
    }
}

#[test]
fn halfway_between_a_and_b_interpolates_both_edges() {
    // viewY = 400 + 100 = 500, half of the way from 0 to 1000.
    let page = two_section_page(400.0);

    let measurement = compute(&items(), &page, 100.0, UnderlineState::HIDDEN);
    assert_abs_diff_eq!(measurement.progress.t, 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(measurement.underline.left, 50.0, epsilon = 1e-4);
    assert_abs_diff_eq!(measurement.underline.width, 50.0, epsilon = 1e-4);
    assert_eq!(measurement.underline.opacity, 1.0);
}

#[test]
fn resize_recomputes_synchronously() {
    let mut layout = measured_layout();
    let mut indicator = NavIndicator::new(items(), IndicatorSettings::default());
    indicator.mount(&layout);
    let before = indicator.recomputations();

    layout.record_button("b", Rect::new(620.0, 20.0, 80.0, 30.0));
    layout.set_scroll(900.0, 800.0, 2000.0);
    indicator.on_resize(&layout);

    assert_eq!(indicator.recomputations(), before + 1);
    assert_eq!(indicator.target(), UnderlineState::visible(120.0, 80.0));
}

#[test]
fn rapid_scrolls_within_a_frame_recompute_once_with_the_last_value() {
    let mut layout = measured_layout();
    let mut indicator = NavIndicator::new(items(), IndicatorSettings::default());
    indicator.mount(&layout);
    let before = indicator.recomputations();

    for offset in [100.0, 250.0, 700.0, 400.0] {
        layout.set_scroll(offset, 800.0, 2000.0);
        assert!(indicator.on_scroll());
    }
    assert_eq!(indicator.recomputations(), before);
    assert!(indicator.wants_frames());

    assert!(indicator.on_frame(Instant::now(), &layout));
    assert_eq!(indicator.recomputations(), before + 1);
    assert_abs_diff_eq!(indicator.progress().t, 0.5, epsilon = 1e-6);

    // Nothing left to run on the next frame.
    assert!(!indicator.on_frame(Instant::now(), &layout));
    assert_eq!(indicator.recomputations(), before + 1);
}

#[test]
fn teardown_with_pending_frame_stops_everything() {
    let mut layout = measured_layout();
    let mut indicator = NavIndicator::new(items(), IndicatorSettings::default());
    indicator.mount(&layout);

    layout.set_scroll(600.0, 800.0, 2000.0);
    indicator.on_scroll();
    let before = indicator.recomputations();

    indicator.teardown();
    assert!(!indicator.is_listening());
    assert!(!indicator.wants_frames());

    assert!(!indicator.on_frame(Instant::now(), &layout));
    assert!(!indicator.on_scroll());
    indicator.on_resize(&layout);
    assert_eq!(indicator.recomputations(), before);
}

#[test]
fn active_section_follows_reference_line_and_survives_gaps() {
    let mut layout = MeasuredLayout::new();
    layout.record_content(Rect::new(0.0, 0.0, 800.0, 2000.0));
    layout.record_section("a", Rect::new(0.0, 0.0, 800.0, 500.0));
    layout.record_section("b", Rect::new(0.0, 1000.0, 800.0, 1000.0));
    layout.set_scroll(0.0, 800.0, 2000.0);

    let mut indicator = NavIndicator::new(items(), IndicatorSettings::default());
    indicator.mount(&layout);
    assert_eq!(indicator.highlighted(), Some("a"));

    // Reference line falls between the two sections.
    layout.set_scroll(600.0, 800.0, 2000.0);
    indicator.on_resize(&layout);
    assert_eq!(indicator.highlighted(), Some("a"));

    layout.set_scroll(950.0, 800.0, 2000.0);
    indicator.on_resize(&layout);
    assert_eq!(indicator.highlighted(), Some("b"));
    assert!(indicator.is_active("b"));
    assert!(!indicator.is_active("a"));
}

#[test]
fn underline_highlight_source_tracks_current_section() {
    let mut layout = measured_layout();
    let settings = IndicatorSettings {
        highlight: HighlightSource::Underline,
        ..IndicatorSettings::default()
    };
    let mut indicator = NavIndicator::new(items(), settings);
    indicator.mount(&layout);

    layout.set_scroll(905.0, 800.0, 2000.0);
    indicator.on_resize(&layout);
    assert_eq!(indicator.highlighted(), Some("b"));
}

#[test]
fn displayed_underline_springs_onto_target() {
    let mut layout = measured_layout();
    let mut indicator = NavIndicator::new(items(), IndicatorSettings::default());
    indicator.mount(&layout);

    layout.set_scroll(900.0, 800.0, 2000.0);
    indicator.on_resize(&layout);
    let target = indicator.target();

    let start = Instant::now();
    for frame in 0..240u32 {
        indicator.on_frame(start + Duration::from_millis(16) * frame, &layout);
    }
    let displayed = indicator.displayed();
    assert_abs_diff_eq!(displayed.left, target.left, epsilon = 0.5);
    assert_abs_diff_eq!(displayed.width, target.width, epsilon = 0.5);
    assert!(!indicator.wants_frames());
}

#[test]
fn embedded_content_drives_the_indicator() {
    let portfolio = content::embedded();
    assert!(portfolio.validate().is_ok());

    let indicator = NavIndicator::new(portfolio.navigation.clone(), IndicatorSettings::default());
    let ids: Vec<_> = indicator.items().iter().map(|item| item.id.as_str()).collect();
    assert_eq!(ids, ["hero", "about", "projects", "skills", "contact"]);
}

#[test]
fn config_round_trip_drives_locale_and_indicator() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.general.language = Some("fr".to_string());
    settings.navigation.lookahead_px = Some(150.0);
    settings.navigation.highlight = HighlightSource::Underline;
    config::save_to_path(&settings, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    assert_eq!(loaded, settings);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    let indicator_settings = loaded.indicator_settings();
    assert_abs_diff_eq!(indicator_settings.lookahead, 150.0);
    assert_eq!(indicator_settings.highlight, HighlightSource::Underline);

    let (fallback, warning) = config::load_with_override(Some(dir.path().join("missing")));
    assert_eq!(fallback, Config::default());
    assert!(warning.is_none());
}
