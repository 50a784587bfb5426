// SPDX-License-Identifier: MPL-2.0
use iced_core::keyboard::{self, key::Named, Key, Modifiers};
use iced_core::{mouse, touch, Event, Point, Rectangle, Size};
use iced_gallery::application::port::{GalleryHost, ViewRegistry};
use iced_gallery::config::{self, Config};
use iced_gallery::domain::media::{Dimensions, ImageRef};
use iced_gallery::domain::ui::{CursorHint, ViewTransform};
use iced_gallery::gallery::{Direction, ImageGalleryView, Intent, LoadOutcome};
use iced_gallery::infrastructure::{FsGalleryHost, InMemoryViewRegistry};
use iced_gallery::plugin::{GalleryPlugin, VIEW_TYPE_IMAGE};
use image_rs::{Rgba, RgbaImage};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::{tempdir, TempDir};

fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]))
        .save(dir.join(name))
        .expect("Failed to write test image");
}

/// Folder with three images, a note and a nested folder holding another image.
fn gallery_folder() -> TempDir {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_png(dir.path(), "b.png", 4, 2);
    write_png(dir.path(), "A.png", 8, 8);
    write_png(dir.path(), "c.png", 3, 3);
    fs::write(dir.path().join("notes.md"), "# notes").expect("Failed to write note");
    let nested = dir.path().join("nested");
    fs::create_dir(&nested).expect("Failed to create nested folder");
    write_png(&nested, "inner.png", 1, 1);
    dir
}

fn view_for(dir: &TempDir) -> ImageGalleryView<FsGalleryHost> {
    let mut view = ImageGalleryView::new(FsGalleryHost::default(), &Config::default());
    view.set_layout(
        Rectangle::new(Point::ORIGIN, Size::new(800.0, 500.0)),
        Some(Rectangle::new(Point::new(0.0, 500.0), Size::new(800.0, 100.0))),
    );
    assert!(dir.path().is_dir());
    view
}

fn image(dir: &TempDir, name: &str) -> ImageRef {
    ImageRef::from_path(dir.path().join(name)).expect("supported image")
}

fn arrow(named: Named, code: keyboard::key::Code) -> Event {
    Event::Keyboard(keyboard::Event::KeyPressed {
        key: Key::Named(named),
        modified_key: Key::Named(named),
        physical_key: keyboard::key::Physical::Code(code),
        location: keyboard::Location::Standard,
        modifiers: Modifiers::default(),
        text: None,
        repeat: false,
    })
}

#[tokio::test]
async fn loading_builds_sorted_siblings_and_strip() {
    let dir = gallery_folder();
    let mut view = view_for(&dir);

    let outcome = view.load_file(image(&dir, "b.png")).await;

    let LoadOutcome::Shown {
        current_index,
        dimensions,
        ..
    } = outcome
    else {
        panic!("expected a shown load, got {outcome:?}");
    };
    assert_eq!(current_index, Some(1));
    assert_eq!(dimensions, Some(Dimensions::new(4, 2)));

    let names: Vec<&str> = view.siblings().siblings().iter().map(ImageRef::name).collect();
    assert_eq!(names, vec!["A.png", "b.png", "c.png"]);

    let labels: Vec<&str> = view
        .thumbnail_strip()
        .entries()
        .iter()
        .map(|entry| entry.label.as_str())
        .collect();
    assert_eq!(labels, vec!["A", "b", "c"]);
    assert!(view.thumbnail_strip().entries()[1].is_active);
    assert_eq!(view.host().tab_label(), Some("b"));
    assert_eq!(view.transform(), ViewTransform::IDENTITY);
}

#[tokio::test]
async fn keyboard_navigation_round_trips_through_host() {
    let dir = gallery_folder();
    let mut view = view_for(&dir);
    view.load_file(image(&dir, "A.png")).await;

    let intent = view.handle_event(
        &arrow(Named::ArrowRight, keyboard::key::Code::ArrowRight),
        Instant::now(),
    );
    assert_eq!(intent, Intent::Navigate(Direction::Next));

    let next = view
        .host_mut()
        .take_requested_load()
        .expect("navigation should queue a load");
    assert_eq!(next.name(), "b.png");
    view.load_file(next).await;
    assert_eq!(view.siblings().current_index(), Some(1));

    // Left from the first image is a no-op.
    view.load_file(image(&dir, "A.png")).await;
    view.handle_event(
        &arrow(Named::ArrowLeft, keyboard::key::Code::ArrowLeft),
        Instant::now(),
    );
    assert_eq!(view.host().pending_loads(), 0);
}

#[tokio::test]
async fn ctrl_wheel_zooms_at_cursor_and_drag_pans() {
    let dir = gallery_folder();
    let mut view = view_for(&dir);
    view.load_file(image(&dir, "b.png")).await;
    let now = Instant::now();

    view.handle_event(
        &Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(400.0, 250.0),
        }),
        now,
    );
    view.handle_event(
        &Event::Keyboard(keyboard::Event::ModifiersChanged(Modifiers::CTRL)),
        now,
    );
    for _ in 0..5 {
        view.handle_event(
            &Event::Mouse(mouse::Event::WheelScrolled {
                delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
            }),
            now,
        );
    }
    let zoomed = view.transform();
    assert!((zoomed.scale - 1.5).abs() < 1e-4);
    assert_eq!(view.cursor_hint(), CursorHint::Grab);

    view.handle_event(
        &Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
        now,
    );
    assert_eq!(view.cursor_hint(), CursorHint::Grabbing);
    view.handle_event(
        &Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(450.0, 230.0),
        }),
        now,
    );
    view.handle_event(
        &Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)),
        now,
    );

    let panned = view.transform();
    assert!((panned.translate_x - 50.0).abs() < 1e-3);
    assert!((panned.translate_y + 20.0).abs() < 1e-3);
    assert_eq!(view.cursor_hint(), CursorHint::Grab);
}

#[tokio::test]
async fn touch_swipe_navigates_only_when_quick() {
    let dir = gallery_folder();
    let mut view = view_for(&dir);
    view.load_file(image(&dir, "b.png")).await;
    let t0 = Instant::now();
    let finger = touch::Finger(3);

    view.handle_event(
        &Event::Touch(touch::Event::FingerPressed {
            id: finger,
            position: Point::new(300.0, 200.0),
        }),
        t0,
    );
    let intent = view.handle_event(
        &Event::Touch(touch::Event::FingerLifted {
            id: finger,
            position: Point::new(220.0, 200.0),
        }),
        t0 + Duration::from_millis(120),
    );
    assert_eq!(intent, Intent::Navigate(Direction::Next));
    assert_eq!(
        view.host_mut().take_requested_load().map(|i| i.name().to_string()),
        Some("c.png".to_string())
    );

    // Past the double-tap window, and too slow to count as a swipe.
    let t1 = t0 + Duration::from_secs(2);
    view.handle_event(
        &Event::Touch(touch::Event::FingerPressed {
            id: finger,
            position: Point::new(300.0, 200.0),
        }),
        t1,
    );
    let slow = view.handle_event(
        &Event::Touch(touch::Event::FingerLifted {
            id: finger,
            position: Point::new(220.0, 200.0),
        }),
        t1 + Duration::from_millis(500),
    );
    assert_eq!(slow, Intent::Idle);
}

#[tokio::test]
async fn tapping_a_thumbnail_opens_it() {
    let dir = gallery_folder();
    let mut view = view_for(&dir);
    view.load_file(image(&dir, "A.png")).await;
    let t0 = Instant::now();
    let finger = touch::Finger(5);

    // Third entry spans x 172..252 of the strip.
    view.handle_event(
        &Event::Touch(touch::Event::FingerPressed {
            id: finger,
            position: Point::new(200.0, 550.0),
        }),
        t0,
    );
    let intent = view.handle_event(
        &Event::Touch(touch::Event::FingerLifted {
            id: finger,
            position: Point::new(202.0, 551.0),
        }),
        t0 + Duration::from_millis(80),
    );

    assert_eq!(intent, Intent::PickThumbnail { x: 200.0 });
    assert_eq!(
        view.host_mut().take_requested_load().map(|i| i.name().to_string()),
        Some("c.png".to_string())
    );
    assert_eq!(view.transform(), ViewTransform::IDENTITY);
}

#[tokio::test]
async fn broken_image_keeps_view_usable() {
    let dir = gallery_folder();
    fs::write(dir.path().join("broken.png"), b"definitely not png").expect("write");
    let mut view = view_for(&dir);

    let outcome = view.load_file(image(&dir, "broken.png")).await;

    let LoadOutcome::Shown {
        current_index,
        dimensions,
        ..
    } = outcome
    else {
        panic!("expected a shown load, got {outcome:?}");
    };
    assert_eq!(dimensions, None);
    // "b.png" < "broken.png": punctuation sorts before letters.
    assert_eq!(current_index, Some(2));
    assert_eq!(
        view.presentation().surfaces().map(|s| s.content_size),
        Some(Size::new(800.0, 500.0))
    );
}

#[test]
fn host_decode_is_usable_without_the_view() {
    let dir = gallery_folder();
    let host = FsGalleryHost::default();
    let resource = host
        .resolve_display_resource(&image(&dir, "A.png"))
        .expect("file exists");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let dimensions = runtime
        .block_on(host.await_decode(&resource))
        .expect("decodes");

    assert_eq!(dimensions, Dimensions::new(8, 8));
}

#[test]
fn plugin_claims_and_restores_extensions() {
    let mut registry = InMemoryViewRegistry::with_routes([("png", "image"), ("svg", "drawing")]);
    let mut plugin = GalleryPlugin::new();

    plugin.load(&mut registry).expect("Failed to claim extensions");
    assert_eq!(registry.view_type_for("svg").as_deref(), Some(VIEW_TYPE_IMAGE));

    plugin.unload(&mut registry);
    assert_eq!(registry.view_type_for("svg").as_deref(), Some("drawing"));
    assert_eq!(registry.view_type_for("webp").as_deref(), Some("image"));
}

#[test]
fn config_round_trip_changes_thresholds() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut custom = Config::default();
    custom.gestures.swipe_min_distance_px = Some(120.0);
    custom.zoom.max_scale = Some(3.0);
    config::save_to_path(&custom, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, custom);
    assert!((loaded.swipe_thresholds().min_distance() - 120.0).abs() < f32::EPSILON);
    assert!((loaded.scale_bounds().max() - 3.0).abs() < f32::EPSILON);
}
