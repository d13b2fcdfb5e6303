use egui::vec2;
use homeplan::model::{Layout, Room, SourceKind};
use homeplan::render::scene::{self, DrawCmd};
use homeplan::render::Scene;
use homeplan::style;
use homeplan::view::ViewState;

fn sample_layout() -> Layout {
    let rooms = vec![
        Room::new("Living Room", 10.0, 10.0, 40.0, 30.0),
        Room::new("Kitchen", 50.0, 10.0, 30.0, 30.0),
    ];
    Layout::new(rooms, Vec::new(), SourceKind::Text).unwrap()
}

#[test]
fn scene_building_is_deterministic() {
    let layout = sample_layout();
    let view = ViewState { zoom: 1.4 };
    let first = Scene::build(&layout, view, vec2(600.0, 500.0));
    let second = Scene::build(&layout, view, vec2(600.0, 500.0));
    assert_eq!(first, second);
}

#[test]
fn background_fills_the_viewport_first() {
    let layout = sample_layout();
    let scene = Scene::build(&layout, ViewState::default(), vec2(600.0, 500.0));
    match &scene.cmds()[0] {
        DrawCmd::Fill { rect, color } => {
            assert_eq!(rect.min, egui::pos2(0.0, 0.0));
            assert_eq!(rect.size(), vec2(600.0, 500.0));
            assert_eq!(*color, style::BACKGROUND);
        }
        other => panic!("expected background fill, got {other:?}"),
    }
}

#[test]
fn grid_lines_sit_on_the_20_unit_raster() {
    let layout = sample_layout();
    let scene = Scene::build(&layout, ViewState::default(), vec2(100.0, 100.0));
    let verticals: Vec<f32> = scene
        .cmds()
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCmd::Line { from, to, color, .. }
                if *color == style::GRID_LINE && from.x == to.x =>
            {
                Some(from.x)
            }
            _ => None,
        })
        .collect();
    assert_eq!(verticals, vec![0.0, 20.0, 40.0, 60.0, 80.0]);
}

#[test]
fn zoom_scales_geometry_but_not_stroke_width() {
    let layout = sample_layout();
    let scene = Scene::build(&layout, ViewState { zoom: 2.0 }, vec2(600.0, 500.0));

    let stroke = scene
        .cmds()
        .iter()
        .find_map(|cmd| match cmd {
            DrawCmd::Stroke { rect, width, .. } => Some((*rect, *width)),
            _ => None,
        })
        .expect("rooms should have border strokes");

    // Living Room at (10,10) 40×30 under 2× zoom, growing from the top-left.
    assert_eq!(stroke.0.min, egui::pos2(20.0, 20.0));
    assert_eq!(stroke.0.size(), vec2(80.0, 60.0));
    assert_eq!(stroke.1, scene::ROOM_BORDER_WIDTH);
}

#[test]
fn dimension_label_uses_the_fixed_foot_conversion() {
    let rooms = vec![Room::new("Living Room", 0.0, 0.0, 40.0, 30.0)];
    let layout = Layout::new(rooms, Vec::new(), SourceKind::Text).unwrap();
    let scene = Scene::build(&layout, ViewState::default(), vec2(600.0, 500.0));

    let labels: Vec<&str> = scene
        .cmds()
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCmd::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert!(labels.contains(&"Living Room"));
    assert!(labels.contains(&"4' × 3'"));
}

#[test]
fn room_fill_uses_the_category_style() {
    let layout = sample_layout();
    let scene = Scene::build(&layout, ViewState::default(), vec2(600.0, 500.0));
    let living = style::room_style(&homeplan::RoomCategory::Living);
    assert!(scene.cmds().iter().any(|cmd| matches!(
        cmd,
        DrawCmd::Fill { color, .. } if *color == living.fill
    )));
}

#[test]
fn unknown_category_renders_with_default_style() {
    let rooms = vec![Room::new("Attic", 0.0, 0.0, 80.0, 80.0)];
    let layout = Layout::new(rooms, Vec::new(), SourceKind::Text).unwrap();
    let scene = Scene::build(&layout, ViewState::default(), vec2(600.0, 500.0));
    assert!(scene.cmds().iter().any(|cmd| matches!(
        cmd,
        DrawCmd::Fill { color, .. } if *color == style::DEFAULT_STYLE.fill
    )));
}

#[test]
fn entrance_marker_is_always_present() {
    let layout = sample_layout();
    let scene = Scene::build(&layout, ViewState::default(), vec2(600.0, 500.0));
    assert!(scene.cmds().iter().any(|cmd| matches!(
        cmd,
        DrawCmd::Line { from, to, .. }
            if *from == egui::pos2(150.0, 50.0) && *to == egui::pos2(150.0, 35.0)
    )));
}

#[test]
fn door_stroke_lands_on_the_shared_room_edge() {
    let rooms = vec![
        Room::new("Living Room", 0.0, 0.0, 100.0, 80.0),
        Room::new("Kitchen", 100.0, 0.0, 80.0, 80.0),
    ];
    let from = rooms[0].id;
    let to = rooms[1].id;
    let layout = Layout::new(
        rooms,
        vec![homeplan::Opening::Door { from, to }],
        SourceKind::Code,
    )
    .unwrap();

    let scene = Scene::build(&layout, ViewState::default(), vec2(600.0, 500.0));
    assert!(scene.cmds().iter().any(|cmd| matches!(
        cmd,
        DrawCmd::Line { from, to, width, .. }
            if from.x == 100.0 && to.x == 100.0 && *width == scene::OPENING_STROKE_WIDTH
    )));
}
