use bevy::prelude::*;
use bevy::window::{PrimaryWindow, SystemCursorIcon};
use bevy::winit::cursor::CursorIcon;

use super::picking::MarkerPicker;
use crate::constants::overlay::{CLICK_DRAG_TOLERANCE, TOOLTIP_OFFSET};
use crate::portfolio::catalogue::CategoryKey;
use crate::rpc::web_rpc::WebRpcInterface;
use crate::ui::state::UiCommand;

/// Marker currently under the pointer and where its label goes.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct HoverState {
    pub category: Option<CategoryKey>,
    /// Tooltip anchor in logical window pixels.
    pub label_position: Option<Vec2>,
}

impl HoverState {
    pub fn label(&self) -> Option<&'static str> {
        self.category.map(|category| category.marker_label())
    }
}

/// What a hover update changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverUpdate {
    pub category_changed: bool,
    pub moved: bool,
}

impl HoverUpdate {
    pub fn needs_notification(&self) -> bool {
        self.category_changed || self.moved
    }
}

pub fn update_hover(
    hover: &mut HoverState,
    picked: Option<CategoryKey>,
    cursor: Option<Vec2>,
) -> HoverUpdate {
    let label_position = picked.and(cursor).map(|c| c + Vec2::splat(TOOLTIP_OFFSET));
    let update = HoverUpdate {
        category_changed: hover.category != picked,
        moved: hover.label_position != label_position,
    };
    hover.category = picked;
    hover.label_position = label_position;
    update
}

pub fn marker_hover_system(
    windows: Query<(Entity, &Window), With<PrimaryWindow>>,
    picker: MarkerPicker,
    mut hover: ResMut<HoverState>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut commands: Commands,
) {
    let Ok((window_entity, window)) = windows.single() else {
        return;
    };
    let cursor = window.cursor_position();
    let picked = cursor.and_then(|position| picker.pick_at(position));

    // The tooltip redraws on change detection.
    let update = update_hover(hover.bypass_change_detection(), picked, cursor);
    if !update.needs_notification() {
        return;
    }
    hover.set_changed();

    if update.category_changed {
        let icon = if picked.is_some() {
            SystemCursorIcon::Pointer
        } else {
            SystemCursorIcon::Default
        };
        commands.entity(window_entity).insert(CursorIcon::from(icon));
    }

    rpc_interface.send_notification(
        "hover_changed",
        serde_json::json!({
            "category": picked.map(|category| category.as_str()),
            "label": hover.label(),
            "x": hover.label_position.map(|p| p.x),
            "y": hover.label_position.map(|p| p.y),
        }),
    );
}

/// A press that travelled less than the drag tolerance before release.
pub fn is_click(pressed_at: Vec2, released_at: Vec2) -> bool {
    pressed_at.distance(released_at) < CLICK_DRAG_TOLERANCE
}

/// Mouse clicks and touch taps on a marker open its category.
pub fn marker_click_system(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    picker: MarkerPicker,
    mut pressed_at: Local<Option<Vec2>>,
    mut ui_commands: EventWriter<UiCommand>,
) {
    let cursor = windows.single().ok().and_then(|window| window.cursor_position());
    let mut taps: Vec<Vec2> = Vec::new();

    if buttons.just_pressed(MouseButton::Left) {
        *pressed_at = cursor;
    }
    if buttons.just_released(MouseButton::Left) {
        if let (Some(start), Some(end)) = (pressed_at.take(), cursor) {
            if is_click(start, end) {
                taps.push(end);
            }
        }
    }
    for touch in touches.iter_just_released() {
        if is_click(touch.start_position(), touch.position()) {
            taps.push(touch.position());
        }
    }

    for tap in taps {
        if let Some(category) = picker.pick_at(tap) {
            info!("Marker picked: {}", category.as_str());
            ui_commands.write(UiCommand::OpenCategory(category));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::core::frame::SceneCamera;
    use crate::interaction::picking::{InteractiveMarker, MarkerPart, PickVolume};
    use bevy::ecs::system::RunSystemOnce;
    use bevy::input::touch::{TouchInput, TouchPhase, touch_screen_input_system};
    use bevy::render::camera::{ManualTextureViews, camera_system};
    use bevy::window::{WindowCreated, WindowResized, WindowScaleFactorChanged};

    const CENTRE: Vec2 = Vec2::new(640.0, 360.0);

    #[test]
    fn hover_change_is_reported_once() {
        let mut hover = HoverState::default();
        let cursor = Some(Vec2::new(100.0, 200.0));

        let entered = update_hover(&mut hover, Some(CategoryKey::Plc), cursor);
        assert!(entered.category_changed);
        assert_eq!(hover.label(), Some("PLC/SCADA Systems"));
        assert_eq!(hover.label_position, Some(Vec2::new(115.0, 215.0)));

        let still = update_hover(&mut hover, Some(CategoryKey::Plc), cursor);
        assert!(!still.needs_notification());
    }

    #[test]
    fn moving_over_the_same_marker_moves_the_label() {
        let mut hover = HoverState::default();
        update_hover(&mut hover, Some(CategoryKey::Plc), Some(Vec2::new(100.0, 200.0)));

        let update = update_hover(&mut hover, Some(CategoryKey::Plc), Some(Vec2::new(101.0, 200.0)));
        assert_eq!(
            update,
            HoverUpdate {
                category_changed: false,
                moved: true,
            }
        );
        assert_eq!(hover.label_position, Some(Vec2::new(116.0, 215.0)));
    }

    #[test]
    fn losing_the_pick_clears_label() {
        let mut hover = HoverState::default();
        update_hover(&mut hover, Some(CategoryKey::Robots), Some(Vec2::ZERO));
        assert!(update_hover(&mut hover, None, Some(Vec2::ZERO)).category_changed);
        assert_eq!(hover.label(), None);
        assert_eq!(hover.label_position, None);
    }

    #[test]
    fn drag_is_not_a_click() {
        assert!(is_click(Vec2::new(10.0, 10.0), Vec2::new(13.0, 13.0)));
        assert!(!is_click(Vec2::new(10.0, 10.0), Vec2::new(30.0, 10.0)));
    }

    /// Window, camera ten units back from a marker at the origin, and the
    /// camera system so screen positions resolve to rays.
    fn pointer_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_event::<WindowResized>()
            .add_event::<WindowCreated>()
            .add_event::<WindowScaleFactorChanged>()
            .add_event::<AssetEvent<Image>>()
            .add_event::<TouchInput>()
            .add_event::<UiCommand>()
            .init_resource::<Assets<Image>>()
            .init_resource::<ManualTextureViews>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<Touches>()
            .init_resource::<HoverState>()
            .init_resource::<WebRpcInterface>();

        let window = app.world_mut().spawn((Window::default(), PrimaryWindow)).id();
        let camera_at = Transform::from_xyz(0.0, 0.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y);
        app.world_mut().spawn((
            Camera3d::default(),
            Projection::default(),
            camera_at,
            GlobalTransform::from(camera_at),
            SceneCamera,
        ));
        let root = app
            .world_mut()
            .spawn(InteractiveMarker {
                category: CategoryKey::Robots,
            })
            .id();
        app.world_mut().spawn((
            MarkerPart { marker: root },
            PickVolume::Sphere { radius: 1.2 },
            GlobalTransform::IDENTITY,
        ));
        (app, window)
    }

    fn move_cursor(app: &mut App, window: Entity, position: Vec2) {
        if let Some(mut window) = app.world_mut().get_mut::<Window>(window) {
            window.set_cursor_position(Some(position));
        }
    }

    fn opened(app: &App) -> Vec<UiCommand> {
        let events = app.world().resource::<Events<UiCommand>>();
        events.get_cursor().read(events).cloned().collect()
    }

    fn click(app: &mut App, window: Entity, from: Vec2, to: Vec2) {
        move_cursor(app, window, from);
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        move_cursor(app, window, to);
        let mut buttons = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
        buttons.clear();
        buttons.release(MouseButton::Left);
        app.update();
    }

    fn touch(app: &mut App, window: Entity, phase: TouchPhase, position: Vec2) {
        app.world_mut().send_event(TouchInput {
            phase,
            position,
            window,
            force: None,
            id: 7,
        });
        app.update();
    }

    #[test]
    fn screen_centre_picks_the_marker_in_front() {
        let (mut app, _) = pointer_app();
        app.add_systems(Update, camera_system);
        app.update();

        let world = app.world_mut();
        let picked = world
            .run_system_once(|picker: MarkerPicker| {
                (picker.pick_at(CENTRE), picker.pick_at(Vec2::new(20.0, 20.0)))
            })
            .ok();
        assert_eq!(picked, Some((Some(CategoryKey::Robots), None)));
    }

    #[test]
    fn click_within_tolerance_opens_the_category() {
        let (mut app, window) = pointer_app();
        app.add_systems(Update, (camera_system, marker_click_system).chain());

        click(&mut app, window, CENTRE, CENTRE + Vec2::new(3.0, 0.0));
        assert_eq!(opened(&app), vec![UiCommand::OpenCategory(CategoryKey::Robots)]);
    }

    #[test]
    fn drag_over_the_marker_opens_nothing() {
        let (mut app, window) = pointer_app();
        app.add_systems(Update, (camera_system, marker_click_system).chain());

        click(&mut app, window, CENTRE, CENTRE + Vec2::new(20.0, 0.0));
        assert!(opened(&app).is_empty());
    }

    #[test]
    fn click_away_from_markers_opens_nothing() {
        let (mut app, window) = pointer_app();
        app.add_systems(Update, (camera_system, marker_click_system).chain());

        click(&mut app, window, Vec2::new(20.0, 20.0), Vec2::new(20.0, 20.0));
        assert!(opened(&app).is_empty());
    }

    #[test]
    fn touch_tap_opens_the_category() {
        let (mut app, window) = pointer_app();
        app.add_systems(
            Update,
            (camera_system, touch_screen_input_system, marker_click_system).chain(),
        );

        touch(&mut app, window, TouchPhase::Started, CENTRE);
        assert!(opened(&app).is_empty());
        touch(&mut app, window, TouchPhase::Ended, CENTRE + Vec2::new(2.0, 2.0));
        assert_eq!(opened(&app), vec![UiCommand::OpenCategory(CategoryKey::Robots)]);
    }

    #[test]
    fn hover_follows_the_cursor_and_sets_the_pointer() {
        let (mut app, window) = pointer_app();
        app.add_systems(Update, (camera_system, marker_hover_system).chain());
        let notifications = |app: &App| app.world().resource::<WebRpcInterface>().pending_notifications();
        let pointer = |app: &App| {
            matches!(
                app.world().get::<CursorIcon>(window),
                Some(CursorIcon::System(SystemCursorIcon::Pointer))
            )
        };

        move_cursor(&mut app, window, CENTRE);
        app.update();
        assert_eq!(notifications(&app), 1);
        assert!(pointer(&app));
        assert_eq!(
            app.world().resource::<HoverState>().category,
            Some(CategoryKey::Robots)
        );

        move_cursor(&mut app, window, CENTRE + Vec2::new(10.0, 0.0));
        app.update();
        assert_eq!(notifications(&app), 2);
        let params = app
            .world()
            .resource::<WebRpcInterface>()
            .last_notification("hover_changed");
        assert_eq!(params.as_ref().and_then(|p| p["x"].as_f64()), Some(665.0));
        assert_eq!(params.as_ref().and_then(|p| p["label"].as_str()), Some("Robotics Projects"));
        assert!(pointer(&app));

        app.update();
        assert_eq!(notifications(&app), 2);

        move_cursor(&mut app, window, Vec2::new(20.0, 20.0));
        app.update();
        assert_eq!(notifications(&app), 3);
        assert!(matches!(
            app.world().get::<CursorIcon>(window),
            Some(CursorIcon::System(SystemCursorIcon::Default))
        ));
        assert_eq!(app.world().resource::<HoverState>(), &HoverState::default());
    }
}
