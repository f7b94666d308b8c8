//! Ace Academy - a top-down tennis arcade game built with Bevy
//!
//! Main entry point: app setup and system registration.

use aceacademy::{
    EventBus, ModeRules, PlayerInput, Screen, ai, ball, banner_inactive, collision, constants::*,
    drain_event_bus, input, modes, paddle, scoring, serve, ui, update_event_bus_time,
};
use bevy::{camera::ScalingMode, prelude::*};
use std::path::Path;

/// Generated sprite assets the game cannot run without
const REQUIRED_ASSETS: [&str; 2] = [BALL_TEXTURE, COURT_TEXTURE];

/// Verify generated assets exist before opening a window
fn check_assets() {
    let mut missing = false;
    for asset in REQUIRED_ASSETS {
        let path = format!("assets/{asset}");
        if !Path::new(&path).exists() {
            error!("Missing asset: {path}");
            missing = true;
        }
    }
    if missing {
        error!("Run `cargo run --bin generate_assets` to create them");
        std::process::exit(1);
    }
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                // Scale factor override keeps court pixels 1:1 on HiDPI displays
                resolution: bevy::window::WindowResolution::new(
                    COURT_WIDTH as u32,
                    COURT_HEIGHT as u32,
                )
                .with_scale_factor_override(1.0),
                title: "Ace Academy".into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(COURT_BACKGROUND_COLOR))
        .insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
        .insert_resource(EventBus::new())
        .init_resource::<PlayerInput>()
        .init_state::<Screen>()
        .add_systems(Startup, setup)
        // Menu screens spawn on enter and despawn on exit
        .add_systems(OnEnter(Screen::MainMenu), ui::spawn_main_menu)
        .add_systems(OnExit(Screen::MainMenu), ui::despawn_menu)
        .add_systems(OnEnter(Screen::ModeSelect), ui::spawn_mode_select)
        .add_systems(OnExit(Screen::ModeSelect), ui::despawn_menu)
        .add_systems(OnEnter(Screen::DrillSelect), ui::spawn_drill_select)
        .add_systems(OnExit(Screen::DrillSelect), ui::despawn_menu)
        .add_systems(
            Update,
            (ui::handle_menu_actions, ui::highlight_menu_buttons)
                .run_if(not(in_state(Screen::Playing))),
        )
        // Session lifecycle
        .add_systems(OnEnter(Screen::Playing), modes::setup_match)
        .add_systems(OnExit(Screen::Playing), modes::teardown_match)
        // Per-frame session systems
        .add_systems(
            Update,
            (
                input::capture_input,
                serve::serve_transitions
                    .run_if(resource_exists::<ModeRules>.and(banner_inactive)),
                ball::sync_court_transforms,
                ui::update_hud,
                ui::update_power_gauge,
                ui::update_banner,
                ui::exit_session_on_escape,
            )
                .run_if(in_state(Screen::Playing)),
        )
        // Event bus bookkeeping runs in every screen
        .add_systems(Update, (update_event_bus_time, drain_event_bus))
        // Fixed-rate gameplay pipeline
        .add_systems(
            FixedUpdate,
            (
                paddle::apply_paddle_input,
                ai::ai_movement,
                serve::charge_tick,
                ball::integrate_ball,
                collision::resolve_collisions,
                scoring::check_out_of_bounds,
                scoring::check_win,
            )
                .chain()
                .run_if(
                    in_state(Screen::Playing)
                        .and(resource_exists::<ModeRules>)
                        .and(banner_inactive),
                ),
        )
        .run();
}

/// Camera setup. FixedVertical keeps the full court height visible.
fn setup(mut commands: Commands) {
    check_assets();
    commands.spawn((
        Camera2d,
        Transform::from_xyz(0.0, 0.0, 0.0),
        Projection::Orthographic(OrthographicProjection {
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: COURT_HEIGHT,
            },
            ..OrthographicProjection::default_2d()
        }),
    ));
}
