//! Menu screens and scene navigation
//!
//! Navigation is an explicit state machine over `Screen`. Each menu screen
//! spawns its widget tree on enter and despawns it on exit; button presses
//! either move to another screen or start a session with a selected mode.

use bevy::prelude::*;

use crate::modes::{GameMode, SelectedMode};

/// Scene state machine
#[derive(States, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    MainMenu,
    ModeSelect,
    DrillSelect,
    Playing,
}

/// What a menu button does when pressed
#[derive(Component, Debug, Clone, Copy)]
pub enum MenuAction {
    Goto(Screen),
    Start(GameMode),
    Quit,
}

/// Root node of the current menu screen
#[derive(Component)]
pub struct MenuRoot;

const NORMAL_BUTTON: Color = Color::srgb(0.16, 0.16, 0.18);
const HOVERED_BUTTON: Color = Color::srgb(0.26, 0.26, 0.30);
const PRESSED_BUTTON: Color = Color::srgb(0.12, 0.35, 0.16);

fn spawn_menu(commands: &mut Commands, title: &str, buttons: &[(&str, MenuAction)]) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(18.0),
                ..default()
            },
            BackgroundColor(Color::srgb(0.05, 0.12, 0.07)),
            MenuRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            for (label, action) in buttons {
                parent
                    .spawn((
                        Button,
                        Node {
                            width: Val::Px(320.0),
                            height: Val::Px(56.0),
                            align_items: AlignItems::Center,
                            justify_content: JustifyContent::Center,
                            ..default()
                        },
                        BackgroundColor(NORMAL_BUTTON),
                        *action,
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new(*label),
                            TextFont {
                                font_size: 26.0,
                                ..default()
                            },
                            TextColor(Color::WHITE),
                        ));
                    });
            }
        });
}

pub fn spawn_main_menu(mut commands: Commands) {
    spawn_menu(
        &mut commands,
        "Ace Academy",
        &[
            ("Play", MenuAction::Goto(Screen::ModeSelect)),
            ("Quit", MenuAction::Quit),
        ],
    );
}

pub fn spawn_mode_select(mut commands: Commands) {
    spawn_menu(
        &mut commands,
        "Select Gamemode",
        &[
            ("VS Player", MenuAction::Start(GameMode::VsPlayer)),
            ("VS AI", MenuAction::Start(GameMode::VsAi)),
            ("Learn", MenuAction::Goto(Screen::DrillSelect)),
            ("Back", MenuAction::Goto(Screen::MainMenu)),
        ],
    );
}

pub fn spawn_drill_select(mut commands: Commands) {
    spawn_menu(
        &mut commands,
        "Learn",
        &[
            ("Forehand", MenuAction::Start(GameMode::ForehandDrill)),
            ("Backhand", MenuAction::Start(GameMode::BackhandDrill)),
            ("Serve", MenuAction::Start(GameMode::ServeDrill)),
            ("Back", MenuAction::Goto(Screen::ModeSelect)),
        ],
    );
}

pub fn despawn_menu(mut commands: Commands, roots: Query<Entity, With<MenuRoot>>) {
    for root in &roots {
        commands.entity(root).despawn();
    }
}

/// Dispatch pressed menu buttons
pub fn handle_menu_actions(
    mut commands: Commands,
    interactions: Query<(&Interaction, &MenuAction), (Changed<Interaction>, With<Button>)>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    for (interaction, action) in &interactions {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match action {
            MenuAction::Goto(screen) => next_screen.set(*screen),
            MenuAction::Start(mode) => {
                info!("Selected mode: {mode:?}");
                commands.insert_resource(SelectedMode(*mode));
                next_screen.set(Screen::Playing);
            }
            MenuAction::Quit => {
                info!("Quit selected");
                std::process::exit(0);
            }
        }
    }
}

/// Hover and press feedback on menu buttons
pub fn highlight_menu_buttons(
    mut interactions: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<Button>),
    >,
) {
    for (interaction, mut background) in &mut interactions {
        background.0 = match interaction {
            Interaction::Pressed => PRESSED_BUTTON,
            Interaction::Hovered => HOVERED_BUTTON,
            Interaction::None => NORMAL_BUTTON,
        };
    }
}

/// Escape abandons the current session and returns to the main menu
pub fn exit_session_on_escape(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Session abandoned, back to menu");
        next_screen.set(Screen::MainMenu);
    }
}
