//! End-of-session banners
//!
//! When a match or drill reaches its goal a banner holds the screen for a
//! couple of seconds before the session either resets or returns to the
//! menu. Gameplay systems pause while a banner is up.

use bevy::prelude::*;

use crate::constants::*;
use crate::modes::MatchEntity;
use crate::scoring::Score;

use super::Screen;

/// What happens when the banner expires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerThen {
    /// Clear the score and keep playing (looping drills)
    ResetScore,
    /// Leave the session and return to the main menu
    ExitToMenu,
}

/// Active banner state for the current session
#[derive(Resource)]
pub struct ModeBanner {
    pub active: bool,
    pub text: String,
    pub then: BannerThen,
    timer: f32,
}

impl Default for ModeBanner {
    fn default() -> Self {
        Self {
            active: false,
            text: String::new(),
            then: BannerThen::ExitToMenu,
            timer: 0.0,
        }
    }
}

impl ModeBanner {
    pub fn show(&mut self, text: &str, then: BannerThen) {
        self.active = true;
        self.text = text.to_string();
        self.then = then;
        self.timer = BANNER_SECONDS;
    }
}

/// Banner text entity marker
#[derive(Component)]
pub struct BannerText;

pub fn spawn_banner_text(commands: &mut Commands) {
    commands.spawn((
        Text2d::new(""),
        TextFont {
            font_size: 44.0,
            ..default()
        },
        TextColor(TEXT_PRIMARY),
        Transform::from_translation(Vec3::new(0.0, 0.0, 20.0)),
        Visibility::Hidden,
        BannerText,
        MatchEntity,
    ));
}

/// Run condition: gameplay systems only step while no banner is up
pub fn banner_inactive(banner: Option<Res<ModeBanner>>) -> bool {
    banner.map(|b| !b.active).unwrap_or(true)
}

/// Tick the active banner and apply its follow-up action on expiry
pub fn update_banner(
    time: Res<Time>,
    banner: Option<ResMut<ModeBanner>>,
    score: Option<ResMut<Score>>,
    mut next_screen: ResMut<NextState<Screen>>,
    mut text_query: Query<(&mut Text2d, &mut Visibility), With<BannerText>>,
) {
    let Some(mut banner) = banner else {
        return;
    };
    if !banner.active {
        for (_, mut visibility) in &mut text_query {
            *visibility = Visibility::Hidden;
        }
        return;
    }

    for (mut text, mut visibility) in &mut text_query {
        if text.0 != banner.text {
            text.0 = banner.text.clone();
        }
        *visibility = Visibility::Visible;
    }

    banner.timer -= time.delta_secs();
    if banner.timer > 0.0 {
        return;
    }

    banner.active = false;
    match banner.then {
        BannerThen::ResetScore => {
            if let Some(mut score) = score {
                *score = Score::default();
                info!("Drill counter reset, go again");
            }
        }
        BannerThen::ExitToMenu => {
            next_screen.set(Screen::MainMenu);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_arms_banner() {
        let mut banner = ModeBanner::default();
        assert!(!banner.active);

        banner.show("Top player wins!", BannerThen::ExitToMenu);
        assert!(banner.active);
        assert_eq!(banner.text, "Top player wins!");
        assert_eq!(banner.then, BannerThen::ExitToMenu);
        assert!(banner.timer > 0.0);
    }

    #[test]
    fn test_banner_inactive_without_resource() {
        assert!(banner_inactive(None));
    }
}
