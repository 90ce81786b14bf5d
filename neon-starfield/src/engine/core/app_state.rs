use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// How frames are scheduled.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum FrameMode {
    /// Windowed, one tick per display refresh (vsync).
    #[default]
    DisplayRefresh,
    /// No window and no GPU. Ticks only happen when `App::update` is called.
    Headless,
}

/// Random source shared by scene construction.
#[derive(Resource)]
pub struct SceneRng(pub StdRng);

impl SceneRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}
