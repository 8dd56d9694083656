//! Endless-mode collaborator — an external pacing policy that replaces
//! the fixed-mode wave formulas.

use railstorm_core::entities::ScaleFactors;

/// Per-wave configuration supplied by an endless policy.
#[derive(Debug, Clone)]
pub struct EndlessWaveConfig {
    /// Base melee enemy count for the wave.
    pub enemy_count: u32,
    /// HP/damage/speed multipliers for every spawn in the wave.
    pub scale: ScaleFactors,
    /// Force a boss elite this wave.
    pub boss: bool,
    /// Force a champion elite this wave.
    pub champion: bool,
    /// When neither flag is set, chance of a champion anyway.
    pub elite_chance: f64,
    /// Display label, e.g. "Surge 12".
    pub label: String,
}

/// Pacing policy for endless runs. The director asks for each wave's
/// configuration up front and reports kills back on completion.
pub trait EndlessPolicy {
    fn wave_config(&mut self, wave: u32) -> EndlessWaveConfig;

    /// Notification sink: the wave finished with `kills` enemies killed.
    fn complete_wave(&mut self, wave: u32, kills: u32);
}

/// Run length mode.
pub enum GameMode {
    /// Classic run: win after clearing `waves_to_win` waves.
    Fixed { waves_to_win: u32 },
    /// Endless run driven by a pacing policy.
    Endless(Box<dyn EndlessPolicy + Send>),
}

impl GameMode {
    pub fn fixed_default() -> Self {
        GameMode::Fixed {
            waves_to_win: railstorm_core::constants::WAVES_TO_WIN,
        }
    }
}
