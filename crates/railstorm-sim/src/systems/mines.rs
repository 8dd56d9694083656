//! Mine system — drift, attachment, clamp timers, turn-penalty release.
//!
//! A mine attaches at most once. Its turn penalty is keyed by the mine
//! id on the train side, so every removal path must release it.

use railstorm_core::constants::{MINE_CLAMP_SECS, MINE_TURN_PENALTY};
use railstorm_core::entities::MineState;
use railstorm_core::events::CombatEvent;
use railstorm_core::train::TrainContract;
use railstorm_core::types::circles_overlap;

use crate::registry::EntityRegistry;

pub fn run<T: TrainContract>(
    registry: &mut EntityRegistry,
    train: &mut T,
    events: &mut Vec<CombatEvent>,
    dt: f32,
) {
    let segments = train.segments();

    for mi in (0..registry.mines.len()).rev() {
        let (mine_id, pos, radius, state) = {
            let mine = &registry.mines[mi];
            (mine.id, mine.pos, mine.radius, mine.state.clone())
        };

        match state {
            MineState::Drifting { vel, lifetime_secs } => {
                let new_pos = pos + vel * dt;
                let lifetime = lifetime_secs - dt;
                if lifetime <= 0.0 {
                    registry.mines.remove(mi);
                    continue;
                }

                let hit = segments
                    .iter()
                    .find(|seg| circles_overlap(new_pos, radius, seg.pos, seg.radius))
                    .copied();
                let mine = &mut registry.mines[mi];
                mine.pos = new_pos;
                if let Some(seg) = hit {
                    // Drifting -> attached happens at most once.
                    mine.state = MineState::Attached {
                        car: seg.id,
                        offset: new_pos - seg.pos,
                        timer_secs: MINE_CLAMP_SECS,
                    };
                    train.apply_turn_penalty(mine_id, MINE_TURN_PENALTY);
                    events.push(CombatEvent::MineAttached {
                        mine: mine_id,
                        car: seg.id,
                    });
                } else {
                    mine.state = MineState::Drifting {
                        vel,
                        lifetime_secs: lifetime,
                    };
                }
            }
            MineState::Attached {
                car,
                offset,
                timer_secs,
            } => {
                let Some(seg) = train.segment_by_id(car) else {
                    // Attached car destroyed: the clamp dies with it.
                    train.clear_turn_penalty(mine_id);
                    registry.mines.remove(mi);
                    continue;
                };
                let timer = timer_secs - dt;
                if timer <= 0.0 {
                    train.clear_turn_penalty(mine_id);
                    registry.mines.remove(mi);
                    continue;
                }
                let mine = &mut registry.mines[mi];
                mine.pos = seg.pos + offset;
                mine.state = MineState::Attached {
                    car,
                    offset,
                    timer_secs: timer,
                };
            }
        }
    }
}
