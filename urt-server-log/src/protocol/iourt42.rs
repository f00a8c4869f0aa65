//! Code tables for the Urban Terror 4.2 protocol.
//!
//! Hit locations got a finer granularity, new weapons arrived and the means of death got renumbered
//! from `UT_MOD_SMITED` (33) on.

use model::codes::{Gametype, HitLocation, Item, MeansOfDeath, Team};
use crate::code_tables::CodeTables;


pub const GAMETYPES: &[(i32, Gametype)] = &[
    (0, Gametype::FreeForAll),
    (1, Gametype::LastManStanding),
    (3, Gametype::TeamDeathMatch),
    (4, Gametype::TeamSurvivor),
    (5, Gametype::FollowTheLeader),
    (6, Gametype::CaptureAndHold),
    (7, Gametype::CaptureTheFlag),
    (8, Gametype::Bomb),
    (9, Gametype::Jump),
];

pub const HIT_LOCATIONS: &[(i32, HitLocation)] = &[
    (1,  HitLocation::Head),
    (2,  HitLocation::Helmet),
    (3,  HitLocation::Torso),
    (4,  HitLocation::Vest),
    (5,  HitLocation::LeftArm),
    (6,  HitLocation::RightArm),
    (7,  HitLocation::Groin),
    (8,  HitLocation::Butt),
    (9,  HitLocation::LeftUpperLeg),
    (10, HitLocation::RightUpperLeg),
    (11, HitLocation::LeftLowerLeg),
    (12, HitLocation::RightLowerLeg),
    (13, HitLocation::LeftFoot),
    (14, HitLocation::RightFoot),
];

/// Weapons, as numbered in the `Hit` lines
pub const ITEMS: &[(i32, Item)] = &[
    (1,  Item::Knife),
    (2,  Item::Beretta),
    (3,  Item::Deagle),
    (4,  Item::Spas12),
    (5,  Item::Mp5k),
    (6,  Item::Ump45),
    (7,  Item::Hk69),
    (8,  Item::Lr300),
    (9,  Item::G36),
    (10, Item::Psg1),
    (11, Item::HeGrenade),
    (12, Item::FlashGrenade),
    (13, Item::SmokeGrenade),
    (14, Item::Sr8),
    (15, Item::Ak103),
    (16, Item::Bomb),
    (17, Item::Negev),
    (19, Item::M4),
    (20, Item::Glock),
    (21, Item::Colt1911),
    (22, Item::Mac11),
    (24, Item::Boot),
    (25, Item::KnifeThrown),
];

pub const MEANS_OF_DEATH: &[(i32, MeansOfDeath)] = &[
    (1,  MeansOfDeath::Water),
    (3,  MeansOfDeath::Lava),
    (5,  MeansOfDeath::Telefrag),
    (6,  MeansOfDeath::Falling),
    (7,  MeansOfDeath::Suicide),
    (9,  MeansOfDeath::TriggerHurt),
    (10, MeansOfDeath::ChangeTeam),
    (12, MeansOfDeath::Knife),
    (13, MeansOfDeath::KnifeThrown),
    (14, MeansOfDeath::Beretta),
    (15, MeansOfDeath::Deagle),
    (16, MeansOfDeath::Spas12),
    (17, MeansOfDeath::Ump45),
    (18, MeansOfDeath::Mp5k),
    (19, MeansOfDeath::Lr300),
    (20, MeansOfDeath::G36),
    (21, MeansOfDeath::Psg1),
    (22, MeansOfDeath::Hk69),
    (23, MeansOfDeath::Bled),
    (24, MeansOfDeath::Kicked),
    (25, MeansOfDeath::HeGrenade),
    (28, MeansOfDeath::Sr8),
    (30, MeansOfDeath::Ak103),
    (31, MeansOfDeath::Sploded),
    (32, MeansOfDeath::Slapped),
    (33, MeansOfDeath::Smited),
    (34, MeansOfDeath::Bombed),
    (35, MeansOfDeath::Nuked),
    (36, MeansOfDeath::Negev),
    (37, MeansOfDeath::Hk69Hit),
    (38, MeansOfDeath::M4),
    (39, MeansOfDeath::Glock),
    (40, MeansOfDeath::Colt1911),
    (41, MeansOfDeath::Mac11),
    (42, MeansOfDeath::Flag),
    (43, MeansOfDeath::Goomba),
];

pub const TEAMS: &[(i32, Team)] = &[
    (0, Team::Free),
    (1, Team::Red),
    (2, Team::Blue),
    (3, Team::Spectator),
];

const FREE_FOR_ALL: &[Team] = &[Team::Free, Team::Spectator];
const SIDES: &[Team] = &[Team::Red, Team::Blue, Team::Spectator];

pub const AVAILABLE_TEAMS: &[(Gametype, &[Team])] = &[
    (Gametype::FreeForAll,      FREE_FOR_ALL),
    (Gametype::LastManStanding, FREE_FOR_ALL),
    (Gametype::TeamDeathMatch,  SIDES),
    (Gametype::TeamSurvivor,    SIDES),
    (Gametype::FollowTheLeader, SIDES),
    (Gametype::CaptureAndHold,  SIDES),
    (Gametype::CaptureTheFlag,  SIDES),
    (Gametype::Bomb,            SIDES),
    (Gametype::Jump,            SIDES),
];

pub fn code_tables() -> CodeTables {
    CodeTables::new(GAMETYPES, HIT_LOCATIONS, ITEMS, MEANS_OF_DEATH, TEAMS, AVAILABLE_TEAMS)
}
