//! Domain enumerations for the integer & textual codes found in the Urban Terror server logs.
//!
//! The numeric codes differ between protocol revisions, so the integer -> enum mappings live in
//! the `urt-server-log` crate's code tables. The textual names (team & item names), on the other hand,
//! are stable and are parsed here through `strum`.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Team {
    #[strum(to_string = "FREE", serialize = "f")]
    Free,
    #[strum(to_string = "RED", serialize = "r")]
    Red,
    #[strum(to_string = "BLUE", serialize = "b")]
    Blue,
    #[strum(to_string = "SPECTATOR", serialize = "spec", serialize = "s")]
    Spectator,
}

impl Team {

    /// Red & Blue are the only real sides: spectators and free-for-all players fight for nobody
    pub fn is_side(&self) -> bool {
        matches!(self, Team::Red | Team::Blue)
    }

}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Gametype {
    #[strum(to_string = "FFA")]
    FreeForAll,
    #[strum(to_string = "LMS")]
    LastManStanding,
    #[strum(to_string = "TDM")]
    TeamDeathMatch,
    #[strum(to_string = "TS")]
    TeamSurvivor,
    #[strum(to_string = "FTL")]
    FollowTheLeader,
    #[strum(to_string = "CAH")]
    CaptureAndHold,
    #[strum(to_string = "CTF")]
    CaptureTheFlag,
    #[strum(to_string = "BOMB")]
    Bomb,
    #[strum(to_string = "JUMP")]
    Jump,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HitLocation {
    Head,
    Helmet,
    Torso,
    Vest,
    Arms,
    Legs,
    Body,
    LeftArm,
    RightArm,
    Groin,
    Butt,
    LeftUpperLeg,
    RightUpperLeg,
    LeftLowerLeg,
    RightLowerLeg,
    LeftFoot,
    RightFoot,
}

/// Weapons & gear, as named by the `Item` log lines and numbered by the `Hit` ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Item {
    #[strum(to_string = "ut_weapon_knife")]
    Knife,
    #[strum(to_string = "ut_weapon_knife_thrown")]
    KnifeThrown,
    #[strum(to_string = "ut_weapon_beretta")]
    Beretta,
    #[strum(to_string = "ut_weapon_deagle")]
    Deagle,
    #[strum(to_string = "ut_weapon_spas12")]
    Spas12,
    #[strum(to_string = "ut_weapon_mp5k")]
    Mp5k,
    #[strum(to_string = "ut_weapon_ump45")]
    Ump45,
    #[strum(to_string = "ut_weapon_hk69")]
    Hk69,
    #[strum(to_string = "ut_weapon_lr")]
    Lr300,
    #[strum(to_string = "ut_weapon_g36")]
    G36,
    #[strum(to_string = "ut_weapon_psg1")]
    Psg1,
    #[strum(to_string = "ut_weapon_grenade_he")]
    HeGrenade,
    #[strum(to_string = "ut_weapon_grenade_flash")]
    FlashGrenade,
    #[strum(to_string = "ut_weapon_grenade_smoke")]
    SmokeGrenade,
    #[strum(to_string = "ut_weapon_sr8")]
    Sr8,
    #[strum(to_string = "ut_weapon_ak103")]
    Ak103,
    #[strum(to_string = "ut_weapon_bomb")]
    Bomb,
    #[strum(to_string = "ut_weapon_negev")]
    Negev,
    #[strum(to_string = "ut_weapon_m4")]
    M4,
    #[strum(to_string = "ut_weapon_glock")]
    Glock,
    #[strum(to_string = "ut_weapon_colt1911")]
    Colt1911,
    #[strum(to_string = "ut_weapon_mac11")]
    Mac11,
    #[strum(to_string = "ut_weapon_boot")]
    Boot,
    #[strum(to_string = "team_CTF_redflag")]
    RedFlag,
    #[strum(to_string = "team_CTF_blueflag")]
    BlueFlag,
    #[strum(to_string = "team_CTF_neutralflag")]
    NeutralFlag,
    #[strum(to_string = "ut_item_vest")]
    Vest,
    #[strum(to_string = "ut_item_nvg")]
    Nvg,
    #[strum(to_string = "ut_item_medkit")]
    Medkit,
    #[strum(to_string = "ut_item_silencer")]
    Silencer,
    #[strum(to_string = "ut_item_laser")]
    Laser,
    #[strum(to_string = "ut_item_helmet")]
    Helmet,
    #[strum(to_string = "ut_item_extraammo")]
    ExtraAmmo,
}

impl Item {

    /// The team owning the flag, if this item is a team flag
    pub fn flag_team(&self) -> Option<Team> {
        match self {
            Item::RedFlag  => Some(Team::Red),
            Item::BlueFlag => Some(Team::Blue),
            _ => None,
        }
    }

}

/// Means of death: the cause of a kill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum MeansOfDeath {
    #[strum(to_string = "MOD_WATER")]
    Water,
    #[strum(to_string = "MOD_LAVA")]
    Lava,
    #[strum(to_string = "MOD_TELEFRAG")]
    Telefrag,
    #[strum(to_string = "MOD_FALLING")]
    Falling,
    #[strum(to_string = "MOD_SUICIDE")]
    Suicide,
    #[strum(to_string = "MOD_TRIGGER_HURT")]
    TriggerHurt,
    #[strum(to_string = "MOD_CHANGE_TEAM")]
    ChangeTeam,
    #[strum(to_string = "UT_MOD_KNIFE")]
    Knife,
    #[strum(to_string = "UT_MOD_KNIFE_THROWN")]
    KnifeThrown,
    #[strum(to_string = "UT_MOD_BERETTA")]
    Beretta,
    #[strum(to_string = "UT_MOD_DEAGLE")]
    Deagle,
    #[strum(to_string = "UT_MOD_SPAS")]
    Spas12,
    #[strum(to_string = "UT_MOD_UMP45")]
    Ump45,
    #[strum(to_string = "UT_MOD_MP5K")]
    Mp5k,
    #[strum(to_string = "UT_MOD_LR300")]
    Lr300,
    #[strum(to_string = "UT_MOD_G36")]
    G36,
    #[strum(to_string = "UT_MOD_PSG1")]
    Psg1,
    #[strum(to_string = "UT_MOD_HK69")]
    Hk69,
    #[strum(to_string = "UT_MOD_BLED")]
    Bled,
    #[strum(to_string = "UT_MOD_KICKED")]
    Kicked,
    #[strum(to_string = "UT_MOD_HEGRENADE")]
    HeGrenade,
    #[strum(to_string = "UT_MOD_SR8")]
    Sr8,
    #[strum(to_string = "UT_MOD_AK103")]
    Ak103,
    #[strum(to_string = "UT_MOD_SPLODED")]
    Sploded,
    #[strum(to_string = "UT_MOD_SLAPPED")]
    Slapped,
    #[strum(to_string = "UT_MOD_SMITED")]
    Smited,
    #[strum(to_string = "UT_MOD_BOMBED")]
    Bombed,
    #[strum(to_string = "UT_MOD_NUKED")]
    Nuked,
    #[strum(to_string = "UT_MOD_NEGEV")]
    Negev,
    #[strum(to_string = "UT_MOD_HK69_HIT")]
    Hk69Hit,
    #[strum(to_string = "UT_MOD_M4")]
    M4,
    #[strum(to_string = "UT_MOD_GLOCK")]
    Glock,
    #[strum(to_string = "UT_MOD_COLT1911")]
    Colt1911,
    #[strum(to_string = "UT_MOD_MAC11")]
    Mac11,
    #[strum(to_string = "UT_MOD_FLAG")]
    Flag,
    #[strum(to_string = "UT_MOD_GOOMBA")]
    Goomba,
}
