use crate::ivs::{IndividualValues, IV_RANGE, MAX_IV_TOTAL};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use strum::{Display, EnumIter, EnumString};

/// The team leader's verdict on a Pokemon's overall IVs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Appraisal {
    #[default]
    Unknown,
    Best,
    Strong,
    Decent,
    NeedsImprovement,
}

impl Appraisal {
    /// Range of `atk + def + sta` the verdict allows.
    pub fn total_iv_range(self) -> RangeInclusive<u16> {
        match self {
            Appraisal::Unknown => 0..=MAX_IV_TOTAL,
            Appraisal::Best => 37..=MAX_IV_TOTAL,
            Appraisal::Strong => 30..=36,
            Appraisal::Decent => 23..=29,
            Appraisal::NeedsImprovement => 0..=22,
        }
    }
}

/// The team leader's verdict on the best stat.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum BestStat {
    #[default]
    Best,
    Strong,
    Good,
    #[serde(rename = "OK")]
    #[strum(serialize = "OK")]
    Ok,
}

impl BestStat {
    /// Values allowed for a stat that is (or is not) called out as the best.
    pub fn stat_range(self, is_best: bool) -> RangeInclusive<u8> {
        match (self, is_best) {
            (BestStat::Best, true) => 15..=15,
            (BestStat::Best, false) => 0..=14,
            (BestStat::Strong, true) => 13..=14,
            (BestStat::Strong, false) => 0..=13,
            (BestStat::Good, true) => 8..=12,
            (BestStat::Good, false) => 0..=11,
            (BestStat::Ok, true) => 0..=7,
            (BestStat::Ok, false) => 0..=6,
        }
    }
}

/// Which stats the appraisal names as (tied) best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BestStats {
    All,
    AtkDef,
    AtkSta,
    DefSta,
    Atk,
    Def,
    Sta,
    None,
}

impl BestStats {
    pub fn from_flags(atk: bool, def: bool, sta: bool) -> Self {
        match (atk, def, sta) {
            (true, true, true) => BestStats::All,
            (true, true, false) => BestStats::AtkDef,
            (true, false, true) => BestStats::AtkSta,
            (false, true, true) => BestStats::DefSta,
            (true, false, false) => BestStats::Atk,
            (false, true, false) => BestStats::Def,
            (false, false, true) => BestStats::Sta,
            (false, false, false) => BestStats::None,
        }
    }

    /// Whether the relative order of the three IVs agrees with the flags.
    pub fn admits(self, ivs: &IndividualValues) -> bool {
        let IndividualValues { atk, def, sta, .. } = *ivs;
        match self {
            BestStats::All => atk == def && atk == sta,
            BestStats::AtkDef => atk == def && atk > sta,
            BestStats::AtkSta => atk == sta && atk > def,
            BestStats::DefSta => def == sta && def > atk,
            BestStats::Atk => atk > def && atk > sta,
            BestStats::Def => def > atk && def > sta,
            BestStats::Sta => sta > atk && sta > def,
            BestStats::None => true,
        }
    }
}

/// Everything the appraisal tells us, as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsAppraisal {
    pub appraisal: Appraisal,
    #[serde(rename = "best")]
    pub best_stat: BestStat,
    #[serde(rename = "atk")]
    pub atk_is_best: bool,
    #[serde(rename = "def")]
    pub def_is_best: bool,
    #[serde(rename = "sta")]
    pub sta_is_best: bool,
}

impl StatsAppraisal {
    /// No appraisal; every IV combination is possible.
    pub const NONE: StatsAppraisal = StatsAppraisal {
        appraisal: Appraisal::Unknown,
        best_stat: BestStat::Best,
        atk_is_best: false,
        def_is_best: false,
        sta_is_best: false,
    };

    pub fn new(appraisal: Appraisal, best_stat: BestStat, atk: bool, def: bool, sta: bool) -> Self {
        StatsAppraisal {
            appraisal,
            best_stat,
            atk_is_best: atk,
            def_is_best: def,
            sta_is_best: sta,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.appraisal == Appraisal::Unknown
    }

    pub fn best_stats(&self) -> BestStats {
        BestStats::from_flags(self.atk_is_best, self.def_is_best, self.sta_is_best)
    }

    fn range_for(&self, is_best: bool) -> RangeInclusive<u8> {
        if self.is_unknown() {
            return IV_RANGE;
        }
        self.best_stat.stat_range(is_best)
    }

    pub fn atk_range(&self) -> RangeInclusive<u8> {
        self.range_for(self.atk_is_best)
    }

    pub fn def_range(&self) -> RangeInclusive<u8> {
        self.range_for(self.def_is_best)
    }

    pub fn sta_range(&self) -> RangeInclusive<u8> {
        self.range_for(self.sta_is_best)
    }

    /// Whether a full IV assignment is consistent with this appraisal.
    pub fn is_valid(&self, ivs: &IndividualValues) -> bool {
        if self.is_unknown() {
            return true;
        }
        self.atk_range().contains(&ivs.atk)
            && self.def_range().contains(&ivs.def)
            && self.sta_range().contains(&ivs.sta)
            && self.appraisal.total_iv_range().contains(&ivs.total())
            && self.best_stats().admits(ivs)
    }
}

impl fmt::Display for StatsAppraisal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return write!(f, "Unknown");
        }
        let flagged: Vec<&str> = [
            (self.atk_is_best, "ATK"),
            (self.def_is_best, "DEF"),
            (self.sta_is_best, "STA"),
        ]
        .iter()
        .filter(|(is_best, _)| *is_best)
        .map(|(_, name)| *name)
        .collect();
        write!(f, "{}, best stat {}", self.appraisal, self.best_stat)?;
        if !flagged.is_empty() {
            write!(f, " ({})", flagged.join("/"))?;
        }
        Ok(())
    }
}
