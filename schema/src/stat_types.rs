use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The six battle stats, named the way the data provider names them
/// (`hp`, `attack`, `defense`, `special-attack`, `special-defense`, `speed`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum StatType {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl StatType {
    /// Every stat, in the order stat blocks are stored and displayed.
    pub const ALL: [StatType; 6] = [
        StatType::Hp,
        StatType::Attack,
        StatType::Defense,
        StatType::SpecialAttack,
        StatType::SpecialDefense,
        StatType::Speed,
    ];

    /// Position of this stat inside a `[_; 6]` stat block.
    pub fn index(self) -> usize {
        match self {
            StatType::Hp => 0,
            StatType::Attack => 1,
            StatType::Defense => 2,
            StatType::SpecialAttack => 3,
            StatType::SpecialDefense => 4,
            StatType::Speed => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_stat_names_match_provider_names() {
        assert_eq!(StatType::from_str("hp").unwrap(), StatType::Hp);
        assert_eq!(
            StatType::from_str("special-attack").unwrap(),
            StatType::SpecialAttack
        );
        assert_eq!(StatType::SpecialDefense.to_string(), "special-defense");
        assert!(StatType::from_str("evasion").is_err());
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, stat) in StatType::ALL.iter().enumerate() {
            assert_eq!(stat.index(), i);
        }
    }
}
