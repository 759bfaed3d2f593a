use super::super::domain::{PersonalityType, ScoreVector, TraitName};

/// First trait in declaration order holding the maximum wins, so ties and
/// the all-zero vector both resolve towards `technical`.
pub(crate) fn classify(scores: &ScoreVector) -> PersonalityType {
    let max = TraitName::ALL
        .iter()
        .map(|name| scores.get(*name))
        .max()
        .unwrap_or(0);

    TraitName::ALL
        .iter()
        .find(|name| scores.get(**name) == max)
        .map(|name| name.personality())
        .unwrap_or(PersonalityType::Analyst)
}
