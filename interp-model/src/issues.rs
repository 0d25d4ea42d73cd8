//! The fixed set of policy-impact categories bills are scored against.

use serde::{Deserialize, Serialize};

/// One impact category in a bill's score table.
///
/// The set is closed and known at compile time; prompts enumerate it and
/// the reply parsers look categories up by display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrackedIssue {
    AgricultureAndFood,
    Education,
    Transportation,
    EconomicsAndCommerce,
    ForeignRelations,
    Government,
    Healthcare,
    Housing,
    Energy,
    Technology,
    Immigration,
    NationalDefense,
    CrimeAndLawEnforcement,
    WildlifeAndForestManagement,
    PublicLandsAndNaturalResources,
    EnvironmentalManagementAndClimateChange,
    OverallBenefitToSociety,
}

impl TrackedIssue {
    pub const ALL: [TrackedIssue; 17] = [
        Self::AgricultureAndFood,
        Self::Education,
        Self::Transportation,
        Self::EconomicsAndCommerce,
        Self::ForeignRelations,
        Self::Government,
        Self::Healthcare,
        Self::Housing,
        Self::Energy,
        Self::Technology,
        Self::Immigration,
        Self::NationalDefense,
        Self::CrimeAndLawEnforcement,
        Self::WildlifeAndForestManagement,
        Self::PublicLandsAndNaturalResources,
        Self::EnvironmentalManagementAndClimateChange,
        Self::OverallBenefitToSociety,
    ];

    /// Human-readable name, as it appears in prompts and replies.
    pub fn name(self) -> &'static str {
        match self {
            Self::AgricultureAndFood => "Agriculture and Food",
            Self::Education => "Education",
            Self::Transportation => "Transportation",
            Self::EconomicsAndCommerce => "Economics and Commerce",
            Self::ForeignRelations => "Foreign Relations",
            Self::Government => "Government Efficiency and Management",
            Self::Healthcare => "Healthcare",
            Self::Housing => "Housing",
            Self::Energy => "Energy",
            Self::Technology => "Technology",
            Self::Immigration => "Immigration And Border Security",
            Self::NationalDefense => "National Defense",
            Self::CrimeAndLawEnforcement => "Crime and Law Enforcement",
            Self::WildlifeAndForestManagement => "Wildlife and Forest Management",
            Self::PublicLandsAndNaturalResources => "Public Lands and Natural Resources",
            Self::EnvironmentalManagementAndClimateChange => {
                "Environmental Management and Climate Change"
            }
            Self::OverallBenefitToSociety => "Overall Benefit to Society",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|issue| issue.name().eq_ignore_ascii_case(name.trim()))
    }

    /// The distinguished whole-document category.
    pub fn is_overall(self) -> bool {
        self == Self::OverallBenefitToSociety
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(
            TrackedIssue::from_name("overall benefit to society"),
            Some(TrackedIssue::OverallBenefitToSociety)
        );
        assert_eq!(
            TrackedIssue::from_name("  Energy "),
            Some(TrackedIssue::Energy)
        );
        assert_eq!(TrackedIssue::from_name("Quantum Affairs"), None);
    }

    #[test]
    fn all_names_are_distinct() {
        let mut names: Vec<_> = TrackedIssue::ALL.iter().map(|i| i.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), TrackedIssue::ALL.len());
    }
}
