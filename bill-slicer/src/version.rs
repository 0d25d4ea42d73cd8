//! Publication-version codes and canonical-text selection.
//!
//! Bill text is published repeatedly as it moves through the legislature
//! (introduced, engrossed, enrolled, ...). Each rendering carries a stage
//! code at the end of its version identifier; the codes form a total
//! maturity order and the most mature rendering is the one worth scoring.

use serde::{Deserialize, Serialize};

use crate::errors::{SlicerError, SlicerResult};

/// Publication stage of one bill text rendering.
///
/// Declaration order *is* the maturity order: earlier variants are earlier
/// lifecycle stages. [`PublishVersion::maturity_rank`] exposes the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum PublishVersion {
    // Introduced
    IH,
    IS,
    // Amended
    AS,
    ASH,
    EAH,
    EAS,
    // In deliberation
    ATH,
    ATS,
    CPH,
    CPS,
    EH,
    EPH,
    ES,
    HDH,
    HDS,
    OPH,
    OPS,
    PAV,
    PCH,
    PCS,
    PP,
    PWAH,
    RAH,
    RAS,
    RCH,
    RCS,
    RDH,
    RDS,
    REAH,
    RES,
    RENR,
    RFH,
    RFS,
    RH,
    RHUC,
    RIH,
    RIS,
    RS,
    RTH,
    RTS,
    SAS,
    SC,
    // Headed to the executive
    ENR,
    // Finalized (enacted)
    PAP,
    // Finalized (thrown out)
    CDH,
    CDS,
    FAH,
    FPH,
    FPS,
    IPH,
    IPS,
    LTH,
    LTS,
}

impl PublishVersion {
    /// Every stage, in lifecycle order.
    pub const ALL: [PublishVersion; 53] = [
        Self::IH,
        Self::IS,
        Self::AS,
        Self::ASH,
        Self::EAH,
        Self::EAS,
        Self::ATH,
        Self::ATS,
        Self::CPH,
        Self::CPS,
        Self::EH,
        Self::EPH,
        Self::ES,
        Self::HDH,
        Self::HDS,
        Self::OPH,
        Self::OPS,
        Self::PAV,
        Self::PCH,
        Self::PCS,
        Self::PP,
        Self::PWAH,
        Self::RAH,
        Self::RAS,
        Self::RCH,
        Self::RCS,
        Self::RDH,
        Self::RDS,
        Self::REAH,
        Self::RES,
        Self::RENR,
        Self::RFH,
        Self::RFS,
        Self::RH,
        Self::RHUC,
        Self::RIH,
        Self::RIS,
        Self::RS,
        Self::RTH,
        Self::RTS,
        Self::SAS,
        Self::SC,
        Self::ENR,
        Self::PAP,
        Self::CDH,
        Self::CDS,
        Self::FAH,
        Self::FPH,
        Self::FPS,
        Self::IPH,
        Self::IPS,
        Self::LTH,
        Self::LTS,
    ];

    /// Lowercase textual form of the stage code.
    pub fn code(self) -> &'static str {
        match self {
            Self::IH => "ih",
            Self::IS => "is",
            Self::AS => "as",
            Self::ASH => "ash",
            Self::EAH => "eah",
            Self::EAS => "eas",
            Self::ATH => "ath",
            Self::ATS => "ats",
            Self::CPH => "cph",
            Self::CPS => "cps",
            Self::EH => "eh",
            Self::EPH => "eph",
            Self::ES => "es",
            Self::HDH => "hdh",
            Self::HDS => "hds",
            Self::OPH => "oph",
            Self::OPS => "ops",
            Self::PAV => "pav",
            Self::PCH => "pch",
            Self::PCS => "pcs",
            Self::PP => "pp",
            Self::PWAH => "pwah",
            Self::RAH => "rah",
            Self::RAS => "ras",
            Self::RCH => "rch",
            Self::RCS => "rcs",
            Self::RDH => "rdh",
            Self::RDS => "rds",
            Self::REAH => "reah",
            Self::RES => "res",
            Self::RENR => "renr",
            Self::RFH => "rfh",
            Self::RFS => "rfs",
            Self::RH => "rh",
            Self::RHUC => "rhuc",
            Self::RIH => "rih",
            Self::RIS => "ris",
            Self::RS => "rs",
            Self::RTH => "rth",
            Self::RTS => "rts",
            Self::SAS => "sas",
            Self::SC => "sc",
            Self::ENR => "enr",
            Self::PAP => "pap",
            Self::CDH => "cdh",
            Self::CDS => "cds",
            Self::FAH => "fah",
            Self::FPH => "fph",
            Self::FPS => "fps",
            Self::IPH => "iph",
            Self::IPS => "ips",
            Self::LTH => "lth",
            Self::LTS => "lts",
        }
    }

    /// Position in the lifecycle order; higher means more mature.
    pub fn maturity_rank(self) -> usize {
        Self::ALL
            .iter()
            .position(|v| *v == self)
            .expect("every variant is listed in ALL")
    }

    /// Parse a stage code from the end of a version identifier.
    ///
    /// A single trailing digit is stripped first (revisions within one
    /// stage share its code, e.g. `...eh2`), then the identifier tail is
    /// matched case-insensitively against each stage in declaration order.
    /// No match is a hard error: an unranked version cannot be compared.
    pub fn parse(version_id: &str) -> SlicerResult<Self> {
        let mut id = version_id.to_ascii_lowercase();
        if id.ends_with(|c: char| c.is_ascii_digit()) {
            id.pop();
        }

        Self::ALL
            .into_iter()
            .find(|v| id.ends_with(v.code()))
            .ok_or_else(|| SlicerError::UnknownPublishVersion(version_id.to_string()))
    }
}

/// One raw textual rendering of a document, tagged by version identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateText {
    /// Version identifier whose tail encodes the publication stage.
    pub version_id: String,
    /// The raw document text for this rendering.
    pub text: String,
}

/// Pick the most mature candidate rendering.
///
/// Fails fast on an identifier matching no stage code, and on an empty
/// candidate list — neither has a meaningful rank.
pub fn select_canonical(candidates: Vec<CandidateText>) -> SlicerResult<CandidateText> {
    let mut best: Option<(usize, CandidateText)> = None;
    for candidate in candidates {
        let rank = PublishVersion::parse(&candidate.version_id)?.maturity_rank();
        match &best {
            Some((best_rank, _)) if *best_rank >= rank => {}
            _ => best = Some((rank, candidate)),
        }
    }
    best.map(|(_, c)| c).ok_or(SlicerError::NoCandidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(version_id: &str) -> CandidateText {
        CandidateText {
            version_id: version_id.to_string(),
            text: format!("text of {version_id}"),
        }
    }

    #[test]
    fn enrolled_beats_introduced() {
        let picked = select_canonical(vec![
            candidate("BILLS-118hr3935ih"),
            candidate("BILLS-118hr3935enr"),
        ])
        .unwrap();
        assert_eq!(picked.version_id, "BILLS-118hr3935enr");
    }

    #[test]
    fn trailing_revision_digit_is_stripped() {
        assert_eq!(
            PublishVersion::parse("BILLS-118hr1eh2").unwrap(),
            PublishVersion::EH
        );
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(
            PublishVersion::parse("BILLS-118HR1ENR").unwrap(),
            PublishVersion::ENR
        );
    }

    #[test]
    fn unknown_code_fails_fast() {
        assert!(matches!(
            PublishVersion::parse("BILLS-118hr1zz"),
            Err(SlicerError::UnknownPublishVersion(_))
        ));
    }

    #[test]
    fn empty_candidate_list_is_an_error() {
        assert!(matches!(
            select_canonical(Vec::new()),
            Err(SlicerError::NoCandidates)
        ));
    }

    #[test]
    fn maturity_order_follows_declaration() {
        assert!(PublishVersion::ENR.maturity_rank() > PublishVersion::IH.maturity_rank());
        assert!(PublishVersion::PAP.maturity_rank() > PublishVersion::ENR.maturity_rank());
    }
}
