//! Feature areas and their route paths.
//!
//! The core does not route; this table only names the areas so shells and
//! log lines agree on identifiers.

use serde::{Deserialize, Serialize};

/// One record-management area of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureArea {
    DocumentControl,
    Procedures,
    Training,
    Ncr,
    Capa,
    Mrb,
    Fai,
    InProcessInspection,
    FinalInspection,
    IncomingInspection,
    UserSettings,
}

impl FeatureArea {
    /// All areas in menu order.
    pub const ALL: [FeatureArea; 11] = [
        Self::DocumentControl,
        Self::Procedures,
        Self::Training,
        Self::Ncr,
        Self::Capa,
        Self::Mrb,
        Self::Fai,
        Self::InProcessInspection,
        Self::FinalInspection,
        Self::IncomingInspection,
        Self::UserSettings,
    ];

    /// Route path, e.g. `/capa`.
    pub fn route(self) -> &'static str {
        match self {
            Self::DocumentControl => "/document-control",
            Self::Procedures => "/procedures",
            Self::Training => "/training",
            Self::Ncr => "/ncr",
            Self::Capa => "/capa",
            Self::Mrb => "/mrb",
            Self::Fai => "/fai",
            Self::InProcessInspection => "/ipi",
            Self::FinalInspection => "/final-inspection",
            Self::IncomingInspection => "/incoming",
            Self::UserSettings => "/settings",
        }
    }

    /// Menu title.
    pub fn title(self) -> &'static str {
        match self {
            Self::DocumentControl => "Document Control",
            Self::Procedures => "Quality Procedures / SOP",
            Self::Training => "Training & Certifications",
            Self::Ncr => "Non-Conformance Reports (NCR)",
            Self::Capa => "Corrective Actions (CAPA)",
            Self::Mrb => "Deviation / MRB Review",
            Self::Fai => "AS9102 First Article Inspection (FAI)",
            Self::InProcessInspection => "In-Process Inspection",
            Self::FinalInspection => "Final Inspection",
            Self::IncomingInspection => "Incoming Material Inspection",
            Self::UserSettings => "User & Permission Settings",
        }
    }

    /// Short identifier used in log events.
    pub fn slug(self) -> &'static str {
        match self {
            Self::DocumentControl => "document",
            Self::Procedures => "procedure",
            Self::Training => "training",
            Self::Ncr => "ncr",
            Self::Capa => "capa",
            Self::Mrb => "mrb",
            Self::Fai => "fai",
            Self::InProcessInspection => "ipi",
            Self::FinalInspection => "final_inspection",
            Self::IncomingInspection => "incoming",
            Self::UserSettings => "user",
        }
    }

    /// Resolves a route path; a leading slash and trailing slashes are optional.
    pub fn from_route(path: &str) -> Option<Self> {
        let normalized = path.trim().trim_end_matches('/');
        let normalized = normalized.strip_prefix('/').unwrap_or(normalized);
        Self::ALL
            .into_iter()
            .find(|area| &area.route()[1..] == normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::FeatureArea;

    #[test]
    fn from_route_accepts_loose_paths() {
        assert_eq!(FeatureArea::from_route("/capa"), Some(FeatureArea::Capa));
        assert_eq!(FeatureArea::from_route("ipi/"), Some(FeatureArea::InProcessInspection));
        assert_eq!(FeatureArea::from_route("/dashboard"), None);
        assert_eq!(FeatureArea::from_route(""), None);
    }

    #[test]
    fn routes_are_unique() {
        for (index, area) in FeatureArea::ALL.iter().enumerate() {
            for other in &FeatureArea::ALL[index + 1..] {
                assert_ne!(area.route(), other.route());
            }
        }
    }
}
