use crate::types::PhaseKind;

pub const LUCK_FALLBACK: &str = "The moon whispers secrets of good fortune.";

impl PhaseKind {
    pub fn luck(self) -> &'static str {
        match self {
            PhaseKind::NewMoon => "A fresh start is coming\u{2014}set your intentions today.",
            PhaseKind::WaxingCrescent => "Energy is building\u{2014}small steps bring luck.",
            PhaseKind::FirstQuarter => {
                "Decision time arrives\u{2014}trust your instincts for success."
            }
            PhaseKind::WaxingGibbous => {
                "Progress accelerates\u{2014}your efforts are about to pay off."
            }
            PhaseKind::FullMoon => "Your efforts shine\u{2014}luck favors bold moves.",
            PhaseKind::WaningGibbous => {
                "Share your wisdom\u{2014}helping others brings good fortune."
            }
            PhaseKind::ThirdQuarter => {
                "Release and reflect\u{2014}clearing space invites new opportunities."
            }
            PhaseKind::WaningCrescent => {
                "Let go of what no longer serves you\u{2014}peace brings luck."
            }
        }
    }
}

/// Luck message for a phase display name. Unknown names get [`LUCK_FALLBACK`].
pub fn annotate(phase_name: &str) -> &'static str {
    match PhaseKind::from_name(phase_name) {
        Some(kind) => kind.luck(),
        None => {
            tracing::warn!(phase_name, "no luck message for phase, using fallback");
            LUCK_FALLBACK
        }
    }
}
