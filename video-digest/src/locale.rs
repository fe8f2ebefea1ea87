/// Languages the report can be produced in. The code doubles as the
/// translation target passed to the enrichment service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    French,
    English,
}

/// Fixed strings of the report for one language.
#[derive(Debug)]
pub struct Labels {
    pub report_title: &'static str,
    pub section_heading: &'static str,
    pub channel: &'static str,
    pub date: &'static str,
    pub watch_video: &'static str,
    pub technical_guide: &'static str,
    pub analysis: &'static str,
    pub generated_at: &'static str,
    pub nothing_relevant: &'static str,
}

static FRENCH_LABELS: Labels = Labels {
    report_title: "Rapport IA du",
    section_heading: "Vidéos Récentes",
    channel: "Chaîne",
    date: "Date",
    watch_video: "Voir la vidéo",
    technical_guide: "Guide technique",
    analysis: "Résumé et usages",
    generated_at: "Rapport généré à",
    nothing_relevant: "Aucune vidéo pertinente ce mois-ci.",
};

static ENGLISH_LABELS: Labels = Labels {
    report_title: "AI Report of",
    section_heading: "Recent Videos",
    channel: "Channel",
    date: "Date",
    watch_video: "Watch the video",
    technical_guide: "Technical guide",
    analysis: "Summary and uses",
    generated_at: "Report generated at",
    nothing_relevant: "No relevant videos this period.",
};

impl Locale {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "fr" => Some(Locale::French),
            "en" => Some(Locale::English),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::French => "fr",
            Locale::English => "en",
        }
    }

    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::French => &FRENCH_LABELS,
            Locale::English => &ENGLISH_LABELS,
        }
    }

    /// Appended to a successful translation.
    pub fn usage_note(&self) -> &'static str {
        match self {
            Locale::French => {
                "Usages potentiels : Cet agent IA peut automatiser des tâches, intégrer l'IA dans des applications, \
                 analyser des données et améliorer la prise de décision."
            }
            Locale::English => {
                "Potential uses: This AI agent can automate tasks, integrate AI into applications, \
                 analyze data and improve decision-making."
            }
        }
    }

    /// Prompt sent to the assistant behind the guide link. The title is inserted verbatim.
    pub fn guide_prompt(&self, title: &str) -> String {
        match self {
            Locale::French => format!(
                "Donne-moi un guide détaillé pour installer l'outil '{}' en mettant l'accent sur la gratuité, \
                 la facilité d'installation, les prérequis et les étapes clés.",
                title
            ),
            Locale::English => format!(
                "Give me a detailed guide to install the tool '{}' with a focus on free options, \
                 ease of installation, prerequisites and key steps.",
                title
            ),
        }
    }
}
