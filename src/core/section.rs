/// Page sections, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Portfolio,
    Skills,
    Experience,
    Education,
    Cv,
    Contact,
}

impl Section {
    pub const ORDER: [Section; 8] = [
        Section::Hero,
        Section::About,
        Section::Portfolio,
        Section::Skills,
        Section::Experience,
        Section::Education,
        Section::Cv,
        Section::Contact,
    ];

    /// Element id, also the `#fragment` links point at.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Cv => "cv",
            Section::Contact => "contact",
        }
    }

    /// The hero animates on load instead of on scroll.
    pub fn reveals_on_scroll(&self) -> bool {
        !matches!(self, Section::Hero)
    }
}
