//! UI state - presentation state separate from domain data

/// Page section shown in the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub fn all() -> [Section; 4] {
        [
            Section::Home,
            Section::About,
            Section::Projects,
            Section::Contact,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Section::Home => 0,
            Section::About => 1,
            Section::Projects => 2,
            Section::Contact => 3,
        }
    }

    /// Section for a 1-based number key
    pub fn from_number(n: u32) -> Option<Section> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        Section::all().get(idx).copied()
    }

    pub fn next(&self) -> Section {
        let all = Section::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(&self) -> Section {
        let all = Section::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// Main application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Splash,
    Running,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_cycles() {
        assert_eq!(Section::Home.next(), Section::About);
        assert_eq!(Section::Contact.next(), Section::Home);
        assert_eq!(Section::Home.previous(), Section::Contact);
        assert_eq!(Section::Projects.previous(), Section::About);
    }

    #[test]
    fn test_section_from_number() {
        assert_eq!(Section::from_number(1), Some(Section::Home));
        assert_eq!(Section::from_number(4), Some(Section::Contact));
        assert_eq!(Section::from_number(0), None);
        assert_eq!(Section::from_number(5), None);
    }
}
