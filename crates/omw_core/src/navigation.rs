//! Static navigation registry: section labels mapped to ordered pages.
//!
//! The registry is rebuilt on every boot pass. Only the first section label
//! varies (it carries the application name from the loaded settings);
//! everything else is fixed and declared here.

use thiserror::Error;

/// Identifies a page implementation in the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Quickstart,
    Documentation,
    ToppFileUpload,
    ToppConfigure,
    ToppRun,
    ToppResults,
    MsFileUpload,
    MsDataViewer,
    MsRunWorkflow,
    MsDownload,
    SimpleWorkflow,
    RunSubprocess,
}

/// A single page entry in the navigation map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEntry {
    pub id: PageId,
    pub title: &'static str,
    pub icon: &'static str,
}

impl PageEntry {
    const fn new(id: PageId, title: &'static str, icon: &'static str) -> Self {
        Self { id, title, icon }
    }
}

/// A titled group of pages in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub label: String,
    pub pages: Vec<PageEntry>,
}

/// Fixed label of the TOPP workflow section.
pub const TOPP_SECTION_LABEL: &str = "TOPP Workflow Framework";

/// Fixed label of the pyOpenMS workflow section.
pub const PYOPENMS_SECTION_LABEL: &str = "pyOpenMS Workflow";

/// Fixed label of the miscellaneous section.
pub const OTHERS_SECTION_LABEL: &str = "Others Topics";

/// Build the navigation map.
///
/// `app_name` labels the first section; the rest is static. The result is
/// always the same four sections in the same order.
pub fn build_navigation(app_name: &str) -> Vec<NavSection> {
    vec![
        NavSection {
            label: app_name.to_string(),
            pages: vec![
                PageEntry::new(PageId::Quickstart, "Quickstart", "👋"),
                PageEntry::new(PageId::Documentation, "Documentation", "📖"),
            ],
        },
        NavSection {
            label: TOPP_SECTION_LABEL.to_string(),
            pages: vec![
                PageEntry::new(PageId::ToppFileUpload, "File Upload", "📁"),
                PageEntry::new(PageId::ToppConfigure, "Configure", "⚙️"),
                PageEntry::new(PageId::ToppRun, "Run", "🚀"),
                PageEntry::new(PageId::ToppResults, "Results", "📊"),
            ],
        },
        NavSection {
            label: PYOPENMS_SECTION_LABEL.to_string(),
            pages: vec![
                PageEntry::new(PageId::MsFileUpload, "File Upload", "📂"),
                PageEntry::new(PageId::MsDataViewer, "View MS data", "👀"),
                PageEntry::new(PageId::MsRunWorkflow, "Run Workflow", "⚙️"),
                PageEntry::new(PageId::MsDownload, "Download Results", "⬇️"),
            ],
        },
        NavSection {
            label: OTHERS_SECTION_LABEL.to_string(),
            pages: vec![
                PageEntry::new(PageId::SimpleWorkflow, "Simple Workflow", "⚙️"),
                PageEntry::new(PageId::RunSubprocess, "Run Subprocess", "🖥️"),
            ],
        },
    ]
}

/// Validation failures for a navigation map.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Navigation map is empty")]
    Empty,

    #[error("Navigation section '{0}' has no pages")]
    EmptySection(String),

    #[error("Duplicate page title '{title}' in section '{section}'")]
    DuplicateTitle { section: String, title: String },

    #[error("Page '{0}' is registered more than once")]
    DuplicatePage(String),
}

/// Validate a navigation map before dispatch.
///
/// Titles must be unique within a section (the same title may appear in
/// different sections); page ids must be unique globally.
pub fn validate(sections: &[NavSection]) -> Result<(), NavigationError> {
    if sections.is_empty() {
        return Err(NavigationError::Empty);
    }

    let mut seen_ids = Vec::new();
    for section in sections {
        if section.pages.is_empty() {
            return Err(NavigationError::EmptySection(section.label.clone()));
        }

        let mut seen_titles = Vec::new();
        for page in &section.pages {
            if seen_titles.contains(&page.title) {
                return Err(NavigationError::DuplicateTitle {
                    section: section.label.clone(),
                    title: page.title.to_string(),
                });
            }
            seen_titles.push(page.title);

            if seen_ids.contains(&page.id) {
                return Err(NavigationError::DuplicatePage(page.title.to_string()));
            }
            seen_ids.push(page.id);
        }
    }

    Ok(())
}

/// The page selected when no navigation interaction happened yet.
pub fn default_page(sections: &[NavSection]) -> Option<PageId> {
    sections
        .first()
        .and_then(|section| section.pages.first())
        .map(|page| page.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_sections_in_declared_order() {
        let nav = build_navigation("MyApp");
        let labels: Vec<&str> = nav.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "MyApp",
                TOPP_SECTION_LABEL,
                PYOPENMS_SECTION_LABEL,
                OTHERS_SECTION_LABEL,
            ]
        );
    }

    #[test]
    fn first_section_label_follows_app_name() {
        let nav = build_navigation("Some Other Name");
        assert_eq!(nav[0].label, "Some Other Name");
        // Static content is unaffected by the name
        assert_eq!(nav[1].pages.len(), 4);
        assert_eq!(nav[2].pages.len(), 4);
        assert_eq!(nav[3].pages.len(), 2);
    }

    #[test]
    fn page_lists_are_fixed_and_ordered() {
        let nav = build_navigation("MyApp");
        let topp: Vec<&str> = nav[1].pages.iter().map(|p| p.title).collect();
        assert_eq!(topp, vec!["File Upload", "Configure", "Run", "Results"]);

        let pyopenms: Vec<&str> = nav[2].pages.iter().map(|p| p.title).collect();
        assert_eq!(
            pyopenms,
            vec!["File Upload", "View MS data", "Run Workflow", "Download Results"]
        );

        let others: Vec<&str> = nav[3].pages.iter().map(|p| p.title).collect();
        assert_eq!(others, vec!["Simple Workflow", "Run Subprocess"]);
    }

    #[test]
    fn built_navigation_validates() {
        let nav = build_navigation("MyApp");
        assert_eq!(validate(&nav), Ok(()));
    }

    #[test]
    fn default_page_is_quickstart() {
        let nav = build_navigation("MyApp");
        assert_eq!(default_page(&nav), Some(PageId::Quickstart));
    }

    #[test]
    fn duplicate_title_within_section_is_rejected() {
        let mut nav = build_navigation("MyApp");
        nav[3].pages.push(PageEntry::new(
            PageId::MsDownload,
            "Simple Workflow",
            "⚙️",
        ));
        assert!(matches!(
            validate(&nav),
            Err(NavigationError::DuplicateTitle { .. })
        ));
    }

    #[test]
    fn duplicate_page_id_is_rejected() {
        let mut nav = build_navigation("MyApp");
        nav[3].pages.push(PageEntry::new(PageId::Quickstart, "Again", "🔁"));
        assert_eq!(
            validate(&nav),
            Err(NavigationError::DuplicatePage("Again".to_string()))
        );
    }

    #[test]
    fn empty_map_is_rejected() {
        assert_eq!(validate(&[]), Err(NavigationError::Empty));
        let sections = vec![NavSection {
            label: "Empty".to_string(),
            pages: Vec::new(),
        }];
        assert_eq!(
            validate(&sections),
            Err(NavigationError::EmptySection("Empty".to_string()))
        );
    }
}
