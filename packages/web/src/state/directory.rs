//! Doctor directory filtering

use crate::catalog::Catalog;
use crate::routes::{Route, RouteSink};
use crate::types::{Doctor, Specialty};

/// Filter applied to the doctor grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SpecialtyFilter {
    #[default]
    All,
    Only(Specialty),
}

impl SpecialtyFilter {
    pub fn label(&self) -> &'static str {
        match self {
            SpecialtyFilter::All => "All",
            SpecialtyFilter::Only(specialty) => specialty.label(),
        }
    }

    /// "All" followed by every specialty, in button order
    pub fn variants() -> impl Iterator<Item = SpecialtyFilter> {
        std::iter::once(SpecialtyFilter::All)
            .chain(Specialty::ALL.into_iter().map(SpecialtyFilter::Only))
    }

    pub fn matches(&self, doctor: &Doctor) -> bool {
        match self {
            SpecialtyFilter::All => true,
            SpecialtyFilter::Only(specialty) => doctor.specialty == *specialty,
        }
    }
}

/// Doctors passing the filter, in roster order
pub fn filter_roster(
    doctors: &[Doctor],
    filter: SpecialtyFilter,
) -> impl Iterator<Item = &Doctor> + '_ {
    doctors.iter().filter(move |doctor| filter.matches(doctor))
}

/// Roster plus the selected specialty; the filtered view is derived on demand
#[derive(Clone, Debug, PartialEq)]
pub struct DirectoryView {
    catalog: Catalog,
    selected: SpecialtyFilter,
}

impl DirectoryView {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selected: SpecialtyFilter::All,
        }
    }

    pub fn selected(&self) -> SpecialtyFilter {
        self.selected
    }

    pub fn select_specialty(&mut self, filter: SpecialtyFilter) {
        self.selected = filter;
    }

    pub fn filtered_roster(&self) -> impl Iterator<Item = &Doctor> + '_ {
        filter_roster(self.catalog.doctors(), self.selected)
    }

    /// Number of doctors a filter would show
    pub fn count(&self, filter: SpecialtyFilter) -> usize {
        filter_roster(self.catalog.doctors(), filter).count()
    }

    /// Open the detail page. Unknown ids are reported by the detail page.
    pub fn select_provider(&self, id: u32, router: &impl RouteSink) {
        router.go_to(Route::DoctorDetail { id });
    }
}

/// Home page "Top Doctors" grid: a directory view capped at `limit` entries
/// until the visitor asks for more
#[derive(Clone, Debug, PartialEq)]
pub struct FeaturedDoctors {
    directory: DirectoryView,
    limit: usize,
    show_all: bool,
}

impl FeaturedDoctors {
    pub fn new(catalog: Catalog, limit: usize) -> Self {
        Self {
            directory: DirectoryView::new(catalog),
            limit,
            show_all: false,
        }
    }

    pub fn directory(&self) -> &DirectoryView {
        &self.directory
    }

    pub fn select_specialty(&mut self, filter: SpecialtyFilter) {
        self.directory.select_specialty(filter);
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.show_all {
            "Show Less"
        } else {
            "Load More"
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Doctor> + '_ {
        let take = if self.show_all { usize::MAX } else { self.limit };
        self.directory.filtered_roster().take(take)
    }
}
