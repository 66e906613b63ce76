use crate::core::{SheetSource, Technician};

/// Cards shown per directory page.
pub const PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationFilter {
    All,
    HaNoi,
    HoChiMinh,
}

impl LocationFilter {
    pub fn from_param(value: &str) -> Self {
        match value {
            "ha noi" => Self::HaNoi,
            "ho chi minh" => Self::HoChiMinh,
            _ => Self::All,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::HaNoi => "ha noi",
            Self::HoChiMinh => "ho chi minh",
        }
    }

    pub fn matches(&self, technician: &Technician) -> bool {
        match self {
            Self::All => true,
            Self::HaNoi => technician.address.to_lowercase().contains("hà nội"),
            Self::HoChiMinh => technician.address.to_lowercase().contains("hồ chí minh"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecializationFilter {
    All,
    Film,
    Digital,
}

impl SpecializationFilter {
    pub fn from_param(value: &str) -> Self {
        match value {
            "film" => Self::Film,
            "digital" => Self::Digital,
            _ => Self::All,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Film => "film",
            Self::Digital => "digital",
        }
    }

    pub fn matches(&self, technician: &Technician) -> bool {
        match self {
            Self::All => true,
            Self::Film => technician.specialization.to_lowercase().contains("film"),
            Self::Digital => technician.specialization.to_lowercase().contains("digital"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Loading,
    Error,
    Loaded,
}

/// Per-render state of the directory page. Starts in `Loading`, moves to
/// `Error` or `Loaded` after the one sheet fetch, then filters and the
/// page index re-derive the visible slice on every render.
#[derive(Debug)]
pub struct DirectoryView {
    phase: ViewPhase,
    technicians: Vec<Technician>,
    pub location: LocationFilter,
    pub specialization: SpecializationFilter,
    /// 1-based. Deliberately not reset when a filter changes, so a
    /// shorter result set can leave the view on an empty page.
    pub current_page: usize,
}

impl DirectoryView {
    pub fn new() -> Self {
        Self {
            phase: ViewPhase::Loading,
            technicians: Vec::new(),
            location: LocationFilter::All,
            specialization: SpecializationFilter::All,
            current_page: 1,
        }
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    /// The one suspension point of the view: fetch the records and settle
    /// into `Loaded` or `Error`. No retry on failure.
    pub async fn load<S: SheetSource + ?Sized>(&mut self, source: &S) {
        match source.fetch_records().await {
            Ok(records) => self.resolve(records),
            Err(err) => {
                tracing::error!("Error fetching data: {}", err);
                self.fail();
            }
        }
    }

    pub fn resolve(&mut self, technicians: Vec<Technician>) {
        self.technicians = technicians;
        self.phase = ViewPhase::Loaded;
    }

    pub fn fail(&mut self) {
        self.phase = ViewPhase::Error;
    }

    pub fn set_location(&mut self, filter: LocationFilter) {
        self.location = filter;
    }

    pub fn set_specialization(&mut self, filter: SpecializationFilter) {
        self.specialization = filter;
    }

    /// Records passing both facets. `All` always passes, so the two
    /// tests are independent and their order does not matter.
    pub fn filtered(&self) -> Vec<&Technician> {
        self.technicians
            .iter()
            .filter(|t| self.location.matches(t) && self.specialization.matches(t))
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE)
    }

    /// The visible slice for the current page. A page index past the end
    /// of the filtered set yields an empty slice rather than clamping.
    pub fn current_items(&self) -> Vec<&Technician> {
        let start = self.current_page.saturating_sub(1) * PAGE_SIZE;
        self.filtered().into_iter().skip(start).take(PAGE_SIZE).collect()
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn prev_page(&mut self) {
        if self.has_prev() {
            self.current_page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.has_next() {
            self.current_page += 1;
        }
    }
}

impl Default for DirectoryView {
    fn default() -> Self {
        Self::new()
    }
}
