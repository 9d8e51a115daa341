use dioxus::prelude::*;

use crate::config::PickerConfig;
use crate::services::listing::{self, Listing};
use crate::utils::DataState;

/// What the picker is currently showing
#[derive(Clone, Debug, PartialEq)]
pub enum PickerView {
    /// Contents of one directory, as a normalized `/a/b/` path
    Directory(String),
    /// Bucket-wide search results
    Search(String),
}

impl Default for PickerView {
    fn default() -> Self {
        PickerView::Directory("/".to_string())
    }
}

/// Global picker state
pub static CONFIG: GlobalSignal<PickerConfig> = Signal::global(PickerConfig::default);
pub static VIEW: GlobalSignal<PickerView> = Signal::global(PickerView::default);
pub static LISTING: GlobalSignal<DataState<Listing>> = Signal::global(DataState::default);
pub static SEARCH_QUERY: GlobalSignal<String> = Signal::global(String::new);

/// Last directory that was opened, used to leave search mode
pub static LAST_DIRECTORY: GlobalSignal<String> = Signal::global(|| "/".to_string());

/// Upload in progress, or the last upload error
pub static UPLOAD_STATE: GlobalSignal<DataState<u32>> = Signal::global(DataState::default);

/// Whether a response requested for `requested` may replace the listing
///
/// A newer navigation may have started while the request was in flight.
pub fn should_store(requested: &PickerView, current: &PickerView) -> bool {
    requested == current
}

/// View a search submission leads to
///
/// The server answers an empty query with an empty body, so an empty query goes
/// back to the last directory. Anything else, whitespace included, is searched as-is.
pub fn search_target(query: &str, last_directory: &str) -> PickerView {
    if query.is_empty() {
        PickerView::Directory(listing::directory_path(last_directory))
    } else {
        PickerView::Search(query.to_string())
    }
}

/// Load config from the page location and return the directory to open first
pub fn init_picker() -> String {
    let config = PickerConfig::from_location();
    if config.endpoint.is_empty() {
        log::info!("Picker endpoint: same origin");
    } else {
        log::info!("Picker endpoint: {}", config.endpoint);
    }

    let start_path = config.start_path.clone();
    *CONFIG.write() = config;
    start_path
}

/// Open a directory and fetch its listing
///
/// Navigation stays inside the page so the `id` query key is kept for relayed clicks.
pub async fn load_directory(path: String) {
    let path = listing::directory_path(&path);
    let endpoint = CONFIG.read().endpoint.clone();

    *VIEW.write() = PickerView::Directory(path.clone());
    *LAST_DIRECTORY.write() = path.clone();
    *LISTING.write() = DataState::Loading;

    let result = listing::fetch_listing(&endpoint, &path).await;
    if let Err(e) = &result {
        log::error!("Failed to load {}: {}", path, e);
    }

    if should_store(&PickerView::Directory(path), &VIEW.read()) {
        *LISTING.write() = result.into();
    }
}

/// Search the bucket, or go back to the last directory for an empty query
pub async fn run_search(query: String) {
    let last_directory = LAST_DIRECTORY.read().clone();
    let query = match search_target(&query, &last_directory) {
        PickerView::Directory(path) => {
            load_directory(path).await;
            return;
        }
        PickerView::Search(query) => query,
    };

    let endpoint = CONFIG.read().endpoint.clone();

    *VIEW.write() = PickerView::Search(query.clone());
    *LISTING.write() = DataState::Loading;

    let result = listing::fetch_search(&endpoint, &query).await;
    if let Err(e) = &result {
        log::error!("Search for '{}' failed: {}", query, e);
    }

    if should_store(&PickerView::Search(query), &VIEW.read()) {
        *LISTING.write() = result.into();
    }
}

/// Upload files into the last opened directory, then reload it
pub async fn upload_files(files: web_sys::FileList) {
    let endpoint = CONFIG.read().endpoint.clone();
    let path = LAST_DIRECTORY.read().clone();

    *UPLOAD_STATE.write() = DataState::Loading;

    match listing::upload_files(&endpoint, &path, &files).await {
        Ok(count) => {
            log::info!("Uploaded {} file(s) to {}", count, path);
            *UPLOAD_STATE.write() = DataState::Loaded(count);
            load_directory(path).await;
        }
        Err(e) => {
            log::error!("Upload to {} failed: {}", path, e);
            *UPLOAD_STATE.write() = DataState::Error(e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_store_matching_view() {
        let dir = PickerView::Directory("/photos/".to_string());
        assert!(should_store(&dir, &dir.clone()));

        let search = PickerView::Search("report".to_string());
        assert!(should_store(&search, &search.clone()));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        // Navigated elsewhere while the listing was loading
        assert!(!should_store(
            &PickerView::Directory("/photos/".to_string()),
            &PickerView::Directory("/docs/".to_string()),
        ));
        // Started a search while the listing was loading
        assert!(!should_store(
            &PickerView::Directory("/photos/".to_string()),
            &PickerView::Search("photos".to_string()),
        ));
        // A newer search replaced an older one
        assert!(!should_store(
            &PickerView::Search("rep".to_string()),
            &PickerView::Search("report".to_string()),
        ));
    }

    #[test]
    fn test_empty_search_returns_to_last_directory() {
        assert_eq!(
            search_target("", "/photos/2024/"),
            PickerView::Directory("/photos/2024/".to_string())
        );
        assert_eq!(search_target("", "/"), PickerView::Directory("/".to_string()));
    }

    #[test]
    fn test_search_query_sent_untrimmed() {
        assert_eq!(
            search_target(" report", "/"),
            PickerView::Search(" report".to_string())
        );
        assert_eq!(search_target("  ", "/docs/"), PickerView::Search("  ".to_string()));
        assert_eq!(search_target("report", "/"), PickerView::Search("report".to_string()));
    }
}
