use serde::{Deserialize, Serialize};
use gloo_net::http::Request;

/// A file or directory entry as returned by the listing server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BucketObject {
    /// Name relative to the listed directory
    #[serde(rename = "Name")]
    pub name: String,
    /// Full object key (files) or prefix (directories)
    #[serde(rename = "Value")]
    pub value: String,
    /// Last update as `YYYY-MM-DD HH:MM`, empty for directories
    #[serde(rename = "Updated", default)]
    pub updated: String,
    /// Size in KB, rounded
    #[serde(rename = "Size", default)]
    pub size: f64,
}

impl BucketObject {
    /// Text shown for this entry
    ///
    /// Search results are listed against the `/search` route, which mangles `name`,
    /// so they show the full object key instead.
    pub fn label(&self, searching: bool) -> &str {
        if searching {
            &self.value
        } else {
            &self.name
        }
    }
}

/// One directory listing or search result page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Listing {
    #[serde(default)]
    pub files: Vec<BucketObject>,
    #[serde(default)]
    pub dirs: Vec<BucketObject>,
    #[serde(default)]
    pub current: String,
    #[serde(default)]
    pub bucket: String,
    #[serde(rename = "pathPrefix", default)]
    pub path_prefix: String,
    #[serde(rename = "domainPrefix", default)]
    pub domain_prefix: String,
    #[serde(rename = "allowUpload", default)]
    pub allow_upload: bool,
    #[serde(rename = "allowSearch", default)]
    pub allow_search: bool,
}

/// A breadcrumb entry pointing at one ancestor directory
#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumb {
    pub name: String,
    pub path: String,
}

/// Normalize a directory path so it starts and ends with `/`
///
/// The server only treats a request as a directory listing when it has a trailing slash.
pub fn directory_path(path: &str) -> String {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

/// URL of the JSON listing for `path`
pub fn listing_url(endpoint: &str, path: &str) -> String {
    format!(
        "{}{}?json=true",
        endpoint.trim_end_matches('/'),
        directory_path(path)
    )
}

/// URL of the JSON search results for `query`
pub fn search_url(endpoint: &str, query: &str) -> String {
    format!(
        "{}/search?q={}&json=true",
        endpoint.trim_end_matches('/'),
        urlencoding::encode(query)
    )
}

/// URL the upload form is posted to
pub fn upload_url(endpoint: &str) -> String {
    format!("{}/upload", endpoint.trim_end_matches('/'))
}

/// Origin that serves files when the server sets no `domainPrefix`
///
/// That is the listing server itself, so an absolute endpoint wins over the page origin.
/// A relative or empty endpoint means the server shares the page's origin.
pub fn file_origin(endpoint: &str, page_origin: &str) -> String {
    url::Url::parse(endpoint)
        .ok()
        .map(|url| url.origin())
        .filter(|origin| origin.is_tuple())
        .map(|origin| origin.ascii_serialization())
        .unwrap_or_else(|| page_origin.to_string())
}

/// Public link for a file, as relayed to the parent window
///
/// Uses the listing's `domainPrefix` when the server serves files from another host,
/// otherwise `origin`, which should come from [`file_origin`].
pub fn object_link(listing: &Listing, origin: &str, value: &str) -> String {
    let base = if listing.domain_prefix.is_empty() {
        origin
    } else {
        listing.domain_prefix.as_str()
    };

    let prefix = listing.path_prefix.trim_matches('/');
    let value = value.trim_start_matches('/');

    if prefix.is_empty() {
        format!("{}/{}", base.trim_end_matches('/'), value)
    } else {
        format!("{}/{}/{}", base.trim_end_matches('/'), prefix, value)
    }
}

/// Cumulative breadcrumb trail for a directory path
pub fn breadcrumbs(current: &str) -> Vec<Breadcrumb> {
    let mut path = String::from("/");
    current
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            path.push_str(segment);
            path.push('/');
            Breadcrumb {
                name: segment.to_string(),
                path: path.clone(),
            }
        })
        .collect()
}

async fn fetch_json(url: &str) -> Result<Listing, String> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("HTTP request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Listing>()
        .await
        .map_err(|e| format!("Failed to parse listing: {}", e))
}

/// Fetch the listing of one directory
pub async fn fetch_listing(endpoint: &str, path: &str) -> Result<Listing, String> {
    let url = listing_url(endpoint, path);
    log::info!("Fetching listing: {}", url);
    fetch_json(&url).await
}

/// Upload every file in `files` into directory `path`
///
/// Sent as the multipart form the server expects: each file under `filename`,
/// plus the target directory under `path`. Returns the number of files sent.
pub async fn upload_files(endpoint: &str, path: &str, files: &web_sys::FileList) -> Result<u32, String> {
    let form_data = web_sys::FormData::new()
        .map_err(|e| format!("Failed to create FormData: {:?}", e))?;

    for index in 0..files.length() {
        if let Some(file) = files.get(index) {
            form_data
                .append_with_blob_and_filename("filename", &file, &file.name())
                .map_err(|e| format!("Failed to append file: {:?}", e))?;
        }
    }
    form_data
        .append_with_str("path", &directory_path(path))
        .map_err(|e| format!("Failed to append path: {:?}", e))?;

    let url = upload_url(endpoint);
    log::info!("Uploading {} file(s) to {}", files.length(), url);

    // The server answers with a redirect to the directory page, which fetch follows
    let response = Request::post(&url)
        .body(form_data)
        .map_err(|e| format!("Failed to build upload request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Upload failed: {}", e))?;

    if !response.ok() {
        return Err(format!("Upload failed: {} {}", response.status(), response.status_text()));
    }

    Ok(files.length())
}

/// Search the whole bucket for object names containing `query`
pub async fn fetch_search(endpoint: &str, query: &str) -> Result<Listing, String> {
    let url = search_url(endpoint, query);
    log::info!("Searching bucket: {}", url);
    fetch_json(&url).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PickerConfig;

    #[test]
    fn test_directory_path() {
        assert_eq!(directory_path(""), "/");
        assert_eq!(directory_path("/"), "/");
        assert_eq!(directory_path("photos"), "/photos/");
        assert_eq!(directory_path("/photos/2024"), "/photos/2024/");
        assert_eq!(directory_path("photos/2024/"), "/photos/2024/");
    }

    #[test]
    fn test_listing_url() {
        assert_eq!(listing_url("https://b.example", "/"), "https://b.example/?json=true");
        assert_eq!(
            listing_url("https://b.example/browse/", "docs"),
            "https://b.example/browse/docs/?json=true"
        );
    }

    #[test]
    fn test_search_url_encodes_query() {
        assert_eq!(
            search_url("https://b.example", "annual report&draft"),
            "https://b.example/search?q=annual%20report%26draft&json=true"
        );
    }

    #[test]
    fn test_object_link() {
        let mut listing = Listing::default();
        assert_eq!(
            object_link(&listing, "https://app.example/", "docs/a.pdf"),
            "https://app.example/docs/a.pdf"
        );

        listing.path_prefix = "/files".to_string();
        assert_eq!(
            object_link(&listing, "https://app.example", "docs/a.pdf"),
            "https://app.example/files/docs/a.pdf"
        );

        listing.domain_prefix = "https://cdn.example/".to_string();
        assert_eq!(
            object_link(&listing, "https://app.example", "/docs/a.pdf"),
            "https://cdn.example/files/docs/a.pdf"
        );
    }

    #[test]
    fn test_search_results_show_full_key() {
        // The server strips "search" out of names it lists under /search
        let entry = BucketObject {
            name: "re.pdf".to_string(),
            value: "docs/research.pdf".to_string(),
            updated: String::new(),
            size: 3.0,
        };
        assert_eq!(entry.label(true), "docs/research.pdf");
        assert_eq!(entry.label(false), "re.pdf");
    }

    #[test]
    fn test_upload_url() {
        assert_eq!(upload_url("https://b.example/browse/"), "https://b.example/browse/upload");
        assert_eq!(upload_url(""), "/upload");
    }

    #[test]
    fn test_file_origin_prefers_endpoint() {
        assert_eq!(
            file_origin("https://files.example/browse", "https://app.example"),
            "https://files.example"
        );
        assert_eq!(
            file_origin("http://files.example:8080/", "https://app.example"),
            "http://files.example:8080"
        );
        assert_eq!(file_origin("", "https://app.example"), "https://app.example");
        assert_eq!(file_origin("/browse", "https://app.example"), "https://app.example");
    }

    #[test]
    fn test_link_for_remote_endpoint() {
        let config = PickerConfig::from_search(
            "?endpoint=https%3A%2F%2Ffiles.example%2Fbrowse",
            "https://app.example",
        );
        let listing = Listing {
            path_prefix: "/browse".to_string(),
            ..Listing::default()
        };

        let origin = file_origin(&config.endpoint, "https://app.example");
        let link = object_link(&listing, &origin, "docs/a.pdf");
        assert_eq!(link, "https://files.example/browse/docs/a.pdf");
    }

    #[test]
    fn test_breadcrumbs() {
        assert!(breadcrumbs("/").is_empty());
        assert_eq!(
            breadcrumbs("/photos/2024/"),
            vec![
                Breadcrumb { name: "photos".to_string(), path: "/photos/".to_string() },
                Breadcrumb { name: "2024".to_string(), path: "/photos/2024/".to_string() },
            ]
        );
    }

    #[test]
    fn test_listing_from_server_json() {
        let body = r#"{
            "files": [{"Name": "a.png", "Value": "photos/a.png", "Updated": "2024-01-02 03:04", "Size": 12}],
            "dirs": [{"Name": "2024/", "Value": "photos/2024/", "Updated": "", "Size": 0}],
            "paths": [{"Name": "photos", "Value": "photos", "Updated": "", "Size": 0}],
            "current": "/photos/",
            "bucket": "media",
            "pathPrefix": "",
            "domainPrefix": "https://cdn.example",
            "allowUpload": false,
            "allowDelete": false,
            "allowSearch": true
        }"#;

        let listing: Listing = serde_json::from_str(body).unwrap();
        assert_eq!(listing.files.len(), 1);
        assert_eq!(listing.files[0].value, "photos/a.png");
        assert_eq!(listing.files[0].size, 12.0);
        assert_eq!(listing.dirs[0].name, "2024/");
        assert_eq!(listing.current, "/photos/");
        assert_eq!(listing.domain_prefix, "https://cdn.example");
        assert!(listing.allow_search);
        assert!(!listing.allow_upload);
    }

    #[test]
    fn test_listing_tolerates_missing_fields() {
        let listing: Listing = serde_json::from_str(r#"{"current": "/"}"#).unwrap();
        assert!(listing.files.is_empty());
        assert!(!listing.allow_search);
    }
}
