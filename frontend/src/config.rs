/// API base set at build time, e.g. `WEBMAIL_API_BASE=/mail trunk build`
const API_BASE_OVERRIDE: Option<&str> = option_env!("WEBMAIL_API_BASE");

const DEFAULT_TITLE: &str = "Mail";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
    pub title: String,
}

impl Config {
    /// read the configuration from the build environment and the page location
    pub fn load() -> Self {
        let pathname = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();

        Self::resolve(API_BASE_OVERRIDE, &pathname)
    }

    fn resolve(api_base: Option<&str>, pathname: &str) -> Self {
        let api_base = api_base
            .filter(|base| !base.trim().is_empty())
            .unwrap_or(pathname)
            .trim_end_matches('/')
            .to_string();

        Config {
            api_base,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    /// absolute path of an API endpoint, `path` is relative to the base
    pub fn api_path(&self, path: &str) -> String {
        let mut url = self.api_base.clone();
        url.push('/');
        url.push_str(path.trim_start_matches('/'));

        url
    }

    pub fn document_title(&self, unread: usize) -> String {
        format!("{} ({})", self.title, unread)
    }
}
