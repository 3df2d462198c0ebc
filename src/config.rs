/// Run configuration.
///
/// Every field has a working default; env vars override individual values.
#[derive(Clone, Debug)]
pub struct Config {
    /// Job role keyword to search for
    pub role: String,
    /// Region filter expression, spliced into the search query verbatim
    pub region: String,
    /// Maximum number of result pages to harvest
    pub max_pages: usize,
    /// Job platform domain; links to other hosts are ignored
    pub platform_domain: String,
    /// Search engine base URL
    pub search_base_url: String,
    /// Directory the CSV export is written into
    pub export_dir: String,
    // --- Ollama ---
    pub ollama_base_url: String,
    pub ollama_model: String,
    pub ollama_temperature: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            role: "Data Engineer".to_string(),
            region: "EU OR \"United States\"".to_string(),
            max_pages: 3,
            platform_domain: "myworkdayjobs.com".to_string(),
            search_base_url: "https://www.google.com".to_string(),
            export_dir: ".".to_string(),
            ollama_base_url: "http://localhost:11434".to_string(),
            ollama_model: "llama3.2".to_string(),
            ollama_temperature: 0.1,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            role: std::env::var("JOB_ROLE").unwrap_or(default.role),
            region: std::env::var("REGION_FILTER").unwrap_or(default.region),
            max_pages: std::env::var("MAX_PAGES").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_pages),
            platform_domain: std::env::var("PLATFORM_DOMAIN").unwrap_or(default.platform_domain),
            search_base_url: std::env::var("SEARCH_BASE_URL").unwrap_or(default.search_base_url),
            export_dir: std::env::var("EXPORT_DIR").unwrap_or(default.export_dir),
            ollama_base_url: std::env::var("OLLAMA_BASE_URL").unwrap_or(default.ollama_base_url),
            ollama_model: std::env::var("OLLAMA_MODEL").unwrap_or(default.ollama_model),
            ollama_temperature: std::env::var("OLLAMA_TEMPERATURE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.ollama_temperature),
        }
    }

    /// The primary harvest query, e.g.
    /// `site:myworkdayjobs.com Data Engineer (EU OR "United States")`.
    pub fn search_query(&self) -> String {
        format!("site:{} {} ({})", self.platform_domain, self.role, self.region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_splices_role_and_region() {
        let config = Config::default();
        assert_eq!(
            config.search_query(),
            "site:myworkdayjobs.com Data Engineer (EU OR \"United States\")"
        );
    }
}
