//! Route table compiled from configuration.

use crate::config::FunctionConfig;

/// Precomputed paths the dispatcher matches against.
///
/// Built once at startup and shared immutably; the route prefix is a
/// deployment concern (e.g. `/my-app`), empty when serving at the root.
#[derive(Debug, Clone)]
pub struct RouteTable {
    service_name: String,
    greeting: String,
    root_aliases: Vec<String>,
    users_path: String,
    users_prefix: String,
    health_path: String,
}

impl RouteTable {
    pub fn new(route_prefix: &str, service_name: &str) -> Self {
        let prefix = route_prefix.trim_end_matches('/');

        let mut root_aliases = vec!["/".to_string()];
        if !prefix.is_empty() {
            root_aliases.push(prefix.to_string());
        }
        root_aliases.push(format!("{prefix}/hello"));

        let users_path = format!("{prefix}/users");
        Self {
            service_name: service_name.to_string(),
            greeting: format!("Hello from {service_name}!"),
            root_aliases,
            users_prefix: format!("{users_path}/"),
            users_path,
            health_path: format!("{prefix}/health"),
        }
    }

    pub fn from_config(config: &FunctionConfig) -> Self {
        Self::new(
            &config.function.route_prefix,
            &config.function.service_name,
        )
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn users_path(&self) -> &str {
        &self.users_path
    }

    pub fn health_path(&self) -> &str {
        &self.health_path
    }

    /// Exact match against the root aliases (`/`, the prefix itself, and
    /// `<prefix>/hello`).
    pub fn is_root_alias(&self, path: &str) -> bool {
        self.root_aliases.iter().any(|alias| alias == path)
    }

    /// Prefix match against `<users path>/`.
    ///
    /// Returns the user id: the last `/`-delimited segment of the path,
    /// taken verbatim — no integer parsing, no existence check.
    pub fn user_detail_id<'a>(&self, path: &'a str) -> Option<&'a str> {
        if !path.starts_with(self.users_prefix.as_str()) {
            return None;
        }
        Some(path.rsplit('/').next().unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_aliases_without_prefix() {
        let table = RouteTable::new("", "edgefn");
        assert!(table.is_root_alias("/"));
        assert!(table.is_root_alias("/hello"));
        assert!(!table.is_root_alias("/users"));
        assert_eq!(table.users_path(), "/users");
        assert_eq!(table.health_path(), "/health");
    }

    #[test]
    fn root_aliases_with_prefix() {
        let table = RouteTable::new("/demo", "demo-app");
        assert!(table.is_root_alias("/"));
        assert!(table.is_root_alias("/demo"));
        assert!(table.is_root_alias("/demo/hello"));
        assert!(!table.is_root_alias("/hello"));
        assert_eq!(table.users_path(), "/demo/users");
        assert_eq!(table.health_path(), "/demo/health");
    }

    #[test]
    fn trailing_prefix_slash_is_tolerated() {
        let table = RouteTable::new("/demo/", "demo-app");
        assert_eq!(table.users_path(), "/demo/users");
    }

    #[test]
    fn detail_id_is_the_last_segment() {
        let table = RouteTable::new("", "edgefn");
        assert_eq!(table.user_detail_id("/users/42"), Some("42"));
        assert_eq!(table.user_detail_id("/users/abc"), Some("abc"));
        // Nested segments: the trailing one wins, as in the source system.
        assert_eq!(table.user_detail_id("/users/1/posts"), Some("posts"));
        // Bare trailing slash yields an empty id rather than a miss.
        assert_eq!(table.user_detail_id("/users/"), Some(""));
        assert_eq!(table.user_detail_id("/users"), None);
        assert_eq!(table.user_detail_id("/other/42"), None);
    }
}
