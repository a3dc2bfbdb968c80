use url::Url;

/// A path on a host where the looper must stay out of the way.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Exclusion {
    domain: &'static str,
    path: &'static str,
    with_query: bool,
}

/// Which pages the looper attaches to: http(s) pages on the video hosts and their
/// subdomains, minus the embedded subscribe button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationScope {
    domains: Vec<&'static str>,
    exclusions: Vec<Exclusion>,
}

impl Default for ActivationScope {
    fn default() -> Self {
        Self {
            domains: vec!["youtube.com", "vimeo.com"],
            exclusions: vec![Exclusion {
                domain: "youtube.com",
                path: "/subscribe_embed",
                with_query: true,
            }],
        }
    }
}

impl ActivationScope {
    pub fn allows(&self, url: &Url) -> bool {
        if !matches!(url.scheme(), "http" | "https") {
            return false;
        }
        let Some(host) = url.host_str() else {
            return false;
        };

        let included = self
            .domains
            .iter()
            .any(|domain| host_in_domain(host, domain));
        let excluded = self.exclusions.iter().any(|exclusion| {
            host_in_domain(host, exclusion.domain)
                && url.path() == exclusion.path
                && (!exclusion.with_query || url.query().is_some())
        });

        included && !excluded
    }
}

/// `host` is `domain` or one of its subdomains. Hosts from [`Url`] are already lower-case.
fn host_in_domain(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|rest| rest.ends_with('.'))
}
