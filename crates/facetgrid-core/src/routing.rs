//! Landing-page routing rules.
//!
//! Rule-based companion to the directory engine, with no shared state:
//! country lookups, GDPR consent requirements, region-based register
//! server selection, and redirect URL construction for the legacy
//! token flow and the SSO nonce flow.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::config::RoutingConfig;
use crate::error::Result;

/// EU/EEA + UK: registration requires explicit opt-in consent.
const CONSENT_COUNTRIES: [&str; 31] = [
    "AT", "BE", "BG", "HR", "CY", "CZ", "DK", "EE", "FI", "FR", "DE", "GR", "HU", "IE", "IT", "LV",
    "LT", "LU", "MT", "NL", "PL", "PT", "RO", "SK", "SI", "ES", "SE", "IS", "LI", "NO", "GB",
];

/// Countries routed to the EU register server. Broader than the
/// consent list: covers the whole European region.
const EU_REGION_COUNTRIES: [&str; 52] = [
    "AT", "BE", "BG", "HR", "CY", "CZ", "DK", "EE", "FI", "FR", "DE", "GR", "HU", "IE", "IT", "LV",
    "LT", "LU", "MT", "NL", "PL", "PT", "RO", "SK", "SI", "ES", "SE", "GB", "NO", "LI", "IS", "CH",
    "AL", "AD", "BY", "BA", "FO", "GI", "GG", "VA", "IM", "JE", "XK", "MK", "MD", "MC", "ME", "RU",
    "SM", "RS", "SJ", "UA",
];

/// Display name for an ISO 3166-1 alpha-2 code.
pub fn country_name(code: &str) -> Option<&'static str> {
    let name = match code.to_uppercase().as_str() {
        "AT" => "Austria",
        "BE" => "Belgium",
        "BG" => "Bulgaria",
        "HR" => "Croatia",
        "CY" => "Cyprus",
        "CZ" => "Czech Republic",
        "DK" => "Denmark",
        "EE" => "Estonia",
        "FI" => "Finland",
        "GR" => "Greece",
        "HU" => "Hungary",
        "IE" => "Ireland",
        "IT" => "Italy",
        "LV" => "Latvia",
        "LT" => "Lithuania",
        "LU" => "Luxembourg",
        "MT" => "Malta",
        "NL" => "Netherlands",
        "PL" => "Poland",
        "PT" => "Portugal",
        "RO" => "Romania",
        "SK" => "Slovakia",
        "SI" => "Slovenia",
        "ES" => "Spain",
        "SE" => "Sweden",
        "NO" => "Norway",
        "LI" => "Liechtenstein",
        "IS" => "Iceland",
        "CH" => "Switzerland",
        "AL" => "Albania",
        "AD" => "Andorra",
        "BY" => "Belarus",
        "BA" => "Bosnia and Herzegovina",
        "FO" => "Faroe Islands",
        "GI" => "Gibraltar",
        "GG" => "Guernsey",
        "VA" => "Holy See (Vatican City State)",
        "IM" => "Isle of Man",
        "JE" => "Jersey",
        "XK" => "Kosovo",
        "MK" => "Macedonia",
        "MD" => "Moldova",
        "MC" => "Monaco",
        "ME" => "Montenegro",
        "RU" => "Russian Federation",
        "SM" => "San Marino",
        "RS" => "Serbia",
        "SJ" => "Svalbard and Jan Mayen",
        "UA" => "Ukraine",
        "US" => "United States",
        "CA" => "Canada",
        "AU" => "Australia",
        "NZ" => "New Zealand",
        "GB" => "United Kingdom",
        "FR" => "France",
        "DE" => "Germany",
        _ => return None,
    };
    Some(name)
}

/// Whether the country routes to the EU register server.
pub fn is_eu_country(code: &str) -> bool {
    EU_REGION_COUNTRIES.contains(&code.to_uppercase().as_str())
}

/// Whether registration from this country requires GDPR opt-in
/// consent (EU/EEA members plus the UK).
pub fn requires_consent(code: &str) -> bool {
    CONSENT_COUNTRIES.contains(&code.to_uppercase().as_str())
}

/// Register server for a country: EU region goes to the EU server,
/// everything else to the default.
pub fn register_server<'a>(config: &'a RoutingConfig, country: &str) -> &'a str {
    if is_eu_country(country) {
        &config.register_server_eu
    } else {
        &config.register_server
    }
}

/// Region-appropriate server with an OAuth callback appended when a
/// code is present.
pub fn server_url(
    oauth_route: &str,
    eu_server: &str,
    default_server: &str,
    country: &str,
    oauth_code: Option<&str>,
) -> String {
    let server = if is_eu_country(country) {
        eu_server
    } else {
        default_server
    };
    match oauth_code {
        Some(code) if !code.is_empty() => format!("{server}{oauth_route}?code={code}"),
        _ => server.to_string(),
    }
}

/// Build a query string from pairs, skipping absent and empty values.
/// Returns `?key=value&...` or the empty string.
pub fn query_from_pairs(pairs: &[(&str, Option<&str>)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in pairs {
        if let Some(value) = value {
            if !value.is_empty() {
                serializer.append_pair(key, value);
                any = true;
            }
        }
    }
    if any {
        format!("?{}", serializer.finish())
    } else {
        String::new()
    }
}

/// Inputs to redirect construction, typically taken from a
/// registration response plus page parameters.
#[derive(Debug, Clone, Default)]
pub struct RedirectRequest {
    /// Overrides the region-derived register server
    pub base_redirect_url: Option<String>,
    pub partition_id: Option<String>,
    pub auth_token: Option<String>,
    pub auto_login_nonce: Option<String>,
    pub username: Option<String>,
    /// ISO country code; empty means the default region
    pub country: String,
    pub onboarding: bool,
    /// Disables the SSO nonce flow even when a nonce is present
    pub force_legacy: bool,
}

impl RedirectRequest {
    pub fn for_country(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            onboarding: true,
            ..Self::default()
        }
    }

    fn sso_nonce(&self) -> Option<&str> {
        match self.auto_login_nonce.as_deref() {
            Some(nonce) if !nonce.is_empty() && !self.force_legacy => Some(nonce),
            _ => None,
        }
    }
}

fn partition_host_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^https://[^.]+\.").expect("static pattern"))
}

/// Build the final redirect URL.
///
/// Legacy flow: region server (or explicit base), partition-based host
/// rewrite when a partition and token are present, `/login` path with
/// `firsttime`/`a` query, and an optional per-country localized path
/// override. SSO flow: when a nonce is present (and not forced
/// legacy), a clean URL on the partition host carrying `onboarding`,
/// `username`, and `nonce`.
pub fn build_redirect_url(config: &RoutingConfig, request: &RedirectRequest) -> Result<String> {
    if let Some(nonce) = request.sso_nonce() {
        let partition = request.partition_id.as_deref().unwrap_or("1");
        let mut sso = Url::parse(&format!("https://app{partition}.{}", config.app_domain))?;
        sso.query_pairs_mut()
            .append_pair("onboarding", if request.onboarding { "true" } else { "false" })
            .append_pair("username", request.username.as_deref().unwrap_or_default())
            .append_pair("nonce", nonce);
        return Ok(sso.to_string());
    }

    let mut redirect = match &request.base_redirect_url {
        Some(base) => base.clone(),
        None => register_server(config, &request.country).to_string(),
    };

    let authed = request.partition_id.is_some() && request.auth_token.is_some();
    if authed {
        let partition = request.partition_id.as_deref().unwrap_or_default();
        redirect = partition_host_pattern()
            .replace(&redirect, format!("https://app{partition}."))
            .into_owned();
    }

    redirect.push_str("/login");
    redirect.push_str(&query_from_pairs(&[
        ("firsttime", Some("true")),
        (
            "a",
            if authed {
                request.auth_token.as_deref()
            } else {
                None
            },
        ),
    ]));

    if let Some(path) = config
        .localized_paths
        .get(&request.country.to_uppercase())
    {
        redirect = path.clone();
    }

    Ok(redirect)
}
