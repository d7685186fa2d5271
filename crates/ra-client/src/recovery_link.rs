use ra_core::RecoveryTokens;

use reqwest::Url;

/// Extract the session tokens from a password-reset link.
///
/// The auth service puts them in the fragment (`#access_token=...`), some
/// redirect setups move them to the query string; both are searched. A bare
/// `key=value&...` string is accepted too.
pub fn parse_recovery_link(link: &str) -> Option<RecoveryTokens> {
    let link = link.trim();

    let mut access_token = None;
    let mut refresh_token = None;
    let mut token_type = None;

    for params in parameter_strings(link) {
        let Ok(url) = Url::parse(&format!("http://localhost/?{params}")) else {
            continue;
        };

        for (key, value) in url.query_pairs() {
            let slot = match key.as_ref() {
                "access_token" => &mut access_token,
                "refresh_token" => &mut refresh_token,
                "token_type" => &mut token_type,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
    }

    RecoveryTokens::from_parts(access_token, refresh_token, token_type)
}

fn parameter_strings(link: &str) -> Vec<String> {
    match Url::parse(link) {
        Ok(url) => [url.fragment(), url.query()]
            .into_iter()
            .flatten()
            .map(String::from)
            .collect(),
        Err(_) => vec![link.trim_start_matches(['?', '#']).to_string()],
    }
}
