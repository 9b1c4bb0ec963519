use once_cell::sync::Lazy;
use regex::Regex;

static STYLE_LANGS_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"\.(css|less|sass|scss|styl|stylus|pcss|postcss|sss)(?:$|\?)").unwrap()
});

/// True when a module id or file name refers to a style-language request,
/// optionally carrying a query suffix (`styles.scss?used`).
///
/// Style output follows different budgets than scripts, so the enforcement
/// pass leaves style chunks to the host.
pub fn is_style_request(request: &str) -> bool {
  STYLE_LANGS_RE.is_match(request)
}
