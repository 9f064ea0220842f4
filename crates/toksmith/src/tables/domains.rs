//! # Top-Level Domains

/// Common top-level domain suffixes, without the leading dot.
pub const TOP_LEVEL_DOMAINS: &[&str] = &[
    "com", "org", "net", "edu", "gov", "mil", "int", "info", "biz", "name", "pro", "io", "ai",
    "app", "dev", "co", "me", "tv", "cc", "ly", "xyz", "online", "site", "tech", "store", "blog",
    "cloud", "shop", "news", "eu", "asia", "uk", "co.uk", "org.uk", "ac.uk", "gov.uk", "us",
    "ca", "au", "com.au", "net.au", "org.au", "nz", "co.nz", "de", "fr", "nl", "be", "ch", "at",
    "it", "es", "pt", "se", "no", "dk", "fi", "is", "ie", "pl", "cz", "sk", "hu", "ro", "bg",
    "gr", "tr", "ru", "ua", "by", "kz", "cn", "com.cn", "jp", "co.jp", "kr", "co.kr", "in",
    "co.in", "sg", "hk", "tw", "my", "th", "vn", "id", "ph", "br", "com.br", "ar", "com.ar",
    "mx", "com.mx", "cl", "pe", "za", "co.za", "ng", "ke", "eg", "il", "co.il", "ir", "sa",
    "ae",
];

/// Is this a suffix the domain handler registers?
///
/// Only suffixes made of ASCII letters and dots qualify.
pub fn is_plain_domain_suffix(suffix: &str) -> bool {
    !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_alphabetic() || c == '.')
}
