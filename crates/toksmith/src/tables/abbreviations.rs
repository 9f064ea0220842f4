//! # Abbreviations

/// Abbreviations protected from having their periods split off.
///
/// Each entry is also registered upper-cased and title-cased.
pub const ABBREVIATIONS: &[&str] = &[
    "a.m.", "Adm.", "Bros.", "co.", "Corp.", "D.C.", "Dr.", "e.g.", "Gen.", "Gov.", "i.e.",
    "Inc.", "Jr.", "Ltd.", "Md.", "Messrs.", "Mo.", "Mont.", "Mr.", "Mrs.", "Ms.", "p.m.",
    "Ph.D.", "Rep.", "Rev.", "Sen.", "St.", "vs.",
];

/// The default abbreviations, as owned strings.
pub fn default_abbreviations() -> Vec<String> {
    ABBREVIATIONS.iter().map(|s| s.to_string()).collect()
}
