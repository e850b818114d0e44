use once_cell::sync::Lazy;
use regex::Regex;

/// JSON configuration blob that Amazon's review player prepends to scraped
/// review text. Presence of this prefix is a confirmed pollution marker.
pub(crate) const JSON_CONFIG_PREFIX: &str = "{\"clickstreamNexusMetricsConfig\"";

/// Substrings that mark injected video-player chrome in the original text.
pub(crate) const VIDEO_MARKERS: &[&str] = &["Video Player", "This is a modal window"];

/// Literal delimiter the player inserts between its chrome and the review.
pub(crate) const MODAL_DELIMITER: &str = "This is a modal window.";

// Player-interface fragments to strip from whatever text survives the
// delimiter/JSON strategies. Order matters: earlier patterns can eat the
// prefix of later ones. Labels are a mix of English and French because the
// scrape targets amazon.fr.
pub(crate) const POLLUTION_PATTERNS: &[&str] = &[
    r"Video Player is loading\.",
    r"Cliquez pour lire la vidéo",
    r"Jouez",
    r"Muet",
    r"Pause",
    r"Current Time \d+:\d+/Duration \d+:\d+",
    r"Loaded: \d+\.\d+%",
    r"Stream Type LIVE",
    r"Seek to live, currently behind live",
    r"Remaining Time -\d+:\d+",
    r"\d+x",
    r"Playback Rate",
    r"Chapters",
    r"Descriptions",
    r"descriptions off, selected",
    r"Sous-titres",
    r"subtitles off, selected",
    r"Français \(automatique\)",
    r"Audio Track",
    r"default, selected",
    r"Plein écran",
    r"This is a modal window\.",
];

pub(crate) static POLLUTION_REGEXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    POLLUTION_PATTERNS
        .iter()
        .map(|p| Regex::new(&format!("(?i){p}")).unwrap())
        .collect()
});

pub(crate) static MULTI_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
