use std::sync::OnceLock;

use regex::Regex;

use super::LinkDetector;
use crate::model::Bounds;

/// Generic top-level domains accepted for links written without a scheme.
const GENERIC_TLDS: &[&str] = &[
    "aero", "app", "art", "asia", "bar", "beer", "bet", "bid", "bike", "bio", "biz", "blog",
    "blue", "book", "buzz", "cafe", "camp", "capital", "care", "cash", "cat", "center", "chat",
    "city", "click", "cloud", "club", "codes", "coffee", "college", "com", "community",
    "company", "cool", "coop", "credit", "dating", "deals", "design", "dev", "diet", "digital",
    "direct", "directory", "dog", "domains", "download", "earth", "eco", "edu", "email",
    "energy", "engineering", "events", "exchange", "expert", "express", "faith", "family",
    "fan", "fans", "farm", "fashion", "film", "finance", "fish", "fit", "fitness", "flowers",
    "forum", "foundation", "free", "fun", "fund", "game", "games", "garden", "gay", "gift",
    "gifts", "gives", "global", "gmbh", "gold", "golf", "gov", "graphics", "green", "group",
    "guide", "guru", "health", "help", "hiphop", "hockey", "host", "house", "how", "icu",
    "info", "ink", "int", "international", "jobs", "kim", "land", "lat", "law", "life", "link",
    "live", "llc", "lol", "love", "ltd", "market", "marketing", "media", "men", "menu", "mil",
    "mobi", "moe", "money", "movie", "museum", "name", "net", "network", "news", "ngo",
    "ninja", "nyc", "one", "onl", "online", "org", "page", "party", "pet", "photo",
    "photography", "photos", "pics", "pink", "pizza", "place", "plus", "porn", "press", "pro",
    "productions", "promo", "pub", "quest", "radio", "red", "rest", "review", "reviews", "rip",
    "rocks", "run", "sale", "school", "science", "services", "sex", "sexy", "shop", "show",
    "site", "social", "software", "solutions", "space", "store", "stream", "studio", "style",
    "support", "surf", "systems", "tattoo", "team", "tech", "technology", "tel", "tips",
    "today", "tools", "top", "tours", "town", "toys", "trade", "travel", "tube", "uno", "vip",
    "video", "vin", "vision", "vote", "voto", "watch", "web", "website", "wiki", "win", "wine",
    "work", "works", "world", "wtf", "xxx", "xyz", "yoga", "zone",
];

/// Country-code top-level domains.
const COUNTRY_TLDS: &[&str] = &[
    "ac", "ad", "ae", "af", "ag", "ai", "al", "am", "ao", "aq", "ar", "as", "at", "au", "aw",
    "ax", "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi", "bj", "bm", "bn", "bo", "br",
    "bs", "bt", "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck", "cl", "cm",
    "cn", "co", "cr", "cu", "cv", "cw", "cx", "cy", "cz", "de", "dj", "dk", "dm", "do", "dz",
    "ec", "ee", "eg", "er", "es", "et", "eu", "fi", "fj", "fk", "fm", "fo", "fr", "ga", "gb",
    "gd", "ge", "gf", "gg", "gh", "gi", "gl", "gm", "gn", "gp", "gq", "gr", "gs", "gt", "gu",
    "gw", "gy", "hk", "hm", "hn", "hr", "ht", "hu", "id", "ie", "il", "im", "in", "io", "iq",
    "ir", "is", "it", "je", "jm", "jo", "jp", "ke", "kg", "kh", "ki", "km", "kn", "kp", "kr",
    "kw", "ky", "kz", "la", "lb", "lc", "li", "lk", "lr", "ls", "lt", "lu", "lv", "ly", "ma",
    "mc", "md", "me", "mg", "mh", "mk", "ml", "mm", "mn", "mo", "mp", "mq", "mr", "ms", "mt",
    "mu", "mv", "mw", "mx", "my", "mz", "na", "nc", "ne", "nf", "ng", "ni", "nl", "no", "np",
    "nr", "nu", "nz", "om", "pa", "pe", "pf", "pg", "ph", "pk", "pl", "pm", "pn", "pr", "ps",
    "pt", "pw", "py", "qa", "re", "ro", "rs", "ru", "rw", "sa", "sb", "sc", "sd", "se", "sg",
    "sh", "si", "sk", "sl", "sm", "sn", "so", "sr", "ss", "st", "su", "sv", "sx", "sy", "sz",
    "tc", "td", "tf", "tg", "th", "tj", "tk", "tl", "tm", "tn", "to", "tr", "tt", "tv", "tw",
    "tz", "ua", "ug", "uk", "us", "uy", "uz", "va", "vc", "ve", "vg", "vi", "vn", "vu", "wf",
    "ws", "ye", "yt", "za", "zm", "zw",
];

/// One host label: letters and digits in any script, inner hyphens allowed.
const LABEL: &str = r"[\p{L}\p{N}](?:[\p{L}\p{N}-]*[\p{L}\p{N}])?";

/// Characters a link may run over once it has a scheme or a host.
const URL_CHARS: &str = r#"[^\s<>"`|]"#;

/// Matches URLs with a scheme, `www.` hosts, bare `host.tld` domains and
/// email addresses.
///
/// Hosts may use any script. A bare domain must end in a known generic or
/// country-code TLD, a punycode `xn--` TLD or a non-ASCII TLD.
///
/// Trailing sentence punctuation is trimmed, as are closing brackets that
/// have no opening partner inside the match, so `(see example.com/a_(b))`
/// yields `example.com/a_(b)`. A match left without a host after trimming
/// is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelaxedUrlDetector;

impl RelaxedUrlDetector {
    pub fn new() -> Self {
        Self
    }

    fn regex() -> &'static Regex {
        static URL_REGEX: OnceLock<Regex> = OnceLock::new();
        URL_REGEX.get_or_init(|| {
            let tld = format!(
                r"(?:{}|{}|xn--[a-z0-9-]+|[\p{{L}}&&[^\x00-\x7F]]\p{{L}}+)",
                GENERIC_TLDS.join("|"),
                COUNTRY_TLDS.join("|"),
            );
            let host = format!(r"(?:{LABEL}\.)+{tld}\b");
            let pattern = format!(
                r"(?i)\b(?:[\p{{L}}\p{{N}}._%+-]+@{host}|(?:https?|ftp|wss?)://{URL_CHARS}+|www\.[\p{{L}}\p{{N}}]{URL_CHARS}*|{host}(?:[/?#]{URL_CHARS}*)?)"
            );
            Regex::new(&pattern).expect("Invalid URL regex")
        })
    }
}

impl LinkDetector for RelaxedUrlDetector {
    fn detect(&self, message: &str) -> Vec<Bounds> {
        Self::regex()
            .find_iter(message)
            .filter_map(|m| {
                let url = &m.as_str()[..trimmed_len(m.as_str())];
                has_host(url).then(|| Bounds::new(m.start(), m.start() + url.len()))
            })
            .collect()
    }
}

/// Length of `url` once trailing punctuation and unbalanced closers are removed.
fn trimmed_len(url: &str) -> usize {
    let mut end = url.len();

    while let Some(last) = url[..end].chars().last() {
        let strip = match last {
            '.' | ',' | ':' | ';' | '!' | '?' | '\'' | '"' => true,
            ')' => unbalanced(&url[..end], '(', ')'),
            ']' => unbalanced(&url[..end], '[', ']'),
            '}' => unbalanced(&url[..end], '{', '}'),
            _ => false,
        };
        if !strip {
            break;
        }
        end -= last.len_utf8();
    }

    end
}

fn unbalanced(s: &str, open: char, close: char) -> bool {
    s.matches(close).count() > s.matches(open).count()
}

/// Whatever follows the scheme must start with a letter or digit.
fn has_host(url: &str) -> bool {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    rest.chars().next().is_some_and(char::is_alphanumeric)
}
