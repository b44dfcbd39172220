use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use url::Url;

use super::{Fields, PayloadKind};

// Payload
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Payload {
    Url { raw: String, parts: Option<UrlParts> },
    Email { address: String },
    Phone { number: String },
    Sms { number: Option<String>, message: Option<String> },
    Wifi(WifiCredentials),
    VCard(Contact),
    CalendarEvent(Event),
    Geo { latitude: Option<String>, longitude: Option<String> },
    PlainText { content: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlParts {
    pub scheme: String,
    pub host: String,
    pub path: String,
    pub query: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WifiCredentials {
    pub ssid: Option<String>,
    pub encryption: Option<String>,
    pub password: Option<String>,
    pub hidden: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub organization: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Event {
    pub summary: Option<String>,
    pub location: Option<String>,
    pub start: Option<String>,
}

// Prefix dispatch
//------------------------------------------------------------------------------

impl Payload {
    /// Resolves `raw` to the first matching payload type. Prefixes are matched
    /// exactly as written; anything unrecognised is plain text.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Url { raw: raw.to_string(), parts: parse_url(raw) }
        } else if let Some(rest) = raw.strip_prefix("mailto:") {
            Self::Email { address: rest.to_string() }
        } else if let Some(rest) = raw.strip_prefix("tel:") {
            Self::Phone { number: rest.to_string() }
        } else if raw.starts_with("sms:") || raw.starts_with("smsto:") {
            parse_sms(raw)
        } else if let Some(rest) = raw.strip_prefix("WIFI:") {
            Self::Wifi(parse_wifi(rest))
        } else if raw.starts_with("BEGIN:VCARD") {
            Self::VCard(parse_vcard(raw))
        } else if raw.starts_with("BEGIN:VEVENT") {
            Self::CalendarEvent(parse_vevent(raw))
        } else if let Some(rest) = raw.strip_prefix("geo:") {
            parse_geo(rest)
        } else {
            Self::PlainText { content: raw.to_string() }
        }
    }

    pub fn kind(&self) -> PayloadKind {
        match self {
            Self::Url { .. } => PayloadKind::Url,
            Self::Email { .. } => PayloadKind::Email,
            Self::Phone { .. } => PayloadKind::Phone,
            Self::Sms { .. } => PayloadKind::Sms,
            Self::Wifi(_) => PayloadKind::Wifi,
            Self::VCard(_) => PayloadKind::VCard,
            Self::CalendarEvent(_) => PayloadKind::CalendarEvent,
            Self::Geo { .. } => PayloadKind::GeoLocation,
            Self::PlainText { .. } => PayloadKind::PlainText,
        }
    }

    /// Display fields. Sub-fields that were not found are left out, so the
    /// result may be empty for structured payloads.
    pub fn fields(&self) -> Fields {
        let mut f = Fields::new();
        match self {
            Self::Url { raw, parts } => {
                f.push("URL", raw.as_str());
                if let Some(p) = parts {
                    f.push("Protocol", p.scheme.as_str());
                    f.push("Host", p.host.as_str());
                    f.push("Path", p.path.as_str());
                    f.push_opt("Query", p.query.as_deref());
                }
            }
            Self::Email { address } => f.push_opt("Email", Some(address.as_str())),
            Self::Phone { number } => f.push_opt("Phone", Some(number.as_str())),
            Self::Sms { number, message } => {
                f.push_opt("Phone", number.as_deref());
                f.push_opt("Message", message.as_deref());
            }
            Self::Wifi(w) => {
                f.push_opt("SSID", w.ssid.as_deref());
                f.push_opt("Encryption", w.encryption.as_deref());
                f.push_opt("Password", w.password.as_deref());
                if let Some(hidden) = w.hidden {
                    f.push("Hidden Network", if hidden { "Yes" } else { "No" });
                }
            }
            Self::VCard(c) => {
                f.push_opt("Name", c.name.as_deref());
                f.push_opt("Email", c.email.as_deref());
                f.push_opt("Phone", c.phone.as_deref());
                f.push_opt("Organization", c.organization.as_deref());
                f.push_opt("Title", c.title.as_deref());
            }
            Self::CalendarEvent(e) => {
                f.push_opt("Event", e.summary.as_deref());
                f.push_opt("Location", e.location.as_deref());
                f.push_opt("Start", e.start.as_deref());
            }
            Self::Geo { latitude, longitude } => {
                f.push_opt("Latitude", latitude.as_deref());
                f.push_opt("Longitude", longitude.as_deref());
            }
            Self::PlainText { content } => {
                f.push("Content", content.as_str());
                // UTF-16 code units, as counted by the scanning front ends
                f.push("Length", format!("{} characters", content.encode_utf16().count()));
            }
        }
        f
    }
}

// URL
//------------------------------------------------------------------------------

fn parse_url(raw: &str) -> Option<UrlParts> {
    let url = Url::parse(raw).ok()?;
    let host = url.host_str()?.to_string();
    Some(UrlParts {
        scheme: url.scheme().to_string(),
        host,
        path: url.path().to_string(),
        query: url.query().filter(|q| !q.is_empty()).map(String::from),
    })
}

// SMS
//------------------------------------------------------------------------------

// sms:<number>?body=<msg> and smsto:<number>. Only a parameter literally named
// `body` is read as the message.
fn parse_sms(raw: &str) -> Payload {
    let number = raw
        .split(':')
        .nth(1)
        .and_then(|seg| seg.split('?').next())
        .filter(|n| !n.is_empty())
        .map(String::from);

    let message = raw.split_once('?').and_then(|(_, query)| {
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("body="))
            .map(|body| urlencoding::decode(body).map(|d| d.into_owned()).unwrap_or_else(|_| body.to_string()))
    });

    Payload::Sms { number, message }
}

// WiFi
//------------------------------------------------------------------------------

fn parse_wifi(rest: &str) -> WifiCredentials {
    let mut creds = WifiCredentials::default();
    for seg in split_unescaped(rest, ';') {
        let Some((key, value)) = seg.split_once(':') else {
            continue;
        };
        let value = unescape(value);
        let slot = match key {
            "S" => &mut creds.ssid,
            "T" => &mut creds.encryption,
            "P" => &mut creds.password,
            "H" => {
                if creds.hidden.is_none() && !value.is_empty() {
                    creds.hidden = Some(value.eq_ignore_ascii_case("true"));
                }
                continue;
            }
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    // An `S:` glued to a previous value still names the network
    if creds.ssid.is_none() {
        creds.ssid = capture(&SSID_RE, rest);
    }
    creds
}

static SSID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"S:([^;]*);").expect("valid regex"));

fn split_unescaped(s: &str, sep: char) -> Vec<&str> {
    let mut segs = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            c if c == sep => {
                segs.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    segs.push(&s[start..]);
    segs
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

// vCard & VEVENT
//------------------------------------------------------------------------------

macro_rules! property_regex {
    ($name:ident, $prop:literal) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(concat!(r"(?mi)^", $prop, r"(?:;[^:\r\n]*)?:([^\r\n]*)")).expect("valid regex")
        });
    };
}

property_regex!(FN_RE, "FN");
property_regex!(EMAIL_RE, "EMAIL");
property_regex!(TEL_RE, "TEL");
property_regex!(ORG_RE, "ORG");
property_regex!(TITLE_RE, "TITLE");
property_regex!(SUMMARY_RE, "SUMMARY");
property_regex!(LOCATION_RE, "LOCATION");
property_regex!(DTSTART_RE, "DTSTART");

fn capture(re: &Regex, s: &str) -> Option<String> {
    re.captures(s)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|v| !v.is_empty())
        .map(String::from)
}

fn parse_vcard(raw: &str) -> Contact {
    Contact {
        name: capture(&FN_RE, raw),
        email: capture(&EMAIL_RE, raw),
        phone: capture(&TEL_RE, raw),
        organization: capture(&ORG_RE, raw),
        title: capture(&TITLE_RE, raw),
    }
}

fn parse_vevent(raw: &str) -> Event {
    Event {
        summary: capture(&SUMMARY_RE, raw),
        location: capture(&LOCATION_RE, raw),
        start: capture(&DTSTART_RE, raw),
    }
}

// Geo
//------------------------------------------------------------------------------

fn parse_geo(rest: &str) -> Payload {
    // geo:<lat>,<lon>[,<alt>][;params][?query]
    let coords = rest.split(['?', ';']).next().unwrap_or_default();
    let mut parts = coords.split(',').map(str::trim).filter(|p| !p.is_empty()).map(String::from);
    Payload::Geo { latitude: parts.next(), longitude: parts.next() }
}
