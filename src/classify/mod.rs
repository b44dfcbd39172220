mod fields;
mod payload;

pub use fields::Fields;
pub use payload::{Contact, Event, Payload, UrlParts, WifiCredentials};

use std::fmt::{Display, Error, Formatter};

use serde::Serialize;
use tracing::trace;

// Payload kind
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize)]
pub enum PayloadKind {
    #[serde(rename = "URL")]
    Url,
    Email,
    Phone,
    #[serde(rename = "SMS")]
    Sms,
    #[serde(rename = "WiFi")]
    Wifi,
    #[serde(rename = "vCard")]
    VCard,
    #[serde(rename = "Calendar Event")]
    CalendarEvent,
    #[serde(rename = "Geo Location")]
    GeoLocation,
    #[serde(rename = "Plain Text")]
    PlainText,
}

impl PayloadKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Url => "URL",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Sms => "SMS",
            Self::Wifi => "WiFi",
            Self::VCard => "vCard",
            Self::CalendarEvent => "Calendar Event",
            Self::GeoLocation => "Geo Location",
            Self::PlainText => "Plain Text",
        }
    }
}

impl Display for PayloadKind {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_str(self.label())
    }
}

// Decoded payload
//------------------------------------------------------------------------------

/// Raw text of a successfully decoded QR symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedPayload {
    pub raw_text: String,
}

impl DecodedPayload {
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self { raw_text: raw_text.into() }
    }

    pub fn classify(&self) -> Classification {
        classify(&self.raw_text)
    }
}

// Classification
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    #[serde(rename = "type")]
    pub kind: PayloadKind,
    pub fields: Fields,
}

/// Assigns a payload type to `raw` and extracts its display fields.
///
/// Never fails: unrecognised text is [`PayloadKind::PlainText`], and a
/// structured payload with no readable sub-field falls back to its raw content
/// so `fields` always holds at least one entry.
pub fn classify(raw: &str) -> Classification {
    let payload = Payload::parse(raw);
    let kind = payload.kind();

    let mut fields = payload.fields();
    if fields.is_empty() {
        fields.push("Content", raw);
    }

    trace!(%kind, fields = fields.len(), "Classified payload");
    Classification { kind, fields }
}

#[cfg(test)]
mod classify_tests {
    use test_case::test_case;

    use super::{classify, DecodedPayload, Fields, PayloadKind};

    #[test]
    fn test_url_fields() {
        let res = classify("https://example.com/docs/page?lang=en&x=1");
        assert_eq!(res.kind, PayloadKind::Url);
        let exp = Fields::from([
            ("URL", "https://example.com/docs/page?lang=en&x=1"),
            ("Protocol", "https"),
            ("Host", "example.com"),
            ("Path", "/docs/page"),
            ("Query", "lang=en&x=1"),
        ]);
        assert_eq!(res.fields, exp);
    }

    #[test]
    fn test_unparseable_url_keeps_raw() {
        let res = classify("http://exa mple.com");
        assert_eq!(res.kind, PayloadKind::Url);
        assert_eq!(res.fields, Fields::from([("URL", "http://exa mple.com")]));
    }

    #[test_case("mailto:someone@example.com", PayloadKind::Email, &[("Email", "someone@example.com")])]
    #[test_case("tel:+1-555-0100", PayloadKind::Phone, &[("Phone", "+1-555-0100")])]
    #[test_case("smsto:5550100", PayloadKind::Sms, &[("Phone", "5550100")])]
    #[test_case("sms:5550100?subject=hi", PayloadKind::Sms, &[("Phone", "5550100")])]
    #[test_case("geo:37.7749,-122.4194", PayloadKind::GeoLocation, &[("Latitude", "37.7749"), ("Longitude", "-122.4194")])]
    #[test_case("geo:12.5", PayloadKind::GeoLocation, &[("Latitude", "12.5")])]
    fn test_simple_kinds(raw: &str, kind: PayloadKind, exp: &[(&str, &str)]) {
        let res = classify(raw);
        assert_eq!(res.kind, kind);
        let got: Vec<_> = res.fields.iter().collect();
        assert_eq!(got, exp);
    }

    #[test]
    fn test_wifi_round_trip() {
        let res = classify("WIFI:T:WPA;S:TestNet;P:secret123;H:false;;");
        assert_eq!(res.kind, PayloadKind::Wifi);
        let exp = Fields::from([
            ("SSID", "TestNet"),
            ("Encryption", "WPA"),
            ("Password", "secret123"),
            ("Hidden Network", "No"),
        ]);
        assert_eq!(res.fields, exp);
    }

    #[test]
    fn test_vcard() {
        let raw = "BEGIN:VCARD\r\nVERSION:3.0\r\nN:Doe;Jane\r\nFN:Jane Doe\r\nORG:Acme Inc.\r\n\
                   TITLE:Engineer\r\nTEL;TYPE=WORK,VOICE:+1 555 0100\r\nTEL;TYPE=CELL:+1 555 0199\r\n\
                   EMAIL;TYPE=INTERNET:jane@acme.test\r\nEND:VCARD";
        let res = classify(raw);
        assert_eq!(res.kind, PayloadKind::VCard);
        let exp = Fields::from([
            ("Name", "Jane Doe"),
            ("Email", "jane@acme.test"),
            ("Phone", "+1 555 0100"),
            ("Organization", "Acme Inc."),
            ("Title", "Engineer"),
        ]);
        assert_eq!(res.fields, exp);
    }

    #[test]
    fn test_calendar_event() {
        let raw = "BEGIN:VEVENT\nSUMMARY:Launch party\nLOCATION:Pier 39\nDTSTART;TZID=America/Los_Angeles:20250301T190000\nEND:VEVENT";
        let res = classify(raw);
        assert_eq!(res.kind, PayloadKind::CalendarEvent);
        let exp = Fields::from([
            ("Event", "Launch party"),
            ("Location", "Pier 39"),
            ("Start", "20250301T190000"),
        ]);
        assert_eq!(res.fields, exp);
    }

    #[test_case("WIFI:;"; "empty wifi")]
    #[test_case("BEGIN:VCARD\nEND:VCARD"; "empty vcard")]
    #[test_case("mailto:"; "bare mailto")]
    #[test_case("geo:"; "bare geo")]
    fn test_structured_without_fields_falls_back(raw: &str) {
        let res = classify(raw);
        assert_ne!(res.kind, PayloadKind::PlainText);
        assert_eq!(res.fields, Fields::from([("Content", raw)]));
    }

    #[test]
    fn test_plain_text() {
        let res = classify("Hello, world!🌎");
        assert_eq!(res.kind, PayloadKind::PlainText);
        let exp = Fields::from([("Content", "Hello, world!🌎"), ("Length", "15 characters")]);
        assert_eq!(res.fields, exp);
    }

    #[test]
    fn test_empty_string_is_plain_text() {
        let res = classify("");
        assert_eq!(res.kind, PayloadKind::PlainText);
        assert_eq!(res.fields.get("Length"), Some("0 characters"));
    }

    #[test]
    fn test_decoded_payload_classify() {
        let payload = DecodedPayload::new("tel:911");
        assert_eq!(payload.classify(), classify("tel:911"));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&classify("geo:1,2")).unwrap();
        assert_eq!(json, r#"{"type":"Geo Location","fields":{"Latitude":"1","Longitude":"2"}}"#);
    }
}
