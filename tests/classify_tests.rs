#[cfg(test)]
mod classify_proptests {
    use proptest::prelude::*;

    use qrlens::{classify, PayloadKind};

    const PREFIXES: [&str; 10] =
        ["http://", "https://", "mailto:", "tel:", "sms:", "smsto:", "WIFI:", "BEGIN:VCARD", "BEGIN:VEVENT", "geo:"];

    fn is_recognised(s: &str) -> bool {
        PREFIXES.iter().any(|p| s.starts_with(p))
    }

    proptest! {
        #[test]
        fn proptest_url(scheme in prop_oneof![Just("http://"), Just("https://")], rest in "\\PC*") {
            let raw = format!("{scheme}{rest}");
            let res = classify(&raw);
            prop_assert_eq!(res.kind, PayloadKind::Url);
            prop_assert_eq!(res.fields.get("URL"), Some(raw.as_str()));
        }

        #[test]
        fn proptest_wifi_ssid(ssid in "[A-Za-z0-9_-]{1,32}", rest in "[A-RT-Z]:[a-z0-9]{0,8};") {
            let raw = format!("WIFI:{rest}S:{ssid};;");
            let res = classify(&raw);
            prop_assert_eq!(res.kind, PayloadKind::Wifi);
            prop_assert_eq!(res.fields.get("SSID"), Some(ssid.as_str()));
        }

        #[test]
        fn proptest_wifi_ssid_after_text(ssid in "[A-Za-z0-9_-]{1,32}", pre in "[^;S\\\\]*") {
            let raw = format!("WIFI:{pre}S:{ssid};;");
            let res = classify(&raw);
            prop_assert_eq!(res.kind, PayloadKind::Wifi);
            prop_assert_eq!(res.fields.get("SSID"), Some(ssid.as_str()));
        }

        #[test]
        fn proptest_other_case_is_plain_text(prefix in prop::sample::select(PREFIXES.to_vec()), rest in "[a-z0-9:,;]*") {
            let swapped: String = prefix
                .chars()
                .map(|c| if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c.to_ascii_uppercase() })
                .collect();
            prop_assume!(swapped != prefix);
            let res = classify(&format!("{swapped}{rest}"));
            prop_assert_eq!(res.kind, PayloadKind::PlainText);
        }

        #[test]
        fn proptest_plain_text(s in "\\PC*") {
            prop_assume!(!is_recognised(&s));
            let res = classify(&s);
            prop_assert_eq!(res.kind, PayloadKind::PlainText);
            prop_assert_eq!(res.fields.get("Content"), Some(s.as_str()));
            let exp_len = format!("{} characters", s.encode_utf16().count());
            prop_assert_eq!(res.fields.get("Length"), Some(exp_len.as_str()));
        }

        #[test]
        fn proptest_never_empty_and_idempotent(s in "\\PC*") {
            let first = classify(&s);
            prop_assert!(!first.fields.is_empty());
            prop_assert_eq!(first, classify(&s));
        }

        #[test]
        fn proptest_geo(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
            let (lat, lon) = (format!("{lat:.4}"), format!("{lon:.4}"));
            let res = classify(&format!("geo:{lat},{lon}"));
            prop_assert_eq!(res.kind, PayloadKind::GeoLocation);
            prop_assert_eq!(res.fields.get("Latitude"), Some(lat.as_str()));
            prop_assert_eq!(res.fields.get("Longitude"), Some(lon.as_str()));
        }
    }
}

#[cfg(test)]
mod classify_tests {
    use test_case::test_case;

    use qrlens::{classify, Fields, PayloadKind};

    #[test_case("https://example.com", PayloadKind::Url; "url")]
    #[test_case("HTTP://EXAMPLE.COM/ABC", PayloadKind::PlainText; "upper case url")]
    #[test_case("Tel:12345", PayloadKind::PlainText; "title case tel")]
    #[test_case("Geo:1,2", PayloadKind::PlainText; "title case geo")]
    #[test_case("mailto:a@b.c", PayloadKind::Email; "email")]
    #[test_case("tel:+44 20 7946 0000", PayloadKind::Phone; "phone")]
    #[test_case("sms:+123?body=hi", PayloadKind::Sms; "sms")]
    #[test_case("smsto:+123", PayloadKind::Sms; "smsto")]
    #[test_case("WIFI:S:net;;", PayloadKind::Wifi; "wifi")]
    #[test_case("BEGIN:VCARD\nFN:A\nEND:VCARD", PayloadKind::VCard; "vcard")]
    #[test_case("BEGIN:VEVENT\nSUMMARY:A\nEND:VEVENT", PayloadKind::CalendarEvent; "vevent")]
    #[test_case("geo:1,2", PayloadKind::GeoLocation; "geo")]
    #[test_case("ftp://example.com", PayloadKind::PlainText; "unknown scheme")]
    #[test_case(" https://example.com", PayloadKind::PlainText; "leading space")]
    fn test_kind(raw: &str, kind: PayloadKind) {
        assert_eq!(classify(raw).kind, kind);
    }

    #[test]
    fn test_wifi_hidden_false() {
        let res = classify("WIFI:T:WPA;S:TestNet;P:secret123;H:false;;");
        let exp = Fields::from([
            ("SSID", "TestNet"),
            ("Encryption", "WPA"),
            ("Password", "secret123"),
            ("Hidden Network", "No"),
        ]);
        assert_eq!(res.fields, exp);
    }

    #[test]
    fn test_hidden_network() {
        let res = classify("WIFI:S:secret;T:nopass;H:true;;");
        assert_eq!(res.fields.get("Hidden Network"), Some("Yes"));
        assert_eq!(res.fields.get("Password"), None);
    }

    #[test]
    fn test_sms_message() {
        let res = classify("smsto:+15550100?body=See%20you%20at%208");
        let exp = Fields::from([("Phone", "+15550100"), ("Message", "See you at 8")]);
        assert_eq!(res.fields, exp);
    }

    #[test]
    fn test_sms_other_param_ignored() {
        let res = classify("sms:+15550100?text=hello");
        assert_eq!(res.fields, Fields::from([("Phone", "+15550100")]));
    }

    #[test]
    fn test_url_json() {
        let json = serde_json::to_value(classify("https://example.com/")).unwrap();
        assert_eq!(json["type"], "URL");
        assert_eq!(json["fields"]["Host"], "example.com");
        assert_eq!(json["fields"]["Path"], "/");
        assert!(json["fields"].get("Query").is_none());
    }
}
