#[cfg(test)]
mod qr_tests {
    use image::{DynamicImage, Rgba, RgbaImage};
    use test_case::test_case;

    use qrlens::{
        extract_palette,
        reader::{detect_qr, validate},
        ECLevel, PayloadKind, QRBuilder,
    };

    #[test_case("https://example.com/menu?table=4".to_string(), ECLevel::L, PayloadKind::Url; "test_qr_1")]
    #[test_case("mailto:hello@example.com".to_string(), ECLevel::M, PayloadKind::Email; "test_qr_2")]
    #[test_case("tel:+15550100".to_string(), ECLevel::Q, PayloadKind::Phone; "test_qr_3")]
    #[test_case("smsto:+15550100?body=On%20my%20way".to_string(), ECLevel::H, PayloadKind::Sms; "test_qr_4")]
    #[test_case("WIFI:T:WPA;S:TestNet;P:secret123;H:false;;".to_string(), ECLevel::M, PayloadKind::Wifi; "test_qr_5")]
    #[test_case("BEGIN:VCARD\nVERSION:3.0\nFN:Jane Doe\nTEL:+15550100\nEND:VCARD".to_string(), ECLevel::L, PayloadKind::VCard; "test_qr_6")]
    #[test_case("BEGIN:VEVENT\nSUMMARY:Standup\nDTSTART:20250101T090000Z\nEND:VEVENT".to_string(), ECLevel::M, PayloadKind::CalendarEvent; "test_qr_7")]
    #[test_case("geo:37.7749,-122.4194".to_string(), ECLevel::Q, PayloadKind::GeoLocation; "test_qr_8")]
    #[test_case("Hello, world!🌎".to_string(), ECLevel::L, PayloadKind::PlainText; "test_qr_9")]
    #[test_case("1234567890".repeat(15), ECLevel::H, PayloadKind::PlainText; "test_qr_10")]
    fn test_qr(data: String, ecl: ECLevel, kind: PayloadKind) {
        let qr = QRBuilder::new(data.as_bytes()).ec_level(ecl).build().unwrap();

        let img = DynamicImage::ImageRgb8(qr.to_image(3).unwrap());
        let v = validate(&img).expect("Failed to read QR");

        assert_eq!(v.payload.raw_text, data);
        assert_eq!(v.classification.kind, kind);
        assert_eq!(v.metadata.ec_level, Some(ecl));
        assert_eq!(v.metadata.version, qr.version() as usize);
    }

    #[test]
    fn test_themed_qr_with_logo_reads_back() {
        let mut logo = RgbaImage::from_pixel(32, 32, Rgba([0, 0, 0, 0]));
        for (x, _, px) in logo.enumerate_pixels_mut() {
            *px = if x < 20 { Rgba([30, 60, 160, 255]) } else { Rgba([230, 120, 20, 255]) };
        }
        let palette = extract_palette(&logo);

        let data = "https://example.com/themed";
        let qr = QRBuilder::new(data.as_bytes()).ec_level(ECLevel::H).border(2).palette(palette).build().unwrap();
        let img = qr.to_image_with_logo(6, &logo, 0.2).unwrap();

        let res = detect_qr(&DynamicImage::ImageRgb8(img));
        assert_eq!(res.len(), 1);
        let (_meta, decoded) = res.symbols()[0].decode().expect("Failed to read QR");
        assert_eq!(decoded, data);
    }
}
