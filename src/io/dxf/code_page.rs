//! `$DWGCODEPAGE` handling for pre-2007 text DXF streams

use crate::error::Result;
use crate::io::dxf::group::{ENDSEC, SECTION};
use crate::io::dxf::reader::DxfStreamReader;
use encoding_rs::Encoding;

/// First drawing version whose text is always UTF-8
const UTF8_VERSION: &str = "AC1021";

/// Map a `$DWGCODEPAGE` value to a fallback encoding.
///
/// `None` means no transcoding is needed.
pub fn encoding_from_code_page(code_page: &str) -> Option<&'static Encoding> {
    let name = code_page.trim().to_ascii_lowercase();
    if let Some(number) = name.strip_prefix("ansi_") {
        return match number {
            "932" => Some(encoding_rs::SHIFT_JIS),
            "936" => Some(encoding_rs::GBK),
            "949" => Some(encoding_rs::EUC_KR),
            "950" => Some(encoding_rs::BIG5),
            other => Encoding::for_label(format!("windows-{other}").as_bytes())
                .or(Some(encoding_rs::WINDOWS_1252)),
        };
    }
    if let Some(part) = name
        .strip_prefix("iso8859-")
        .or_else(|| name.strip_prefix("iso_8859-"))
    {
        return Encoding::for_label(format!("iso-8859-{part}").as_bytes())
            .or(Some(encoding_rs::WINDOWS_1252));
    }
    match name.as_str() {
        "ascii" | "utf-8" | "utf8" | "unicode" => None,
        "gb2312" => Some(encoding_rs::GBK),
        "big5" => Some(encoding_rs::BIG5),
        "korean" | "johab" => Some(encoding_rs::EUC_KR),
        "dos852" => Some(encoding_rs::WINDOWS_1250),
        "dos855" | "dos866" => Some(encoding_rs::IBM866),
        "dos857" => Some(encoding_rs::WINDOWS_1254),
        "dos869" => Some(encoding_rs::WINDOWS_1253),
        "koi8-r" => Some(encoding_rs::KOI8_R),
        "koi8-u" => Some(encoding_rs::KOI8_U),
        _ => Some(encoding_rs::WINDOWS_1252),
    }
}

/// Scan the HEADER section for `$ACADVER` and `$DWGCODEPAGE` and pick the
/// fallback encoding for the full read.
///
/// The reader is left wherever the scan stopped; callers reset it.
pub fn scan_header_encoding(reader: &mut dyn DxfStreamReader) -> Result<Option<&'static Encoding>> {
    let mut version: Option<String> = None;
    let mut code_page: Option<String> = None;
    let mut pending: Option<String> = None;
    let mut in_header = false;
    let mut after_section = false;

    while let Some(group) = reader.next_group()? {
        if after_section {
            after_section = false;
            in_header = group.value == "HEADER";
            if !in_header {
                break;
            }
            continue;
        }
        if group.is_marker(SECTION) {
            after_section = true;
            continue;
        }
        if !in_header {
            continue;
        }
        if group.is_marker(ENDSEC) {
            break;
        }
        if group.code == 9 {
            pending = Some(group.value);
            continue;
        }
        match pending.take().as_deref() {
            Some("$ACADVER") => version = Some(group.value),
            Some("$DWGCODEPAGE") => code_page = Some(group.value),
            _ => {}
        }
    }

    // string order matches release order for the ACxxxx version codes
    if version.as_deref().is_some_and(|v| v >= UTF8_VERSION) {
        return Ok(None);
    }
    Ok(code_page.as_deref().and_then(encoding_from_code_page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::dxf::reader::DxfTextReader;
    use std::io::{BufReader, Cursor};

    fn scan(data: &'static str) -> Option<&'static Encoding> {
        let mut r = DxfTextReader::new(BufReader::new(Cursor::new(data.as_bytes())));
        scan_header_encoding(&mut r).unwrap()
    }

    #[test]
    fn test_ansi_code_pages() {
        assert_eq!(encoding_from_code_page("ANSI_1252"), Some(encoding_rs::WINDOWS_1252));
        assert_eq!(encoding_from_code_page("ansi_1251"), Some(encoding_rs::WINDOWS_1251));
        assert_eq!(encoding_from_code_page("ANSI_932"), Some(encoding_rs::SHIFT_JIS));
    }

    #[test]
    fn test_iso_and_unknown() {
        assert_eq!(encoding_from_code_page("ISO8859-2"), Some(encoding_rs::ISO_8859_2));
        assert_eq!(encoding_from_code_page("UTF-8"), None);
        assert_eq!(encoding_from_code_page("MYSTERY"), Some(encoding_rs::WINDOWS_1252));
    }

    #[test]
    fn test_scan_finds_code_page() {
        let data = "0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\nAC1015\n9\n$DWGCODEPAGE\n3\nANSI_1251\n0\nENDSEC\n0\nEOF\n";
        assert_eq!(scan(data), Some(encoding_rs::WINDOWS_1251));
    }

    #[test]
    fn test_scan_ignores_code_page_for_utf8_versions() {
        let data = "0\nSECTION\n2\nHEADER\n9\n$ACADVER\n1\nAC1024\n9\n$DWGCODEPAGE\n3\nANSI_1251\n0\nENDSEC\n0\nEOF\n";
        assert_eq!(scan(data), None);
    }

    #[test]
    fn test_scan_without_header() {
        assert_eq!(scan("0\nSECTION\n2\nENTITIES\n0\nENDSEC\n0\nEOF\n"), None);
    }
}
